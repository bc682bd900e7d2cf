//! Quote header metadata.

use serde::{Deserialize, Serialize};

/// Metadata extracted from the head of a quotation document.
///
/// Every field defaults to an empty string: header extraction never fails,
/// it just leaves unmatched fields blank. Dates are normalized to
/// `MM/DD/YYYY` where the source text allows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteHeader {
    /// Vendor quote number
    pub quote_number: String,

    /// Quote issue date (`MM/DD/YYYY`)
    pub quote_date: String,

    /// Quote expiration date (`MM/DD/YYYY`)
    pub quote_expires: String,

    /// End-customer name
    pub customer_name: String,

    /// Channel partner name
    pub partner_name: String,

    /// Name of the vendor rep who prepared the quote
    pub prepared_by: String,

    /// Contact email of the preparer
    pub email: String,
}

impl QuoteHeader {
    /// Create a new empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.quote_number.is_empty()
            && self.quote_date.is_empty()
            && self.quote_expires.is_empty()
            && self.customer_name.is_empty()
            && self.partner_name.is_empty()
            && self.prepared_by.is_empty()
            && self.email.is_empty()
    }
}
