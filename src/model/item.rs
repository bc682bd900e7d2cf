//! Line items and product-code classification.

use serde::{Deserialize, Serialize};

use crate::money::to_cents;

/// Part-number prefix of the composite care-subscription family.
///
/// A full care code is `VDP-VDURACare-<size>-<tier>`, e.g.
/// `VDP-VDURACare-10-HP`.
pub const CARE_CODE_PREFIX: &str = "VDP-VDURACare-";

/// One billable line recovered from the quote text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Vendor part number
    pub part_no: String,

    /// Free-text description between the part number and the numeric fields
    pub description: String,

    /// Quantity (always positive for a matched line)
    pub qty: u32,

    /// Subscription duration in months; `None` for perpetual/one-time items
    pub months: Option<u32>,

    /// Per-unit list price
    pub list_price: f64,

    /// Per-unit discounted price
    pub discount_price: f64,

    /// Total line price as printed on the quote
    pub extended_price: f64,
}

impl LineItem {
    /// Classify this item by its part number.
    pub fn family(&self) -> ProductFamily {
        ProductFamily::classify(&self.part_no)
    }

    /// Composite identity key used for deduplication.
    ///
    /// Extended price is compared at cent precision; the key is not
    /// guaranteed globally unique for pathological inputs.
    pub fn identity_key(&self) -> (String, u32, i64) {
        (self.part_no.clone(), self.qty, to_cents(self.extended_price))
    }
}

/// Product family derived from the part-number pattern.
///
/// The family decides which extraction grammar applies (care lines carry a
/// month count, service and hardware lines do not) and which transformation
/// rule the pricing stage uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductFamily {
    /// Composite support+software subscription, expanded into child rows
    CareSubscription {
        /// Subscription grade, e.g. `HP` or `C`
        tier: String,
    },
    /// Professional services (`SVC-…`)
    Service,
    /// Hardware components (`HW-…`)
    Hardware,
    /// Anything else; billed with the standard single-row rule
    Other,
}

impl ProductFamily {
    /// Classify a part number into its family.
    ///
    /// A care code must carry a numeric size and a non-empty alphanumeric
    /// tier after the prefix; anything malformed falls through to the
    /// prefix-based families or `Other`.
    pub fn classify(part_no: &str) -> Self {
        if let Some(rest) = part_no.strip_prefix(CARE_CODE_PREFIX) {
            if let Some((size, tier)) = rest.split_once('-') {
                let size_ok = !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit());
                let tier_ok =
                    !tier.is_empty() && tier.bytes().all(|b| b.is_ascii_alphanumeric());
                if size_ok && tier_ok {
                    return Self::CareSubscription {
                        tier: tier.to_string(),
                    };
                }
            }
        }
        if part_no.starts_with("SVC-") {
            Self::Service
        } else if part_no.starts_with("HW-") {
            Self::Hardware
        } else {
            Self::Other
        }
    }

    /// The care tier, if this is a care subscription.
    pub fn tier(&self) -> Option<&str> {
        match self {
            Self::CareSubscription { tier } => Some(tier),
            _ => None,
        }
    }
}
