//! Quote header extraction via label-anchored patterns.

use chrono::NaiveDate;
use regex::Regex;

use crate::model::QuoteHeader;

/// Labels that bound a free-text capture.
///
/// The `regex` crate has no lookahead, so the "stop at the next label"
/// boundary is written as a non-capturing alternation consumed after the
/// captured value.
const LABEL_BOUNDARY: &str = r"(?:Customer|Partner|Prepared|Quote|Email|Phone|PART\s+NO)";

/// Extracts quote metadata from normalized text.
///
/// Every field is located independently by its label anchor; a missing
/// anchor leaves that field empty. Extraction never fails.
pub struct HeaderExtractor {
    quote_number_re: Regex,
    quote_date_re: Regex,
    quote_expires_re: Regex,
    customer_re: Regex,
    partner_re: Regex,
    prepared_re: Regex,
    email_re: Regex,
    prepared_window_re: Regex,
    passthrough_date_re: Regex,
    base_code_re: Regex,
}

impl HeaderExtractor {
    /// Create an extractor (compiles all field patterns once).
    pub fn new() -> Self {
        let date = r"([A-Za-z]+ \d{1,2}, \d{4}|\d{1,2}/\d{1,2}/\d{4})";
        Self {
            quote_number_re: Regex::new(r"Quote Number:? ([A-Za-z0-9][A-Za-z0-9-]*)").unwrap(),
            quote_date_re: Regex::new(&format!(r"Quote Date:? {}", date)).unwrap(),
            quote_expires_re: Regex::new(&format!(r"Quote Expires:? {}", date)).unwrap(),
            customer_re: Regex::new(&format!(
                r"Customer(?: Name)?:? (.+?) {}",
                LABEL_BOUNDARY
            ))
            .unwrap(),
            partner_re: Regex::new(&format!(r"Partner(?: Name)?:? (.+?) {}", LABEL_BOUNDARY))
                .unwrap(),
            prepared_re: Regex::new(&format!(
                r"Prepared By:? (.+?)(?: {}| [A-Za-z0-9._%+-]+@|$)",
                LABEL_BOUNDARY
            ))
            .unwrap(),
            email_re: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap(),
            prepared_window_re: Regex::new(r"Prepared By:? .{0,120}").unwrap(),
            passthrough_date_re: Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap(),
            base_code_re: Regex::new(r"\b(V\d+) Configuration").unwrap(),
        }
    }

    /// Extract the header from normalized quote text.
    pub fn extract(&self, text: &str) -> QuoteHeader {
        QuoteHeader {
            quote_number: self.capture(&self.quote_number_re, text),
            quote_date: self.normalize_date(&self.capture(&self.quote_date_re, text)),
            quote_expires: self.normalize_date(&self.capture(&self.quote_expires_re, text)),
            customer_name: self.capture(&self.customer_re, text),
            partner_name: self.capture(&self.partner_re, text),
            prepared_by: self.capture(&self.prepared_re, text),
            email: self.extract_email(text),
        }
    }

    /// The `V<digits>` token of a `V<digits> Configuration` marker, if any.
    pub fn base_product_code(&self, text: &str) -> Option<String> {
        self.base_code_re
            .captures(text)
            .map(|caps| caps[1].to_string())
    }

    fn capture(&self, re: &Regex, text: &str) -> String {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }

    /// Normalize a date to `MM/DD/YYYY`.
    ///
    /// Month-name dates (full or 3-letter, any case) are converted; dates
    /// already in slashed form pass through; anything else is returned
    /// verbatim.
    fn normalize_date(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.passthrough_date_re.is_match(trimmed) {
            return trimmed.to_string();
        }
        match NaiveDate::parse_from_str(trimmed, "%B %d, %Y") {
            Ok(date) => date.format("%m/%d/%Y").to_string(),
            Err(_) => trimmed.to_string(),
        }
    }

    /// Find the preparer email: scoped to the text right after the
    /// "Prepared By" anchor first, anywhere in the document as a fallback.
    fn extract_email(&self, text: &str) -> String {
        if let Some(window) = self.prepared_window_re.find(text) {
            if let Some(m) = self.email_re.find(window.as_str()) {
                return m.as_str().to_string();
            }
        }
        self.email_re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for HeaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}
