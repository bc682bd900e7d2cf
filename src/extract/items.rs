//! Line-item extraction: per-family code scan and field grammars.

use std::collections::HashSet;

use log::debug;
use regex::Regex;

use crate::model::{LineItem, CARE_CODE_PREFIX};
use crate::money::parse_currency;

/// How much trailing text after a matched code is searched for row fields.
///
/// Empirically sized to contain one table row of the vendor layout.
const TRAILING_WINDOW: usize = 320;

/// Which field grammar a code family uses.
///
/// Care lines carry a month count between the quantity and the currency
/// columns; service and hardware lines do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldGrammar {
    /// `description QTY MONTHS $LIST $DISCOUNT $EXTENDED`
    Care,
    /// `description QTY $LIST $DISCOUNT $EXTENDED`
    Standard,
}

/// Scans normalized text for product codes and captures their row fields.
///
/// Extraction never fails: a code with no parsable trailing fields simply
/// contributes no item, and a text with no codes yields an empty vec (the
/// orchestration layer decides that is fatal).
pub struct LineItemExtractor {
    care_code_re: Regex,
    service_code_re: Regex,
    hardware_code_re: Regex,
    care_fields_re: Regex,
    standard_fields_re: Regex,
    leakage_re: Regex,
}

impl LineItemExtractor {
    /// Create an extractor (compiles all family patterns once).
    pub fn new() -> Self {
        // The grammar anchors on the dollar signs; the captured token is
        // parsed leniently (unparsable currency becomes 0, the row survives)
        let currency = r"\$(\S+)";
        Self {
            care_code_re: Regex::new(&format!(
                r"\b{}\d+-[A-Za-z0-9]+",
                regex::escape(CARE_CODE_PREFIX)
            ))
            .unwrap(),
            service_code_re: Regex::new(r"\bSVC-[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*").unwrap(),
            hardware_code_re: Regex::new(r"\bHW-[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*").unwrap(),
            care_fields_re: Regex::new(&format!(
                r"^\s*(.*?)\s*\b(\d+) (\d+) {currency} {currency} {currency}"
            ))
            .unwrap(),
            standard_fields_re: Regex::new(&format!(
                r"^\s*(.*?)\s*\b(\d+) {currency} {currency} {currency}"
            ))
            .unwrap(),
            // Section headers of the vendor table bleed into the captured
            // description when a code sits at a section edge.
            leakage_re: Regex::new(
                r"(?i)(?:\s*\b(?:PART\s*NO\.?|QTY|DESCRIPTION|Total(?:\s+(?:Software|Hardware))?))+\s*$",
            )
            .unwrap(),
        }
    }

    /// Extract all line items from normalized text, in order of first
    /// appearance, deduplicated by `(part_no, qty, extended_price)`.
    pub fn extract(&self, text: &str) -> Vec<LineItem> {
        let mut occurrences: Vec<(usize, &str, FieldGrammar)> = Vec::new();
        for m in self.care_code_re.find_iter(text) {
            occurrences.push((m.start(), m.as_str(), FieldGrammar::Care));
        }
        for m in self.service_code_re.find_iter(text) {
            occurrences.push((m.start(), m.as_str(), FieldGrammar::Standard));
        }
        for m in self.hardware_code_re.find_iter(text) {
            occurrences.push((m.start(), m.as_str(), FieldGrammar::Standard));
        }
        occurrences.sort_by_key(|(start, _, _)| *start);

        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for (start, code, grammar) in occurrences {
            let window = trailing_window(text, start + code.len());
            let Some(item) = self.parse_fields(code, window, grammar) else {
                debug!("skipping code {code} with no trailing row fields");
                continue;
            };
            if item.qty == 0 {
                debug!("skipping code {code} with zero quantity");
                continue;
            }
            if seen.insert(item.identity_key()) {
                items.push(item);
            }
        }
        items
    }

    /// Apply a family grammar to the window after a matched code.
    fn parse_fields(&self, code: &str, window: &str, grammar: FieldGrammar) -> Option<LineItem> {
        let (re, months_present) = match grammar {
            FieldGrammar::Care => (&self.care_fields_re, true),
            FieldGrammar::Standard => (&self.standard_fields_re, false),
        };
        let caps = re.captures(window)?;
        let description = self
            .leakage_re
            .replace(caps.get(1).map_or("", |m| m.as_str()), "")
            .trim()
            .to_string();

        let mut field = 2;
        let mut next = || {
            let value = caps.get(field).map_or("", |m| m.as_str());
            field += 1;
            value
        };
        let qty: u32 = next().parse().unwrap_or(0);
        let months: Option<u32> = if months_present {
            next().parse().ok()
        } else {
            None
        };
        Some(LineItem {
            part_no: code.to_string(),
            description,
            qty,
            months,
            list_price: parse_currency(next()),
            discount_price: parse_currency(next()),
            extended_price: parse_currency(next()),
        })
    }
}

impl Default for LineItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Slice up to [`TRAILING_WINDOW`] bytes after `start`, backed off to a char
/// boundary.
fn trailing_window(text: &str, start: usize) -> &str {
    let mut end = (start + TRAILING_WINDOW).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}
