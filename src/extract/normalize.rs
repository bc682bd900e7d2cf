//! Text normalization for PDF-extracted quote text.
//!
//! PDF text extraction splits tokens across text runs: product codes come out
//! as `VDP - VDURACare - 10 - HP`, years as `2 026`, labels as `Quo tation`,
//! and currency as `$ 500`. The normalizer repairs these artifacts before any
//! pattern matching happens. It is pure and total: unmatched patterns leave
//! the input unchanged.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Vendor vocabulary words observed split across PDF text runs.
const SPLIT_VOCABULARY: [&str; 12] = [
    "Quotation",
    "Company",
    "Software",
    "Support",
    "Subscription",
    "Customer",
    "Partner",
    "Prepared",
    "Number",
    "Expires",
    "Configuration",
    "Description",
];

/// Options for text normalization.
///
/// One flag per repair rule; the default enables everything. Rules are
/// applied in a fixed order regardless of which are enabled (later rules
/// assume earlier ones already collapsed spacing).
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Rejoin tokens split around hyphens (`A - B` → `A-B`)
    pub rejoin_hyphenated_tokens: bool,

    /// Merge split digit runs (`2 026` → `2026`)
    pub merge_digit_runs: bool,

    /// Rejoin known vendor vocabulary words (`Quo tation` → `Quotation`)
    pub rejoin_vocabulary: bool,

    /// Rejoin split email addresses (`user @ domain` → `user@domain`)
    pub rejoin_emails: bool,

    /// Rejoin split currency tokens (`$ 500` → `$500`)
    pub rejoin_currency: bool,

    /// Collapse remaining whitespace runs to a single space
    pub collapse_whitespace: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            rejoin_hyphenated_tokens: true,
            merge_digit_runs: true,
            rejoin_vocabulary: true,
            rejoin_emails: true,
            rejoin_currency: true,
            collapse_whitespace: true,
        }
    }
}

/// Repairs tokenization artifacts in decoded quote text.
pub struct TextNormalizer {
    options: NormalizeOptions,
    hyphen_re: Regex,
    digit_run_re: Regex,
    vocabulary_res: Vec<(Regex, &'static str)>,
    email_re: Regex,
    currency_re: Regex,
    whitespace_re: Regex,
}

impl TextNormalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            hyphen_re: Regex::new(r"([A-Za-z0-9])\s*-\s*([A-Za-z0-9])").unwrap(),
            // Fixed-width merge: a lone digit split off the front of a
            // 3-digit group, the shape a 4-digit year splits into. Wider
            // merging would swallow adjacent qty/month columns.
            digit_run_re: Regex::new(r"\b(\d) (\d{3})\b").unwrap(),
            vocabulary_res: SPLIT_VOCABULARY
                .iter()
                .map(|word| (vocabulary_regex(word), *word))
                .collect(),
            email_re: Regex::new(r"([A-Za-z0-9._%+-])\s*@\s*([A-Za-z0-9.-])").unwrap(),
            currency_re: Regex::new(r"\$\s+(\d)").unwrap(),
            whitespace_re: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Run the repair pipeline over raw decoded text.
    pub fn normalize(&self, raw: &str) -> String {
        let mut result = raw.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.rejoin_hyphenated_tokens {
            result = self.rejoin_hyphens(&result);
        }

        if self.options.merge_digit_runs {
            result = self.digit_run_re.replace_all(&result, "$1$2").to_string();
        }

        if self.options.rejoin_vocabulary {
            for (re, word) in &self.vocabulary_res {
                result = re.replace_all(&result, *word).to_string();
            }
        }

        if self.options.rejoin_emails {
            result = self.email_re.replace_all(&result, "$1@$2").to_string();
        }

        if self.options.rejoin_currency {
            result = self.currency_re.replace_all(&result, "$$$1").to_string();
        }

        if self.options.collapse_whitespace {
            result = self
                .whitespace_re
                .replace_all(&result, " ")
                .trim()
                .to_string();
        }

        result
    }

    fn rejoin_hyphens(&self, text: &str) -> String {
        // A match consumes the character after the hyphen, so chained splits
        // (`A - B - C`) need repeated passes until the text stops changing.
        let mut result = text.to_string();
        loop {
            let next = self.hyphen_re.replace_all(&result, "$1-$2").to_string();
            if next == result {
                return result;
            }
            result = next;
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

/// Build the case-insensitive pattern matching a vocabulary word with
/// arbitrary whitespace between its letters.
fn vocabulary_regex(word: &str) -> Regex {
    let letters: Vec<String> = word.chars().map(|c| regex::escape(&c.to_string())).collect();
    let pattern = format!(r"(?i)\b{}\b", letters.join(r"\s*"));
    Regex::new(&pattern).unwrap()
}
