//! Extraction stage: normalized text in, typed records out.
//!
//! The three extractors are independent and pure. The normalizer repairs
//! PDF tokenization artifacts; the header and line-item extractors both
//! consume the same normalized text and never fail: missing fields default,
//! unmatched codes are skipped. Policy about what absence is fatal lives in
//! the orchestration layer, not here.

mod header;
mod items;
mod normalize;

pub use header::HeaderExtractor;
pub use items::LineItemExtractor;
pub use normalize::{NormalizeOptions, TextNormalizer};
