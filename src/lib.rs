//! # quotebom
//!
//! Converts vendor quotation text into a normalized CSV bill of materials.
//!
//! The input is the decoded text of one quotation PDF (decoding itself is a
//! separate concern); the output is a 20-column CSV ready for downstream
//! order processing. In between sits a pure, synchronous pipeline: the text
//! normalizer repairs PDF tokenization artifacts, the header and line-item
//! extractors pull typed records out of the repaired text, and the pricing
//! transformer expands composite care subscriptions into parent + derived
//! child rows with computed discounts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quotebom::process_text;
//!
//! fn main() -> quotebom::Result<()> {
//!     let text = std::fs::read_to_string("quote.txt")?;
//!     let bom = process_text(&text, "006XXXXXXXXXXXXXXX")?;
//!     println!("{}", bom.to_csv()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Artifact repair**: split product codes, numbers, vocabulary, emails,
//!   and currency tokens are rejoined before any matching happens
//! - **Family dispatch**: one extraction grammar per product-code family
//! - **Care expansion**: composite subscriptions bill as parent + software +
//!   support rows with derived pricing
//! - **Injectable catalog**: child products come from a caller-suppliable
//!   [`ChildCatalog`]

pub mod error;
pub mod extract;
pub mod model;
pub mod money;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{HeaderExtractor, LineItemExtractor, NormalizeOptions, TextNormalizer};
pub use model::{
    ChildCatalog, ChildPricing, ChildProduct, LineItem, OutputRow, ProductFamily, QuoteHeader,
    TierChildren, DEFAULT_STATUS,
};
pub use render::JsonFormat;
pub use transform::PricingTransformer;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Base product code used when the text carries no
/// `V<digits> Configuration` marker and the caller supplied none.
pub const DEFAULT_BASE_PRODUCT_CODE: &str = "V5000";

/// Run the full pipeline over decoded quote text.
///
/// # Errors
///
/// Returns [`Error::NoLineItems`] when no product lines can be recovered,
/// the only fatal extraction condition.
///
/// # Example
///
/// ```
/// use quotebom::process_text;
///
/// let text = "Quote Number Q-1 SVC-DEPLOY Deployment 1 $100.00 $90.00 $90.00";
/// let bom = process_text(text, "006XXXXXXXXXXXXXXX").unwrap();
/// assert_eq!(bom.rows.len(), 1);
/// ```
pub fn process_text(text: &str, opportunity_id: &str) -> Result<Bom> {
    QuoteBom::new()
        .with_opportunity_id(opportunity_id)
        .process(text)
}

/// Run the full pipeline and serialize straight to CSV.
pub fn to_csv(text: &str, opportunity_id: &str) -> Result<String> {
    process_text(text, opportunity_id)?.to_csv()
}

/// Builder for configuring and running the quote-to-BOM pipeline.
///
/// # Example
///
/// ```no_run
/// use quotebom::{ChildCatalog, QuoteBom};
///
/// let text = std::fs::read_to_string("quote.txt")?;
/// let csv = QuoteBom::new()
///     .with_opportunity_id("006XXXXXXXXXXXXXXX")
///     .with_catalog(ChildCatalog::builtin())
///     .process(&text)?
///     .to_csv()?;
/// # Ok::<(), quotebom::Error>(())
/// ```
pub struct QuoteBom {
    opportunity_id: String,
    base_product_code: Option<String>,
    catalog: ChildCatalog,
    normalize_options: NormalizeOptions,
}

impl QuoteBom {
    /// Create a new builder with the built-in catalog and default repairs.
    pub fn new() -> Self {
        Self {
            opportunity_id: String::new(),
            base_product_code: None,
            catalog: ChildCatalog::builtin(),
            normalize_options: NormalizeOptions::default(),
        }
    }

    /// Set the CRM opportunity id stamped on every row.
    ///
    /// Expected to be exactly 18 characters; the pipeline does not validate
    /// it (that is an upload-UI concern).
    pub fn with_opportunity_id(mut self, id: impl Into<String>) -> Self {
        self.opportunity_id = id.into();
        self
    }

    /// Override the base product code instead of deriving it from the text.
    pub fn with_base_product_code(mut self, code: impl Into<String>) -> Self {
        self.base_product_code = Some(code.into());
        self
    }

    /// Replace the child-product catalog used for care expansion.
    pub fn with_catalog(mut self, catalog: ChildCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the text normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Run the pipeline: normalize, extract, transform.
    ///
    /// Header extraction and line-item extraction are independent consumers
    /// of the same normalized text. Missing header fields and unmatched
    /// codes degrade silently inside the extractors; the only fatal
    /// condition, no line items at all, is decided here.
    pub fn process(&self, raw: &str) -> Result<Bom> {
        let text = TextNormalizer::new(self.normalize_options.clone()).normalize(raw);

        let header_extractor = HeaderExtractor::new();
        let header = header_extractor.extract(&text);
        let items = LineItemExtractor::new().extract(&text);
        if items.is_empty() {
            return Err(Error::NoLineItems);
        }

        let base_product_code = self
            .base_product_code
            .clone()
            .or_else(|| header_extractor.base_product_code(&text))
            .unwrap_or_else(|| DEFAULT_BASE_PRODUCT_CODE.to_string());

        let rows = PricingTransformer::new(self.catalog.clone()).transform(
            &header,
            &items,
            &self.opportunity_id,
            &base_product_code,
        );

        Ok(Bom {
            header,
            items,
            rows,
        })
    }
}

impl Default for QuoteBom {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing one quotation document.
#[derive(Debug, Clone, Serialize)]
pub struct Bom {
    /// Extracted quote metadata
    pub header: QuoteHeader,
    /// Extracted line items, deduplicated, in text order
    pub items: Vec<LineItem>,
    /// Transformed billable rows, ready for projection
    pub rows: Vec<OutputRow>,
}

impl Bom {
    /// Serialize the rows to the 20-column CSV contract.
    pub fn to_csv(&self) -> Result<String> {
        render::to_csv(&self.rows)
    }

    /// Serialize the whole result (header, items, rows) to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self, format)
    }

    /// The download filename for this BOM at the given instant.
    pub fn csv_filename(&self, timestamp: DateTime<Utc>) -> String {
        render::csv_filename(&self.header.quote_number, timestamp)
    }

    /// Write the CSV into `dir` under the generated filename.
    pub fn write_csv_file(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        render::write_csv_file(&self.rows, &self.header.quote_number, dir)
    }
}
