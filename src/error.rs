//! Error types for the quotebom library.

use std::io;
use thiserror::Error;

/// Result type alias for quotebom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a quote to a bill of materials.
#[derive(Error, Debug)]
pub enum Error {
    /// No line items could be recovered from the document text.
    ///
    /// This is the only fatal extraction condition: it indicates the wrong
    /// document was uploaded or the layout is unsupported. Individual missing
    /// header fields or unparsable tokens never produce an error.
    #[error("no line items found in quote text")]
    NoLineItems,

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing output rows to CSV.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// Error during rendering (JSON projection).
    #[error("Rendering error: {0}")]
    Render(String),
}
