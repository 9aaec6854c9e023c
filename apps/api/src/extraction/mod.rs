// Resume text extraction: embedded text layer first, OCR of rendered pages second.
// Stage failures never escape this module; callers always receive a (possibly empty) string.

pub mod extractor;
pub mod ocr;
pub mod text_layer;

use thiserror::Error;

pub use extractor::TextExtractor;
pub use ocr::{PageOcr, TesseractOcr};
pub use text_layer::{PdfTextLayer, TextLayer};

/// Failure of a single extraction stage. Logged by `TextExtractor`, never returned to callers.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("PDF parser panicked")]
    ParserPanicked,

    #[error("OCR error: {0}")]
    Ocr(String),
}
