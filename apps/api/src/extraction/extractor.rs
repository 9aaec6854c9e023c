use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::extraction::{PageOcr, PdfTextLayer, TesseractOcr, TextLayer};

/// Two-stage resume text extractor.
///
/// 1. Concatenate the embedded text layer of every page. A non-blank result is
///    returned as-is and OCR is never touched.
/// 2. Otherwise OCR every rendered page, one trailing newline per page.
///
/// The fallback is document-wide: a single text-bearing page keeps image-only
/// pages from being OCR'd.
pub struct TextExtractor {
    text_layer: Box<dyn TextLayer>,
    ocr: Box<dyn PageOcr>,
}

impl TextExtractor {
    pub fn new(text_layer: impl TextLayer + 'static, ocr: impl PageOcr + 'static) -> Self {
        Self {
            text_layer: Box::new(text_layer),
            ocr: Box::new(ocr),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PdfTextLayer,
            TesseractOcr::new(config.ocr_dpi, config.ocr_lang.clone()),
        )
    }

    /// Returns the trimmed text of the document, or an empty string if neither stage found any.
    pub fn extract(&self, path: &Path) -> String {
        let mut text = String::new();

        match self.text_layer.page_texts(path) {
            Ok(pages) => {
                let page_count = pages.len();
                for page in pages {
                    text.push_str(&page);
                }
                if !text.trim().is_empty() {
                    info!("Extracted text layer from {page_count} pages");
                    return text.trim().to_string();
                }
            }
            Err(e) => warn!("Direct text extraction failed: {e}"),
        }

        info!("Falling back to OCR for image-based PDF");
        let mut on_page = |page: String| {
            text.push_str(&page);
            text.push('\n');
        };
        if let Err(e) = self.ocr.recognize(path, &mut on_page) {
            warn!("OCR failed: {e}");
        }

        text.trim().to_string()
    }
}
