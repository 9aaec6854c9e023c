use std::path::Path;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::extraction::ExtractionError;

pub const DEFAULT_DPI: u32 = 300;
pub const DEFAULT_LANG: &str = "eng";

/// Renders every page of a PDF and recognises its text.
///
/// Each recognised page is handed to `on_page` in document order as soon as it
/// is available, so text from pages before a failure is not lost.
pub trait PageOcr: Send + Sync {
    fn recognize(
        &self,
        path: &Path,
        on_page: &mut dyn FnMut(String),
    ) -> Result<(), ExtractionError>;
}

/// OCR via the poppler `pdftoppm` rasteriser and the `tesseract` CLI.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    dpi: u32,
    lang: String,
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new(DEFAULT_DPI, DEFAULT_LANG.to_string())
    }
}

impl TesseractOcr {
    pub fn new(dpi: u32, lang: String) -> Self {
        Self { dpi, lang }
    }

    /// True when both `pdftoppm` and `tesseract` can be spawned.
    pub fn is_available() -> bool {
        let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
        let tesseract = Command::new("tesseract").arg("--version").output().is_ok();

        if !pdftoppm {
            debug!("pdftoppm not found - install poppler-utils for OCR support");
        }
        if !tesseract {
            debug!("tesseract not found - install tesseract-ocr for OCR support");
        }

        pdftoppm && tesseract
    }
}

impl PageOcr for TesseractOcr {
    fn recognize(
        &self,
        path: &Path,
        on_page: &mut dyn FnMut(String),
    ) -> Result<(), ExtractionError> {
        let temp_dir = tempfile::tempdir()?;
        let output_prefix = temp_dir.path().join("page");

        info!(
            "Rendering {:?} for OCR (dpi={}, lang={})",
            path.file_name().unwrap_or_default(),
            self.dpi,
            self.lang
        );

        let rendered = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(path)
            .arg(&output_prefix)
            .output()
            .map_err(|e| ExtractionError::Ocr(format!("Failed to run pdftoppm: {e}")))?;

        if !rendered.status.success() {
            let stderr = String::from_utf8_lossy(&rendered.stderr);
            return Err(ExtractionError::Ocr(format!("pdftoppm failed: {stderr}")));
        }

        // pdftoppm zero-pads page numbers, so lexical order is page order.
        let mut images: Vec<_> = std::fs::read_dir(temp_dir.path())?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        images.sort();

        if images.is_empty() {
            return Err(ExtractionError::Ocr("pdftoppm produced no images".to_string()));
        }

        let total = images.len();
        for (i, image) in images.iter().enumerate() {
            let page = i + 1;
            let output = Command::new("tesseract")
                .arg(image)
                .arg("stdout")
                .arg("-l")
                .arg(&self.lang)
                .output()
                .map_err(|e| {
                    ExtractionError::Ocr(format!("Failed to run tesseract on page {page}: {e}"))
                })?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!("Tesseract warning on page {page}/{total}: {stderr}");
            }

            on_page(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        info!("OCR complete: {total} pages recognised");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution_and_language() {
        let ocr = TesseractOcr::default();
        assert_eq!(ocr.dpi, 300);
        assert_eq!(ocr.lang, "eng");
    }

    #[test]
    fn test_missing_document_fails_without_emitting_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut pages = Vec::new();

        let result = TesseractOcr::default()
            .recognize(&dir.path().join("absent.pdf"), &mut |p| pages.push(p));

        assert!(matches!(result, Err(ExtractionError::Ocr(_))));
        assert!(pages.is_empty());
    }
}
