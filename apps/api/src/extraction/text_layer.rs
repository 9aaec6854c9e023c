use std::path::Path;

use crate::extraction::ExtractionError;

/// Reads the embedded text layer of a PDF, one string per page in document order.
pub trait TextLayer: Send + Sync {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, ExtractionError>;
}

/// `pdf-extract` backed text layer.
pub struct PdfTextLayer;

impl TextLayer for PdfTextLayer {
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let bytes = std::fs::read(path)?;

        // pdf-extract panics on some malformed inputs instead of returning an error.
        std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
            .map_err(|_| ExtractionError::ParserPanicked)?
            .map_err(|e| ExtractionError::Pdf(e.to_string()))
    }
}

/// Builds a single-page PDF whose text layer holds `text` in Helvetica.
#[cfg(test)]
pub(crate) fn one_page_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = pdf.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.extend_from_slice(xref.as_bytes());
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_reads_embedded_text_layer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&one_page_pdf("Jane Doe Rust Engineer")).unwrap();

        let pages = PdfTextLayer.page_texts(file.path()).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].trim(), "Jane Doe Rust Engineer");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfTextLayer.page_texts(&dir.path().join("absent.pdf"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }

    #[test]
    fn test_garbage_bytes_are_an_error_not_a_panic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is definitely not a pdf").unwrap();

        let result = PdfTextLayer.page_texts(file.path());
        assert!(matches!(
            result,
            Err(ExtractionError::Pdf(_)) | Err(ExtractionError::ParserPanicked)
        ));
    }
}
