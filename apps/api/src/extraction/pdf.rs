use std::io::Write;

use tempfile::NamedTempFile;

use super::{DocumentFormat, ExtractError};

/// Extracts PDF text page by page and concatenates it in page order.
///
/// The upload is spooled to a named temp file that is removed when it drops,
/// so the file is cleaned up on every return path including errors.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut tmp = tempfile::Builder::new()
        .prefix("quote-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| ExtractError::extraction(DocumentFormat::Pdf, e))?;

    spool(&mut tmp, bytes)?;

    let path = tmp.path().to_path_buf();
    // pdf_extract can panic on malformed PDFs
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_by_pages(&path)
    }));

    match result {
        Ok(Ok(pages)) => {
            tracing::debug!("PDF extracted: {} pages", pages.len());
            Ok(pages.concat())
        }
        Ok(Err(e)) => Err(ExtractError::extraction(DocumentFormat::Pdf, e)),
        Err(_) => Err(ExtractError::extraction(
            DocumentFormat::Pdf,
            "PDF parser panicked (malformed PDF)",
        )),
    }
}

fn spool(tmp: &mut NamedTempFile, bytes: &[u8]) -> Result<(), ExtractError> {
    tmp.write_all(bytes)
        .and_then(|_| tmp.flush())
        .map_err(|e| ExtractError::extraction(DocumentFormat::Pdf, e))
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use super::*;

    /// Builds a PDF with one Courier text line per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pages_are_joined_in_order() {
        let pdf = build_pdf(&["Alpha bracket", "Bravo flange"]);
        let text = extract_pdf_text(&pdf).unwrap();

        let first = text.find("Alpha").expect("first page text");
        let second = text.find("Bravo").expect("second page text");
        assert!(first < second, "pages out of order: {text:?}");
    }

    #[test]
    fn test_garbage_bytes_fail_cleanly() {
        let err = extract_pdf_text(b"%PDF-1.4\nthis is truncated").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Extraction {
                format: DocumentFormat::Pdf,
                ..
            }
        ));
    }

    #[test]
    fn test_error_message_names_the_format() {
        let err = extract_pdf_text(b"").unwrap_err();
        assert!(err.to_string().contains("pdf"), "Message was {err}");
    }
}
