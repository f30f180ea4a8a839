use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{DocumentFormat, ExtractError};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the body paragraphs of a DOCX file, joined by newlines in document order.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let paragraphs = body_paragraphs(&xml)?;
    Ok(paragraphs.join("\n"))
}

/// Collects the text of every `w:p` that is a direct child of `w:body`.
///
/// Only `w:t`, `w:tab`, `w:br` and `w:cr` sitting directly in a run of that
/// paragraph count. Tab-stop definitions under `w:pPr` and anything nested in
/// drawings or text boxes are skipped, as are paragraphs inside tables.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    // Names of the currently open elements, root first.
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event().map_err(docx_error)? {
            Event::Start(e) => {
                let name = e.name();
                if name.as_ref() == b"w:p" && at_body_level(&open) {
                    current = Some(String::new());
                }
                open.push(name.as_ref().to_vec());
            }
            Event::Empty(e) => {
                let name = e.name();
                match name.as_ref() {
                    b"w:p" if at_body_level(&open) => paragraphs.push(String::new()),
                    b"w:tab" if in_body_run(&open) => push_char(&mut current, '\t'),
                    b"w:br" | b"w:cr" if in_body_run(&open) => push_char(&mut current, '\n'),
                    _ => {}
                }
            }
            Event::Text(t) => {
                let Some((innermost, parents)) = open.split_last() else {
                    continue;
                };
                if innermost == b"w:t" && in_body_run(parents) {
                    let text = t.unescape().map_err(docx_error)?;
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push_str(&text);
                    }
                }
            }
            Event::End(_) => {
                let closed = open.pop();
                if closed.as_deref() == Some(b"w:p".as_slice()) && at_body_level(&open) {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Elements open below `w:body`, or `None` outside the body.
fn below_body(open: &[Vec<u8>]) -> Option<&[Vec<u8>]> {
    let body = open.iter().position(|name| name == b"w:body")?;
    Some(&open[body + 1..])
}

fn at_body_level(open: &[Vec<u8>]) -> bool {
    matches!(below_body(open), Some([]))
}

/// True when the innermost open element is a run of a body paragraph,
/// either directly or through a hyperlink.
fn in_body_run(open: &[Vec<u8>]) -> bool {
    match below_body(open) {
        Some([p, r]) => p == b"w:p" && r == b"w:r",
        Some([p, link, r]) => p == b"w:p" && link == b"w:hyperlink" && r == b"w:r",
        _ => false,
    }
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push(c);
    }
}

fn docx_error(err: impl std::fmt::Display) -> ExtractError {
    ExtractError::extraction(DocumentFormat::Docx, err)
}
