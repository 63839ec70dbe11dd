//! Paragraph-based text extraction for Office Open XML documents.
//!
//! Reads `word/document.xml` out of the archive and collects the text of each
//! body paragraph, i.e. each `w:p` directly under `w:body`. Paragraphs nested
//! in tables, content controls or text boxes are skipped.
//!
//! Paragraph text comes from its runs (`w:r`, including runs inside
//! `w:hyperlink`). Runs wrapped in anything else, such as tracked insertions,
//! are not read. Inside a run, `w:tab` and `w:ptab` become `\t`, line breaks
//! become `\n`, `w:noBreakHyphen` becomes `-`, and page or column breaks add
//! nothing.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxExtractor;

impl DocxExtractor {
    /// Body paragraphs of the DOCX at `path`, in document order
    pub fn paragraphs_from_path(path: &Path) -> Result<Vec<String>, ExtractError> {
        let file = File::open(path)?;
        Self::paragraphs_from_reader(file)
    }

    /// Body paragraph texts joined by a single space
    pub fn extract_path(path: &Path) -> Result<String, ExtractError> {
        let paragraphs = Self::paragraphs_from_path(path)?;
        tracing::debug!(paragraphs = paragraphs.len(), "read docx body");
        Ok(paragraphs.join(" "))
    }

    fn paragraphs_from_reader<R: Read + Seek>(reader: R) -> Result<Vec<String>, ExtractError> {
        let mut archive = zip::ZipArchive::new(reader)?;
        let mut xml = String::new();
        match archive.by_name(DOCUMENT_PART) {
            Ok(mut part) => {
                part.read_to_string(&mut xml)?;
            }
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(ExtractError::MissingPart(DOCUMENT_PART.to_string()))
            }
            Err(e) => return Err(e.into()),
        }
        parse_body_paragraphs(&xml)
    }
}

/// Element path from a body paragraph down to a run: `w:r` or `w:hyperlink/w:r`
fn is_run_path(path: &[Vec<u8>]) -> bool {
    match path {
        [run] => run.as_slice() == b"w:r",
        [link, run] => link.as_slice() == b"w:hyperlink" && run.as_slice() == b"w:r",
        _ => false,
    }
}

fn top_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().is_some_and(|top| top.as_slice() == name)
}

/// Text contributed by an empty run child (`<w:tab/>`, `<w:br/>`, ...)
fn run_child_text(element: &BytesStart<'_>) -> Result<&'static str, ExtractError> {
    let text = match element.name().as_ref() {
        b"w:tab" | b"w:ptab" => "\t",
        b"w:noBreakHyphen" => "-",
        b"w:cr" => "\n",
        // Page and column breaks carry no text
        b"w:br" => match element.try_get_attribute("w:type")? {
            None => "\n",
            Some(kind) if &*kind.value == b"textWrapping" => "\n",
            Some(_) => "",
        },
        _ => "",
    };
    Ok(text)
}

/// Walk `document.xml` and collect the text of each paragraph that is a
/// direct child of `w:body`
fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    // Open elements, outermost first
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // Stack length while the open body paragraph is the innermost element
    let mut paragraph_depth: Option<usize> = None;

    let in_run = |stack: &[Vec<u8>], paragraph_depth: Option<usize>| {
        paragraph_depth.is_some_and(|depth| stack.len() >= depth && is_run_path(&stack[depth..]))
    };

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let starts_paragraph = e.name().as_ref() == b"w:p" && top_is(&stack, b"w:body");
                stack.push(e.name().as_ref().to_vec());
                if starts_paragraph {
                    current.clear();
                    paragraph_depth = Some(stack.len());
                }
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"w:p" && top_is(&stack, b"w:body") {
                    paragraphs.push(String::new());
                } else if in_run(&stack, paragraph_depth) {
                    current.push_str(run_child_text(&e)?);
                }
            }
            Event::Text(t) => {
                if top_is(&stack, b"w:t") && in_run(&stack[..stack.len() - 1], paragraph_depth) {
                    current.push_str(&t.unescape()?);
                }
            }
            Event::End(_) => {
                if paragraph_depth == Some(stack.len()) {
                    paragraphs.push(std::mem::take(&mut current));
                    paragraph_depth = None;
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
