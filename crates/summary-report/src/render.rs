//! PDF rendering of a text summary.
//!
//! Produces a plain A4 document: Helvetica for body text, Helvetica-Bold for
//! the first line, long lines word-wrapped, and as many pages as the text
//! needs. Characters outside printable ASCII are written as '?' since the
//! standard fonts are used with WinAnsiEncoding.

use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::ReportError;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;
const FONT_SIZE: i64 = 11;
const LEADING: i64 = 15;
const MAX_LINE_CHARS: usize = 88;

const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

/// Render `summary` and write it to `output_path`
///
/// Returns the path of the written file. Parent directories must exist.
pub fn generate_pdf(summary: &str, output_path: &Path) -> Result<PathBuf, ReportError> {
    if output_path.file_name().is_none() {
        return Err(ReportError::InvalidOutputPath(
            output_path.display().to_string(),
        ));
    }

    let bytes = render_pdf_bytes(summary)?;
    std::fs::write(output_path, &bytes)?;

    tracing::info!(path = %output_path.display(), bytes = bytes.len(), "summary pdf written");
    Ok(output_path.to_path_buf())
}

/// Render `summary` to PDF bytes in memory
pub fn render_pdf_bytes(summary: &str) -> Result<Vec<u8>, ReportError> {
    let lines: Vec<String> = summary
        .lines()
        .flat_map(|line| wrap_text(&to_win_ansi(line), MAX_LINE_CHARS))
        .collect();

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(standard_font("Helvetica"));
    let bold_id = doc.add_object(standard_font("Helvetica-Bold"));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![
            ("F1", Object::Reference(regular_id)),
            ("F2", Object::Reference(bold_id)),
        ])),
    )]));

    let mut chunks: Vec<&[String]> = lines.chunks(LINES_PER_PAGE).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }

    let mut page_ids = Vec::with_capacity(chunks.len());
    for (page_index, chunk) in chunks.iter().enumerate() {
        let content = page_content(chunk, page_index == 0);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        page_ids.push(add_page(&mut doc, pages_id, resources_id, content_id));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(page_ids.len() as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;

    tracing::debug!(pages = page_ids.len(), lines = lines.len(), "rendered summary pdf");
    Ok(buffer)
}

fn standard_font(base_font: &str) -> Dictionary {
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(base_font.as_bytes().to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ])
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    content_id: ObjectId,
) -> ObjectId {
    doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        ("Resources", Object::Reference(resources_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ]),
        ),
        ("Contents", Object::Reference(content_id)),
    ]))
}

/// One BT/ET block per line so extracted text keeps its line breaks
fn page_content(lines: &[String], first_page: bool) -> Content {
    let mut operations = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let font = if first_page && i == 0 { "F2" } else { "F1" };
        let y = PAGE_HEIGHT - MARGIN - (i as i64) * LEADING;

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(FONT_SIZE)],
        ));
        operations.push(Operation::new(
            "Td",
            vec![Object::Integer(MARGIN), Object::Integer(y)],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.as_bytes().to_vec())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
}

fn to_win_ansi(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '\t' => ' ',
            ' '..='~' => c,
            _ => '?',
        })
        .collect()
}

/// Greedy word wrap; words longer than `max_chars` are split hard
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let (head, tail) = word.split_at(max_chars);
            lines.push(head.to_string());
            word = tail;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
