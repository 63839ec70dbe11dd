//! End-to-end tests: bytes in, review (and summary PDF) out

use std::io::{Cursor, Write};

use contract_review::{review_document, review_document_strict};
use pretty_assertions::assert_eq;
use shared_types::{ContractType, RiskLevel};

/// Lines per rendered summary page; see summary-report's layout
const LINES_PER_PAGE: usize = 48;

fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut cursor);
        zip.start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    cursor.into_inner()
}

/// A PDF whose page `n` (1-based) holds `line_for(n)` on every line
fn build_pdf(pages: usize, line_for: impl Fn(usize) -> String) -> Vec<u8> {
    let lines: Vec<String> = (0..pages * LINES_PER_PAGE)
        .map(|i| line_for(i / LINES_PER_PAGE + 1))
        .collect();
    let bytes = summary_report::render_pdf_bytes(&lines.join("\n")).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), pages);
    bytes
}

#[test]
fn empty_documents_review_as_unknown_low_risk() {
    for file_name in ["empty.txt", "empty.pdf", "empty.docx"] {
        let review = review_document(file_name, b"");

        assert_eq!(review.analysis.contract_type(), ContractType::Unknown, "{}", file_name);
        assert_eq!(review.analysis.overall_risk(), RiskLevel::Low, "{}", file_name);
        assert!(review.analysis.high_risk_findings().is_empty());
        assert!(review.analysis.medium_risk_findings().is_empty());
        assert!(review.clauses.is_empty(), "{}", file_name);
    }
}

#[test]
fn empty_docx_archive_has_no_text() {
    let review = review_document_strict("blank.docx", &build_docx(&[])).unwrap();
    assert_eq!(review.analysis.contract_type(), ContractType::Unknown);
    assert!(review.clauses.is_empty());
}

#[test]
fn txt_scenarios() {
    let review = review_document("a.txt", b"this agreement will terminate without notice");
    assert_eq!(review.analysis.overall_risk(), RiskLevel::High);
    assert_eq!(
        review.analysis.high_risk_findings(),
        &["Termination allowed without notice".to_string()]
    );

    let review = review_document("b.txt", b"this agreement shall automatically renew annually");
    assert_eq!(review.analysis.overall_risk(), RiskLevel::Medium);
    assert!(review.analysis.high_risk_findings().is_empty());
    assert_eq!(
        review.analysis.medium_risk_findings(),
        &["Auto-renewal clause present".to_string()]
    );

    let review = review_document("c.txt", b"standard terms apply");
    assert_eq!(review.analysis.overall_risk(), RiskLevel::Low);
}

#[test]
fn txt_clauses_are_segmented_and_explained() {
    let text = "SERVICES AGREEMENT\n\
        1. The Client shall make each payment within thirty days of receiving a valid invoice from the Provider.\n\
        2. Each party shall keep confidential all information disclosed by the other party during the term.\n\
        3. Short clause.";
    let review = review_document("services.txt", text.as_bytes());

    assert_eq!(review.analysis.contract_type(), ContractType::Service);
    assert_eq!(review.clauses.len(), 2);
    assert!(review.clauses[0].text.starts_with("the client shall make each payment"));
    assert_eq!(
        review.clauses[0].explanation,
        "Describes payment obligations and timelines."
    );
    assert_eq!(
        review.clauses[1].explanation,
        "Restricts sharing of sensitive information."
    );
}

#[test]
fn docx_paragraphs_are_reviewed() {
    let bytes = build_docx(&[
        "Employment Agreement",
        "The Employer may terminate this agreement without notice.",
        "The Employee shall indemnify the Employer for losses.",
    ]);
    let review = review_document_strict("offer.DOCX", &bytes).unwrap();

    assert_eq!(review.analysis.contract_type(), ContractType::Employment);
    assert_eq!(
        review.analysis.high_risk_findings(),
        &[
            "Termination allowed without notice".to_string(),
            "Unlimited indemnity obligation".to_string()
        ]
    );
    assert_eq!(review.analysis.source_file_name(), "offer.DOCX");
}

#[test]
fn docx_non_breaking_hyphen_still_flags_auto_renewal() {
    let bytes = build_docx(&[
        "Service Contract",
        "This agreement shall auto</w:t><w:noBreakHyphen/><w:t>renew each year.",
    ]);
    let review = review_document_strict("msa.docx", &bytes).unwrap();

    assert_eq!(review.analysis.overall_risk(), RiskLevel::Medium);
    assert_eq!(
        review.analysis.medium_risk_findings(),
        &["Auto-renewal clause present".to_string()]
    );
}

#[test]
fn pdf_keywords_on_page_five_are_found() {
    let pdf = build_pdf(6, |page| {
        if page == 5 {
            "the provider shall indemnify the client".to_string()
        } else {
            "standard terms apply to this section".to_string()
        }
    });
    let review = review_document_strict("long.pdf", &pdf).unwrap();

    assert_eq!(review.analysis.overall_risk(), RiskLevel::High);
}

#[test]
fn pdf_pages_after_five_are_ignored() {
    let pdf = build_pdf(7, |page| {
        if page >= 6 {
            "the provider shall indemnify the client".to_string()
        } else {
            "standard terms apply to this section".to_string()
        }
    });
    let review = review_document_strict("long.pdf", &pdf).unwrap();

    assert_eq!(review.analysis.overall_risk(), RiskLevel::Low);
    assert!(review.analysis.high_risk_findings().is_empty());
}

#[test]
fn summary_pdf_round_trips_through_the_pipeline() {
    let review = review_document("vendor.txt", b"the vendor may terminate without notice");
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join(summary_report::DEFAULT_REPORT_FILE_NAME);

    let written = summary_report::export_summary(&review.analysis, &path).unwrap();
    let bytes = std::fs::read(&written).unwrap();

    let text = doc_extract::extract_text("legal_summary.pdf", &bytes).unwrap();
    assert!(text.contains("contract type: vendor agreement"));
    assert!(text.contains("overall risk: high"));
    assert!(text.contains("- termination allowed without notice"));
}
