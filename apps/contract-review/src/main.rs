//! Contract Review CLI
//!
//! Reads one contract (PDF, DOCX or TXT), prints its contract type, overall
//! risk, risk findings and plain-language clause explanations, and can export
//! a legal summary PDF.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contract_review::{console, ContractReviewer};
use doc_extract::DocumentFormat;
use shared_types::ContractDocument;
use summary_report::DEFAULT_REPORT_FILE_NAME;

/// Command-line arguments for the contract reviewer
#[derive(Parser, Debug)]
#[command(name = "contract-review")]
#[command(version, about = "Flag risky clauses and explain a contract in plain language")]
struct Args {
    /// Contract to analyze (.pdf, .docx or .txt)
    file: PathBuf,

    /// Print the review as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Export a legal summary PDF: `--pdf` writes legal_summary.pdf, `--pdf=PATH` writes PATH
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_REPORT_FILE_NAME
    )]
    pdf: Option<PathBuf>,

    /// Fail when the document cannot be parsed instead of reviewing it as empty
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("not a file path: {}", args.file.display()))?;

    if DocumentFormat::from_file_name(&file_name).is_none() {
        tracing::warn!(
            "{} is not one of {:?}; it will be reviewed as an empty document",
            file_name,
            DocumentFormat::SUPPORTED_EXTENSIONS
        );
    }

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    info!("Reviewing {} ({} bytes)", file_name, bytes.len());

    let document = ContractDocument::new(file_name, bytes);
    let reviewer = ContractReviewer::default();
    let review = if args.strict {
        reviewer
            .review_strict(&document)
            .with_context(|| format!("could not extract text from {}", document.file_name))?
    } else {
        reviewer.review(&document)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&review)?);
    } else {
        println!("{}", console::format_review(&review));
    }

    if let Some(output_path) = args.pdf {
        match summary_report::export_summary(&review.analysis, &output_path) {
            Ok(path) => info!("Legal summary written to {}", path.display()),
            Err(e) => {
                eprintln!("PDF generation failed: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
