use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdfocr::{
    export_images, extract_document, DocumentHandle, ExtractError, ExtractionConfig, PdfDocument,
    TesseractEngine,
};

#[derive(Parser)]
#[command(name = "pdfocr")]
#[command(about = "PDF text extraction with OCR fallback for scanned pages")]
#[command(version)]
struct Cli {
    /// Path to the PDF file
    pdf: PathBuf,

    /// Save extracted text to a file instead of printing to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// OCR language (Tesseract language tag)
    #[arg(long, default_value = "eng")]
    lang: String,

    /// Preserve layout during OCR (automatic page segmentation)
    #[arg(long)]
    layout: bool,

    /// Extract all pages as JPEG images into <input-stem>_images/
    #[arg(long)]
    extract_images: bool,

    /// Rasterization resolution in DPI
    #[arg(long, default_value_t = 300)]
    dpi: u32,

    /// Embedded-text length (trimmed characters) above which a page skips OCR
    #[arg(long, default_value_t = 50)]
    min_text_chars: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Route `log` records from dependencies (lopdf et al.) into tracing.
    let _ = tracing_log::LogTracer::init();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdfocr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> pdfocr::Result<()> {
    let doc = PdfDocument::open(&cli.pdf)?;

    if cli.extract_images {
        let output_dir = images_output_dir(&cli.pdf);
        println!("Extracting images to: {}", output_dir.display());
        let count = export_images(&doc, &output_dir, cli.dpi)?;
        println!("Total images extracted: {}", count);
        return Ok(());
    }

    let config = ExtractionConfig {
        language: cli.lang.clone(),
        dpi: cli.dpi,
        preserve_layout: cli.layout,
        min_text_chars: cli.min_text_chars,
        output_file: cli.output.clone(),
    };

    println!(
        "Processing {} pages from {}",
        doc.page_count(),
        cli.pdf.display()
    );

    let engine = TesseractEngine::new();
    let result = extract_document(&doc, &engine, &config)?;

    match &config.output_file {
        Some(path) => {
            write_text_output(&result.text, path)?;
            println!("Text extracted successfully and saved to: {}", path.display());
        }
        None => {
            println!("\n=== Extracted Text ===\n");
            println!("{}", result.text);
        }
    }

    Ok(())
}

/// Write the assembled document text to the `-o` target. Failure here is
/// fatal: the run produced text, but the user asked for a file we cannot
/// give them.
fn write_text_output(text: &str, path: &Path) -> pdfocr::Result<()> {
    std::fs::write(path, text.as_bytes()).map_err(|e| ExtractError::WriteOutput {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Output directory for `--extract-images`: the input path with its
/// extension stripped and `_images` appended.
fn images_output_dir(pdf: &Path) -> PathBuf {
    let stem = pdf.file_stem().and_then(|s| s.to_str()).unwrap_or("pdf");
    pdf.with_file_name(format!("{}_images", stem))
}
