//! CLI binary for img2pdf-client.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `UploadConfig` and writes the resulting PDF.

use anyhow::{Context, Result};
use clap::Parser;
use img2pdf_client::{
    pipeline::input, write_pdf, ProgressCallback, UploadClient, UploadConfig,
    UploadProgressCallback, UploadSummary, DEFAULT_FIELD_NAME,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal spinner shown while the request is in flight.
///
/// Built only once the inputs have been read, so every spinner that appears
/// is cleared by the upload's complete or error event.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new(file_count: usize, total_bytes: u64) -> Arc<Self> {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  ⏱ {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self::with_bar(bar, file_count, total_bytes))
    }

    fn with_bar(bar: ProgressBar, file_count: usize, total_bytes: u64) -> Self {
        bar.set_prefix("Uploading");
        bar.set_message(upload_message(file_count, total_bytes));
        Self { bar }
    }
}

fn upload_message(file_count: usize, total_bytes: u64) -> String {
    format!("{file_count} image(s), {}", human_bytes(total_bytes))
}

impl UploadProgressCallback for CliProgressCallback {
    fn on_upload_start(&self, file_count: usize, total_bytes: u64) {
        self.bar.set_prefix("Converting");
        self.bar.set_message(upload_message(file_count, total_bytes));
    }

    // The success line is printed once by `main`, after the PDF is written.
    fn on_upload_complete(&self, _received_bytes: u64) {
        self.bar.finish_and_clear();
    }

    fn on_upload_error(&self, error: &str) {
        self.bar.finish_and_clear();
        // Keep the line short; the full error chain is printed on exit.
        let msg = match error.char_indices().nth(80) {
            Some((idx, _)) => format!("{}\u{2026}", &error[..idx]),
            None => error.to_string(),
        };
        eprintln!("{} {}", red("✘"), red(&msg));
    }
}

/// The single success line printed to stderr after the PDF is written.
fn success_line(
    file_count: usize,
    duration_ms: u64,
    uploaded_bytes: u64,
    received_bytes: u64,
    dest: Option<&Path>,
) -> String {
    let dest = match dest {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    format!(
        "{}  {file_count} image(s)  {duration_ms}ms  →  {}  {}",
        green("✔"),
        bold(&dest),
        dim(&format!(
            "({} sent / {} received)",
            human_bytes(uploaded_bytes),
            human_bytes(received_bytes)
        )),
    )
}

fn human_bytes(n: u64) -> String {
    const KIB: f64 = 1024.0;
    let n_f = n as f64;
    if n_f >= KIB * KIB {
        format!("{:.1} MiB", n_f / (KIB * KIB))
    } else if n_f >= KIB {
        format!("{:.1} KiB", n_f / KIB)
    } else {
        format!("{n} B")
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Two images into one PDF
  img2pdf page1.png page2.jpg -o scan.pdf

  # Write the PDF to stdout
  img2pdf page*.png > scan.pdf

  # Use a self-hosted conversion service
  img2pdf --endpoint http://localhost:8080/api/images *.jpg -o out.pdf

  # JSON summary of the upload
  img2pdf --json a.png b.png -o out.pdf

ENVIRONMENT VARIABLES:
  IMG2PDF_ENDPOINT   Conversion service URL
  IMG2PDF_FIELD      Multipart field name (default: images)
  IMG2PDF_TIMEOUT    Request timeout in seconds (default: none)
  RUST_LOG           Override log filter (e.g. img2pdf_client=debug)
"#;

/// Upload images to an image-to-PDF service and save the PDF.
#[derive(Parser, Debug)]
#[command(
    name = "img2pdf",
    version,
    about = "Upload images to an image-to-PDF conversion service and save the PDF",
    long_about = "Packs the given images into a multipart/form-data request (one `images` part \
per file, in the order given), POSTs it to the conversion service and writes the PDF it \
returns. No retries: a non-2xx answer is reported and the command exits non-zero.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Image files, in page order.
    #[arg(required = true, num_args = 1..)]
    inputs: Vec<PathBuf>,

    /// Write the PDF to this file instead of stdout.
    #[arg(short, long, env = "IMG2PDF_OUTPUT")]
    output: Option<PathBuf>,

    /// Conversion service URL.
    #[arg(long, env = "IMG2PDF_ENDPOINT")]
    endpoint: Option<String>,

    /// Multipart field name for each image part.
    #[arg(long, env = "IMG2PDF_FIELD", default_value = DEFAULT_FIELD_NAME)]
    field: String,

    /// Request timeout in seconds (no timeout when omitted).
    #[arg(long, env = "IMG2PDF_TIMEOUT",
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Print a JSON upload summary on stdout (requires --output).
    #[arg(long, env = "IMG2PDF_JSON", requires = "output")]
    json: bool,

    /// Disable the progress spinner.
    #[arg(long, env = "IMG2PDF_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "IMG2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "IMG2PDF_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Library INFO logs are redundant while the spinner is shown.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && io::stderr().is_terminal();
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.output.is_none() && io::stdout().is_terminal() {
        anyhow::bail!("Refusing to write binary PDF data to a terminal; use -o <FILE> or redirect stdout");
    }

    // ── Read inputs ──────────────────────────────────────────────────────
    let files = input::resolve_inputs(&cli.inputs)
        .await
        .context("Failed to read input images")?;
    let uploaded_bytes: u64 = files.iter().map(|f| f.len() as u64).sum();

    let mut config = build_config(&cli)?;
    let spinner = show_progress.then(|| CliProgressCallback::new(files.len(), uploaded_bytes));
    config.progress_callback = spinner.clone().map(|s| s as ProgressCallback);
    let client = UploadClient::new(config)
        .inspect_err(|_| {
            if let Some(s) = &spinner {
                s.bar.finish_and_clear();
            }
        })
        .context("Invalid configuration")?;

    // ── Upload ───────────────────────────────────────────────────────────
    let start = Instant::now();
    let pdf = client
        .convert_images_to_pdf(&files)
        .await
        .context("Conversion failed")?;
    let duration_ms = start.elapsed().as_millis() as u64;

    if !pdf.is_pdf() && !cli.quiet {
        eprintln!(
            "{} response does not look like a PDF (content type: {})",
            red("⚠"),
            pdf.content_type.as_deref().unwrap_or("unknown")
        );
    }

    // ── Output ───────────────────────────────────────────────────────────
    match cli.output {
        Some(ref path) => {
            write_pdf(&pdf, path)
                .await
                .context("Failed to write PDF")?;
            if cli.json {
                let summary = UploadSummary {
                    endpoint: client.config().endpoint.clone(),
                    files: files.iter().map(|f| f.name.clone()).collect(),
                    uploaded_bytes,
                    received_bytes: pdf.len() as u64,
                    content_type: pdf.content_type.clone(),
                    is_pdf: pdf.is_pdf(),
                    duration_ms,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
                );
            } else if !cli.quiet {
                eprintln!(
                    "{}",
                    success_line(
                        files.len(),
                        duration_ms,
                        uploaded_bytes,
                        pdf.len() as u64,
                        Some(path.as_path())
                    )
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(pdf.as_bytes())
                .context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
            if !cli.quiet {
                eprintln!(
                    "{}",
                    success_line(files.len(), duration_ms, uploaded_bytes, pdf.len() as u64, None)
                );
            }
        }
    }

    Ok(())
}

/// Map CLI args to `UploadConfig`. The progress callback is attached by `main`.
fn build_config(cli: &Cli) -> Result<UploadConfig> {
    let mut builder = UploadConfig::builder().field_name(cli.field.clone());

    if let Some(ref endpoint) = cli.endpoint {
        builder = builder.endpoint(endpoint.clone());
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout_secs(secs);
    }

    builder.build().context("Invalid configuration")
}
