//! # img2pdf-client
//!
//! Upload image files to an image-to-PDF conversion service and get the PDF
//! back as bytes.
//!
//! The whole library is one request: the images are packed into a
//! `multipart/form-data` body (one `images` part per file, in order), POSTed
//! to the configured endpoint, and the response body is returned untouched
//! on a 2xx status. Anything else is an error. There are no retries and no
//! streaming; every file is held in memory for the duration of the call.
//!
//! ## Pipeline Overview
//!
//! ```text
//! paths / ImageFile[]
//!  │
//!  ├─ 1. Input   read local files (optional: callers may pass bytes directly)
//!  ├─ 2. Form    one multipart part per file, field `images`
//!  ├─ 3. Upload  POST, check status, read body
//!  └─ 4. Output  PdfBlob (bytes + content type)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use img2pdf_client::{ImageFile, UploadClient, UploadConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Endpoint from IMG2PDF_ENDPOINT, or the built-in default.
//!     let client = UploadClient::new(UploadConfig::default())?;
//!     let files = vec![
//!         ImageFile::new("page1.png", std::fs::read("page1.png")?),
//!         ImageFile::new("page2.jpg", std::fs::read("page2.jpg")?),
//!     ];
//!     let pdf = client.convert_images_to_pdf(&files).await?;
//!     std::fs::write("out.pdf", pdf.as_bytes())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `img2pdf` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! img2pdf-client = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod file;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{UploadConfig, UploadConfigBuilder, DEFAULT_ENDPOINT, DEFAULT_FIELD_NAME};
pub use convert::{convert, convert_paths, convert_sync, convert_to_file, write_pdf, UploadClient};
pub use error::Img2PdfError;
pub use file::ImageFile;
pub use output::{PdfBlob, UploadSummary};
pub use progress::{NoopProgressCallback, ProgressCallback, UploadProgressCallback};
