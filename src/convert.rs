//! Upload entry points.
//!
//! [`UploadClient`] is the core: it owns a configured HTTP client and turns a
//! slice of [`ImageFile`]s into one multipart POST. The free functions below
//! are conveniences for one-shot use (build a client, convert, drop it),
//! for reading files from disk first, and for writing the result to a path.

use crate::config::UploadConfig;
use crate::error::Img2PdfError;
use crate::file::ImageFile;
use crate::output::PdfBlob;
use crate::pipeline::{form, input, upload};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Client for the image-to-PDF conversion service.
///
/// Cloning is cheap and clones share the underlying connection handling.
/// Every call to [`UploadClient::convert_images_to_pdf`] is an independent
/// request; the client keeps no per-call state.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    config: UploadConfig,
}

impl UploadClient {
    /// Build a client from `config`, creating its own HTTP client.
    pub fn new(config: UploadConfig) -> Result<Self, Img2PdfError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| Img2PdfError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Build a client around an existing `reqwest::Client`.
    ///
    /// `config.timeout_secs` and `config.user_agent` are not applied; the
    /// supplied client's own settings win.
    pub fn with_http_client(config: UploadConfig, http: reqwest::Client) -> Result<Self, Img2PdfError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Upload `files` and return the converted PDF.
    ///
    /// Each file becomes one part under [`UploadConfig::field_name`], in the
    /// order given. A 2xx response body is returned unchanged.
    ///
    /// # Errors
    /// - [`Img2PdfError::NoImages`] if `files` is empty (nothing is sent)
    /// - [`Img2PdfError::RequestFailed`] on a non-2xx status
    /// - [`Img2PdfError::Transport`] if the request could not be completed
    pub async fn convert_images_to_pdf(&self, files: &[ImageFile]) -> Result<PdfBlob, Img2PdfError> {
        if files.is_empty() {
            return Err(Img2PdfError::NoImages);
        }

        let start = Instant::now();
        let form = form::build_form(files, &self.config.field_name)?;
        let total_bytes = form::total_bytes(files);

        info!(
            "Uploading {} file(s), {} bytes, to {}",
            files.len(),
            total_bytes,
            self.config.endpoint
        );
        if let Some(ref cb) = self.config.progress_callback {
            cb.on_upload_start(files.len(), total_bytes);
        }

        let result = upload::send_form(&self.http, &self.config.endpoint, form).await;

        match &result {
            Ok(blob) => {
                info!(
                    "Received {} bytes in {}ms",
                    blob.len(),
                    start.elapsed().as_millis()
                );
                if let Some(ref cb) = self.config.progress_callback {
                    cb.on_upload_complete(blob.len() as u64);
                }
            }
            Err(e) => {
                if let Some(ref cb) = self.config.progress_callback {
                    cb.on_upload_error(&e.to_string());
                }
            }
        }

        result
    }

    /// Read `paths` from disk, then upload them in the given order.
    pub async fn convert_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<PdfBlob, Img2PdfError> {
        if paths.is_empty() {
            return Err(Img2PdfError::NoImages);
        }
        let files = input::resolve_inputs(paths).await?;
        self.convert_images_to_pdf(&files).await
    }
}

/// One-shot upload of in-memory files.
pub async fn convert(files: &[ImageFile], config: &UploadConfig) -> Result<PdfBlob, Img2PdfError> {
    UploadClient::new(config.clone())?
        .convert_images_to_pdf(files)
        .await
}

/// One-shot upload of local image files.
///
/// # Example
/// ```rust,no_run
/// use img2pdf_client::{convert_paths, UploadConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = UploadConfig::default();
/// let pdf = convert_paths(&["page1.png", "page2.jpg"], &config).await?;
/// std::fs::write("out.pdf", pdf.as_bytes())?;
/// # Ok(())
/// # }
/// ```
pub async fn convert_paths<P: AsRef<Path>>(
    paths: &[P],
    config: &UploadConfig,
) -> Result<PdfBlob, Img2PdfError> {
    UploadClient::new(config.clone())?.convert_paths(paths).await
}

/// Upload local image files and write the PDF to `output_path`.
///
/// The PDF is written to a temporary file next to `output_path` and renamed
/// into place, so a failed run never leaves a truncated file behind.
pub async fn convert_to_file<P: AsRef<Path>>(
    paths: &[P],
    output_path: impl AsRef<Path>,
    config: &UploadConfig,
) -> Result<PdfBlob, Img2PdfError> {
    let blob = convert_paths(paths, config).await?;
    write_pdf(&blob, output_path).await?;
    Ok(blob)
}

/// Write `blob` to `path`, creating parent directories as needed.
///
/// Goes through a temporary file in the target directory followed by a
/// rename, so readers never observe a partially written PDF.
pub async fn write_pdf(blob: &PdfBlob, path: impl AsRef<Path>) -> Result<(), Img2PdfError> {
    write_atomic(path.as_ref(), blob.as_bytes()).await
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally; do not call from inside an
/// async context.
pub fn convert_sync(files: &[ImageFile], config: &UploadConfig) -> Result<PdfBlob, Img2PdfError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Img2PdfError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(convert(files, config))
}

// ── Internal helpers ─────────────────────────────────────────────────────

async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Img2PdfError> {
    let write_err = |source: std::io::Error| Img2PdfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir().map_err(write_err)?,
    };
    tokio::fs::create_dir_all(&parent).await.map_err(write_err)?;

    let path_owned = path.to_path_buf();
    let bytes = bytes.to_vec();
    // tempfile is blocking; keep it off the async workers.
    tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path_owned).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(|e| Img2PdfError::Internal(format!("write task failed: {e}")))?
    .map_err(write_err)?;

    debug!("Wrote {}", path.display());
    Ok(())
}
