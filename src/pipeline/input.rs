//! Input resolution: read user-supplied paths into [`ImageFile`]s.
//!
//! Files are read in the order given, and that order is the order of the
//! parts in the outgoing form. Every failure names the offending path so the
//! CLI can report it without extra context.

use crate::error::Img2PdfError;
use crate::file::ImageFile;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read every path into an [`ImageFile`], preserving order.
pub async fn resolve_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ImageFile>, Img2PdfError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(read_image_file(path.as_ref()).await?);
    }
    Ok(files)
}

/// Read one local file, using its file name as the part name.
pub async fn read_image_file(path: &Path) -> Result<ImageFile, Img2PdfError> {
    let meta = tokio::fs::metadata(path)
        .await
        .map_err(|e| map_io_error(path, e))?;
    if meta.is_dir() {
        return Err(Img2PdfError::InvalidInput {
            input: path.display().to_string(),
            reason: "is a directory, expected an image file".into(),
        });
    }

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| map_io_error(path, e))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = ImageFile::new(name, data);

    debug!(
        "Read {} ({} bytes, {})",
        path.display(),
        file.len(),
        file.mime_type
    );
    Ok(file)
}

fn map_io_error(path: &Path, e: std::io::Error) -> Img2PdfError {
    let path = PathBuf::from(path);
    match e.kind() {
        ErrorKind::NotFound => Img2PdfError::FileNotFound { path },
        ErrorKind::PermissionDenied => Img2PdfError::PermissionDenied { path },
        _ => Img2PdfError::ReadFailed { path, source: e },
    }
}
