//! Multipart body construction.
//!
//! One file part per [`ImageFile`], all under the same field name, appended
//! in input order. Each part carries a `filename` and a `Content-Type`;
//! parts whose name is empty get a positional `image-N` name so the service
//! still sees them as file uploads rather than plain text fields.

use crate::error::Img2PdfError;
use crate::file::ImageFile;
use reqwest::multipart::{Form, Part};

/// Build the multipart form for `files` under `field_name`.
pub fn build_form(files: &[ImageFile], field_name: &str) -> Result<Form, Img2PdfError> {
    let mut form = Form::new();
    for (i, file) in files.iter().enumerate() {
        form = form.part(field_name.to_string(), build_part(i, file)?);
    }
    Ok(form)
}

fn build_part(index: usize, file: &ImageFile) -> Result<Part, Img2PdfError> {
    Part::bytes(file.data.clone())
        .file_name(part_file_name(index, file))
        .mime_str(&file.mime_type)
        .map_err(|e| Img2PdfError::InvalidInput {
            input: file.name.clone(),
            reason: format!("invalid content type '{}': {e}", file.mime_type),
        })
}

/// File name for the part at `index` (0-based).
fn part_file_name(index: usize, file: &ImageFile) -> String {
    if file.name.trim().is_empty() {
        format!("image-{}", index + 1)
    } else {
        file.name.clone()
    }
}

/// Sum of the payload sizes in `files`.
pub fn total_bytes(files: &[ImageFile]) -> u64 {
    files.iter().map(|f| f.len() as u64).sum()
}
