//! The upload unit: a named, typed, in-memory image payload.

use std::path::Path;

/// MIME type sent when nothing better can be determined.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// One file to upload: a name, a content type and the raw bytes.
///
/// The payload is treated as opaque; nothing here decodes or validates the
/// image. The content type is only used to label the multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// File name sent in the part's `Content-Disposition`.
    pub name: String,
    /// `Content-Type` of the part.
    pub mime_type: String,
    /// Raw file contents.
    pub data: Vec<u8>,
}

impl ImageFile {
    /// Wrap `data` under `name`, detecting the content type.
    ///
    /// Detection looks at the payload's magic bytes first and falls back to
    /// the extension of `name`, then to [`FALLBACK_MIME_TYPE`].
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let data = data.into();
        let mime_type = detect_mime_type(&name, &data).to_string();
        Self {
            name,
            mime_type,
            data,
        }
    }

    /// Override the detected content type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Pick a MIME type for `data`, using `name` as a hint.
pub fn detect_mime_type(name: &str, data: &[u8]) -> &'static str {
    if let Ok(format) = image::guess_format(data) {
        return format.to_mime_type();
    }
    mime_from_extension(name).unwrap_or(FALLBACK_MIME_TYPE)
}

fn mime_from_extension(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}
