//! Result type returned by a successful upload.

use serde::Serialize;

/// The converted document as returned by the service.
///
/// The bytes are passed through untouched. Use [`PdfBlob::is_pdf`] if you
/// want to check the payload actually looks like a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfBlob {
    /// Response body, read in full.
    pub bytes: Vec<u8>,
    /// Response `Content-Type`, if the service sent one.
    pub content_type: Option<String>,
}

impl PdfBlob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` when the payload starts with the `%PDF` magic.
    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(b"%PDF")
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Summary of one upload, as printed by the CLI's `--json` mode.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    pub endpoint: String,
    pub files: Vec<String>,
    pub uploaded_bytes: u64,
    pub received_bytes: u64,
    pub content_type: Option<String>,
    pub is_pdf: bool,
    pub duration_ms: u64,
}
