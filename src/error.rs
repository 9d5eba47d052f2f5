//! Error types for the img2pdf-client library.
//!
//! Everything fatal funnels into [`Img2PdfError`]. The two variants the
//! remote contract can produce are [`Img2PdfError::RequestFailed`] (the
//! service answered with a non-2xx status) and [`Img2PdfError::Transport`]
//! (the request never completed). The remaining variants cover local
//! failures around the call: reading input files, bad configuration and
//! writing the output.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the img2pdf-client library.
#[derive(Debug, Error)]
pub enum Img2PdfError {
    // ── Remote errors ─────────────────────────────────────────────────────
    /// The conversion service answered with a non-2xx status.
    ///
    /// `status_text` is the reason phrase the service sent, or the
    /// canonical phrase for `status` (e.g. "Not Found") when it sent the
    /// standard one or none at all; `detail` holds the start of the
    /// response body, if the service sent one.
    #[error("Request failed: HTTP {status} {status_text}{}", format_detail(.detail))]
    RequestFailed {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    /// Connection-level failure (DNS, TLS, reset, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // ── Input errors ──────────────────────────────────────────────────────
    /// No files were supplied; nothing is sent.
    #[error("No images to convert: at least one file is required")]
    NoImages,

    /// Input file was not found at the given path.
    #[error("Image file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input cannot be used as an upload part.
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Any other I/O failure while reading an input file.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output PDF file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Img2PdfError {
    /// Build a [`Img2PdfError::RequestFailed`] from a response status, the
    /// server's reason phrase (if non-standard) and whatever body text could
    /// be read.
    pub(crate) fn request_failed(status: StatusCode, reason: Option<&str>, body: &str) -> Self {
        let status_text = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .or_else(|| status.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();
        let body = body.trim();
        let detail = if body.is_empty() {
            None
        } else {
            Some(truncate_chars(body, DETAIL_MAX_CHARS))
        };
        Img2PdfError::RequestFailed {
            status: status.as_u16(),
            status_text,
            detail,
        }
    }

    /// HTTP status code, when the failure came from the service.
    pub fn status(&self) -> Option<u16> {
        match self {
            Img2PdfError::RequestFailed { status, .. } => Some(*status),
            Img2PdfError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Longest response-body excerpt kept in [`Img2PdfError::RequestFailed`].
const DETAIL_MAX_CHARS: usize = 200;

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}\u{2026}", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_includes_status_text() {
        let e = Img2PdfError::request_failed(StatusCode::NOT_FOUND, None, "");
        let msg = e.to_string();
        assert!(msg.contains("404"), "got: {msg}");
        assert!(msg.contains("Not Found"), "got: {msg}");
        assert_eq!(e.status(), Some(404));
    }

    #[test]
    fn request_failed_keeps_body_excerpt() {
        let e = Img2PdfError::request_failed(
            StatusCode::BAD_REQUEST,
            None,
            "  no images field in form  ",
        );
        assert!(e.to_string().ends_with(": no images field in form"));
    }

    #[test]
    fn request_failed_truncates_long_body() {
        let body = "é".repeat(500);
        match Img2PdfError::request_failed(StatusCode::INTERNAL_SERVER_ERROR, None, &body) {
            Img2PdfError::RequestFailed { detail: Some(d), .. } => {
                assert_eq!(d.chars().count(), DETAIL_MAX_CHARS + 1);
                assert!(d.ends_with('\u{2026}'));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn server_reason_phrase_wins_over_canonical() {
        let e = Img2PdfError::request_failed(
            StatusCode::BAD_REQUEST,
            Some("Unsupported Image Type"),
            "",
        );
        let msg = e.to_string();
        assert!(msg.contains("400 Unsupported Image Type"), "got: {msg}");
        assert!(!msg.contains("Bad Request"), "got: {msg}");
    }

    #[test]
    fn unknown_status_without_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        let e = Img2PdfError::request_failed(status, Some("  "), "");
        assert!(e.to_string().contains("599 Unknown Status"), "got: {e}");
    }

    #[test]
    fn no_images_has_no_status() {
        assert_eq!(Img2PdfError::NoImages.status(), None);
    }

    #[test]
    fn file_not_found_display() {
        let e = Img2PdfError::FileNotFound {
            path: PathBuf::from("/tmp/missing.png"),
        };
        assert!(e.to_string().contains("missing.png"));
    }
}
