//! Progress-callback trait for upload events.
//!
//! Inject an [`Arc<dyn UploadProgressCallback>`] via
//! [`crate::config::UploadConfigBuilder::progress_callback`] to be told when
//! the request goes out and how it ends. The CLI uses this to drive its
//! spinner; library users can forward the events anywhere they like.
//!
//! # Example
//!
//! ```rust
//! use img2pdf_client::{UploadConfig, UploadProgressCallback};
//! use std::sync::Arc;
//!
//! struct Log;
//!
//! impl UploadProgressCallback for Log {
//!     fn on_upload_start(&self, file_count: usize, total_bytes: u64) {
//!         eprintln!("uploading {file_count} files ({total_bytes} bytes)");
//!     }
//! }
//!
//! let config = UploadConfig::builder()
//!     .progress_callback(Arc::new(Log) as Arc<dyn UploadProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by [`crate::UploadClient`] around each upload.
///
/// Implementations must be `Send + Sync`: one client may serve concurrent
/// calls, and each of them reports through the same callback. All methods
/// default to no-ops.
pub trait UploadProgressCallback: Send + Sync {
    /// Called once the form is built, just before the request is sent.
    ///
    /// # Arguments
    /// * `file_count`  — number of file parts in the form
    /// * `total_bytes` — sum of the file payload sizes
    fn on_upload_start(&self, file_count: usize, total_bytes: u64) {
        let _ = (file_count, total_bytes);
    }

    /// Called after a 2xx response body has been read in full.
    fn on_upload_complete(&self, received_bytes: u64) {
        let _ = received_bytes;
    }

    /// Called when the request fails for any reason after it was started.
    fn on_upload_error(&self, error: &str) {
        let _ = error;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl UploadProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::UploadConfig`].
pub type ProgressCallback = Arc<dyn UploadProgressCallback>;
