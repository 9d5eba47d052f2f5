//! Pipeline stages for an image-to-PDF upload.
//!
//! Each submodule implements exactly one step, so each can be tested on its
//! own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ form ──▶ upload
//! (paths)   (multipart)  (POST + status check)
//! ```
//!
//! 1. [`input`]  — read local paths into [`crate::ImageFile`]s, in order
//! 2. [`form`]   — one `images` part per file, in order
//! 3. [`upload`] — send the request; the only stage with network I/O

pub mod form;
pub mod input;
pub mod upload;
