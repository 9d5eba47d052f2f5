//! Configuration types for image-to-PDF uploads.
//!
//! All upload behaviour is controlled through [`UploadConfig`], built via its
//! [`UploadConfigBuilder`]. The endpoint is a configuration value rather than
//! a constant so that tests, staging deployments and self-hosted services can
//! be targeted without recompiling.

use crate::error::Img2PdfError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Endpoint used when neither the builder nor `IMG2PDF_ENDPOINT` names one.
pub const DEFAULT_ENDPOINT: &str = "https://img-to-pdf-j9ul.onrender.com/api/images";

/// Multipart field name every file part is sent under.
pub const DEFAULT_FIELD_NAME: &str = "images";

/// Environment variable consulted for the endpoint when none is set explicitly.
pub const ENDPOINT_ENV: &str = "IMG2PDF_ENDPOINT";

/// Configuration for an image-to-PDF upload.
///
/// Built via [`UploadConfig::builder()`] or using [`UploadConfig::default()`].
///
/// # Example
/// ```rust
/// use img2pdf_client::UploadConfig;
///
/// let config = UploadConfig::builder()
///     .endpoint("http://localhost:8080/api/images")
///     .timeout_secs(30)
///     .build()
///     .unwrap();
/// assert_eq!(config.field_name, "images");
/// ```
#[derive(Clone)]
pub struct UploadConfig {
    /// Full URL the multipart form is POSTed to.
    pub endpoint: String,

    /// Multipart field name used for every file part. Default: `images`.
    pub field_name: String,

    /// Whole-request timeout in seconds. Default: `None` (wait indefinitely).
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header sent with the request.
    pub user_agent: String,

    /// Optional observer for upload start/complete/error events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            timeout_secs: None,
            user_agent: concat!("img2pdf-client/", env!("CARGO_PKG_VERSION")).to_string(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadConfig")
            .field("endpoint", &self.endpoint)
            .field("field_name", &self.field_name)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn UploadProgressCallback>"),
            )
            .finish()
    }
}

impl UploadConfig {
    /// Create a new builder for `UploadConfig`.
    pub fn builder() -> UploadConfigBuilder {
        UploadConfigBuilder {
            config: Self::default(),
        }
    }

    /// Check the invariants [`UploadConfigBuilder::build`] enforces.
    ///
    /// Exposed so configs assembled by hand (public fields) can be checked
    /// before use; [`crate::UploadClient::new`] calls it too.
    pub fn validate(&self) -> Result<(), Img2PdfError> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            Img2PdfError::InvalidConfig(format!("endpoint '{}' is not a URL: {e}", self.endpoint))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Img2PdfError::InvalidConfig(format!(
                "endpoint must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.field_name.trim().is_empty() {
            return Err(Img2PdfError::InvalidConfig(
                "field name must not be empty".into(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(Img2PdfError::InvalidConfig(
                "timeout must be ≥ 1 second".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`UploadConfig`].
#[derive(Debug)]
pub struct UploadConfigBuilder {
    config: UploadConfig,
}

impl UploadConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.config.field_name = name.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    pub fn no_timeout(mut self) -> Self {
        self.config.timeout_secs = None;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<UploadConfig, Img2PdfError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// `IMG2PDF_ENDPOINT` if set and non-empty, else [`DEFAULT_ENDPOINT`].
fn default_endpoint() -> String {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
