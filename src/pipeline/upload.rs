//! The network step: POST the form, check the status, read the body.
//!
//! This is the only stage with network I/O. There is no retry: a non-2xx
//! answer becomes [`Img2PdfError::RequestFailed`] and a connection problem
//! becomes [`Img2PdfError::Transport`], both returned to the caller as-is.

use crate::error::Img2PdfError;
use crate::output::PdfBlob;
use hyper::ext::ReasonPhrase;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::Client;
use tracing::{debug, warn};

/// Send `form` to `endpoint` and return the response body on 2xx.
pub async fn send_form(client: &Client, endpoint: &str, form: Form) -> Result<PdfBlob, Img2PdfError> {
    debug!("POST {} (boundary {})", endpoint, form.boundary());

    let response = client.post(endpoint).multipart(form).send().await?;
    let status = response.status();

    if !status.is_success() {
        // hyper only records the phrase when it differs from the canonical one.
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .and_then(|r| std::str::from_utf8(r.as_bytes()).ok())
            .map(str::to_string);
        // The body is only diagnostic here; a failure to read it must not
        // mask the status error.
        let body = response.text().await.unwrap_or_default();
        warn!(
            "Conversion service answered HTTP {} {}",
            status.as_u16(),
            reason
                .as_deref()
                .or_else(|| status.canonical_reason())
                .unwrap_or("")
        );
        return Err(Img2PdfError::request_failed(status, reason.as_deref(), &body));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let bytes = response.bytes().await?.to_vec();
    debug!(
        "HTTP {}: received {} bytes ({})",
        status,
        bytes.len(),
        content_type.as_deref().unwrap_or("no content type")
    );

    Ok(PdfBlob {
        bytes,
        content_type,
    })
}
