#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::{YqClient, YqError};

/// Issue one GET against `url` and return the body of a successful response.
///
/// Non-2xx statuses are mapped onto the status variants of [`YqError`].
/// `endpoint` and `key` only name the fixture file when recording in `test-mode`.
pub(crate) async fn fetch_text(
    client: &YqClient,
    url: Url,
    endpoint: &str,
    key: &str,
) -> Result<String, YqError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(%url, endpoint, "GET");

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "text/csv")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, status = status.as_u16(), "non-success status");
        return Err(YqError::from_status(status.as_u16(), &url));
    }

    let body = get_text(resp, endpoint, key, "csv").await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%url, bytes = body.len(), "response body read");

    Ok(body)
}

/// Read the response body as text.
/// In `test-mode`, if `YQ_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("YQ_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("YQ_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}
