use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Variants fall into two classes: request errors (the call could not be made or
/// the service refused it) and parse errors (the service answered with a body that
/// does not have the expected CSV shape). See [`YqError::is_request_error`] and
/// [`YqError::is_parse_error`].
#[derive(Debug, Error)]
pub enum YqError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The service rate-limited the request (HTTP 429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The service failed with a 5xx status.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// More symbols were passed to a single batched request than the service accepts.
    #[error("too many symbols in one request: {requested} (max {max})")]
    TooManySymbols {
        /// Number of symbols in the request.
        requested: usize,
        /// The service limit.
        max: usize,
    },

    /// Invalid parameters were provided (empty symbol list, malformed date, ...).
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// An invalid date range was provided for a historical data request.
    #[error("invalid date range: start must not be after end")]
    InvalidDates,

    /// The response body could not be tokenized as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data received was in an unexpected shape or was missing a required column.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl YqError {
    /// `true` when the request failed before a usable body came back.
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        !self.is_parse_error()
    }

    /// `true` when the service answered but the body was not in the expected shape.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Csv(_) | Self::Data(_))
    }

    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            404 => Self::NotFound { url },
            429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
