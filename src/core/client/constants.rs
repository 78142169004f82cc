//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo CSV quote snapshot endpoint (`s=` symbols, `f=` format tags).
pub(crate) const DEFAULT_BASE_QUOTES: &str = "https://download.finance.yahoo.com/d/quotes.csv";

/// Yahoo CSV historical price table endpoint.
pub(crate) const DEFAULT_BASE_HISTORY: &str = "https://ichart.finance.yahoo.com/table.csv";

/// Largest symbol batch the quotes endpoint accepts in one request.
pub const MAX_SYMBOLS_PER_REQUEST: usize = 200;
