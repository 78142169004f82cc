//! Shared CSV reader settings for both endpoints.

use csv::{Reader, ReaderBuilder, Trim};

/// Literal the service emits for a field it has no value for.
pub const UNAVAILABLE: &str = "N/A";

/// `true` when `raw` is the service's "no value" marker.
#[must_use]
pub fn is_unavailable(raw: &str) -> bool {
    raw.trim() == UNAVAILABLE
}

/// Headerless reader for `quotes.csv` bodies: one row per symbol, one column per tag.
pub(crate) fn snapshot_reader(body: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes())
}

/// Reader for `table.csv` bodies, which start with a header row.
pub(crate) fn table_reader(body: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes())
}
