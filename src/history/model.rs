use serde::Serialize;
use std::collections::BTreeMap;

/// Daily bars keyed by ISO 8601 date (`YYYY-MM-DD`). Keys sort chronologically.
pub type PriceTable = BTreeMap<String, PriceRow>;

/// One trading day as sent by the service. All values are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceRow {
    #[serde(rename = "Open")]
    pub open: String,
    #[serde(rename = "High")]
    pub high: String,
    #[serde(rename = "Low")]
    pub low: String,
    #[serde(rename = "Close")]
    pub close: String,
    #[serde(rename = "Volume")]
    pub volume: String,
    #[serde(rename = "Adj Close")]
    pub adj_close: String,
}

impl PriceRow {
    /// Column names in the order the service sends them (after `Date`).
    pub const COLUMNS: [&'static str; 6] = ["Open", "High", "Low", "Close", "Volume", "Adj Close"];

    /// Look a value up by its column header, e.g. `"Adj Close"`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        let v = match column {
            "Open" => &self.open,
            "High" => &self.high,
            "Low" => &self.low,
            "Close" => &self.close,
            "Volume" => &self.volume,
            "Adj Close" => &self.adj_close,
            _ => return None,
        };
        Some(v.as_str())
    }

    /// Parse a column as `f64`.
    #[must_use]
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column)?.parse().ok()
    }
}
