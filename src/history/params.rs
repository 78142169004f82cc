use chrono::{Datelike, NaiveDate};
use url::Url;

use crate::core::YqError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` argument.
pub(crate) fn parse_date(which: &str, s: &str) -> Result<NaiveDate, YqError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| YqError::InvalidParams(format!("{which} date {s:?}: {e}")))
}

/// Append the `table.csv` query for `symbol` over `[start, end]` (daily bars).
///
/// The service takes zero-based months: `a`/`b`/`c` are the start month, day and
/// year, `d`/`e`/`f` the end.
pub(crate) fn apply(url: &mut Url, symbol: &str, period: Option<(NaiveDate, NaiveDate)>) {
    let mut qp = url.query_pairs_mut();
    qp.append_pair("s", symbol);
    if let Some((start, end)) = period {
        qp.append_pair("a", &start.month0().to_string())
            .append_pair("b", &start.day().to_string())
            .append_pair("c", &start.year().to_string())
            .append_pair("d", &end.month0().to_string())
            .append_pair("e", &end.day().to_string())
            .append_pair("f", &end.year().to_string());
    }
    qp.append_pair("g", "d").append_pair("ignore", ".csv");
}
