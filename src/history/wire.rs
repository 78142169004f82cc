use chrono::NaiveDate;
use serde::Deserialize;

use super::model::{PriceRow, PriceTable};
use super::params::DATE_FORMAT;
use crate::core::{YqError, csv::table_reader};

const DATE_COLUMN: &str = "Date";

#[derive(Deserialize)]
pub(crate) struct TableRow {
    #[serde(rename = "Date")]
    pub(crate) date: String,
    #[serde(rename = "Open")]
    pub(crate) open: String,
    #[serde(rename = "High")]
    pub(crate) high: String,
    #[serde(rename = "Low")]
    pub(crate) low: String,
    #[serde(rename = "Close")]
    pub(crate) close: String,
    #[serde(rename = "Volume")]
    pub(crate) volume: String,
    #[serde(rename = "Adj Close")]
    pub(crate) adj_close: String,
}

impl From<TableRow> for PriceRow {
    fn from(r: TableRow) -> Self {
        Self {
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
            volume: r.volume,
            adj_close: r.adj_close,
        }
    }
}

/// Parse a `table.csv` body into a date-keyed table, keeping only dates inside `period`.
pub(crate) fn parse_table(
    body: &str,
    period: Option<(NaiveDate, NaiveDate)>,
) -> Result<PriceTable, YqError> {
    let mut rdr = table_reader(body);

    let headers = rdr.headers()?;
    if let Some(missing) = std::iter::once(DATE_COLUMN)
        .chain(PriceRow::COLUMNS)
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(YqError::Data(format!(
            "history: header is missing the {missing:?} column"
        )));
    }

    let mut out = PriceTable::new();
    for row in rdr.deserialize::<TableRow>() {
        let row = row?;
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
            .map_err(|e| YqError::Data(format!("history: bad date {:?}: {e}", row.date)))?;

        if let Some((start, end)) = period
            && (date < start || date > end)
        {
            continue;
        }
        let key = date.format(DATE_FORMAT).to_string();
        if out.contains_key(&key) {
            return Err(YqError::Data(format!("history: duplicate row for {key}")));
        }
        out.insert(key, row.into());
    }
    Ok(out)
}
