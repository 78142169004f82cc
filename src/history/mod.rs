//! Daily historical prices from the `table.csv` endpoint.

mod model;
mod params;
mod wire;

pub use model::{PriceRow, PriceTable};

use chrono::NaiveDate;

use crate::core::{YqClient, YqError, net};

/// Daily prices for `symbol` between two `YYYY-MM-DD` dates, both inclusive.
///
/// Non-trading days are simply absent from the result.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_historical_prices(
    client: &YqClient,
    symbol: &str,
    start_date: &str,
    end_date: &str,
) -> Result<PriceTable, YqError> {
    let start = params::parse_date("start", start_date)?;
    let end = params::parse_date("end", end_date)?;
    HistoryBuilder::new(client, symbol)
        .between(start, end)
        .fetch()
        .await
}

/// Builder for one symbol's daily price table.
pub struct HistoryBuilder<'a> {
    client: &'a YqClient,
    symbol: String,
    period: Option<(NaiveDate, NaiveDate)>,
}

impl<'a> HistoryBuilder<'a> {
    #[must_use]
    pub fn new(client: &'a YqClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            period: None,
        }
    }

    /// Restrict to `[start, end]`. Without this the full available history is returned.
    #[must_use]
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period = Some((start, end));
        self
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.symbol))
    )]
    pub async fn fetch(self) -> Result<PriceTable, YqError> {
        if self.symbol.trim().is_empty() {
            return Err(YqError::InvalidParams("history: symbol is empty".into()));
        }
        if let Some((start, end)) = self.period
            && start > end
        {
            return Err(YqError::InvalidDates);
        }

        let mut url = self.client.base_history().clone();
        params::apply(&mut url, &self.symbol, self.period);

        let body = net::fetch_text(self.client, url, "history_csv", &self.symbol).await?;
        wire::parse_table(&body, self.period)
    }
}
