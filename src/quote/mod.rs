//! Point-in-time quote snapshots from the `quotes.csv` endpoint.

mod fields;
mod model;

pub use fields::QuoteField;
pub use model::QuoteRecord;

use crate::core::{MAX_SYMBOLS_PER_REQUEST, YqClient, YqError, csv::snapshot_reader, net};

/* ---------------- Public API ---------------- */

/// Fetch every catalog field for one symbol.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_all(client: &YqClient, symbol: &str) -> Result<QuoteRecord, YqError> {
    let rows = QuotesBuilder::new(client)
        .add_symbol(symbol)
        .fields(QuoteField::ALL)
        .fetch()
        .await?;
    single(rows)
}

/// Fetch every catalog field for several symbols in one batched request.
///
/// Records come back in the order the symbols were given.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, symbols), err))]
pub async fn get_all_many<I, S>(client: &YqClient, symbols: I) -> Result<Vec<QuoteRecord>, YqError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    QuotesBuilder::new(client)
        .symbols(symbols)
        .fields(QuoteField::ALL)
        .fetch()
        .await
}

/// Previous session's close for one symbol. `None` when the service reports it unavailable.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_previous_close(client: &YqClient, symbol: &str) -> Result<Option<String>, YqError> {
    get_field(client, symbol, QuoteField::PreviousClose).await
}

/// Previous close for several symbols, in input order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, symbols), err))]
pub async fn get_previous_close_many<I, S>(
    client: &YqClient,
    symbols: I,
) -> Result<Vec<Option<String>>, YqError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    get_field_many(client, symbols, QuoteField::PreviousClose).await
}

/// Fetch a single field for one symbol.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_field(
    client: &YqClient,
    symbol: &str,
    field: QuoteField,
) -> Result<Option<String>, YqError> {
    let rows = QuotesBuilder::new(client)
        .add_symbol(symbol)
        .add_field(field)
        .fetch()
        .await?;
    Ok(single(rows)?.field(field).map(str::to_owned))
}

/// Fetch a single field for several symbols, in input order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, symbols), err))]
pub async fn get_field_many<I, S>(
    client: &YqClient,
    symbols: I,
    field: QuoteField,
) -> Result<Vec<Option<String>>, YqError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let rows = QuotesBuilder::new(client)
        .symbols(symbols)
        .add_field(field)
        .fetch()
        .await?;
    Ok(rows
        .iter()
        .map(|r| r.field(field).map(str::to_owned))
        .collect())
}

/// Builder for batch quote snapshots.
///
/// `symbol` is always requested as the first column; other fields follow in the
/// order they were added, duplicates dropped.
pub struct QuotesBuilder<'a> {
    client: &'a YqClient,
    symbols: Vec<String>,
    fields: Vec<QuoteField>,
}

impl<'a> QuotesBuilder<'a> {
    #[must_use]
    pub fn new(client: &'a YqClient) -> Self {
        Self {
            client,
            symbols: Vec::new(),
            fields: vec![QuoteField::Symbol],
        }
    }

    /// Set the symbols to query.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Add several fields.
    #[must_use]
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = QuoteField>,
    {
        for f in fields {
            self = self.add_field(f);
        }
        self
    }

    /// Add one field.
    #[must_use]
    pub fn add_field(mut self, field: QuoteField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    /// Execute the request and return one `QuoteRecord` per symbol, in input order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbols = self.symbols.len()))
    )]
    pub async fn fetch(self) -> Result<Vec<QuoteRecord>, YqError> {
        validate_symbols(&self.symbols)?;

        let tags = fields::format_param(&self.fields);
        let mut url = self.client.base_quotes().clone();
        url.query_pairs_mut()
            .append_pair("s", &self.symbols.join(","))
            .append_pair("f", &tags);

        // fixture name: full snapshots use the bare key, partial ones carry their tags
        let mut key = if self.symbols.len() == 1 {
            self.symbols[0].clone()
        } else {
            "MULTI".to_string()
        };
        if self.fields.len() != QuoteField::ALL.len() {
            key = format!("{key}_{tags}");
        }
        let body = net::fetch_text(self.client, url, "quotes_csv", &key).await?;

        parse_snapshot(&body, &self.symbols, &self.fields)
    }
}

/* ---------------- Internal helpers ---------------- */

fn validate_symbols(symbols: &[String]) -> Result<(), YqError> {
    if symbols.is_empty() {
        return Err(YqError::InvalidParams(
            "quotes: at least one symbol required".into(),
        ));
    }
    if symbols.len() > MAX_SYMBOLS_PER_REQUEST {
        return Err(YqError::TooManySymbols {
            requested: symbols.len(),
            max: MAX_SYMBOLS_PER_REQUEST,
        });
    }
    if let Some(pos) = symbols.iter().position(|s| s.trim().is_empty()) {
        return Err(YqError::InvalidParams(format!(
            "quotes: symbol at position {pos} is empty"
        )));
    }
    Ok(())
}

fn parse_snapshot(
    body: &str,
    symbols: &[String],
    fields: &[QuoteField],
) -> Result<Vec<QuoteRecord>, YqError> {
    let mut rdr = snapshot_reader(body);
    let mut out = Vec::with_capacity(symbols.len());

    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let Some(symbol) = symbols.get(i) else {
            return Err(YqError::Data(format!(
                "quotes: got more rows than the {} symbols requested",
                symbols.len()
            )));
        };
        if row.len() != fields.len() {
            return Err(YqError::Data(format!(
                "quotes: row {i} for {symbol} has {} columns, expected {}",
                row.len(),
                fields.len()
            )));
        }
        // column 0 is always `symbol`; the service must echo rows in request order
        let echoed = row.get(0).unwrap_or_default();
        if !echoed.eq_ignore_ascii_case(symbol.trim()) {
            return Err(YqError::Data(format!(
                "quotes: row {i} is for {echoed:?}, expected {symbol:?}"
            )));
        }

        let mut rec = QuoteRecord::new(symbol.as_str());
        for (field, raw) in fields.iter().zip(row.iter()) {
            rec.insert(*field, raw);
        }
        out.push(rec);
    }

    if out.len() != symbols.len() {
        return Err(YqError::Data(format!(
            "quotes: got {} rows for {} symbols",
            out.len(),
            symbols.len()
        )));
    }
    Ok(out)
}

fn single(rows: Vec<QuoteRecord>) -> Result<QuoteRecord, YqError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| YqError::Data("quotes: empty response".into()))
}
