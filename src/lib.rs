//! ystockquote-rs: thin client for Yahoo Finance CSV quotes.
//!
//! Two endpoints are covered: point-in-time snapshots (`quotes.csv`) through
//! [`get_all`], [`get_previous_close`] and [`get_field`] (each with a `_many`
//! batched form), and daily history (`table.csv`) through
//! [`get_historical_prices`].
//!
//! ```no_run
//! # async fn run() -> Result<(), ystockquote_rs::YqError> {
//! let client = ystockquote_rs::YqClient::default();
//! let goog = ystockquote_rs::get_all(&client, "GOOG").await?;
//! println!("previous close: {:?}", goog.previous_close());
//!
//! let prices =
//!     ystockquote_rs::get_historical_prices(&client, "GOOG", "2013-01-02", "2013-01-15").await?;
//! for (date, row) in &prices {
//!     println!("{date}: close {}", row.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod quote;

pub use crate::core::{MAX_SYMBOLS_PER_REQUEST, YqClient, YqClientBuilder, YqError};
pub use history::{HistoryBuilder, PriceRow, PriceTable, get_historical_prices};
pub use quote::{
    QuoteField, QuoteRecord, QuotesBuilder, get_all, get_all_many, get_field, get_field_many,
    get_previous_close, get_previous_close_many,
};
