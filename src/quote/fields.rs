use serde::Serialize;

/// One column of a `quotes.csv` snapshot.
///
/// Each variant maps to the service's format tag (sent in the `f=` parameter) and
/// to the snake_case key it gets in a [`QuoteRecord`](super::QuoteRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteField {
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    PreviousClose,
    Open,
    DayHigh,
    DayLow,
    Bid,
    Ask,
    Volume,
    AvgDailyVolume,
    StockExchange,
    MarketCap,
    EarningsPerShare,
    FiftyTwoWeekHigh,
    FiftyTwoWeekLow,
    FiftyDayMovingAvg,
    TwoHundredDayMovingAvg,
    PriceEarningsRatio,
    PriceEarningsGrowthRatio,
    PriceSalesRatio,
    PriceBookRatio,
    ShortRatio,
    BookValue,
    Ebitda,
    DividendPerShare,
    DividendYield,
    LastTradeDate,
    LastTradeTime,
}

impl QuoteField {
    /// Every field, in the order `get_all` requests them.
    pub const ALL: [Self; 31] = [
        Self::Symbol,
        Self::Name,
        Self::Price,
        Self::Change,
        Self::ChangePercent,
        Self::PreviousClose,
        Self::Open,
        Self::DayHigh,
        Self::DayLow,
        Self::Bid,
        Self::Ask,
        Self::Volume,
        Self::AvgDailyVolume,
        Self::StockExchange,
        Self::MarketCap,
        Self::EarningsPerShare,
        Self::FiftyTwoWeekHigh,
        Self::FiftyTwoWeekLow,
        Self::FiftyDayMovingAvg,
        Self::TwoHundredDayMovingAvg,
        Self::PriceEarningsRatio,
        Self::PriceEarningsGrowthRatio,
        Self::PriceSalesRatio,
        Self::PriceBookRatio,
        Self::ShortRatio,
        Self::BookValue,
        Self::Ebitda,
        Self::DividendPerShare,
        Self::DividendYield,
        Self::LastTradeDate,
        Self::LastTradeTime,
    ];

    /// The service's format tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Symbol => "s",
            Self::Name => "n",
            Self::Price => "l1",
            Self::Change => "c1",
            Self::ChangePercent => "p2",
            Self::PreviousClose => "p",
            Self::Open => "o",
            Self::DayHigh => "h",
            Self::DayLow => "g",
            Self::Bid => "b",
            Self::Ask => "a",
            Self::Volume => "v",
            Self::AvgDailyVolume => "a2",
            Self::StockExchange => "x",
            Self::MarketCap => "j1",
            Self::EarningsPerShare => "e",
            Self::FiftyTwoWeekHigh => "k",
            Self::FiftyTwoWeekLow => "j",
            Self::FiftyDayMovingAvg => "m3",
            Self::TwoHundredDayMovingAvg => "m4",
            Self::PriceEarningsRatio => "r",
            Self::PriceEarningsGrowthRatio => "r5",
            Self::PriceSalesRatio => "p5",
            Self::PriceBookRatio => "p6",
            Self::ShortRatio => "s7",
            Self::BookValue => "b4",
            Self::Ebitda => "j4",
            Self::DividendPerShare => "d",
            Self::DividendYield => "y",
            Self::LastTradeDate => "d1",
            Self::LastTradeTime => "t1",
        }
    }

    /// Record key for this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Name => "name",
            Self::Price => "price",
            Self::Change => "change",
            Self::ChangePercent => "change_percent",
            Self::PreviousClose => "previous_close",
            Self::Open => "open",
            Self::DayHigh => "day_high",
            Self::DayLow => "day_low",
            Self::Bid => "bid",
            Self::Ask => "ask",
            Self::Volume => "volume",
            Self::AvgDailyVolume => "avg_daily_volume",
            Self::StockExchange => "stock_exchange",
            Self::MarketCap => "market_cap",
            Self::EarningsPerShare => "earnings_per_share",
            Self::FiftyTwoWeekHigh => "fifty_two_week_high",
            Self::FiftyTwoWeekLow => "fifty_two_week_low",
            Self::FiftyDayMovingAvg => "fifty_day_moving_avg",
            Self::TwoHundredDayMovingAvg => "two_hundred_day_moving_avg",
            Self::PriceEarningsRatio => "price_earnings_ratio",
            Self::PriceEarningsGrowthRatio => "price_earnings_growth_ratio",
            Self::PriceSalesRatio => "price_sales_ratio",
            Self::PriceBookRatio => "price_book_ratio",
            Self::ShortRatio => "short_ratio",
            Self::BookValue => "book_value",
            Self::Ebitda => "ebitda",
            Self::DividendPerShare => "dividend_per_share",
            Self::DividendYield => "dividend_yield",
            Self::LastTradeDate => "last_trade_date",
            Self::LastTradeTime => "last_trade_time",
        }
    }
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Concatenate the tags of `fields` into an `f=` parameter value.
pub(crate) fn format_param(fields: &[QuoteField]) -> String {
    fields.iter().map(|f| f.tag()).collect()
}
