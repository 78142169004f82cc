use crate::common::{HISTORY_PATH, client_for, fixture, mock_history_csv, setup_server};
use chrono::NaiveDate;
use httpmock::Method::GET;

#[tokio::test]
async fn historical_prices_cover_every_trading_day_in_range() {
    let server = setup_server();
    let mock = mock_history_csv(&server, "GOOG", fixture("history_csv", "GOOG", "csv"));
    let client = client_for(&server);

    let start_date = "2013-01-02";
    let end_date = "2013-01-15";
    let prices = ystockquote_rs::get_historical_prices(&client, "GOOG", start_date, end_date)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(prices.len(), 10);
    assert_eq!(prices.keys().next().map(String::as_str), Some(start_date));
    assert_eq!(prices.keys().next_back().map(String::as_str), Some(end_date));

    for date in [start_date, end_date] {
        let row = &prices[date];
        for col in ystockquote_rs::PriceRow::COLUMNS {
            assert!(row.number(col).unwrap() > 0.0, "{date} {col}");
        }
    }
    // weekend between Jan 4 and Jan 7
    assert!(!prices.contains_key("2013-01-05"));
    assert_eq!(prices["2013-01-15"].adj_close, "724.93");
}

#[tokio::test]
async fn date_range_is_sent_with_zero_based_months() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(HISTORY_PATH)
            .query_param("s", "GOOG")
            .query_param("a", "0")
            .query_param("b", "2")
            .query_param("c", "2013")
            .query_param("d", "0")
            .query_param("e", "15")
            .query_param("f", "2013")
            .query_param("g", "d")
            .query_param("ignore", ".csv");
        then.status(200)
            .body(fixture("history_csv", "GOOG", "csv"));
    });
    let client = client_for(&server);

    let prices = ystockquote_rs::HistoryBuilder::new(&client, "GOOG")
        .between(
            NaiveDate::from_ymd_opt(2013, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2013, 1, 15).unwrap(),
        )
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert_eq!(prices.len(), 10);
}

#[tokio::test]
async fn rows_outside_requested_range_are_dropped() {
    let server = setup_server();
    let body = "\
Date,Open,High,Low,Close,Volume,Adj Close
2013-01-16,709.80,722.39,701.00,715.19,2870200,715.19
2013-01-15,719.33,735.00,712.10,724.93,3927700,724.93
2013-01-14,737.00,742.20,722.35,723.25,5208600,723.25
2012-12-31,691.80,707.60,690.93,707.38,2328500,707.38
";
    let _mock = mock_history_csv(&server, "GOOG", body.to_string());
    let client = client_for(&server);

    let prices = ystockquote_rs::get_historical_prices(&client, "GOOG", "2013-01-14", "2013-01-15")
        .await
        .unwrap();

    let keys: Vec<_> = prices.keys().map(String::as_str).collect();
    assert_eq!(keys, ["2013-01-14", "2013-01-15"]);
}

#[tokio::test]
async fn single_day_range_is_allowed() {
    let server = setup_server();
    let _mock = mock_history_csv(&server, "GOOG", fixture("history_csv", "GOOG", "csv"));
    let client = client_for(&server);

    let prices = ystockquote_rs::get_historical_prices(&client, "GOOG", "2013-01-10", "2013-01-10")
        .await
        .unwrap();

    assert_eq!(prices.len(), 1);
    assert_eq!(prices["2013-01-10"].get("Volume"), Some("1939500"));
}

#[tokio::test]
async fn builder_without_range_keeps_all_rows() {
    let server = setup_server();
    let mock = mock_history_csv(&server, "GOOG", fixture("history_csv", "GOOG", "csv"));
    let client = client_for(&server);

    let prices = ystockquote_rs::HistoryBuilder::new(&client, "GOOG")
        .fetch()
        .await
        .unwrap();
    mock.assert();
    assert_eq!(prices.len(), 10);
}
