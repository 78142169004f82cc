use crate::common::{client_for, fixture, mock_quotes_csv, setup_server};
use ystockquote_rs::QuoteField;

fn all_tags() -> String {
    QuoteField::ALL.iter().map(|f| f.tag()).collect()
}

#[tokio::test]
async fn get_all_single_returns_positive_previous_close() {
    let server = setup_server();
    let tags = all_tags();
    let mock = mock_quotes_csv(&server, "GOOG", &tags, fixture("quotes_csv", "GOOG", "csv"));
    let client = client_for(&server);

    let rec = ystockquote_rs::get_all(&client, "GOOG").await.unwrap();
    mock.assert();

    assert_eq!(rec.symbol, "GOOG");
    assert_eq!(rec.len(), QuoteField::ALL.len());
    let pc = rec.raw("previous_close").unwrap();
    assert_ne!(pc, "N/A");
    assert!(pc.parse::<f64>().unwrap() > 0.0);
    assert_eq!(rec.get("name"), Some("Google Inc."));
    assert_eq!(rec.field(QuoteField::StockExchange), Some("NasdaqNM"));
    assert_eq!(rec.number("change_percent"), Some(0.58));
}

#[tokio::test]
async fn get_all_keeps_sentinel_raw_and_hides_it_from_typed_lookups() {
    let server = setup_server();
    let tags = all_tags();
    let _mock = mock_quotes_csv(&server, "GOOG", &tags, fixture("quotes_csv", "GOOG", "csv"));
    let client = client_for(&server);

    let rec = ystockquote_rs::get_all(&client, "GOOG").await.unwrap();

    assert_eq!(rec.raw("dividend_yield"), Some("N/A"));
    assert_eq!(rec.get("dividend_yield"), None);
    assert_eq!(rec.number("dividend_yield"), None);
    assert_eq!(rec.raw("not_a_field"), None);
}

#[tokio::test]
async fn get_all_many_preserves_input_order() {
    let server = setup_server();
    let tags = all_tags();
    let mock = mock_quotes_csv(
        &server,
        "GOOG,TSLA",
        &tags,
        fixture("quotes_csv", "MULTI", "csv"),
    );
    let client = client_for(&server);

    let rows = ystockquote_rs::get_all_many(&client, ["GOOG", "TSLA"])
        .await
        .unwrap();
    mock.assert();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].symbol, "GOOG");
    assert_eq!(rows[1].symbol, "TSLA");
    // quoted comma inside the company name must not shift columns
    assert_eq!(rows[1].get("name"), Some("Tesla Motors, Inc."));
    for row in &rows {
        let pc = row.previous_close().unwrap();
        assert!(pc.parse::<f64>().unwrap() > 0.0);
    }
    assert_eq!(rows[1].get("price_earnings_ratio"), None);
}

#[tokio::test]
async fn get_previous_close_single_requests_only_that_field() {
    let server = setup_server();
    let mock = mock_quotes_csv(&server, "GOOG", "sp", "\"GOOG\",734.76\r\n".to_string());
    let client = client_for(&server);

    let pc = ystockquote_rs::get_previous_close(&client, "GOOG")
        .await
        .unwrap()
        .unwrap();
    mock.assert();

    assert_ne!(pc, "N/A");
    assert!(pc.parse::<f64>().unwrap() > 0.0);
}

#[tokio::test]
async fn get_previous_close_many_returns_values_in_order() {
    let server = setup_server();
    let mock = mock_quotes_csv(
        &server,
        "GOOG,TSLA",
        "sp",
        "\"GOOG\",734.76\r\n\"TSLA\",38.66\r\n".to_string(),
    );
    let client = client_for(&server);

    let pcs = ystockquote_rs::get_previous_close_many(&client, vec!["GOOG", "TSLA"])
        .await
        .unwrap();
    mock.assert();

    assert_eq!(pcs, vec![Some("734.76".to_string()), Some("38.66".to_string())]);
}

#[tokio::test]
async fn unavailable_previous_close_is_none() {
    let server = setup_server();
    let _mock = mock_quotes_csv(&server, "NOPE", "sp", "\"NOPE\",N/A\r\n".to_string());
    let client = client_for(&server);

    let pc = ystockquote_rs::get_previous_close(&client, "NOPE")
        .await
        .unwrap();
    assert_eq!(pc, None);
}

#[tokio::test]
async fn get_field_many_fetches_volume() {
    let server = setup_server();
    let mock = mock_quotes_csv(
        &server,
        "GOOG,TSLA",
        "sv",
        "\"GOOG\",2345678\r\n\"TSLA\",1023400\r\n".to_string(),
    );
    let client = client_for(&server);

    let vols = ystockquote_rs::get_field_many(&client, ["GOOG", "TSLA"], QuoteField::Volume)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(vols[0].as_deref(), Some("2345678"));
    assert_eq!(vols[1].as_deref(), Some("1023400"));
}

#[tokio::test]
async fn builder_dedups_fields_and_keeps_symbol_first() {
    let server = setup_server();
    let mock = mock_quotes_csv(
        &server,
        "GOOG",
        "sl1p",
        "\"GOOG\",738.99,734.76\n".to_string(),
    );
    let client = client_for(&server);

    let rows = ystockquote_rs::QuotesBuilder::new(&client)
        .add_symbol("GOOG")
        .fields([QuoteField::Price, QuoteField::Symbol, QuoteField::PreviousClose])
        .add_field(QuoteField::Price)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number("price"), Some(738.99));
    assert_eq!(rows[0].number("previous_close"), Some(734.76));
    assert_eq!(rows[0].len(), 3);
}
