use std::str::FromStr;

use market_data_client::models::bar::DailyBar;
use price_cache::errors::StoreError;
use price_cache::index::{QueryIndex, SqliteQueryIndex};
use price_cache::models::NewPriceBar;
use price_cache::store::{PriceBarStore, SqlitePriceBarStore};
use rust_decimal::Decimal;

mod common;

#[test]
fn bars_come_back_in_response_order() {
    let (_db, mut conn) = common::setup_db();
    let index = SqliteQueryIndex;
    let store = SqlitePriceBarStore;

    let query = index
        .create_query(&mut conn, "AAPL", "6m", "")
        .expect("create query");

    // Insert out of sequence order; reads must sort by seq, not rowid.
    let bars = common::aapl_6m_bars();
    for seq in [2usize, 0, 3, 1] {
        store
            .save_bar(&mut conn, NewPriceBar::from_bar(query.id, seq as i32, &bars[seq]))
            .expect("save bar");
    }

    let rows = store.find_bars(&mut conn, query.id).expect("read bars");
    assert_eq!(rows.len(), 4);
    let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2021-12-27", "2021-12-28", "2021-12-29", "2021-12-30"]
    );
}

#[test]
fn unknown_query_yields_an_empty_set_not_an_error() {
    let (_db, mut conn) = common::setup_db();
    let store = SqlitePriceBarStore;

    let rows = store.find_bars(&mut conn, 999).expect("read bars");
    assert!(rows.is_empty());
}

#[test]
fn persisted_prices_survive_a_round_trip_exactly() {
    let (_db, mut conn) = common::setup_db();
    let index = SqliteQueryIndex;
    let store = SqlitePriceBarStore;

    let query = index
        .create_query(&mut conn, "AAPL", "6m", "")
        .expect("create query");
    let original = &common::aapl_6m_bars()[0];
    store
        .save_bar(&mut conn, NewPriceBar::from_bar(query.id, 0, original))
        .expect("save bar");

    let rows = store.find_bars(&mut conn, query.id).expect("read bars");
    let restored = DailyBar::try_from(rows.into_iter().next().unwrap()).expect("decode bar");
    assert_eq!(&restored, original);
    assert_eq!(restored.close, Decimal::from_str("180.33").unwrap());
    assert_eq!(restored.open, Decimal::from_str("177.085").unwrap());
}

#[test]
fn bars_cannot_exist_without_an_owning_query() {
    let (_db, mut conn) = common::setup_db();
    let store = SqlitePriceBarStore;

    let orphan = NewPriceBar::from_bar(12345, 0, &common::aapl_6m_bars()[0]);
    let err = store.save_bar(&mut conn, orphan).expect_err("orphan bar");
    assert!(matches!(err, StoreError::Database(_)));
}
