#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use rust_decimal::Decimal;
use tempfile::TempDir;

use market_data_client::models::{
    bar::DailyBar, request_params::HistoricalBarsRequest, symbol::SymbolListing, trade::LastTrade,
};
use market_data_client::providers::{MarketDataProvider, ProviderError};
use price_cache::db::connection::{DbPool, build_pool, connect_sqlite};
use price_cache::db::migrate;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

pub struct TestDb {
    _dir: TempDir, // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    migrate::run_sqlite(&path).expect("migrations");

    let conn = connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

pub fn setup_pool() -> (TestDb, DbPool) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    migrate::run_sqlite(&path).expect("migrations");

    let pool = build_pool(&path, 2).expect("pool");
    (TestDb { _dir: dir, path }, pool)
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let fk: ForeignKeys = sql_query("PRAGMA foreign_keys;").get_result(conn).unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

pub fn bar(
    symbol: &str,
    date: &str,
    volume: Option<i64>,
    close: &str,
    high: &str,
    low: &str,
    open: &str,
) -> DailyBar {
    DailyBar {
        symbol: symbol.to_string(),
        date: NaiveDate::from_str(date).unwrap(),
        volume,
        close: Decimal::from_str(close).unwrap(),
        high: Decimal::from_str(high).unwrap(),
        low: Decimal::from_str(low).unwrap(),
        open: Decimal::from_str(open).unwrap(),
    }
}

/// The four-bar response the upstream returns for ("AAPL", "6m", "").
pub fn aapl_6m_bars() -> Vec<DailyBar> {
    vec![
        bar("AAPL", "2021-12-27", Some(74_919_582), "180.33", "180.42", "177.07", "177.085"),
        bar("AAPL", "2021-12-28", Some(79_144_339), "179.29", "181.33", "178.53", "180.16"),
        bar("AAPL", "2021-12-29", Some(62_348_931), "179.38", "180.63", "178.14", "179.33"),
        bar("AAPL", "2021-12-30", Some(59_773_014), "178.20", "180.57", "178.09", "179.47"),
    ]
}

/// Test double for the upstream provider. Responses for
/// `fetch_daily_bars` are scripted per call; every call is counted so
/// tests can assert the cache kept the provider out of the hot path.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<Vec<DailyBar>, ProviderError>>>,
    bar_calls: AtomicUsize,
    trade_calls: AtomicUsize,
    /// Runs at the start of every `fetch_daily_bars` call. Lets a test
    /// interleave a competing cache write inside the fetch window.
    fetch_hook: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            bar_calls: AtomicUsize::new(0),
            trade_calls: AtomicUsize::new(0),
            fetch_hook: Mutex::new(None),
        }
    }

    pub fn push_bars(&self, bars: Vec<DailyBar>) {
        self.responses.lock().unwrap().push_back(Ok(bars));
    }

    pub fn push_error(&self, err: ProviderError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn set_fetch_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.fetch_hook.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn bar_call_count(&self) -> usize {
        self.bar_calls.load(Ordering::SeqCst)
    }

    pub fn trade_call_count(&self) -> usize {
        self.trade_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedProvider {
    async fn fetch_daily_bars(
        &self,
        _params: &HistoricalBarsRequest,
    ) -> Result<Vec<DailyBar>, ProviderError> {
        self.bar_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(hook) = self.fetch_hook.lock().unwrap().as_ref() {
            hook();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("provider called without a scripted response")
    }

    async fn list_symbols(&self) -> Result<Vec<SymbolListing>, ProviderError> {
        Ok(vec![])
    }

    async fn last_trade_prices(
        &self,
        symbols: &[String],
    ) -> Result<Vec<LastTrade>, ProviderError> {
        self.trade_calls.fetch_add(1, Ordering::SeqCst);
        Ok(symbols
            .iter()
            .map(|s| LastTrade {
                symbol: s.clone(),
                price: Decimal::from_str("186.34").unwrap(),
                size: Some(100),
                time: Some(1_611_055_016_401),
            })
            .collect())
    }
}
