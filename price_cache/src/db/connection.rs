//! SQLite connection helpers.
//!
//! Provides [`connect_sqlite`] for one-off connections and [`build_pool`]
//! for the serving path. Both apply the same PRAGMAs: WAL journaling,
//! foreign_keys=ON, and a 5000ms busy_timeout.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{Connection, RunQueryDsl, SqliteConnection, sql_query};

/// Connection pool handed to the lookup service and the server.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const PRAGMAS: &str =
    "PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON; PRAGMA busy_timeout=5000;";

/// Open a single SQLite connection and apply connection-wide PRAGMAs.
pub fn connect_sqlite(database_url: &str) -> anyhow::Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;

    sql_query("PRAGMA journal_mode=WAL;").execute(&mut conn)?;
    sql_query("PRAGMA foreign_keys=ON;").execute(&mut conn)?;
    sql_query("PRAGMA busy_timeout=5000;").execute(&mut conn)?;
    Ok(conn)
}

/// Applies the PRAGMA set to every connection the pool hands out.
/// foreign_keys in particular is per-connection state in SQLite, so it
/// cannot be set once at startup.
#[derive(Debug)]
struct ConnectionPragmas;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool over the given SQLite database.
pub fn build_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)?;
    Ok(pool)
}
