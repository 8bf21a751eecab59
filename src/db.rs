//! SQLite connection pool used by the directory repository.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

diesel::define_sql_function! {
    /// Unicode lowercase of `x`; SQLite's own `lower` and `LIKE` only fold ASCII.
    fn fold_case(x: Text) -> Text;
}

/// Makes [`fold_case`] callable on `conn`.
pub fn register_fold_case(conn: &mut SqliteConnection) -> diesel::QueryResult<()> {
    fold_case_utils::register_impl(conn, |text: String| text.to_lowercase())
}

/// Pragmas executed on every connection handed out by the pool.
#[derive(Debug, Clone)]
pub struct SqlitePragmas {
    pub journal_wal: bool,
    pub foreign_keys: bool,
    pub busy_timeout: Option<Duration>,
}

impl Default for SqlitePragmas {
    fn default() -> Self {
        Self {
            journal_wal: true,
            foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl SqlitePragmas {
    /// Renders the pragmas as a single SQL batch.
    pub fn to_sql(&self) -> String {
        let mut batch = String::new();
        if self.journal_wal {
            batch.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL; ");
        }
        if self.foreign_keys {
            batch.push_str("PRAGMA foreign_keys = ON; ");
        }
        if let Some(timeout) = self.busy_timeout {
            batch.push_str(&format!("PRAGMA busy_timeout = {}; ", timeout.as_millis()));
        }
        batch.trim_end().to_string()
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        register_fold_case(conn).map_err(diesel::r2d2::Error::QueryError)?;
        let batch = self.to_sql();
        if batch.is_empty() {
            return Ok(());
        }
        conn.batch_execute(&batch)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a pool of at most `max_size` connections to `database_url`.
pub fn establish_connection_pool(database_url: &str, max_size: u32) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size.max(1))
        .connection_customizer(Box::new(SqlitePragmas::default()))
        .build(manager)
}

/// Retrieve a connection from the pool, logging acquisition failures.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| error!("Failed to get connection from pool: {e}"))
}
