#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use saaspertise::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    /// Creates a migrated database file called `name`.
    pub fn new(name: &str) -> Self {
        let db = Self::unmigrated(name);
        let mut conn = db.pool.get().expect("connection");
        conn.run_pending_migrations(MIGRATIONS).expect("migrations");
        drop(conn);
        db
    }

    /// Creates an empty database without any tables.
    pub fn unmigrated(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 path").to_string();
        let pool = establish_connection_pool(&url, 4).expect("pool");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
