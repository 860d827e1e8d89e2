use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

pub mod models;
pub mod repositories;
pub mod schema;

pub use schema::{ensure_schema, health_check};

/// Handle to the single-file enrollment database.
///
/// Holds connection options only. Every caller opens its own connection with
/// [`Database::connect`] and closes it when done; there is no pool.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Database {
    /// Describe the database file at `path`. The file is created on first connect.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the database file is already on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Open a fresh connection.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// Open a connection only if the database file already exists.
    pub async fn connect_existing(&self) -> Result<SqliteConnection, sqlx::Error> {
        let options = self.options.clone().create_if_missing(false);
        options.connect().await
    }
}

/// Close a connection, logging rather than failing if the close itself errors.
pub async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection");
    }
}
