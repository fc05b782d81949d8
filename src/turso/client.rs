// Thin wrapper around a local libsql database connection.
//
// All SQL in the crate goes through `execute`/`query` here so error mapping
// and connection setup live in one place.

use std::path::PathBuf;

use libsql::params::IntoParams;

/// Database file name inside the data directory
const DB_FILE_NAME: &str = "abbreviations.db";

/// Error types for database operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TursoError {
    /// Failed to open or create the database
    #[error("Failed to open database: {0}")]
    Open(String),
    /// Filesystem error preparing the database directory
    #[error("Database directory error: {0}")]
    Io(String),
    /// A query or statement failed
    #[error("Query failed: {0}")]
    Query(String),
}

/// Client owning a connection to the local abbreviations database
pub struct TursoClient {
    conn: libsql::Connection,
}

impl TursoClient {
    /// Open (creating if necessary) the database under `db_dir`.
    pub async fn new(db_dir: PathBuf) -> Result<Self, TursoError> {
        std::fs::create_dir_all(&db_dir).map_err(|e| TursoError::Io(e.to_string()))?;

        let db_path = db_dir.join(DB_FILE_NAME);
        crate::debug!("Opening abbreviations database at {:?}", db_path);

        let db = libsql::Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| TursoError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| TursoError::Open(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Execute a statement, returning the number of affected rows.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<u64, TursoError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(|e| TursoError::Query(e.to_string()))
    }

    /// Run a query, returning the row cursor.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, TursoError> {
        self.conn
            .query(sql, params)
            .await
            .map_err(|e| TursoError::Query(e.to_string()))
    }
}

impl std::fmt::Debug for TursoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TursoClient").finish_non_exhaustive()
    }
}
