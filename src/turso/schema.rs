// Database schema definitions and migration system
//
// Defines the SQLite schema for the abbreviation dictionary and provides a
// migration loop for future schema changes.

use super::client::{TursoClient, TursoError};

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Abbreviation dictionary: canonical trigger key -> expansion text
    r#"CREATE TABLE IF NOT EXISTS abbreviation (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )"#,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist and runs any pending migrations.
/// Called once when the dictionary store is opened.
pub async fn initialize_schema(client: &TursoClient) -> Result<(), TursoError> {
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        crate::info!("Initializing abbreviation schema (version {})", SCHEMA_VERSION);

        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }

        set_schema_version(client, SCHEMA_VERSION).await?;
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating abbreviation schema from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
    } else {
        crate::debug!("Abbreviation schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database.
/// Returns 0 if no version has been recorded yet.
async fn get_schema_version(client: &TursoClient) -> Result<i32, TursoError> {
    let mut rows = client
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await?;

    match rows.next().await.map_err(|e| TursoError::Query(e.to_string()))? {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| TursoError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(client: &TursoClient, version: i32) -> Result<(), TursoError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another.
async fn run_migrations(
    client: &TursoClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), TursoError> {
    for version in (from_version + 1)..=to_version {
        match version {
            // 2 => migrate_v1_to_v2(client).await?,
            _ => {
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
