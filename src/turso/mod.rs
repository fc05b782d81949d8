// Turso/libsql persistence layer for the abbreviation dictionary.
//
// `client` wraps the libsql connection, `schema` owns table creation and
// migrations, `abbreviations` holds the CRUD queries used by the dictionary
// store facade.

mod abbreviations;
mod client;
mod schema;

pub use client::{TursoClient, TursoError};
pub use schema::initialize_schema;
