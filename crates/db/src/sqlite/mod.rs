//! SQLite-Implementierung der Repositories

mod benutzer;
mod einsaetze;
mod pool;
mod teams;

pub use pool::{DatenbankConfig, SqliteDb};
