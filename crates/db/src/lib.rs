//! leitstelle-db – Datenbank-Schicht
//!
//! Dieses Crate stellt das Repository-Pattern bereit: Traits fuer die
//! Datenzugriffe auf Benutzer, Teams und Einsaetze sowie die konkrete
//! SQLite-Implementierung (sqlx, WAL-Modus, eingebettete Migrationen).

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

// Bequeme Re-Exporte
pub use error::{DbError, DbResult};
pub use repository::{BenutzerRepository, EinsatzRepository, TeamRepository};
pub use sqlite::{DatenbankConfig, SqliteDb};
