//! SQLite-Anbindung fuer Leitstelle
//!
//! Eine einzelne SQLite-Datei traegt den gesamten Einsatzbestand,
//! weitere Backends sind nicht vorgesehen. Das Schema liegt als
//! eingebettete Migrationen im Binary und wird beim Oeffnen auf den
//! aktuellen Stand gebracht.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::error::DbError;

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatenbankConfig {
    /// Verbindungs-URL (z.B. "sqlite://leitstelle.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob der WAL-Modus aktiviert werden soll
    pub wal: bool,
}

/// Handle auf die Einsatz-Datenbank; Klone teilen denselben Pool
#[derive(Debug, Clone)]
pub struct SqliteDb {
    pub(crate) pool: SqlitePool,
}

impl SqliteDb {
    /// Oeffnet die Datenbank und migriert das Schema
    ///
    /// Legt die Datenbankdatei bei Bedarf an.
    pub async fn oeffnen(config: &DatenbankConfig) -> Result<Self, DbError> {
        let journal = if config.wal {
            SqliteJournalMode::Wal
        } else {
            SqliteJournalMode::Delete
        };

        let opts = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .journal_mode(journal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_verbindungen)
            .connect_with(opts)
            .await?;

        tracing::info!(url = %config.url, wal = config.wal, "Einsatz-Datenbank geoeffnet");

        Self::migrieren(pool).await
    }

    /// Erstellt eine fluechtige In-Memory-Datenbank fuer Tests
    ///
    /// Der Pool haelt genau eine persistente Verbindung; ohne sie
    /// verschwindet eine In-Memory-Datenbank zwischen zwei Zugriffen.
    pub async fn in_memory() -> Result<Self, DbError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(opts)
            .await?;

        Self::migrieren(pool).await
    }

    async fn migrieren(pool: SqlitePool) -> Result<Self, DbError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("Datenbank-Schema auf aktuellem Stand");
        Ok(Self { pool })
    }
}
