//! leitstelle-server – Bibliotheks-Root
//!
//! Deklariert die Server-Module und verdrahtet Datenbank, Auth-Kern
//! und REST-Schnittstelle.

pub mod config;

use std::sync::Arc;

use anyhow::{Context, Result};

use leitstelle_api::{AppState, RestServer, RestServerKonfig};
use leitstelle_auth::{AuthService, TokenDienst};
use leitstelle_db::{DatenbankConfig, SqliteDb};

use config::ServerConfig;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet den Server und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Signier-Geheimnis aufloesen (fatal wenn nicht gesetzt)
    /// 2. Datenbank oeffnen und migrieren
    /// 3. Auth-Kern konstruieren
    /// 4. REST-API starten und auf Ctrl-C warten
    pub async fn starten(self) -> Result<()> {
        let geheimnis = self.config.jwt_geheimnis()?;

        let db = SqliteDb::oeffnen(&DatenbankConfig {
            url: self.config.datenbank.url.clone(),
            max_verbindungen: self.config.datenbank.max_verbindungen,
            wal: self.config.datenbank.wal,
        })
        .await
        .context("Datenbank konnte nicht geoeffnet werden")?;

        let tokens = Arc::new(TokenDienst::neu(
            &geheimnis,
            self.config.auth.token_ttl_minuten,
        ));
        let auth = Arc::new(AuthService::neu(Arc::new(db.clone()), Arc::clone(&tokens)));
        let state = AppState::neu(db, auth, tokens);

        let bind_addr = self
            .config
            .bind_adresse()
            .parse()
            .with_context(|| format!("Ungueltige Bind-Adresse '{}'", self.config.bind_adresse()))?;

        tracing::info!(
            adresse = %bind_addr,
            datenbank = %self.config.datenbank.url,
            token_ttl_minuten = self.config.auth.token_ttl_minuten,
            "Leitstelle startet"
        );

        let rest = RestServer::neu(RestServerKonfig {
            bind_addr,
            cors_origins: self.config.server.cors_origins.clone(),
        });
        rest.starten(state).await?;

        Ok(())
    }
}
