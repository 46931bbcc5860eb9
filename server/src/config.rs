//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder ausser dem
//! Signier-Geheimnis haben sinnvolle Standardwerte, sodass der Server
//! ohne Konfigurationsdatei lauffaehig ist. Das Geheimnis muss in der
//! Datei oder per `LEITSTELLE_JWT_GEHEIMNIS` gesetzt sein.

use serde::{Deserialize, Serialize};

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Netzwerk-Einstellungen
    pub server: ServerEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Auth-Einstellungen (Geheimnis, Token-TTL)
    pub auth: AuthEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Bind-Adresse fuer die REST-API
    pub bind_adresse: String,
    /// Port fuer die REST-API
    pub port: u16,
    /// CORS-Origins (leer = alle erlaubt)
    pub cors_origins: Vec<String>,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 8080,
            cors_origins: vec![],
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// WAL-Modus aktivieren
    pub wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        Self {
            url: "sqlite://leitstelle.db".into(),
            max_verbindungen: 5,
            wal: true,
        }
    }
}

/// Auth-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEinstellungen {
    /// Signier-Geheimnis fuer Bearer-Tokens.
    /// Pflicht; alternativ per `LEITSTELLE_JWT_GEHEIMNIS` setzbar.
    pub jwt_geheimnis: Option<String>,
    /// Token-Lebensdauer in Minuten
    pub token_ttl_minuten: i64,
}

impl Default for AuthEinstellungen {
    fn default() -> Self {
        Self {
            jwt_geheimnis: None,
            token_ttl_minuten: leitstelle_auth::token::STANDARD_TTL_MINUTEN,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt)
                    .map_err(|e| anyhow::anyhow!("Konfigurationsfehler in '{pfad}': {e}"))?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// Gibt die vollstaendige Bind-Adresse fuer die REST-API zurueck
    pub fn bind_adresse(&self) -> String {
        format!("{}:{}", self.server.bind_adresse, self.server.port)
    }

    /// Loest das Signier-Geheimnis auf: Konfigurationswert oder
    /// Umgebungsvariable `LEITSTELLE_JWT_GEHEIMNIS`.
    ///
    /// Ein fehlendes Geheimnis ist der einzige startup-fatale Zustand.
    pub fn jwt_geheimnis(&self) -> anyhow::Result<String> {
        if let Some(geheimnis) = &self.auth.jwt_geheimnis {
            if !geheimnis.is_empty() {
                return Ok(geheimnis.clone());
            }
        }
        match std::env::var("LEITSTELLE_JWT_GEHEIMNIS") {
            Ok(geheimnis) if !geheimnis.is_empty() => Ok(geheimnis),
            _ => anyhow::bail!(
                "Kein Signier-Geheimnis konfiguriert: [auth] jwt_geheimnis oder \
                 LEITSTELLE_JWT_GEHEIMNIS setzen"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.datenbank.url, "sqlite://leitstelle.db");
        assert_eq!(cfg.auth.token_ttl_minuten, 30);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.bind_adresse(), "0.0.0.0:8080");
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [server]
            port = 9000

            [auth]
            jwt_geheimnis = "sehr-geheim"
            token_ttl_minuten = 5
        "#;
        let cfg: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.auth.token_ttl_minuten, 5);
        assert_eq!(cfg.jwt_geheimnis().unwrap(), "sehr-geheim");
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.datenbank.max_verbindungen, 5);
    }

    #[test]
    fn fehlendes_geheimnis_ist_fehler() {
        let cfg = ServerConfig::default();
        // Nur aussagekraeftig wenn die Umgebungsvariable nicht gesetzt ist
        if std::env::var("LEITSTELLE_JWT_GEHEIMNIS").is_err() {
            assert!(cfg.jwt_geheimnis().is_err());
        }
    }

    #[test]
    fn leeres_geheimnis_zaehlt_als_fehlend() {
        let toml = r#"
            [auth]
            jwt_geheimnis = ""
        "#;
        let cfg: ServerConfig = toml::from_str(toml).unwrap();
        if std::env::var("LEITSTELLE_JWT_GEHEIMNIS").is_err() {
            assert!(cfg.jwt_geheimnis().is_err());
        }
    }
}
