//! Datenbankmodelle fuer Leitstelle
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank. Sie sind
//! von den API-Schemas getrennt; insbesondere wird der Passwort-Hash
//! eines Benutzers nie nach aussen serialisiert.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use leitstelle_core::{EinsatzStatus, Rolle};

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz aus der Datenbank
#[derive(Debug, Clone)]
pub struct BenutzerRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub telefon: String,
    pub passwort_hash: String,
    pub rolle: Rolle,
    pub erstellt_am: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub telefon: &'a str,
    pub passwort_hash: &'a str,
    pub rolle: Rolle,
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// Team-Datensatz aus der Datenbank
#[derive(Debug, Clone)]
pub struct TeamRecord {
    pub id: Uuid,
    pub name: String,
    pub kontakt_koordinator: String,
    /// Mitgliedsnamen (JSON-Spalte)
    pub mitglieder: Vec<String>,
    pub erstellt_am: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Teams
#[derive(Debug, Clone)]
pub struct NeuesTeam<'a> {
    pub name: &'a str,
    pub kontakt_koordinator: &'a str,
    pub mitglieder: &'a [String],
}

// ---------------------------------------------------------------------------
// Einsaetze
// ---------------------------------------------------------------------------

/// Einsatz-Datensatz aus der Datenbank
#[derive(Debug, Clone)]
pub struct EinsatzRecord {
    pub id: Uuid,
    pub breitengrad: f64,
    pub laengengrad: f64,
    pub status: EinsatzStatus,
    /// Zugeteilte Team-IDs (JSON-Spalte, ohne Fremdschluessel-Pruefung)
    pub team_ids: Vec<Uuid>,
    pub notizen: Option<String>,
    pub erstellt_am: DateTime<Utc>,
    pub aktualisiert_am: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Einsatzes
#[derive(Debug, Clone)]
pub struct NeuerEinsatz<'a> {
    pub breitengrad: f64,
    pub laengengrad: f64,
    pub status: EinsatzStatus,
    pub team_ids: &'a [Uuid],
    pub notizen: Option<&'a str>,
}

/// Filter fuer die Einsatz-Liste
#[derive(Debug, Clone)]
pub struct EinsatzFilter {
    /// Nur Einsaetze mit diesem Status (None = alle)
    pub status: Option<EinsatzStatus>,
    pub skip: i64,
    pub limit: i64,
}

impl Default for EinsatzFilter {
    fn default() -> Self {
        Self {
            status: None,
            skip: 0,
            limit: 100,
        }
    }
}
