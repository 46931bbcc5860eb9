//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der
//! konkreten Datenbank-Implementierung. Die Auth- und API-Schicht
//! arbeiten ausschliesslich gegen diese Traits.

use uuid::Uuid;

use leitstelle_core::EinsatzStatus;

use crate::error::DbResult;
use crate::models::{
    BenutzerRecord, EinsatzFilter, EinsatzRecord, NeuerBenutzer, NeuerEinsatz, NeuesTeam,
    TeamRecord,
};

/// Repository fuer Benutzer-Datenzugriffe
///
/// Die Email-Eindeutigkeit wird vom UNIQUE-Constraint des Stores
/// durchgesetzt; ein konkurrierendes Anlegen derselben Email endet fuer
/// einen der beiden Aufrufer mit `DbError::Eindeutigkeit`.
#[allow(async_fn_in_trait)]
pub trait BenutzerRepository: Send + Sync {
    /// Einen neuen Benutzer anlegen
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    /// Einen Benutzer anhand seiner Email laden
    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>>;

    /// Einen Benutzer anhand seiner ID laden
    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<BenutzerRecord>>;
}

/// Repository fuer Team-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait TeamRepository: Send + Sync {
    /// Ein neues Team anlegen
    async fn create(&self, data: NeuesTeam<'_>) -> DbResult<TeamRecord>;

    /// Teams auflisten (Pagination via skip/limit)
    async fn list(&self, skip: i64, limit: i64) -> DbResult<Vec<TeamRecord>>;
}

/// Repository fuer Einsatz-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait EinsatzRepository: Send + Sync {
    /// Einen neuen Einsatz anlegen
    async fn create(&self, data: NeuerEinsatz<'_>) -> DbResult<EinsatzRecord>;

    /// Einsaetze auflisten, optional nach Status gefiltert
    async fn list(&self, filter: &EinsatzFilter) -> DbResult<Vec<EinsatzRecord>>;

    /// Den Status eines Einsatzes setzen
    ///
    /// Gibt `DbError::NichtGefunden` zurueck wenn die ID nicht existiert.
    async fn set_status(&self, id: Uuid, status: EinsatzStatus) -> DbResult<EinsatzRecord>;

    /// Einen Einsatz loeschen; `false` wenn die ID nicht existiert
    async fn delete(&self, id: Uuid) -> DbResult<bool>;
}
