//! leitstelle-core – Gemeinsame Typen fuer Leitstelle
//!
//! Dieses Crate stellt das gemeinsame Vokabular bereit, das von den
//! anderen Leitstelle-Crates genutzt wird: die geschlossene Rollen-
//! Aufzaehlung und der Einsatz-Status.

pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use types::{EinsatzStatus, Rolle, UnbekannterWert};
