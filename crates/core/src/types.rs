//! Gemeinsame Domaenen-Typen fuer Leitstelle
//!
//! Rolle und Einsatz-Status sind geschlossene Aufzaehlungen mit
//! exhaustivem Matching. Die Wire-Werte ("coordenador", "planejado", ...)
//! stammen aus der bestehenden brasilianischen Einsatz-API und bleiben
//! aus Kompatibilitaetsgruenden unveraendert.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fehler beim Parsen eines Aufzaehlungswerts aus der Datenbank
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unbekannter Wert '{wert}' fuer {feld}")]
pub struct UnbekannterWert {
    pub feld: &'static str,
    pub wert: String,
}

/// Benutzerrolle
///
/// Koordinatoren duerfen Teams und Einsaetze anlegen und verwalten,
/// Mitglieder haben nur Lesezugriff auf die Listen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rolle {
    #[serde(rename = "coordenador")]
    Koordinator,
    #[serde(rename = "membro")]
    Mitglied,
}

impl Rolle {
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::Koordinator => "coordenador",
            Self::Mitglied => "membro",
        }
    }
}

impl FromStr for Rolle {
    type Err = UnbekannterWert;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coordenador" => Ok(Self::Koordinator),
            "membro" => Ok(Self::Mitglied),
            _ => Err(UnbekannterWert {
                feld: "rolle",
                wert: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Rolle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.als_str())
    }
}

/// Status eines Rettungseinsatzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EinsatzStatus {
    #[serde(rename = "planejado")]
    Geplant,
    #[serde(rename = "em_andamento")]
    Laufend,
    #[serde(rename = "concluido")]
    Abgeschlossen,
}

impl EinsatzStatus {
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::Geplant => "planejado",
            Self::Laufend => "em_andamento",
            Self::Abgeschlossen => "concluido",
        }
    }
}

impl FromStr for EinsatzStatus {
    type Err = UnbekannterWert;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planejado" => Ok(Self::Geplant),
            "em_andamento" => Ok(Self::Laufend),
            "concluido" => Ok(Self::Abgeschlossen),
            _ => Err(UnbekannterWert {
                feld: "status",
                wert: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for EinsatzStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.als_str())
    }
}
