//! Autorisierungs-Guard
//!
//! Reine Entscheidung ohne I/O: darf eine Rolle eine Aktion ausfuehren?
//! Das Match ist exhaustiv ueber beide geschlossenen Aufzaehlungen, eine
//! neue Aktion ohne Regel ist damit ein Compile-Fehler statt eines
//! stillen Deny zur Laufzeit.

use leitstelle_core::Rolle;

use crate::error::{AuthError, AuthResult};

/// Die autorisierungspflichtigen Aktionen des Systems
///
/// Registrierung und Anmeldung tauchen hier bewusst nicht auf: beide
/// erfordern kein Token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aktion {
    TeamErstellen,
    TeamsAuflisten,
    EinsatzErstellen,
    EinsaetzeAuflisten,
    EinsatzStatusAendern,
    EinsatzLoeschen,
}

impl Aktion {
    pub fn als_str(&self) -> &'static str {
        match self {
            Self::TeamErstellen => "team_erstellen",
            Self::TeamsAuflisten => "teams_auflisten",
            Self::EinsatzErstellen => "einsatz_erstellen",
            Self::EinsaetzeAuflisten => "einsaetze_auflisten",
            Self::EinsatzStatusAendern => "einsatz_status_aendern",
            Self::EinsatzLoeschen => "einsatz_loeschen",
        }
    }
}

impl std::fmt::Display for Aktion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.als_str())
    }
}

/// Entscheidet ob `rolle` die `aktion` ausfuehren darf
///
/// Schreibende Aktionen sind Koordinatoren vorbehalten, die Listen
/// stehen jeder gueltigen (d.h. authentifizierten) Rolle offen.
pub fn autorisieren(rolle: Rolle, aktion: Aktion) -> bool {
    match aktion {
        Aktion::TeamErstellen
        | Aktion::EinsatzErstellen
        | Aktion::EinsatzStatusAendern
        | Aktion::EinsatzLoeschen => rolle == Rolle::Koordinator,

        Aktion::TeamsAuflisten | Aktion::EinsaetzeAuflisten => true,
    }
}

/// Erfordert eine Berechtigung – gibt Fehler wenn nicht erlaubt
pub fn autorisierung_erfordern(rolle: Rolle, aktion: Aktion) -> AuthResult<()> {
    if autorisieren(rolle, aktion) {
        Ok(())
    } else {
        Err(AuthError::ZugriffVerweigert {
            rolle: rolle.als_str().to_string(),
            aktion: aktion.als_str().to_string(),
        })
    }
}
