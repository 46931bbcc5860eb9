//! Fehlertypen fuer den Auth-Kern

use thiserror::Error;

/// Fehler bei der Token-Pruefung
///
/// Alle drei Varianten fuehren nach aussen zur selben Ablehnung als
/// "nicht authentifiziert"; sie bleiben fuer Diagnose und Tests
/// unterscheidbar.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenFehler {
    #[error("Token nicht lesbar")]
    Unlesbar,

    #[error("Token-Signatur ungueltig")]
    SignaturUngueltig,

    #[error("Token abgelaufen")]
    Abgelaufen,
}

/// Alle moeglichen Fehler im Auth-Kern
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Authentifizierung ---
    // Unbekannte Email und falsches Passwort sind fuer den Aufrufer
    // absichtlich nicht unterscheidbar.
    #[error("Email oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    #[error(transparent)]
    Token(#[from] TokenFehler),

    #[error("Token-Erstellung fehlgeschlagen: {0}")]
    TokenErstellung(String),

    // --- Autorisierung ---
    #[error("Zugriff verweigert: Rolle '{rolle}' darf '{aktion}' nicht")]
    ZugriffVerweigert { rolle: String, aktion: String },

    // --- Registrierung ---
    #[error("Email bereits registriert: {0}")]
    EmailVergeben(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] leitstelle_db::DbError),
}

/// Result-Alias fuer den Auth-Kern
pub type AuthResult<T> = Result<T, AuthError>;
