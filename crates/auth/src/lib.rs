//! leitstelle-auth – Authentifizierungs- und Autorisierungskern
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id
//! - Token-Dienst (signierte, zeitlich begrenzte Bearer-Tokens, HS256)
//! - Autorisierungs-Guard (reine Funktion ueber Rolle und Aktion)
//! - AuthService (Registrierung und Anmeldung)

pub mod error;
pub mod guard;
pub mod password;
pub mod service;
pub mod token;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult, TokenFehler};
pub use guard::{autorisieren, autorisierung_erfordern, Aktion};
pub use password::{passwort_hashen, passwort_verifizieren};
pub use service::{AuthService, Registrierung};
pub use token::{TokenClaims, TokenDienst};
