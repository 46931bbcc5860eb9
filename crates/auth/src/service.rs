//! Auth-Service fuer Leitstelle
//!
//! Zentraler Service fuer Registrierung und Anmeldung. Nutzt das
//! Benutzer-Repository, das Passwort-Hashing und den Token-Dienst.

use std::sync::Arc;

use leitstelle_core::Rolle;
use leitstelle_db::{models::NeuerBenutzer, repository::BenutzerRepository};

use crate::{
    error::{AuthError, AuthResult},
    password::{passwort_hashen, passwort_verifizieren},
    token::TokenDienst,
};

pub use leitstelle_db::models::BenutzerRecord;

/// Eingabe fuer die Registrierung (offener Zugang, kein Token noetig)
#[derive(Debug, Clone)]
pub struct Registrierung<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub telefon: &'a str,
    pub passwort: &'a str,
    pub rolle: Rolle,
}

/// Auth-Service – Einstiegspunkt fuer Registrierung und Anmeldung
pub struct AuthService<U: BenutzerRepository> {
    benutzer_repo: Arc<U>,
    token_dienst: Arc<TokenDienst>,
}

impl<U: BenutzerRepository> AuthService<U> {
    /// Erstellt einen neuen AuthService
    pub fn neu(benutzer_repo: Arc<U>, token_dienst: Arc<TokenDienst>) -> Self {
        Self {
            benutzer_repo,
            token_dienst,
        }
    }

    /// Registriert einen neuen Benutzer
    ///
    /// Die Email-Eindeutigkeit entscheidet letztlich der UNIQUE-
    /// Constraint des Stores; bei einem konkurrierenden Anlegen
    /// derselben Email verliert einer der beiden Aufrufer mit
    /// `AuthError::EmailVergeben`.
    pub async fn registrieren(&self, daten: Registrierung<'_>) -> AuthResult<BenutzerRecord> {
        if self.benutzer_repo.get_by_email(daten.email).await?.is_some() {
            return Err(AuthError::EmailVergeben(daten.email.to_string()));
        }

        let passwort_hash = passwort_hashen(daten.passwort)?;

        let benutzer = self
            .benutzer_repo
            .create(NeuerBenutzer {
                name: daten.name,
                email: daten.email,
                telefon: daten.telefon,
                passwort_hash: &passwort_hash,
                rolle: daten.rolle,
            })
            .await
            .map_err(|e| {
                if e.ist_eindeutigkeit() {
                    AuthError::EmailVergeben(daten.email.to_string())
                } else {
                    AuthError::Datenbank(e)
                }
            })?;

        tracing::info!(
            benutzer_id = %benutzer.id,
            rolle = %benutzer.rolle,
            "Neuer Benutzer registriert"
        );

        Ok(benutzer)
    }

    /// Meldet einen Benutzer an und stellt ein Bearer-Token aus
    ///
    /// Unbekannte Email und falsches Passwort ergeben denselben Fehler,
    /// damit die Existenz einer Email nicht abfragbar ist.
    pub async fn anmelden(
        &self,
        email: &str,
        passwort: &str,
    ) -> AuthResult<(BenutzerRecord, String)> {
        let benutzer = match self.benutzer_repo.get_by_email(email).await? {
            Some(b) => b,
            None => {
                tracing::warn!("Fehlgeschlagener Login-Versuch");
                return Err(AuthError::UngueltigeAnmeldedaten);
            }
        };

        if !passwort_verifizieren(passwort, &benutzer.passwort_hash) {
            tracing::warn!("Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        let token = self.token_dienst.ausstellen(&benutzer.email, benutzer.rolle)?;

        tracing::info!(
            benutzer_id = %benutzer.id,
            rolle = %benutzer.rolle,
            "Benutzer angemeldet"
        );

        Ok((benutzer, token))
    }
}
