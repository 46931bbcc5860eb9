//! REST-Handler fuer die Registrierung

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leitstelle_auth::service::Registrierung;
use leitstelle_core::Rolle;
use leitstelle_db::models::BenutzerRecord;

use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct RegistrierenBody {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Rolle,
}

/// Benutzer-Darstellung nach aussen – ohne Passwort-Hash
#[derive(Debug, Serialize)]
pub struct BenutzerAntwort {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Rolle,
}

impl From<BenutzerRecord> for BenutzerAntwort {
    fn from(b: BenutzerRecord) -> Self {
        Self {
            id: b.id,
            name: b.name,
            email: b.email,
            phone: b.telefon,
            role: b.rolle,
        }
    }
}

/// Offene Registrierung – erfordert kein Token
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<RegistrierenBody>,
) -> Result<Response, ApiError> {
    let benutzer = state
        .auth
        .registrieren(Registrierung {
            name: &body.name,
            email: &body.email,
            telefon: &body.phone,
            passwort: &body.password,
            rolle: body.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BenutzerAntwort::from(benutzer))).into_response())
}
