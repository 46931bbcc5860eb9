//! Fehlertypen der REST-Schnittstelle und ihre HTTP-Abbildung

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use leitstelle_auth::AuthError;
use leitstelle_db::DbError;

/// Alle Fehler, die die REST-Schicht nach aussen gibt
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentifizierung fehlgeschlagen: {0}")]
    NichtAuthentifiziert(String),

    #[error("Zugriff verweigert: {0}")]
    Verboten(String),

    #[error("Ungueltige Eingabe: {0}")]
    UngueltigeEingabe(String),

    #[error("Ressource nicht gefunden: {0}")]
    NichtGefunden(String),

    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl ApiError {
    /// HTTP-Statuscode fuer diesen Fehler
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NichtAuthentifiziert(_) => StatusCode::UNAUTHORIZED,
            Self::Verboten(_) => StatusCode::FORBIDDEN,
            Self::UngueltigeEingabe(_) => StatusCode::BAD_REQUEST,
            Self::NichtGefunden(_) => StatusCode::NOT_FOUND,
            Self::Intern(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UngueltigeAnmeldedaten => Self::NichtAuthentifiziert(e.to_string()),
            AuthError::Token(f) => Self::NichtAuthentifiziert(f.to_string()),
            AuthError::EmailVergeben(email) => {
                Self::UngueltigeEingabe(format!("Email bereits registriert: {email}"))
            }
            AuthError::ZugriffVerweigert { .. } => Self::Verboten(e.to_string()),
            AuthError::PasswortHashing(_)
            | AuthError::TokenErstellung(_)
            | AuthError::Datenbank(_) => Self::Intern(e.to_string()),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NichtGefunden(_) => Self::NichtGefunden(e.to_string()),
            DbError::Eindeutigkeit(_) | DbError::UngueltigeDaten(_) => {
                Self::UngueltigeEingabe(e.to_string())
            }
            _ => Self::Intern(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(fehler = %self, "Interner Fehler in der REST-Schicht");
        }

        let body = Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string()
            }
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}
