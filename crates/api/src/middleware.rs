//! Token-Pruefung und Autorisierung am Request-Rand

use axum::http::HeaderMap;

use leitstelle_auth::{autorisierung_erfordern, Aktion};
use leitstelle_core::Rolle;

use crate::{error::ApiError, AppState};

/// Identitaet eines authentifizierten Requests
///
/// Wird rein aus dem Token abgeleitet; der Credential-Store wird fuer
/// die Autorisierung nicht erneut konsultiert.
#[derive(Debug, Clone)]
pub struct AuthKontext {
    pub email: String,
    pub rolle: Rolle,
}

/// Extrahiert den Bearer-Token aus dem Authorization-Header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// Prueft den Bearer-Token eines Requests und gibt die Identitaet zurueck
///
/// Fehlender Header und jedes Token-Problem (unlesbar, falsche
/// Signatur, abgelaufen) ergeben dieselbe 401-Antwort.
pub fn auth_kontext_aus_headers(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<AuthKontext, ApiError> {
    let token = bearer_token(headers).ok_or_else(|| {
        ApiError::NichtAuthentifiziert("Authorization-Header fehlt".to_string())
    })?;

    let claims = state.tokens.pruefen(token).map_err(|e| {
        tracing::debug!(grund = %e, "Token abgelehnt");
        ApiError::NichtAuthentifiziert(e.to_string())
    })?;

    Ok(AuthKontext {
        email: claims.sub,
        rolle: claims.role,
    })
}

/// Erfordert dass der Kontext die Aktion ausfuehren darf
pub fn aktion_erfordern(kontext: &AuthKontext, aktion: Aktion) -> Result<(), ApiError> {
    autorisierung_erfordern(kontext.rolle, aktion).map_err(|e| {
        tracing::debug!(rolle = %kontext.rolle, aktion = %aktion, "Autorisierung verweigert");
        ApiError::from(e)
    })
}
