//! REST-Handler fuer die Anmeldung

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Antwort auf eine erfolgreiche Anmeldung
#[derive(Debug, Serialize)]
pub struct TokenAntwort {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Response, ApiError> {
    let (_, token) = state.auth.anmelden(&body.email, &body.password).await?;

    Ok((
        StatusCode::OK,
        Json(TokenAntwort {
            access_token: token,
            token_type: "bearer",
        }),
    )
        .into_response())
}
