//! Route-Definitionen fuer die REST-API (/v1/...)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Erstellt den vollstaendigen Anwendungs-Router (inkl. /health)
pub fn app(state: AppState) -> Router {
    v1_router()
        .route("/health", get(health))
        .with_state(state)
}

/// Erstellt den /v1/-Router
pub fn v1_router() -> Router<AppState> {
    Router::new()
        // Authentifizierung
        .route("/v1/auth/login", post(handlers::auth::login))
        // Benutzer (offene Registrierung)
        .route("/v1/users", post(handlers::benutzer::create_user))
        // Teams
        .route("/v1/teams", post(handlers::teams::create_team))
        .route("/v1/teams", get(handlers::teams::list_teams))
        // Einsaetze
        .route("/v1/missions", post(handlers::einsaetze::create_mission))
        .route("/v1/missions", get(handlers::einsaetze::list_missions))
        .route(
            "/v1/missions/:id/status",
            put(handlers::einsaetze::update_mission_status),
        )
        .route("/v1/missions/:id", delete(handlers::einsaetze::delete_mission))
}

/// GET /health – Health-Check-Endpunkt
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
