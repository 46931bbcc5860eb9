//! REST-Handler fuer Team-Endpunkte

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leitstelle_auth::Aktion;
use leitstelle_db::{
    models::{NeuesTeam, TeamRecord},
    TeamRepository,
};

use crate::{
    error::ApiError,
    middleware::{aktion_erfordern, auth_kontext_aus_headers},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct TeamErstellenBody {
    pub name: String,
    pub coordinator_contact: String,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamAntwort {
    pub id: Uuid,
    pub name: String,
    pub coordinator_contact: String,
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TeamRecord> for TeamAntwort {
    fn from(t: TeamRecord) -> Self {
        Self {
            id: t.id,
            name: t.name,
            coordinator_contact: t.kontakt_koordinator,
            members: t.mitglieder,
            created_at: t.erstellt_am,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListenParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "standard_limit")]
    pub limit: i64,
}

fn standard_limit() -> i64 {
    100
}

pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<TeamErstellenBody>,
) -> Result<Response, ApiError> {
    let kontext = auth_kontext_aus_headers(&headers, &state)?;
    aktion_erfordern(&kontext, Aktion::TeamErstellen)?;

    let team = state
        .db
        .create(NeuesTeam {
            name: &body.name,
            kontakt_koordinator: &body.coordinator_contact,
            mitglieder: &body.members,
        })
        .await?;

    tracing::info!(team_id = %team.id, "Team angelegt");

    Ok((StatusCode::CREATED, Json(TeamAntwort::from(team))).into_response())
}

pub async fn list_teams(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListenParams>,
) -> Result<Response, ApiError> {
    let kontext = auth_kontext_aus_headers(&headers, &state)?;
    aktion_erfordern(&kontext, Aktion::TeamsAuflisten)?;

    let teams = TeamRepository::list(&state.db, params.skip, params.limit).await?;
    let antwort: Vec<TeamAntwort> = teams.into_iter().map(TeamAntwort::from).collect();

    Ok((StatusCode::OK, Json(antwort)).into_response())
}
