//! REST-Handler fuer Einsatz-Endpunkte

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use leitstelle_auth::Aktion;
use leitstelle_core::EinsatzStatus;
use leitstelle_db::{
    models::{EinsatzFilter, EinsatzRecord, NeuerEinsatz},
    EinsatzRepository,
};

use crate::{
    error::ApiError,
    middleware::{aktion_erfordern, auth_kontext_aus_headers},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EinsatzErstellenBody {
    pub latitude: f64,
    pub longitude: f64,
    pub status: EinsatzStatus,
    #[serde(default)]
    pub team_ids: Vec<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EinsatzAntwort {
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub status: EinsatzStatus,
    pub team_ids: Vec<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EinsatzRecord> for EinsatzAntwort {
    fn from(e: EinsatzRecord) -> Self {
        Self {
            id: e.id,
            latitude: e.breitengrad,
            longitude: e.laengengrad,
            status: e.status,
            team_ids: e.team_ids,
            notes: e.notizen,
            created_at: e.erstellt_am,
            updated_at: e.aktualisiert_am,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EinsatzListeParams {
    /// Nur Einsaetze mit diesem Status (Wire-Wert, z.B. "planejado")
    pub status: Option<EinsatzStatus>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "standard_limit")]
    pub limit: i64,
}

fn standard_limit() -> i64 {
    100
}

#[derive(Debug, Deserialize)]
pub struct StatusSetzenBody {
    pub status: EinsatzStatus,
}

pub async fn create_mission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<EinsatzErstellenBody>,
) -> Result<Response, ApiError> {
    let kontext = auth_kontext_aus_headers(&headers, &state)?;
    aktion_erfordern(&kontext, Aktion::EinsatzErstellen)?;

    let einsatz = state
        .db
        .create(NeuerEinsatz {
            breitengrad: body.latitude,
            laengengrad: body.longitude,
            status: body.status,
            team_ids: &body.team_ids,
            notizen: body.notes.as_deref(),
        })
        .await?;

    tracing::info!(einsatz_id = %einsatz.id, status = %einsatz.status, "Einsatz angelegt");

    Ok((StatusCode::CREATED, Json(EinsatzAntwort::from(einsatz))).into_response())
}

pub async fn list_missions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<EinsatzListeParams>,
) -> Result<Response, ApiError> {
    let kontext = auth_kontext_aus_headers(&headers, &state)?;
    aktion_erfordern(&kontext, Aktion::EinsaetzeAuflisten)?;

    let filter = EinsatzFilter {
        status: params.status,
        skip: params.skip,
        limit: params.limit,
    };
    let einsaetze = state.db.list(&filter).await?;
    let antwort: Vec<EinsatzAntwort> = einsaetze.into_iter().map(EinsatzAntwort::from).collect();

    Ok((StatusCode::OK, Json(antwort)).into_response())
}

pub async fn update_mission_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<StatusSetzenBody>,
) -> Result<Response, ApiError> {
    let kontext = auth_kontext_aus_headers(&headers, &state)?;
    aktion_erfordern(&kontext, Aktion::EinsatzStatusAendern)?;

    let einsatz = state.db.set_status(id, body.status).await?;

    tracing::info!(einsatz_id = %einsatz.id, status = %einsatz.status, "Einsatz-Status gesetzt");

    Ok((StatusCode::OK, Json(EinsatzAntwort::from(einsatz))).into_response())
}

pub async fn delete_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let kontext = auth_kontext_aus_headers(&headers, &state)?;
    aktion_erfordern(&kontext, Aktion::EinsatzLoeschen)?;

    if !state.db.delete(id).await? {
        return Err(ApiError::NichtGefunden(format!("Einsatz {id}")));
    }

    tracing::info!(einsatz_id = %id, "Einsatz geloescht");

    Ok(StatusCode::NO_CONTENT.into_response())
}
