//! SQLite-Implementierung des EinsatzRepository

use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

use leitstelle_core::EinsatzStatus;

use crate::error::{DbError, DbResult};
use crate::models::{EinsatzFilter, EinsatzRecord, NeuerEinsatz};
use crate::repository::EinsatzRepository;
use crate::sqlite::pool::SqliteDb;

impl EinsatzRepository for SqliteDb {
    async fn create(&self, data: NeuerEinsatz<'_>) -> DbResult<EinsatzRecord> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let team_ids_json = serde_json::to_string(data.team_ids)?;

        sqlx::query(
            "INSERT INTO einsaetze
                 (id, breitengrad, laengengrad, status, team_ids, notizen, erstellt_am, aktualisiert_am)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(data.breitengrad)
        .bind(data.laengengrad)
        .bind(data.status.als_str())
        .bind(&team_ids_json)
        .bind(data.notizen)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(EinsatzRecord {
            id,
            breitengrad: data.breitengrad,
            laengengrad: data.laengengrad,
            status: data.status,
            team_ids: data.team_ids.to_vec(),
            notizen: data.notizen.map(str::to_string),
            erstellt_am: now,
            aktualisiert_am: now,
        })
    }

    async fn list(&self, filter: &EinsatzFilter) -> DbResult<Vec<EinsatzRecord>> {
        let rows = match filter.status {
            Some(status) => {
                sqlx::query(
                    "SELECT id, breitengrad, laengengrad, status, team_ids, notizen,
                            erstellt_am, aktualisiert_am
                     FROM einsaetze WHERE status = ?
                     ORDER BY erstellt_am LIMIT ? OFFSET ?",
                )
                .bind(status.als_str())
                .bind(filter.limit)
                .bind(filter.skip)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, breitengrad, laengengrad, status, team_ids, notizen,
                            erstellt_am, aktualisiert_am
                     FROM einsaetze ORDER BY erstellt_am LIMIT ? OFFSET ?",
                )
                .bind(filter.limit)
                .bind(filter.skip)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(row_to_einsatz).collect()
    }

    async fn set_status(&self, id: Uuid, status: EinsatzStatus) -> DbResult<EinsatzRecord> {
        let now = Utc::now();
        let affected = sqlx::query(
            "UPDATE einsaetze SET status = ?, aktualisiert_am = ? WHERE id = ?",
        )
        .bind(status.als_str())
        .bind(now.to_rfc3339())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Einsatz {id}")));
        }

        let row = sqlx::query(
            "SELECT id, breitengrad, laengengrad, status, team_ids, notizen,
                    erstellt_am, aktualisiert_am
             FROM einsaetze WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(row_to_einsatz)
            .transpose()?
            .ok_or_else(|| DbError::intern("Einsatz nach Update nicht gefunden"))
    }

    async fn delete(&self, id: Uuid) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM einsaetze WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_einsatz(row: &sqlx::sqlite::SqliteRow) -> DbResult<EinsatzRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let status_str: String = row.try_get("status")?;
    let status = EinsatzStatus::from_str(&status_str)
        .map_err(|e| DbError::UngueltigeDaten(e.to_string()))?;

    let team_ids_json: String = row.try_get("team_ids")?;
    let team_ids: Vec<Uuid> = serde_json::from_str(&team_ids_json)?;

    let erstellt_str: String = row.try_get("erstellt_am")?;
    let erstellt_am = chrono::DateTime::parse_from_rfc3339(&erstellt_str)
        .map_err(|e| DbError::intern(format!("Ungueltige erstellt_am '{erstellt_str}': {e}")))?
        .with_timezone(&Utc);

    let aktualisiert_str: String = row.try_get("aktualisiert_am")?;
    let aktualisiert_am = chrono::DateTime::parse_from_rfc3339(&aktualisiert_str)
        .map_err(|e| {
            DbError::intern(format!("Ungueltige aktualisiert_am '{aktualisiert_str}': {e}"))
        })?
        .with_timezone(&Utc);

    Ok(EinsatzRecord {
        id,
        breitengrad: row.try_get("breitengrad")?,
        laengengrad: row.try_get("laengengrad")?,
        status,
        team_ids,
        notizen: row.try_get("notizen")?,
        erstellt_am,
        aktualisiert_am,
    })
}
