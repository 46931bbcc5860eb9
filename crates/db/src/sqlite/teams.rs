//! SQLite-Implementierung des TeamRepository

use chrono::Utc;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::models::{NeuesTeam, TeamRecord};
use crate::repository::TeamRepository;
use crate::sqlite::pool::SqliteDb;

impl TeamRepository for SqliteDb {
    async fn create(&self, data: NeuesTeam<'_>) -> DbResult<TeamRecord> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mitglieder_json = serde_json::to_string(data.mitglieder)?;

        sqlx::query(
            "INSERT INTO teams (id, name, kontakt_koordinator, mitglieder, erstellt_am)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(data.name)
        .bind(data.kontakt_koordinator)
        .bind(&mitglieder_json)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(TeamRecord {
            id,
            name: data.name.to_string(),
            kontakt_koordinator: data.kontakt_koordinator.to_string(),
            mitglieder: data.mitglieder.to_vec(),
            erstellt_am: now,
        })
    }

    async fn list(&self, skip: i64, limit: i64) -> DbResult<Vec<TeamRecord>> {
        let rows = sqlx::query(
            "SELECT id, name, kontakt_koordinator, mitglieder, erstellt_am
             FROM teams ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_team).collect()
    }
}

fn row_to_team(row: &sqlx::sqlite::SqliteRow) -> DbResult<TeamRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let mitglieder_json: String = row.try_get("mitglieder")?;
    let mitglieder: Vec<String> = serde_json::from_str(&mitglieder_json)?;

    let erstellt_str: String = row.try_get("erstellt_am")?;
    let erstellt_am = chrono::DateTime::parse_from_rfc3339(&erstellt_str)
        .map_err(|e| DbError::intern(format!("Ungueltige erstellt_am '{erstellt_str}': {e}")))?
        .with_timezone(&Utc);

    Ok(TeamRecord {
        id,
        name: row.try_get("name")?,
        kontakt_koordinator: row.try_get("kontakt_koordinator")?,
        mitglieder,
        erstellt_am,
    })
}
