//! SQLite-Implementierung des BenutzerRepository

use std::str::FromStr;

use chrono::Utc;
use uuid::Uuid;

use leitstelle_core::Rolle;

use crate::error::{DbError, DbResult};
use crate::models::{BenutzerRecord, NeuerBenutzer};
use crate::repository::BenutzerRepository;
use crate::sqlite::pool::SqliteDb;

impl BenutzerRepository for SqliteDb {
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO benutzer (id, name, email, telefon, passwort_hash, rolle, erstellt_am)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(data.name)
        .bind(data.email)
        .bind(data.telefon)
        .bind(data.passwort_hash)
        .bind(data.rolle.als_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE") || msg.contains("unique") {
                DbError::Eindeutigkeit(format!("Email '{}' bereits registriert", data.email))
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(BenutzerRecord {
            id,
            name: data.name.to_string(),
            email: data.email.to_string(),
            telefon: data.telefon.to_string(),
            passwort_hash: data.passwort_hash.to_string(),
            rolle: data.rolle,
            erstellt_am: now,
        })
    }

    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, name, email, telefon, passwort_hash, rolle, erstellt_am
             FROM benutzer WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<BenutzerRecord>> {
        let row = sqlx::query(
            "SELECT id, name, email, telefon, passwort_hash, rolle, erstellt_am
             FROM benutzer WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }
}

fn row_to_benutzer(row: &sqlx::sqlite::SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let rolle_str: String = row.try_get("rolle")?;
    let rolle = Rolle::from_str(&rolle_str)
        .map_err(|e| DbError::UngueltigeDaten(e.to_string()))?;

    let erstellt_str: String = row.try_get("erstellt_am")?;
    let erstellt_am = chrono::DateTime::parse_from_rfc3339(&erstellt_str)
        .map_err(|e| DbError::intern(format!("Ungueltige erstellt_am '{erstellt_str}': {e}")))?
        .with_timezone(&Utc);

    Ok(BenutzerRecord {
        id,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        telefon: row.try_get("telefon")?,
        passwort_hash: row.try_get("passwort_hash")?,
        rolle,
        erstellt_am,
    })
}
