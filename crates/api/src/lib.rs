//! leitstelle-api – REST-Schnittstelle
//!
//! Axum-Router, Handler und die Token-Pruefung am Request-Rand.
//! Alle Fehler dieses Crates werden ueber `ApiError` auf die
//! entsprechenden HTTP-Statuscodes abgebildet.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use leitstelle_auth::{AuthService, TokenDienst};
use leitstelle_db::SqliteDb;

pub use error::ApiError;
pub use routes::app;
pub use server::{RestServer, RestServerKonfig};

/// Axum-State fuer die REST-Schnittstelle
#[derive(Clone)]
pub struct AppState {
    pub db: SqliteDb,
    pub auth: Arc<AuthService<SqliteDb>>,
    pub tokens: Arc<TokenDienst>,
}

impl AppState {
    pub fn neu(db: SqliteDb, auth: Arc<AuthService<SqliteDb>>, tokens: Arc<TokenDienst>) -> Self {
        Self { db, auth, tokens }
    }
}
