//! REST-Handler fuer alle Endpunkte

pub mod auth;
pub mod benutzer;
pub mod einsaetze;
pub mod teams;
