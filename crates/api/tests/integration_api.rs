//! Integration-Tests fuer die REST-API (kompletter Router, In-Memory SQLite)

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use leitstelle_auth::{AuthService, TokenDienst};
use leitstelle_core::Rolle;
use leitstelle_db::SqliteDb;

use leitstelle_api::{app, AppState};

const TEST_GEHEIMNIS: &str = "test-geheimnis";

async fn test_app() -> (Router, Arc<TokenDienst>) {
    let db = SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden");
    let tokens = Arc::new(TokenDienst::neu(TEST_GEHEIMNIS, 30));
    let auth = Arc::new(AuthService::neu(Arc::new(db.clone()), Arc::clone(&tokens)));
    (app(AppState::neu(db, auth, Arc::clone(&tokens))), tokens)
}

fn anfrage(methode: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(methode).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_von(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn registrierung_json(email: &str, rolle: &str) -> Value {
    json!({
        "name": "Teste Coordenador",
        "email": email,
        "phone": "11999999999",
        "password": "senha123",
        "role": rolle
    })
}

fn einsatz_json() -> Value {
    json!({
        "latitude": -23.550520,
        "longitude": -46.633308,
        "status": "planejado",
        "team_ids": [],
        "notes": "Teste de resgate"
    })
}

/// Registriert einen Benutzer und meldet ihn an, gibt das Token zurueck
async fn registrieren_und_anmelden(app: &Router, email: &str, rolle: &str) -> String {
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/users",
            None,
            Some(registrierung_json(email, rolle)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/auth/login",
            None,
            Some(json!({ "email": email, "password": "senha123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_von(response).await;
    assert_eq!(body["token_type"], "bearer");
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn szenario_koordinator_kompletter_ablauf() {
    let (app, _) = test_app().await;

    // Registrierung -> 201, Antwort ohne Passwort
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/users",
            None,
            Some(registrierung_json("teste@exemplo.com", "coordenador")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let benutzer = json_von(response).await;
    assert_eq!(benutzer["email"], "teste@exemplo.com");
    assert_eq!(benutzer["role"], "coordenador");
    assert!(benutzer.get("password").is_none());
    assert!(benutzer.get("password_hash").is_none());

    // Anmeldung -> Bearer-Token
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/auth/login",
            None,
            Some(json!({ "email": "teste@exemplo.com", "password": "senha123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let login = json_von(response).await;
    assert_eq!(login["token_type"], "bearer");
    let token = login["access_token"].as_str().unwrap().to_string();

    // Einsatz anlegen mit Token -> 201
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/missions",
            Some(&token),
            Some(einsatz_json()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let einsatz = json_von(response).await;
    assert_eq!(einsatz["status"], "planejado");
    assert_eq!(einsatz["notes"], "Teste de resgate");

    // Einsatz anlegen ohne Token -> 401 mit WWW-Authenticate-Hinweis
    let response = app
        .clone()
        .oneshot(anfrage("POST", "/v1/missions", None, Some(einsatz_json())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );

    // Einsaetze auflisten mit Token -> 200
    let response = app
        .clone()
        .oneshot(anfrage("GET", "/v1/missions", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let liste = json_von(response).await;
    assert_eq!(liste.as_array().unwrap().len(), 1);

    // Zweite Registrierung mit derselben Email -> 400
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/users",
            None,
            Some(registrierung_json("teste@exemplo.com", "coordenador")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mitglied_darf_nicht_schreiben() {
    let (app, _) = test_app().await;
    let token = registrieren_und_anmelden(&app, "membro@exemplo.com", "membro").await;

    // Schreibende Aktion -> 403
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/missions",
            Some(&token),
            Some(einsatz_json()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/teams",
            Some(&token),
            Some(json!({ "name": "Equipe Alpha", "coordinator_contact": "c@exemplo.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Lesen bleibt erlaubt
    let response = app
        .clone()
        .oneshot(anfrage("GET", "/v1/teams", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn falsches_passwort_gibt_401() {
    let (app, _) = test_app().await;
    registrieren_und_anmelden(&app, "teste@exemplo.com", "coordenador").await;

    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/auth/login",
            None,
            Some(json!({ "email": "teste@exemplo.com", "password": "falsch" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );

    // Unbekannte Email: gleiche Antwort wie falsches Passwort
    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/auth/login",
            None,
            Some(json!({ "email": "niemand@exemplo.com", "password": "senha123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn abgelaufenes_token_gibt_401() {
    let (app, tokens) = test_app().await;
    registrieren_und_anmelden(&app, "teste@exemplo.com", "coordenador").await;

    let abgelaufen = tokens
        .ausstellen_mit_ttl("teste@exemplo.com", Rolle::Koordinator, chrono::Duration::zero())
        .unwrap();

    let response = app
        .clone()
        .oneshot(anfrage("GET", "/v1/missions", Some(&abgelaufen), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn fremdes_geheimnis_gibt_401() {
    let (app, _) = test_app().await;
    registrieren_und_anmelden(&app, "teste@exemplo.com", "coordenador").await;

    let fremder_dienst = TokenDienst::neu("anderes-geheimnis", 30);
    let fremdes_token = fremder_dienst
        .ausstellen("teste@exemplo.com", Rolle::Koordinator)
        .unwrap();

    let response = app
        .clone()
        .oneshot(anfrage("GET", "/v1/missions", Some(&fremdes_token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn status_aktualisieren_und_loeschen() {
    let (app, _) = test_app().await;
    let token = registrieren_und_anmelden(&app, "teste@exemplo.com", "coordenador").await;

    let response = app
        .clone()
        .oneshot(anfrage(
            "POST",
            "/v1/missions",
            Some(&token),
            Some(einsatz_json()),
        ))
        .await
        .unwrap();
    let einsatz = json_von(response).await;
    let id = einsatz["id"].as_str().unwrap().to_string();

    // Status setzen -> 200 mit neuem Status
    let response = app
        .clone()
        .oneshot(anfrage(
            "PUT",
            &format!("/v1/missions/{id}/status"),
            Some(&token),
            Some(json!({ "status": "em_andamento" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let aktualisiert = json_von(response).await;
    assert_eq!(aktualisiert["status"], "em_andamento");

    // Loeschen -> 204, zweites Loeschen -> 404
    let response = app
        .clone()
        .oneshot(anfrage(
            "DELETE",
            &format!("/v1/missions/{id}"),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(anfrage(
            "DELETE",
            &format!("/v1/missions/{id}"),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unbekannter_status_wird_abgelehnt() {
    let (app, _) = test_app().await;
    let token = registrieren_und_anmelden(&app, "teste@exemplo.com", "coordenador").await;

    // "cancelado" ist kein gueltiger Wire-Wert -> Body-Ablehnung
    let mut body = einsatz_json();
    body["status"] = json!("cancelado");

    let response = app
        .clone()
        .oneshot(anfrage("POST", "/v1/missions", Some(&token), Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn status_filter_in_der_liste() {
    let (app, _) = test_app().await;
    let token = registrieren_und_anmelden(&app, "teste@exemplo.com", "coordenador").await;

    for status in ["planejado", "em_andamento", "em_andamento"] {
        let mut body = einsatz_json();
        body["status"] = json!(status);
        let response = app
            .clone()
            .oneshot(anfrage("POST", "/v1/missions", Some(&token), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(anfrage(
            "GET",
            "/v1/missions?status=em_andamento",
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let liste = json_von(response).await;
    assert_eq!(liste.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_endpunkt() {
    let (app, _) = test_app().await;

    let response = app
        .clone()
        .oneshot(anfrage("GET", "/health", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_von(response).await;
    assert_eq!(body["status"], "ok");
}
