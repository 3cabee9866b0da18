use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use std::sync::Arc;
use tower::ServiceExt;

use bantay::config::Config;
use bantay::entities::{establishments, inspection_reports, inspection_violations, users};
use bantay::state::SharedState;

async fn spawn_app() -> (Router, Arc<SharedState>) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.uploads_path = std::env::temp_dir()
        .join(format!("bantay-test-{}", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();
    config.server.secure_cookies = false;

    let shared = Arc::new(SharedState::new(config).await.expect("state"));
    let state = bantay::api::create_app_state(shared.clone(), None)
        .await
        .expect("app state");
    let app = bantay::api::router(state).await;

    (app, shared)
}

/// Log in and return the session cookie to replay on later requests.
async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "username": username, "password": password }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let cookie = response
        .headers()
        .get("set-cookie")
        .expect("session cookie")
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

async fn get_json(app: &Router, cookie: &str, uri: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("Cookie", cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn iso(days_from_now: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days_from_now))
        .format("%Y-%m-%d")
        .to_string()
}

async fn seed_employee(shared: &SharedState) {
    users::ActiveModel {
        username: Set("inspector1".to_string()),
        // "password" hashed with Argon2id defaults
        password_hash: Set(hash("password")),
        first_name: Set("Juan".to_string()),
        middle_name: Set(None),
        last_name: Set("Reyes".to_string()),
        role: Set("EMPLOYEE".to_string()),
        avatar: Set(None),
        created_at: Set(Utc::now().to_rfc3339()),
        updated_at: Set(Utc::now().to_rfc3339()),
        ..Default::default()
    }
    .insert(&shared.store.conn)
    .await
    .expect("seed employee");
}

fn hash(password: &str) -> String {
    use argon2::{
        password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
        Argon2,
    };
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

async fn seed_establishment(shared: &SharedState, name: &str, barangay: &str) -> i32 {
    establishments::ActiveModel {
        establishment_name: Set(name.to_string()),
        establishment_type: Set("restaurant".to_string()),
        barangay: Set(barangay.to_string()),
        address: Set("123 Rizal St".to_string()),
        owner_name: Set("Ana Cruz".to_string()),
        owner_contact: Set("0917-555-0101".to_string()),
        last_inspection_date: Set(None),
        ..Default::default()
    }
    .insert(&shared.store.conn)
    .await
    .expect("seed establishment")
    .id
}

async fn seed_report(
    shared: &SharedState,
    establishment_id: i32,
    number: &str,
    status: &str,
) -> i32 {
    inspection_reports::ActiveModel {
        report_number: Set(number.to_string()),
        establishment_id: Set(establishment_id),
        inspection_date: Set(iso(-3)),
        inspection_type: Set("routine".to_string()),
        status: Set(status.to_string()),
        overall_compliance_score: Set(82),
        risk_assessment: Set("medium".to_string()),
        fire_hazard_level: Set("low".to_string()),
        recommendations: Set(None),
        corrective_actions_required: Set(None),
        compliance_deadline: Set(None),
        inspected_by: Set(1),
        admin_reviewed_by: Set(None),
        admin_reviewed_at: Set(None),
        admin_review_notes: Set(None),
        created_at: Set(Utc::now().to_rfc3339()),
        ..Default::default()
    }
    .insert(&shared.store.conn)
    .await
    .expect("seed report")
    .id
}

async fn seed_violation(
    shared: &SharedState,
    inspection_id: i32,
    code: &str,
    severity: &str,
    status: &str,
    deadline: Option<String>,
) -> i32 {
    inspection_violations::ActiveModel {
        inspection_id: Set(inspection_id),
        violation_code: Set(code.to_string()),
        violation_description: Set(format!("Violation {code}")),
        section_violated: Set(None),
        severity: Set(severity.to_string()),
        fine_amount: Set(Some(1500.0)),
        compliance_deadline: Set(deadline),
        status: Set(status.to_string()),
        rectified_at: Set(None),
        rectified_evidence: Set(None),
        admin_notes: Set(None),
        created_at: Set(Utc::now().to_rfc3339()),
        ..Default::default()
    }
    .insert(&shared.store.conn)
    .await
    .expect("seed violation")
    .id
}

#[tokio::test]
async fn api_requires_a_session() {
    let (app, _shared) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/reports")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn pages_redirect_unauthenticated_users_to_login() {
    let (app, _shared) = spawn_app().await;

    for uri in [
        "/admin/reports",
        "/admin/violations",
        "/admin/follow-ups",
        "/admin/certificates",
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.headers()["location"], "/login");
    }
}

#[tokio::test]
async fn non_admin_sessions_are_rejected() {
    let (app, shared) = spawn_app().await;
    seed_employee(&shared).await;

    let cookie = login(&app, "inspector1", "password").await;

    // API answers 403
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/reports")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Pages redirect to /unauthorized
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/admin/reports")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/unauthorized");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (app, _shared) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "username": "admin", "password": "wrong" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn report_status_filter_buckets() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared, "Sampaguita Cafe", "Poblacion").await;

    seed_report(&shared, establishment, "IR-0001", "submitted").await;
    seed_report(&shared, establishment, "IR-0002", "under_review").await;
    seed_report(&shared, establishment, "IR-0003", "approved").await;
    seed_report(&shared, establishment, "IR-0004", "rejected").await;

    let cookie = login(&app, "admin", "password").await;

    let body = get_json(&app, &cookie, "/api/reports?status=pending_review").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(matches!(
            row["status"].as_str().unwrap(),
            "submitted" | "under_review"
        ));
    }

    let body = get_json(&app, &cookie, "/api/reports?status=all").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);

    let body = get_json(&app, &cookie, "/api/reports?status=completed").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    // Default bucket is the submitted queue.
    let body = get_json(&app, &cookie, "/api/reports").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["report_number"], "IR-0001");
}

#[tokio::test]
async fn report_search_matches_establishment_owner_and_number() {
    let (app, shared) = spawn_app().await;
    let first = seed_establishment(&shared, "Sampaguita Cafe", "Poblacion").await;
    let second = seed_establishment(&shared, "Harbor Warehouse", "San Roque").await;

    seed_report(&shared, first, "IR-1001", "submitted").await;
    seed_report(&shared, second, "IR-2002", "submitted").await;

    let cookie = login(&app, "admin", "password").await;

    let body = get_json(&app, &cookie, "/api/reports?search=Sampaguita").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["report_number"], "IR-1001");

    let body = get_json(&app, &cookie, "/api/reports?search=IR-2002").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let body = get_json(&app, &cookie, "/api/reports?search=Ana+Cruz").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let body = get_json(&app, &cookie, "/api/reports?search=nonexistent").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn violation_listing_orders_by_priority() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared, "Sampaguita Cafe", "Poblacion").await;
    let report = seed_report(&shared, establishment, "IR-0001", "approved").await;

    seed_violation(&shared, report, "V-MINOR", "minor", "pending", Some(iso(10))).await;
    seed_violation(&shared, report, "V-DONE", "critical", "rectified", None).await;
    seed_violation(&shared, report, "V-LATE", "major", "overdue", Some(iso(-5))).await;
    seed_violation(&shared, report, "V-CRIT", "critical", "pending", Some(iso(5))).await;

    let cookie = login(&app, "admin", "password").await;

    let body = get_json(&app, &cookie, "/api/violations?status=all").await;
    let codes: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["violation_code"].as_str().unwrap())
        .collect();

    assert_eq!(codes, vec!["V-LATE", "V-CRIT", "V-MINOR", "V-DONE"]);
}

#[tokio::test]
async fn violation_default_filter_is_pending_queue() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared, "Sampaguita Cafe", "Poblacion").await;
    let report = seed_report(&shared, establishment, "IR-0001", "approved").await;

    seed_violation(&shared, report, "V-1", "major", "pending", None).await;
    seed_violation(&shared, report, "V-2", "minor", "waived", None).await;

    let cookie = login(&app, "admin", "password").await;

    let body = get_json(&app, &cookie, "/api/violations").await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["violation_code"], "V-1");
}

#[tokio::test]
async fn identical_filters_return_identical_results() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared, "Sampaguita Cafe", "Poblacion").await;
    let report = seed_report(&shared, establishment, "IR-0001", "submitted").await;
    seed_violation(&shared, report, "V-1", "major", "pending", Some(iso(3))).await;
    seed_violation(&shared, report, "V-2", "critical", "pending", Some(iso(1))).await;

    let cookie = login(&app, "admin", "password").await;

    let uri = "/api/violations?status=pending&barangay=Poblacion";
    let first = get_json(&app, &cookie, uri).await;
    let second = get_json(&app, &cookie, uri).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn pages_render_for_admins() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared, "Sampaguita Cafe", "Poblacion").await;
    seed_report(&shared, establishment, "IR-0001", "submitted").await;

    let cookie = login(&app, "admin", "password").await;

    for uri in [
        "/admin/reports",
        "/admin/violations?status=all",
        "/admin/follow-ups",
        "/admin/certificates",
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header("Cookie", &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Bantay"), "{uri} should render the layout");
    }

    // Report page shows the seeded report number and stats.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/admin/reports")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("IR-0001"));
    assert!(html.contains("Sampaguita Cafe"));
}
