//! Status-transition workflows: report adjudication, certificate issuance,
//! violation rectification, the follow-up compliance cascade, and the
//! overdue sweep.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use std::sync::Arc;
use tower::ServiceExt;

use bantay::config::Config;
use bantay::entities::{
    establishments, inspection_follow_ups, inspection_reports, inspection_violations,
};

type Shared = Arc<bantay::state::SharedState>;

async fn spawn_app() -> (Router, Shared) {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.uploads_path = std::env::temp_dir()
        .join(format!("bantay-test-{}", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .to_string();
    config.server.secure_cookies = false;

    let shared = Arc::new(bantay::state::SharedState::new(config).await.expect("state"));
    let state = bantay::api::create_app_state(shared.clone(), None)
        .await
        .expect("app state");
    let app = bantay::api::router(state).await;

    (app, shared)
}

async fn login_admin(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "username": "admin", "password": "password" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

async fn post_json(
    app: &Router,
    cookie: &str,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Cookie", cookie)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn iso(days_from_now: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days_from_now))
        .format("%Y-%m-%d")
        .to_string()
}

async fn seed_establishment(shared: &Shared) -> i32 {
    establishments::ActiveModel {
        establishment_name: Set("Harbor Warehouse".to_string()),
        establishment_type: Set("warehouse".to_string()),
        barangay: Set("San Roque".to_string()),
        address: Set("88 Pier Rd".to_string()),
        owner_name: Set("Ben Santos".to_string()),
        owner_contact: Set("0917-555-0102".to_string()),
        last_inspection_date: Set(None),
        ..Default::default()
    }
    .insert(&shared.store.conn)
    .await
    .unwrap()
    .id
}

async fn seed_report(shared: &Shared, establishment_id: i32, status: &str) -> i32 {
    inspection_reports::ActiveModel {
        report_number: Set(format!("IR-{}", uuid::Uuid::new_v4().simple())),
        establishment_id: Set(establishment_id),
        inspection_date: Set(iso(-2)),
        inspection_type: Set("routine".to_string()),
        status: Set(status.to_string()),
        overall_compliance_score: Set(74),
        risk_assessment: Set("high".to_string()),
        fire_hazard_level: Set("medium".to_string()),
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
    .unwrap()
    .id
}

async fn seed_violation(
    shared: &Shared,
    inspection_id: i32,
    status: &str,
    deadline: Option<String>,
) -> i32 {
    inspection_violations::ActiveModel {
        inspection_id: Set(inspection_id),
        violation_code: Set(format!("V-{}", uuid::Uuid::new_v4().simple())),
        violation_description: Set("Blocked fire exit".to_string()),
        section_violated: Set(Some("RA 9514 Sec 10".to_string())),
        severity: Set("major".to_string()),
        fine_amount: Set(Some(2500.0)),
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
    .unwrap()
    .id
}

async fn seed_follow_up(
    shared: &Shared,
    inspection_id: i32,
    establishment_id: i32,
    status: &str,
    scheduled: String,
) -> i32 {
    inspection_follow_ups::ActiveModel {
        inspection_id: Set(inspection_id),
        establishment_id: Set(establishment_id),
        follow_up_type: Set("violation_rectification".to_string()),
        scheduled_date: Set(scheduled),
        actual_date: Set(None),
        status: Set(status.to_string()),
        assigned_to: Set(None),
        notes: Set(None),
        outcome: Set(None),
        compliance_verified: Set(false),
        verified_by: Set(None),
        verified_at: Set(None),
        created_at: Set(Utc::now().to_rfc3339()),
        ..Default::default()
    }
    .insert(&shared.store.conn)
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn approving_a_report_stamps_the_reviewer() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "submitted").await;

    let cookie = login_admin(&app).await;

    let (status, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{report}/review"),
        serde_json::json!({ "decision": "approve", "notes": "All findings addressed" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");
    assert_eq!(body["data"]["admin_review_notes"], "All findings addressed");
    assert!(body["data"]["admin_reviewed_at"].is_string());
    assert!(body["data"]["reviewer_name"].is_string());

    // A decided report cannot be adjudicated again.
    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{report}/review"),
        serde_json::json!({ "decision": "reject" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn rejecting_and_requesting_revision_set_the_right_statuses() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let first = seed_report(&shared, establishment, "submitted").await;
    let second = seed_report(&shared, establishment, "under_review").await;

    let cookie = login_admin(&app).await;

    let (_, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{first}/review"),
        serde_json::json!({ "decision": "reject", "notes": "Incomplete photos" }),
    )
    .await;
    assert_eq!(body["data"]["status"], "rejected");

    let (_, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{second}/review"),
        serde_json::json!({ "decision": "revision" }),
    )
    .await;
    assert_eq!(body["data"]["status"], "revision_requested");
}

#[tokio::test]
async fn certificates_are_issued_once_per_approved_report() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let approved = seed_report(&shared, establishment, "approved").await;
    let submitted = seed_report(&shared, establishment, "submitted").await;

    let cookie = login_admin(&app).await;

    // Only approved reports qualify.
    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{submitted}/certificate"),
        serde_json::json!({ "certificate_type": "fsic_business" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{approved}/certificate"),
        serde_json::json!({ "certificate_type": "fsic_business", "valid_months": 12 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let number = body["data"]["certificate_number"].as_str().unwrap();
    assert!(number.starts_with("FSIC-"));
    assert_eq!(body["data"]["validity_status"], "valid");

    // Issuing stamps the establishment's last inspection date.
    let row = establishments::Entity::find_by_id(establishment)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert!(row.last_inspection_date.is_some());

    // A second active certificate is refused.
    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{approved}/certificate"),
        serde_json::json!({ "certificate_type": "fsic_business" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn revoked_certificates_filter_as_revoked() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let approved = seed_report(&shared, establishment, "approved").await;

    let cookie = login_admin(&app).await;

    let (_, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/reports/{approved}/certificate"),
        serde_json::json!({ "certificate_type": "fsic_occupancy" }),
    )
    .await;
    let certificate_id = body["data"]["id"].as_i64().unwrap();

    // Revocation requires a reason.
    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/certificates/{certificate_id}/revoke"),
        serde_json::json!({ "reason": "   " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/certificates/{certificate_id}/revoke"),
        serde_json::json!({ "reason": "Issued against the wrong establishment" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/certificates?status=revoked")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["validity_status"], "revoked");

    // And no longer lists as valid.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/certificates?status=valid")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn rectify_accepts_multipart_evidence() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;
    let violation = seed_violation(&shared, report, "pending", Some(iso(5))).await;

    let cookie = login_admin(&app).await;

    let boundary = "bantay-test-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"notes\"\r\n\r\nExit cleared\r\n\
         --{boundary}\r\nContent-Disposition: form-data; name=\"evidence\"; filename=\"photo.jpg\"\r\n\
         Content-Type: image/jpeg\r\n\r\nfake-jpeg-bytes\r\n--{boundary}--\r\n"
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/violations/{violation}/rectify"))
                .header("Cookie", &cookie)
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["data"]["status"], "rectified");
    assert!(json["data"]["rectified_at"].is_string());
    let evidence = json["data"]["rectified_evidence"].as_str().unwrap();
    assert!(evidence.starts_with("evidence/"));
    assert!(evidence.ends_with("photo.jpg"));

    // Rectifying twice conflicts.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/violations/{violation}/rectify"))
                .header("Cookie", &cookie)
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(format!("--{boundary}--\r\n")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn waive_requires_a_reason_and_edit_validates_fields() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;
    let violation = seed_violation(&shared, report, "pending", None).await;

    let cookie = login_admin(&app).await;

    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/violations/{violation}/waive"),
        serde_json::json!({ "reason": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        &cookie,
        "PUT",
        &format!("/api/violations/{violation}"),
        serde_json::json!({ "severity": "major", "fine_amount": -10.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        &cookie,
        "PUT",
        &format!("/api/violations/{violation}"),
        serde_json::json!({ "severity": "major", "compliance_deadline": "next tuesday" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(
        &app,
        &cookie,
        "PUT",
        &format!("/api/violations/{violation}"),
        serde_json::json!({
            "severity": "critical",
            "fine_amount": 5000.0,
            "compliance_deadline": iso(14),
            "admin_notes": "Raised after re-inspection"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["severity"], "critical");
    assert_eq!(body["data"]["fine_amount"], 5000.0);
}

#[tokio::test]
async fn bulk_actions_skip_settled_violations() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;
    let pending = seed_violation(&shared, report, "pending", None).await;
    let overdue = seed_violation(&shared, report, "overdue", Some(iso(-3))).await;
    let rectified = seed_violation(&shared, report, "rectified", None).await;

    let cookie = login_admin(&app).await;

    let (status, body) = post_json(
        &app,
        &cookie,
        "POST",
        "/api/violations/bulk",
        serde_json::json!({ "action": "escalate", "ids": [pending, overdue, rectified] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["updated"], 2);

    let row = inspection_violations::Entity::find_by_id(rectified)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "rectified");
}

#[tokio::test]
async fn verified_follow_up_rectifies_pending_violations() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;
    let other_report = seed_report(&shared, establishment, "approved").await;

    let first = seed_violation(&shared, report, "pending", Some(iso(5))).await;
    let second = seed_violation(&shared, report, "pending", None).await;
    let settled = seed_violation(&shared, report, "rectified", None).await;
    let unrelated = seed_violation(&shared, other_report, "pending", None).await;

    let follow_up = seed_follow_up(&shared, report, establishment, "scheduled", iso(0)).await;

    let cookie = login_admin(&app).await;

    let (status, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/follow-ups/{follow_up}/status"),
        serde_json::json!({
            "status": "completed",
            "outcome": "All violations corrected on site",
            "compliance_verified": true
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["rectified_violations"], 2);

    for id in [first, second] {
        let row = inspection_violations::Entity::find_by_id(id)
            .one(&shared.store.conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, "rectified");
        assert!(row.rectified_at.is_some());
    }

    // The cascade touches only this inspection's pending violations.
    let row = inspection_violations::Entity::find_by_id(unrelated)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "pending");
    let row = inspection_violations::Entity::find_by_id(settled)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "rectified");

    // Completion stamps verification and the actual date.
    let row = inspection_follow_ups::Entity::find_by_id(follow_up)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert!(row.compliance_verified);
    assert!(row.verified_at.is_some());
    assert!(row.actual_date.is_some());
}

#[tokio::test]
async fn assign_and_reschedule_move_follow_ups_to_scheduled() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;
    let follow_up = seed_follow_up(&shared, report, establishment, "pending", iso(-1)).await;

    let cookie = login_admin(&app).await;

    // Admin user id 1 is seeded by the migration.
    let (status, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/follow-ups/{follow_up}/assign"),
        serde_json::json!({ "assigned_to": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "scheduled");
    assert_eq!(body["data"]["assigned_to"], 1);

    let (status, _) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/follow-ups/{follow_up}/reschedule"),
        serde_json::json!({ "scheduled_date": "not a date" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let new_date = iso(7);
    let (status, body) = post_json(
        &app,
        &cookie,
        "POST",
        &format!("/api/follow-ups/{follow_up}/reschedule"),
        serde_json::json!({ "scheduled_date": new_date }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["scheduled_date"], new_date);
    assert_eq!(body["data"]["status"], "scheduled");
}

#[tokio::test]
async fn follow_up_overdue_filter_includes_derived_rows() {
    let (app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;

    seed_follow_up(&shared, report, establishment, "pending", iso(-4)).await;
    seed_follow_up(&shared, report, establishment, "overdue", iso(-10)).await;
    seed_follow_up(&shared, report, establishment, "scheduled", iso(10)).await;
    seed_follow_up(&shared, report, establishment, "completed", iso(-5)).await;

    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/follow-ups?status=overdue")
                .header("Cookie", &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let rows = body["data"].as_array().unwrap();

    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["priority_status"], "overdue");
    }
}

#[tokio::test]
async fn overdue_sweep_flags_past_deadline_rows() {
    let (_app, shared) = spawn_app().await;
    let establishment = seed_establishment(&shared).await;
    let report = seed_report(&shared, establishment, "approved").await;

    let late = seed_violation(&shared, report, "pending", Some(iso(-2))).await;
    let on_time = seed_violation(&shared, report, "pending", Some(iso(2))).await;
    let no_deadline = seed_violation(&shared, report, "pending", None).await;
    let late_follow_up = seed_follow_up(&shared, report, establishment, "scheduled", iso(-1)).await;

    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let (violations, follow_ups) = shared.store.sweep_overdue(&today).await.unwrap();
    assert_eq!(violations, 1);
    assert_eq!(follow_ups, 1);

    let row = inspection_violations::Entity::find_by_id(late)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "overdue");

    for id in [on_time, no_deadline] {
        let row = inspection_violations::Entity::find_by_id(id)
            .one(&shared.store.conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.status, "pending");
    }

    let row = inspection_follow_ups::Entity::find_by_id(late_follow_up)
        .one(&shared.store.conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "overdue");

    // A second sweep is a no-op.
    let (violations, follow_ups) = shared.store.sweep_overdue(&today).await.unwrap();
    assert_eq!(violations, 0);
    assert_eq!(follow_ups, 0);
}
