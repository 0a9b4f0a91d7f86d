use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use tabungan_core::utils::FixedClock;
use tabungan_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn build_test_router() -> Router {
    let config = Config::from_env().unwrap();
    let state = build_state(Arc::new(FixedClock(today())));
    app_router(state, &config)
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/create")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn index_page_renders() {
    let app = build_test_router();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"nama\""));
    assert!(html.contains("min=\"2026-03-10\""));
}

#[tokio::test]
async fn index_page_shows_flash_error() {
    let app = build_test_router();
    let response = get(&app, "/?error=name%20required").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("name required"));
}

#[tokio::test]
async fn list_page_renders_when_empty() {
    let app = build_test_router();
    let response = get(&app, "/list").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_submission_renders_result_and_lists_it() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", "Liburan ke Jepang"),
            ("kategori", "Liburan"),
            ("nominal", "15000000"),
            ("jangka_waktu", "12"),
            ("tanggal_mulai", "2026-03-11"),
            ("status", "Reguler"),
            ("asuransi", "on"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Liburan ke Jepang"));
    assert!(html.contains("Rp 15750000"));

    let list = body_text(get(&app, "/list").await).await;
    assert!(list.contains("Liburan ke Jepang"));
    assert!(list.contains("11/03/2026"));
}

#[tokio::test]
async fn invalid_name_redirects_with_reason() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", ""),
            ("kategori", "Gadget"),
            ("nominal", "1000000"),
            ("jangka_waktu", "3"),
            ("tanggal_mulai", "2026-12-12"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/?error=name%20required");
}

#[tokio::test]
async fn invalid_nominal_redirects() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", "Beli HP"),
            ("kategori", "Gadget"),
            ("nominal", "50000"),
            ("jangka_waktu", "3"),
            ("tanggal_mulai", "2026-12-12"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(location(&response).starts_with("/?error=nominal%20below%20minimum"));
}

#[tokio::test]
async fn invalid_term_redirects() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", "Beli HP"),
            ("kategori", "Gadget"),
            ("nominal", "1500000"),
            ("jangka_waktu", "99"),
            ("tanggal_mulai", "2026-03-11"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/?error=invalid%20term");
}

#[tokio::test]
async fn past_date_redirects() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", "Beli HP"),
            ("kategori", "Gadget"),
            ("nominal", "1500000"),
            ("jangka_waktu", "3"),
            ("tanggal_mulai", "2026-03-09"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        "/?error=start%20date%20cannot%20be%20before%20today"
    );
}

#[tokio::test]
async fn emergency_fund_insurance_redirects_and_is_not_stored() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", "Dana Jaga Jaga"),
            ("kategori", "Dana Darurat"),
            ("nominal", "5000000"),
            ("jangka_waktu", "12"),
            ("tanggal_mulai", "2026-03-11"),
            ("asuransi", "on"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        "/?error=insurance%20unavailable%20for%20Emergency-Fund%20category"
    );

    let list = body_text(get(&app, "/list").await).await;
    assert!(!list.contains("Dana Jaga Jaga"));
}

#[tokio::test]
async fn unrecognised_status_is_stored_without_discount() {
    let app = build_test_router();
    let response = post_form(
        &app,
        &[
            ("nama", "Liburan ke Bali"),
            ("kategori", "Liburan"),
            ("nominal", "1200000"),
            ("jangka_waktu", "12"),
            ("tanggal_mulai", "2026-03-11"),
            ("status", "premium"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<td>Reguler</td>"));
    assert!(html.contains("<tr><th>Diskon</th><td>Rp 0</td></tr>"));
    assert!(html.contains("Rp 1200000"));

    let list = body_text(get(&app, "/list").await).await;
    assert!(list.contains("Liburan ke Bali"));
}
