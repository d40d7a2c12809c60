use crate::modules::attendance::core::record::AttendanceStatus;
use crate::modules::product_showcase::core::dataset::{DEFAULT_SEED, ProductCatalog};
use crate::shared::core::clock::{Clock, FixedClock, SystemClock};
use crate::shell::http::router;
use crate::shell::state::{AppState, AttendanceStore};
use crate::tests::fixtures::commands::submit_attendance::fixed_instant;
use crate::tests::fixtures::state::{make_test_state, test_today};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use calamine::{Data, DataType, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use rstest::rstest;
use std::sync::Arc;
use http_body_util::BodyExt;
use std::io::Cursor;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn open_session(app: &Router) -> String {
    let (status, body) = send(app, Request::post("/sessions").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::CREATED);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["session_id"].as_str().unwrap().to_string()
}

async fn submit(app: &Router, session_id: &str, body: serde_json::Value) -> serde_json::Value {
    let (status, bytes) = send(
        app,
        Request::post(format!("/sessions/{session_id}/attendance"))
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn it_should_keep_duplicate_submissions_as_distinct_records() {
    let app = router(make_test_state());
    let session_id = open_session(&app).await;

    for status in ["Present", "Remote"] {
        submit(
            &app,
            &session_id,
            serde_json::json!({
                "date": "2024-01-10",
                "employee_id": "E1",
                "employee_name": "Alice",
                "status": status,
            }),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        Request::get(format!("/sessions/{session_id}/attendance"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let view: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(view["count"], 2);
    assert_eq!(view["records"][0]["status"], "Present");
    assert_eq!(view["records"][1]["status"], "Remote");
}

#[tokio::test]
async fn it_should_offer_no_export_before_the_first_submission() {
    let app = router(make_test_state());
    let session_id = open_session(&app).await;

    let (_, body) = send(
        &app,
        Request::get(format!("/sessions/{session_id}/attendance"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let view: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(view["kind"], "empty");
    assert!(view.get("export").is_none());

    let (status, _) = send(
        &app,
        Request::get(format!("/sessions/{session_id}/attendance/export"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn it_should_export_a_workbook_that_reads_back_to_the_submissions() {
    let app = router(make_test_state());
    let session_id = open_session(&app).await;
    let submissions = [
        ("2024-01-10", "E1", "Alice", AttendanceStatus::Present),
        ("2024-01-11", "E2", "Bob", AttendanceStatus::OnLeave),
        ("2024-01-11", "", "", AttendanceStatus::Absent),
    ];
    for (date, id, name, status) in submissions.iter() {
        submit(
            &app,
            &session_id,
            serde_json::json!({
                "date": date,
                "employee_id": id,
                "employee_name": name,
                "status": status,
            }),
        )
        .await;
    }

    let (status, bytes) = send(
        &app,
        Request::get(format!("/sessions/{session_id}/attendance/export"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range("Attendance").unwrap();
    let rows: Vec<&[Data]> = range.rows().skip(1).collect();
    assert_eq!(rows.len(), submissions.len());

    for (row, (date, id, name, status)) in rows.iter().zip(submissions.iter()) {
        assert_eq!(row[0].as_date(), date.parse::<NaiveDate>().ok());
        assert_eq!(row[1].get_string().unwrap_or(""), *id);
        assert_eq!(row[2].get_string().unwrap_or(""), *name);
        assert_eq!(row[3].get_string(), Some(status.to_string().as_str()));
        assert_eq!(row[4].as_datetime(), Some(fixed_instant()));
    }
}

#[tokio::test]
async fn it_should_forget_the_log_when_the_session_closes() {
    let app = router(make_test_state());
    let session_id = open_session(&app).await;
    let other_session = open_session(&app).await;
    submit(
        &app,
        &session_id,
        serde_json::json!({ "employee_id": "E1", "status": "Present" }),
    )
    .await;

    let (other_status, other_body) = send(
        &app,
        Request::get(format!("/sessions/{other_session}/attendance"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(other_status, StatusCode::OK);
    let other_view: serde_json::Value = serde_json::from_slice(&other_body).unwrap();
    assert_eq!(other_view["kind"], "empty");

    let (status, _) = send(
        &app,
        Request::delete(format!("/sessions/{session_id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Request::get(format!("/sessions/{session_id}/attendance"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn state_with_clock(clock: Arc<dyn Clock>) -> AppState {
    AppState::new(
        Arc::new(AttendanceStore::new()),
        clock,
        ProductCatalog::generate(DEFAULT_SEED, test_today()),
    )
}

#[rstest]
#[case::sub_second_instant(Arc::new(FixedClock(fixed_instant() + chrono::Duration::nanoseconds(123_456_789))))]
#[case::system_clock(Arc::new(SystemClock))]
#[tokio::test]
async fn it_should_export_the_same_timestamp_the_view_shows(#[case] clock: Arc<dyn Clock>) {
    let app = router(state_with_clock(clock));
    let session_id = open_session(&app).await;
    let submitted = submit(
        &app,
        &session_id,
        serde_json::json!({ "employee_id": "E1", "employee_name": "Alice", "status": "Present" }),
    )
    .await;
    let shown: NaiveDateTime = submitted["view"]["records"][0]["timestamp"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let (status, bytes) = send(
        &app,
        Request::get(format!("/sessions/{session_id}/attendance/export"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range("Attendance").unwrap();
    let row = range.rows().nth(1).unwrap();
    assert_eq!(row[4].as_datetime(), Some(shown));
}
