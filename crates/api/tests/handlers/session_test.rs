use classdesk_core::{
    draft::ScheduleDraft,
    models::{schedule::GenerateSessionsResponse, DayOfWeek, SessionKind},
};
use classdesk_db::mock::MockScheduleStore;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{admin, date, monday_draft, role_header, server};

#[tokio::test]
async fn test_generate_preview() {
    let server = server(MockScheduleStore::new());

    let response = server
        .post("/api/sessions/generate")
        .add_header(role_header(), admin())
        .json(&json!({
            "startDate": "2024-01-01",
            "totalSessions": 2,
            "weeklyPattern": [
                { "dayOfWeek": "Thứ 2", "startTime": "19:00", "endTime": "21:00" },
                { "dayOfWeek": "", "startTime": "", "endTime": "" }
            ],
            "additionalSessions": [
                { "date": "2024-01-04", "startTime": "18:00", "endTime": "20:00" }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: GenerateSessionsResponse = response.json();
    let dates: Vec<_> = body.class_sessions.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-01"), date("2024-01-04"), date("2024-01-08")]
    );
    assert_eq!(body.class_sessions[1].kind, SessionKind::Additional);
    assert_eq!(body.class_sessions[1].session_number, 2);
    assert_eq!(body.end_date, Some(date("2024-01-08")));
    assert_eq!(body.requested_sessions, 2);
    assert_eq!(body.generated_sessions, 2);
    assert_eq!(body.schedule, "Thứ 2 (19:00-21:00) + 1 buổi bổ sung");
}

#[tokio::test]
async fn test_generate_preview_reports_short_result() {
    let server = server(MockScheduleStore::new());

    let response = server
        .post("/api/sessions/generate")
        .add_header(role_header(), admin())
        .json(&json!({
            "startDate": "2024-01-01",
            "totalSessions": 10000,
            "weeklyPattern": [
                { "dayOfWeek": "Thứ 2", "startTime": "19:00", "endTime": "21:00" }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: GenerateSessionsResponse = response.json();
    assert_eq!(body.requested_sessions, 10000);
    assert_eq!(body.generated_sessions, 53);
    assert_eq!(body.end_date, Some(date("2024-12-30")));
}

#[tokio::test]
async fn test_generate_preview_with_largest_total() {
    let server = server(MockScheduleStore::new());

    let response = server
        .post("/api/sessions/generate")
        .add_header(role_header(), admin())
        .json(&json!({
            "startDate": "2024-01-01",
            "totalSessions": u32::MAX,
            "weeklyPattern": [
                { "dayOfWeek": "Thứ 2", "startTime": "19:00", "endTime": "21:00" }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: GenerateSessionsResponse = response.json();
    assert_eq!(body.requested_sessions, u32::MAX);
    assert_eq!(body.generated_sessions, 53);
}

#[tokio::test]
async fn test_apply_draft_action() {
    let server = server(MockScheduleStore::new());

    let response = server
        .post("/api/sessions/draft")
        .add_header(role_header(), admin())
        .json(&json!({
            "draft": monday_draft(),
            "action": {
                "type": "editSessionDate",
                "payload": { "index": 2, "date": "2024-01-17" }
            }
        }))
        .await;

    response.assert_status_ok();
    let draft: ScheduleDraft = response.json();
    assert_eq!(draft.class_sessions[2].date, date("2024-01-17"));
    assert_eq!(draft.class_sessions[2].day_of_week, DayOfWeek::Wednesday);
    assert_eq!(draft.end_date, Some(date("2024-01-17")));
}

#[tokio::test]
async fn test_apply_draft_action_rejects_unknown_action() {
    let server = server(MockScheduleStore::new());

    let response = server
        .post("/api/sessions/draft")
        .add_header(role_header(), admin())
        .json(&json!({
            "draft": monday_draft(),
            "action": { "type": "lockSession", "payload": { "index": 0 } }
        }))
        .await;

    assert!(response.status_code().is_client_error());
}
