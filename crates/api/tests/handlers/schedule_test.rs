use axum::http::StatusCode;
use classdesk_core::{
    draft::{DraftAction, ScheduleDraft},
    models::{schedule::ClassSchedule, SessionKind},
};
use classdesk_db::mock::MockScheduleStore;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{
    admin, date, existing_schedule, monday_draft, monday_evenings, role_header, server, stored,
};

#[tokio::test]
async fn test_create_schedule_generates_missing_sessions() {
    let id = Uuid::new_v4();
    let course_id = Uuid::new_v4();
    let mut store = MockScheduleStore::new();
    store
        .expect_create()
        .withf(|record| {
            record.class_sessions.len() == 3
                && record.time_slots.len() == 3
                && record.schedule == "Thứ 2 (19:00-21:00)"
                && record.class_name == "IELTS 6.5 - K12"
        })
        .times(1)
        .returning(move |record| Ok(stored(id, record)));
    let server = server(store);

    let response = server
        .post("/api/schedules")
        .add_header(role_header(), admin())
        .json(&json!({
            "className": "  IELTS 6.5 - K12 ",
            "courseId": course_id,
            "draft": {
                "startDate": "2024-01-01",
                "totalSessions": 3,
                "weeklyPattern": [
                    { "dayOfWeek": "Thứ 2", "startTime": "19:00", "endTime": "21:00" }
                ]
            }
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let schedule: ClassSchedule = response.json();
    assert_eq!(schedule.id, id);
    assert_eq!(schedule.course_id, Some(course_id));
    assert_eq!(schedule.end_date, Some(date("2024-01-15")));
    assert_eq!(schedule.total_sessions, 3);
}

#[tokio::test]
async fn test_create_schedule_keeps_hand_edited_sessions() {
    let id = Uuid::new_v4();
    let draft = monday_draft().apply(DraftAction::EditSessionTime {
        index: 1,
        start_time: "18:00".parse().unwrap(),
        end_time: "20:00".parse().unwrap(),
    });
    let mut store = MockScheduleStore::new();
    store
        .expect_create()
        .withf(|record| record.class_sessions[1].start_time.to_string() == "18:00")
        .times(1)
        .returning(move |record| Ok(stored(id, record)));
    let server = server(store);

    let response = server
        .post("/api/schedules")
        .add_header(role_header(), admin())
        .json(&json!({ "className": "Toán 9", "draft": draft }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_schedule_rejects_invalid_draft() {
    let mut store = MockScheduleStore::new();
    store.expect_create().times(0);
    let server = server(store);

    let response = server
        .post("/api/schedules")
        .add_header(role_header(), admin())
        .json(&json!({
            "className": "Toán 9",
            "draft": {
                "startDate": null,
                "totalSessions": 3,
                "weeklyPattern": [
                    { "dayOfWeek": "Thứ 2", "startTime": "21:00", "endTime": "19:00" }
                ]
            }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.contains("Start date is required"));
    assert!(message.contains("Thứ 2: end time 19:00 must be after start time 21:00"));
    assert!(message.contains("Generated 0 sessions but 3 were requested"));
}

#[tokio::test]
async fn test_create_schedule_rejects_unstorable_total() {
    let mut store = MockScheduleStore::new();
    store.expect_create().times(0);
    let server = server(store);

    let response = server
        .post("/api/schedules")
        .add_header(role_header(), admin())
        .json(&json!({
            "className": "Toán 9",
            "draft": {
                "startDate": "2024-01-01",
                "totalSessions": u32::MAX,
                "weeklyPattern": [
                    { "dayOfWeek": "Thứ 2", "startTime": "19:00", "endTime": "21:00" }
                ]
            }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!("Total sessions must be at most {}", i32::MAX)
    );
}

#[tokio::test]
async fn test_create_schedule_requires_class_name() {
    let mut store = MockScheduleStore::new();
    store.expect_create().times(0);
    let server = server(store);

    let response = server
        .post("/api/schedules")
        .add_header(role_header(), admin())
        .json(&json!({ "className": "   ", "draft": monday_draft() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_schedule() {
    let id = Uuid::new_v4();
    let mut store = MockScheduleStore::new();
    store
        .expect_get()
        .with(predicate::eq(id))
        .times(1)
        .returning(move |id| Ok(Some(existing_schedule(id))));
    let server = server(store);

    let response = server
        .get(&format!("/api/schedules/{id}"))
        .add_header(role_header(), admin())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["className"], "IELTS 6.5 - K12");
    assert_eq!(body["totalSessions"], 3);
    assert_eq!(body["endDate"], "2024-01-15");
    assert_eq!(body["classSessions"][0]["type"], "pattern");
    assert_eq!(
        body["timeSlots"][2],
        json!({
            "dayOfWeek": "Thứ 2",
            "startTime": "19:00",
            "endTime": "21:00",
            "date": "2024-01-15"
        })
    );
}

#[tokio::test]
async fn test_get_missing_schedule_is_not_found() {
    let mut store = MockScheduleStore::new();
    store.expect_get().times(1).returning(|_| Ok(None));
    let server = server(store);

    let response = server
        .get(&format!("/api/schedules/{}", Uuid::new_v4()))
        .add_header(role_header(), admin())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let mut store = MockScheduleStore::new();
    store
        .expect_list()
        .times(1)
        .returning(|| Err(eyre::eyre!("connection refused")));
    let server = server(store);

    let response = server
        .get("/api/schedules")
        .add_header(role_header(), admin())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_schedule_draft_uses_stored_sessions() {
    let id = Uuid::new_v4();
    let mut stored_schedule = existing_schedule(id);
    stored_schedule.class_sessions[0].start_time = "17:30".parse().unwrap();
    let expected = stored_schedule.class_sessions.clone();
    let mut store = MockScheduleStore::new();
    store
        .expect_get()
        .times(1)
        .returning(move |_| Ok(Some(stored_schedule.clone())));
    let server = server(store);

    let response = server
        .get(&format!("/api/schedules/{id}/draft"))
        .add_header(role_header(), admin())
        .await;

    response.assert_status_ok();
    let draft: ScheduleDraft = response.json();
    assert_eq!(draft.class_sessions, expected);
    assert_eq!(draft.weekly_pattern, monday_evenings());
    assert_eq!(draft.start_date, Some(date("2024-01-01")));
}

#[tokio::test]
async fn test_update_without_draft_keeps_sessions() {
    let id = Uuid::new_v4();
    let existing = existing_schedule(id);
    let kept_sessions = existing.class_sessions.clone();
    let mut store = MockScheduleStore::new();
    store
        .expect_get()
        .times(1)
        .returning(move |_| Ok(Some(existing.clone())));
    store
        .expect_update()
        .withf(move |update_id, record| {
            *update_id == id
                && record.class_name == "IELTS 7.0 - K12"
                && record.class_sessions == kept_sessions
        })
        .times(1)
        .returning(|id, record| Ok(Some(stored(id, record))));
    let server = server(store);

    let response = server
        .put(&format!("/api/schedules/{id}"))
        .add_header(role_header(), admin())
        .json(&json!({ "className": "IELTS 7.0 - K12" }))
        .await;

    response.assert_status_ok();
    let schedule: ClassSchedule = response.json();
    assert_eq!(schedule.class_name, "IELTS 7.0 - K12");
    assert_eq!(schedule.schedule, "Thứ 2 (19:00-21:00)");
}

#[tokio::test]
async fn test_update_with_draft_replaces_timetable() {
    let id = Uuid::new_v4();
    let existing = existing_schedule(id);
    let draft = ScheduleDraft::from(&existing)
        .apply(DraftAction::SetTotalSessions(4))
        .apply(DraftAction::AddAdditionalSession(
            classdesk_core::models::AdditionalSession {
                date: Some(date("2024-01-06")),
                start_time: "08:00".parse().unwrap(),
                end_time: "10:00".parse().unwrap(),
            },
        ));
    let mut store = MockScheduleStore::new();
    store
        .expect_get()
        .times(1)
        .returning(move |_| Ok(Some(existing.clone())));
    store
        .expect_update()
        .times(1)
        .returning(|id, record| Ok(Some(stored(id, record))));
    let server = server(store);

    let response = server
        .put(&format!("/api/schedules/{id}"))
        .add_header(role_header(), admin())
        .json(&json!({ "draft": draft }))
        .await;

    response.assert_status_ok();
    let schedule: ClassSchedule = response.json();
    assert_eq!(schedule.class_name, "IELTS 6.5 - K12");
    assert_eq!(schedule.total_sessions, 4);
    assert_eq!(schedule.class_sessions.len(), 5);
    assert_eq!(schedule.class_sessions[1].kind, SessionKind::Additional);
    assert_eq!(schedule.end_date, Some(date("2024-01-22")));
    assert_eq!(schedule.schedule, "Thứ 2 (19:00-21:00) + 1 buổi bổ sung");
}

#[tokio::test]
async fn test_update_missing_schedule_is_not_found() {
    let mut store = MockScheduleStore::new();
    store.expect_get().times(1).returning(|_| Ok(None));
    store.expect_update().times(0);
    let server = server(store);

    let response = server
        .put(&format!("/api/schedules/{}", Uuid::new_v4()))
        .add_header(role_header(), admin())
        .json(&json!({ "className": "Toán 9" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_schedule() {
    let id = Uuid::new_v4();
    let mut store = MockScheduleStore::new();
    store
        .expect_delete()
        .with(predicate::eq(id))
        .times(1)
        .returning(|_| Ok(true));
    store
        .expect_delete()
        .with(predicate::ne(id))
        .times(1)
        .returning(|_| Ok(false));
    let server = server(store);

    server
        .delete(&format!("/api/schedules/{id}"))
        .add_header(role_header(), admin())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/api/schedules/{}", Uuid::new_v4()))
        .add_header(role_header(), admin())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
