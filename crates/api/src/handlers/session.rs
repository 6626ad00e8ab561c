//! # Session Handlers
//!
//! Stateless endpoints behind the schedule screens: a preview of the sessions a
//! weekly pattern produces, and single draft transitions.

use axum::Json;
use classdesk_core::{
    draft::{DraftAction, ScheduleDraft},
    generator,
    models::schedule::{GenerateSessionsRequest, GenerateSessionsResponse},
    summary,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyDraftActionRequest {
    pub draft: ScheduleDraft,
    pub action: DraftAction,
}

/// Expands a weekly pattern into dated sessions without storing anything.
///
/// `generatedSessions` falls short of `requestedSessions` when the pattern
/// cannot be satisfied within a year of the start date.
#[axum::debug_handler]
pub async fn generate_sessions(
    Json(payload): Json<GenerateSessionsRequest>,
) -> Json<GenerateSessionsResponse> {
    let generated = generator::generate(
        &payload.weekly_pattern,
        payload.start_date,
        payload.total_sessions,
        &payload.additional_sessions,
    );

    let additional_count = generated.sessions.len() - generated.pattern_count();
    let generated_sessions = generated.pattern_count() as u32;

    Json(GenerateSessionsResponse {
        schedule: summary::schedule_summary(&payload.weekly_pattern, additional_count),
        end_date: generated.end_date,
        requested_sessions: payload.total_sessions,
        generated_sessions,
        class_sessions: generated.sessions,
    })
}

/// Applies one transition to the posted draft and returns the result.
#[axum::debug_handler]
pub async fn apply_draft_action(
    Json(payload): Json<ApplyDraftActionRequest>,
) -> Json<ScheduleDraft> {
    Json(payload.draft.apply(payload.action))
}
