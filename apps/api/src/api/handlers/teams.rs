use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::repositories::TeamAssignmentRepository;
use crate::domain::team::{Team, TeamAssignment};
use crate::services::team_assignment;
use crate::state::AppState;

/// Optional team size on preview requests
#[derive(Debug, Default, Deserialize)]
pub struct TeamSizeQuery {
    pub team_size: Option<usize>,
}

/// Request body for confirming teams
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmTeamsRequest {
    pub team_size: Option<usize>,
}

/// Date filter for listing assignments
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

/// Proposed teams for an outing
#[derive(Debug, Serialize)]
pub struct TeamProposalResponse {
    pub outing_id: Uuid,
    pub date: NaiveDate,
    pub course_name: String,
    pub teams: Vec<Team>,
}

/// A stored team assignment
#[derive(Debug, Serialize)]
pub struct TeamAssignmentResponse {
    pub id: Uuid,
    pub outing_id: Uuid,
    pub date: NaiveDate,
    pub course_id: String,
    pub course_name: String,
    pub status: String,
    pub teams: Vec<Team>,
    pub created_at: DateTime<Utc>,
    pub notified_at: Option<DateTime<Utc>>,
}

impl From<&TeamAssignment> for TeamAssignmentResponse {
    fn from(assignment: &TeamAssignment) -> Self {
        Self {
            id: assignment.id(),
            outing_id: assignment.outing_id(),
            date: assignment.date(),
            course_id: assignment.course_id().to_string(),
            course_name: assignment.course_name().to_string(),
            status: assignment.status().to_string(),
            teams: assignment.teams().to_vec(),
            created_at: assignment.created_at(),
            notified_at: assignment.notified_at(),
        }
    }
}

/// Response from confirming teams
#[derive(Debug, Serialize)]
pub struct ConfirmTeamsResponse {
    pub assignment: TeamAssignmentResponse,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
}

/// Parses an optional confirm body
///
/// An empty body means defaults. Anything else must be a valid request.
fn parse_confirm_body(body: &[u8]) -> Result<ConfirmTeamsRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ConfirmTeamsRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))
}

fn resolve_team_size(requested: Option<usize>, default: usize) -> Result<usize, ApiError> {
    match requested {
        Some(0) => Err(ApiError::bad_request("team_size must be at least 1")),
        Some(size) => Ok(size),
        None => Ok(default),
    }
}

/// Preview balanced teams for an outing
///
/// GET /api/outings/:id/teams/preview
pub async fn preview_teams(
    State(state): State<AppState>,
    Path(outing_id): Path<Uuid>,
    Query(query): Query<TeamSizeQuery>,
) -> Result<Json<TeamProposalResponse>, ApiError> {
    let team_size = resolve_team_size(query.team_size, state.default_team_size)?;

    let proposal =
        team_assignment::preview_teams(state.rosters.as_ref(), outing_id, team_size).await?;

    Ok(Json(TeamProposalResponse {
        outing_id: proposal.outing.id,
        date: proposal.outing.date,
        course_name: proposal.outing.course_name,
        teams: proposal.teams,
    }))
}

/// Confirm teams for an outing and notify its members
///
/// POST /api/outings/:id/teams
pub async fn confirm_teams(
    State(state): State<AppState>,
    Path(outing_id): Path<Uuid>,
    body: Bytes,
) -> Result<(StatusCode, Json<ConfirmTeamsResponse>), ApiError> {
    let req = parse_confirm_body(&body)?;
    let team_size = resolve_team_size(req.team_size, state.default_team_size)?;

    let confirmed = team_assignment::confirm_teams(
        state.rosters.as_ref(),
        state.assignments.as_ref(),
        state.notifier.as_ref(),
        outing_id,
        team_size,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ConfirmTeamsResponse {
            assignment: TeamAssignmentResponse::from(&confirmed.assignment),
            notifications_sent: confirmed.notifications_sent,
            notifications_failed: confirmed.notifications_failed,
        }),
    ))
}

/// Get the stored teams for an outing
///
/// GET /api/outings/:id/teams
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(outing_id): Path<Uuid>,
) -> Result<Json<TeamAssignmentResponse>, ApiError> {
    let assignment =
        team_assignment::assignment_for_outing(state.assignments.as_ref(), outing_id).await?;

    Ok(Json(TeamAssignmentResponse::from(&assignment)))
}

/// List team assignments for a date
///
/// GET /api/team-assignments?date=YYYY-MM-DD
pub async fn get_assignments_by_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<TeamAssignmentResponse>>, ApiError> {
    let assignments = state.assignments.find_by_date(query.date).await?;

    Ok(Json(
        assignments.iter().map(TeamAssignmentResponse::from).collect(),
    ))
}
