// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};

use crate::state::AppState;
use handlers::{health, teams};

/// Builds the application routes over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team assignment routes
        .route("/api/outings/:id/teams/preview", get(teams::preview_teams))
        .route(
            "/api/outings/:id/teams",
            get(teams::get_assignment).post(teams::confirm_teams),
        )
        .route("/api/team-assignments", get(teams::get_assignments_by_date))
        .with_state(state)
}
