use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{NotificationSender, RosterRepository, TeamAssignmentRepository};
use crate::infrastructure::repositories::{
    PostgresNotificationSender, PostgresRosterRepository, PostgresTeamAssignmentRepository,
};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub rosters: Arc<dyn RosterRepository>,
    pub assignments: Arc<dyn TeamAssignmentRepository>,
    pub notifier: Arc<dyn NotificationSender>,
    pub default_team_size: usize,
}

impl AppState {
    /// State backed by PostgreSQL adapters sharing one pool
    pub fn postgres(pool: PgPool, default_team_size: usize) -> Self {
        Self {
            rosters: Arc::new(PostgresRosterRepository::new(pool.clone())),
            assignments: Arc::new(PostgresTeamAssignmentRepository::new(pool.clone())),
            notifier: Arc::new(PostgresNotificationSender::new(pool)),
            default_team_size,
        }
    }
}
