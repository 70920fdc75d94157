use thiserror::Error;
use uuid::Uuid;

use crate::domain::team::value_objects::AssignmentStatus;

/// Errors raised by the domain layer and its repository ports
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Outing not found: {0}")]
    OutingNotFound(Uuid),

    #[error("Team assignment not found: {0}")]
    AssignmentNotFound(Uuid),

    #[error("Outing {0} already has a team assignment")]
    AlreadyAssigned(Uuid),

    #[error("Roster is empty, there are no teams to assign")]
    NoTeams,

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: AssignmentStatus,
        to: AssignmentStatus,
    },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    #[error("Notification delivery failed: {0}")]
    NotificationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
