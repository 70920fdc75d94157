use serde::{Deserialize, Serialize};

/// Lifecycle status of an outing's team assignment
///
/// # Status Transitions
/// ```text
/// Pending -> Assigned -> Notified
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "assignment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    /// Teams drafted but not confirmed
    Pending,
    /// Teams confirmed and stored
    Assigned,
    /// Every member has been told their team
    Notified,
}

impl AssignmentStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use golfjoin_api::domain::team::value_objects::AssignmentStatus;
    ///
    /// assert!(AssignmentStatus::Assigned.can_transition_to(AssignmentStatus::Notified));
    /// assert!(!AssignmentStatus::Notified.can_transition_to(AssignmentStatus::Assigned));
    /// ```
    pub fn can_transition_to(&self, next: AssignmentStatus) -> bool {
        use AssignmentStatus::*;
        matches!((self, next), (Pending, Assigned) | (Assigned, Notified))
    }

    /// Whether teams for the outing are already settled
    pub fn is_confirmed(&self) -> bool {
        matches!(self, AssignmentStatus::Assigned | AssignmentStatus::Notified)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Pending => write!(f, "pending"),
            AssignmentStatus::Assigned => write!(f, "assigned"),
            AssignmentStatus::Notified => write!(f, "notified"),
        }
    }
}
