use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::team::TeamAssignment;

/// Repository trait for TeamAssignment aggregate
///
/// Defines the contract for persisting and retrieving team assignments.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamAssignmentRepository: Send + Sync {
    /// Save an assignment (insert or update)
    ///
    /// Fails with `DomainError::AlreadyAssigned` when another confirmed
    /// assignment exists for the same outing.
    async fn save(&self, assignment: &TeamAssignment) -> DomainResult<()>;

    /// Find the latest assignment for an outing
    async fn find_by_outing(&self, outing_id: Uuid) -> DomainResult<Option<TeamAssignment>>;

    /// Find all assignments for outings on a date
    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<TeamAssignment>>;

    /// Persist the assignment's status and notification timestamp
    async fn update_status(&self, assignment: &TeamAssignment) -> DomainResult<()>;
}
