use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::outing::Outing;
use crate::domain::participant::Participant;

/// Repository trait for outings and their confirmed rosters
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Find an outing by its ID
    async fn find_outing(&self, outing_id: Uuid) -> DomainResult<Option<Outing>>;

    /// Confirmed participants of an outing, in registration order
    async fn find_roster(&self, outing_id: Uuid) -> DomainResult<Vec<Participant>>;
}
