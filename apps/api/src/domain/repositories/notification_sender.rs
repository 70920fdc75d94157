use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;

/// Delivers in-app notices to members
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send `message` to a member, linked to the outing it concerns
    async fn send(&self, user_id: Uuid, message: &str, outing_id: Uuid) -> DomainResult<()>;
}
