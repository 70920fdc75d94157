use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repositories::NotificationSender;

/// Writes notices to the `notifications` table read by the member app
pub struct PostgresNotificationSender {
    pool: PgPool,
}

impl PostgresNotificationSender {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationSender for PostgresNotificationSender {
    async fn send(&self, user_id: Uuid, message: &str, outing_id: Uuid) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications (id, user_id, message, kind, related_id, is_read, created_at)
            VALUES ($1, $2, $3, 'notice', $4, FALSE, NOW())
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(message)
        .bind(outing_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::NotificationFailed(format!("{} (user {})", e, user_id)))?;

        Ok(())
    }
}
