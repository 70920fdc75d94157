use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::outing::Outing;
use crate::domain::participant::{Gender, Participant};
use crate::domain::repositories::RosterRepository;

/// PostgreSQL implementation of RosterRepository
///
/// Only `approved` applications count towards a roster. Registration order
/// is the position of the application by `applied_at`. Members without a
/// profile nickname go by the name on their application.
pub struct PostgresRosterRepository {
    pool: PgPool,
}

impl PostgresRosterRepository {
    /// Creates a new PostgresRosterRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Profile nickname, else the name given when applying
fn display_name(nickname: Option<String>, user_name: Option<String>) -> Option<String> {
    nickname
        .filter(|n| !n.trim().is_empty())
        .or(user_name)
}

fn participant_from_row(row: &PgRow) -> Result<Participant, sqlx::Error> {
    let gender: Option<String> = row.try_get("gender")?;
    let registration_order: i64 = row.try_get("registration_order")?;

    Ok(Participant::new(
        row.try_get("user_id")?,
        display_name(row.try_get("nickname")?, row.try_get("user_name")?),
        gender.as_deref().map(Gender::from).unwrap_or_default(),
        row.try_get::<Option<Decimal>, _>("average_score")?,
        u32::try_from(registration_order).unwrap_or(u32::MAX),
    ))
}

#[async_trait]
impl RosterRepository for PostgresRosterRepository {
    async fn find_outing(&self, outing_id: Uuid) -> DomainResult<Option<Outing>> {
        let row = sqlx::query(
            r#"
            SELECT id, outing_date, course_id, course_name
            FROM outings
            WHERE id = $1
            "#,
        )
        .bind(outing_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to find outing: {}", e)))?;

        row.map(|r| -> Result<Outing, sqlx::Error> {
            Ok(Outing {
                id: r.try_get("id")?,
                date: r.try_get::<NaiveDate, _>("outing_date")?,
                course_id: r.try_get("course_id")?,
                course_name: r
                    .try_get::<Option<String>, _>("course_name")?
                    .unwrap_or_default(),
            })
        })
        .transpose()
        .map_err(|e| DomainError::InvalidRecord(format!("Invalid outing row: {}", e)))
    }

    async fn find_roster(&self, outing_id: Uuid) -> DomainResult<Vec<Participant>> {
        let rows = sqlx::query(
            r#"
            SELECT
                p.user_id, u.nickname, p.user_name, u.gender, u.average_score,
                ROW_NUMBER() OVER (ORDER BY p.applied_at, p.user_id) AS registration_order
            FROM outing_participants p
            JOIN users u ON u.id = p.user_id
            WHERE p.outing_id = $1 AND p.status = 'approved'
            ORDER BY p.applied_at, p.user_id
            "#,
        )
        .bind(outing_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to load roster: {}", e)))?;

        rows.iter()
            .map(participant_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::InvalidRecord(format!("Invalid roster row: {}", e)))
    }
}
