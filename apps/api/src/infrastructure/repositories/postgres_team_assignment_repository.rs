use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repositories::TeamAssignmentRepository;
use crate::domain::team::value_objects::AssignmentStatus;
use crate::domain::team::{Team, TeamAssignment};

/// PostgreSQL implementation of TeamAssignmentRepository
///
/// Teams are stored as a JSONB document on the assignment row. An outing
/// holds at most one `assigned` or `notified` row; saving a second one
/// fails with [`DomainError::AlreadyAssigned`].
pub struct PostgresTeamAssignmentRepository {
    pool: PgPool,
}

impl PostgresTeamAssignmentRepository {
    /// Creates a new PostgresTeamAssignmentRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn assignment_from_row(row: &PgRow) -> Result<TeamAssignment, sqlx::Error> {
    let teams: Json<Vec<Team>> = row.try_get("teams")?;

    Ok(TeamAssignment::from_persistence(
        row.try_get("id")?,
        row.try_get("outing_id")?,
        row.try_get::<NaiveDate, _>("outing_date")?,
        row.try_get("course_id")?,
        row.try_get("course_name")?,
        teams.0,
        row.try_get::<AssignmentStatus, _>("status")?,
        row.try_get::<DateTime<Utc>, _>("created_at")?,
        row.try_get::<Option<DateTime<Utc>>, _>("notified_at")?,
    ))
}

fn invalid_row(e: sqlx::Error) -> DomainError {
    DomainError::InvalidRecord(format!("Invalid team assignment row: {}", e))
}

#[async_trait]
impl TeamAssignmentRepository for PostgresTeamAssignmentRepository {
    async fn save(&self, assignment: &TeamAssignment) -> DomainResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_assignments (
                id, outing_id, outing_date, course_id, course_name,
                teams, status, created_at, notified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                teams = EXCLUDED.teams,
                status = EXCLUDED.status,
                notified_at = EXCLUDED.notified_at
            "#,
        )
        .bind(assignment.id())
        .bind(assignment.outing_id())
        .bind(assignment.date())
        .bind(assignment.course_id())
        .bind(assignment.course_name())
        .bind(Json(assignment.teams().to_vec()))
        .bind(assignment.status())
        .bind(assignment.created_at())
        .bind(assignment.notified_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // team_assignments_confirmed_outing_idx
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::AlreadyAssigned(assignment.outing_id())
            }
            e => DomainError::Database(format!("Failed to save team assignment: {}", e)),
        })?;

        Ok(())
    }

    async fn find_by_outing(&self, outing_id: Uuid) -> DomainResult<Option<TeamAssignment>> {
        let row = sqlx::query(
            r#"
            SELECT
                id, outing_id, outing_date, course_id, course_name,
                teams, status, created_at, notified_at
            FROM team_assignments
            WHERE outing_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(outing_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Database(format!("Failed to find team assignment by outing: {}", e))
        })?;

        row.as_ref()
            .map(assignment_from_row)
            .transpose()
            .map_err(invalid_row)
    }

    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<TeamAssignment>> {
        let rows = sqlx::query(
            r#"
            SELECT
                id, outing_id, outing_date, course_id, course_name,
                teams, status, created_at, notified_at
            FROM team_assignments
            WHERE outing_date = $1
            ORDER BY created_at
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Database(format!("Failed to find team assignments by date: {}", e))
        })?;

        rows.iter()
            .map(assignment_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid_row)
    }

    async fn update_status(&self, assignment: &TeamAssignment) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE team_assignments
            SET status = $2, notified_at = $3
            WHERE id = $1
            "#,
        )
        .bind(assignment.id())
        .bind(assignment.status())
        .bind(assignment.notified_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::Database(format!("Failed to update team assignment status: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AssignmentNotFound(assignment.id()));
        }

        Ok(())
    }
}
