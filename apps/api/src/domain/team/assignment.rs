use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::events::AssignmentEvent;
use super::team::Team;
use super::value_objects::AssignmentStatus;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::outing::Outing;

/// TeamAssignment aggregate root
///
/// The confirmed split of an outing's roster into teams, together with the
/// course and date it was made for.
///
/// # Invariants
/// - Holds at least one team
/// - Status transitions follow [`AssignmentStatus::can_transition_to`]
/// - `notified_at` is set only once the assignment is `Notified`
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use golfjoin_api::domain::outing::Outing;
/// use golfjoin_api::domain::participant::{Gender, Participant};
/// use golfjoin_api::domain::team::{AssignmentStatus, Team, TeamAssignment};
/// use uuid::Uuid;
///
/// let outing = Outing {
///     id: Uuid::new_v4(),
///     date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
///     course_id: "lakeside".to_string(),
///     course_name: "Lakeside CC".to_string(),
/// };
/// let member = Participant::new(Uuid::new_v4(), Some("Kim".into()), Gender::Male, None, 1);
///
/// let (assignment, events) =
///     TeamAssignment::new(&outing, vec![Team::new(1, vec![member])]).expect("valid assignment");
///
/// assert_eq!(assignment.status(), AssignmentStatus::Assigned);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TeamAssignment {
    id: Uuid,
    outing_id: Uuid,
    date: NaiveDate,
    course_id: String,
    course_name: String,
    teams: Vec<Team>,
    status: AssignmentStatus,
    created_at: DateTime<Utc>,
    notified_at: Option<DateTime<Utc>>,
}

impl TeamAssignment {
    /// Creates a confirmed assignment for `outing`
    ///
    /// # Returns
    /// * `Ok((TeamAssignment, Vec<AssignmentEvent>))` - New assignment and its Created event
    /// * `Err(DomainError::NoTeams)` - If `teams` is empty
    pub fn new(outing: &Outing, teams: Vec<Team>) -> DomainResult<(Self, Vec<AssignmentEvent>)> {
        if teams.iter().all(Team::is_empty) {
            return Err(DomainError::NoTeams);
        }

        let assignment = Self {
            id: Uuid::new_v4(),
            outing_id: outing.id,
            date: outing.date,
            course_id: outing.course_id.clone(),
            course_name: outing.course_name.clone(),
            teams,
            status: AssignmentStatus::Assigned,
            created_at: Utc::now(),
            notified_at: None,
        };

        let events = vec![AssignmentEvent::Created {
            assignment_id: assignment.id,
            outing_id: assignment.outing_id,
            team_count: assignment.teams.len(),
            member_count: assignment.member_count(),
        }];

        Ok((assignment, events))
    }

    /// Records that every member has been notified
    ///
    /// # Business Rules
    /// - Assignment must be in Assigned status
    /// - Records the notification timestamp
    pub fn mark_notified(&mut self) -> DomainResult<AssignmentEvent> {
        let next_status = AssignmentStatus::Notified;
        if !self.status.can_transition_to(next_status) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: next_status,
            });
        }

        self.status = next_status;
        self.notified_at = Some(Utc::now());

        Ok(AssignmentEvent::Notified {
            assignment_id: self.id,
            recipients: self.member_count(),
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn outing_id(&self) -> Uuid {
        self.outing_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn status(&self) -> AssignmentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn notified_at(&self) -> Option<DateTime<Utc>> {
        self.notified_at
    }

    /// Total members across all teams
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Reconstructs a TeamAssignment from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        outing_id: Uuid,
        date: NaiveDate,
        course_id: String,
        course_name: String,
        teams: Vec<Team>,
        status: AssignmentStatus,
        created_at: DateTime<Utc>,
        notified_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            outing_id,
            date,
            course_id,
            course_name,
            teams,
            status,
            created_at,
            notified_at,
        }
    }
}
