use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::outing::Outing;
use crate::domain::repositories::{NotificationSender, RosterRepository, TeamAssignmentRepository};
use crate::domain::team::{balance_teams, Team, TeamAssignment};

/// Balanced teams for an outing that have not been stored yet
#[derive(Debug, Clone)]
pub struct TeamProposal {
    pub outing: Outing,
    pub teams: Vec<Team>,
}

/// Result of confirming an outing's teams
#[derive(Debug, Clone)]
pub struct ConfirmedAssignment {
    pub assignment: TeamAssignment,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
}

/// Notice sent to every member of `team`
///
/// # Example
/// ```text
/// [Sky Valley CC] 10/24 team assignment complete! Team 2: Kim, Lee, Park, Choi
/// ```
pub fn team_notice(outing: &Outing, team: &Team) -> String {
    format!(
        "[{}] {} team assignment complete! Team {}: {}",
        outing.course_name,
        outing.short_date(),
        team.team_number,
        team.roster_line()
    )
}

/// Balances an outing's roster without storing anything
pub async fn preview_teams(
    rosters: &dyn RosterRepository,
    outing_id: Uuid,
    team_size: usize,
) -> DomainResult<TeamProposal> {
    let outing = rosters
        .find_outing(outing_id)
        .await?
        .ok_or(DomainError::OutingNotFound(outing_id))?;

    let participants = rosters.find_roster(outing_id).await?;
    let teams = balance_teams(&participants, team_size);

    info!(
        %outing_id,
        participants = participants.len(),
        teams = teams.len(),
        team_size,
        "Balanced roster"
    );

    Ok(TeamProposal { outing, teams })
}

/// Balances, stores, and announces an outing's teams
///
/// Fails if the outing already has confirmed teams or an empty roster.
/// The repository enforces one confirmed assignment per outing, so of two
/// concurrent confirmations only the first to save sends notices.
/// Each member is notified once after the assignment is saved. Failed
/// notices are logged and counted; the assignment only moves to
/// `notified` when every notice went out.
pub async fn confirm_teams(
    rosters: &dyn RosterRepository,
    assignments: &dyn TeamAssignmentRepository,
    notifier: &dyn NotificationSender,
    outing_id: Uuid,
    team_size: usize,
) -> DomainResult<ConfirmedAssignment> {
    if let Some(existing) = assignments.find_by_outing(outing_id).await? {
        if existing.status().is_confirmed() {
            return Err(DomainError::AlreadyAssigned(outing_id));
        }
    }

    let TeamProposal { outing, teams } = preview_teams(rosters, outing_id, team_size).await?;

    let (mut assignment, events) = TeamAssignment::new(&outing, teams)?;
    assignments.save(&assignment).await?;
    for event in &events {
        info!(assignment_id = %event.assignment_id(), event = event.name(), "Team assignment event");
    }

    let mut sent = 0;
    let mut failed = 0;
    for team in assignment.teams() {
        let message = team_notice(&outing, team);
        for member in &team.members {
            match notifier.send(member.user_id, &message, outing.id).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    failed += 1;
                    warn!(user_id = %member.user_id, error = %e, "Failed to notify member");
                }
            }
        }
    }

    if failed == 0 {
        let mut notified = assignment.clone();
        let event = notified.mark_notified()?;
        match assignments.update_status(&notified).await {
            Ok(()) => {
                info!(assignment_id = %event.assignment_id(), event = event.name(), "Team assignment event");
                assignment = notified;
            }
            Err(e) => warn!(assignment_id = %assignment.id(), error = %e, "Failed to record notification"),
        }
    } else {
        warn!(
            assignment_id = %assignment.id(),
            sent,
            failed,
            "Some members were not notified"
        );
    }

    Ok(ConfirmedAssignment {
        assignment,
        notifications_sent: sent,
        notifications_failed: failed,
    })
}

/// Stored assignment for an outing
pub async fn assignment_for_outing(
    assignments: &dyn TeamAssignmentRepository,
    outing_id: Uuid,
) -> DomainResult<TeamAssignment> {
    assignments
        .find_by_outing(outing_id)
        .await?
        .ok_or(DomainError::AssignmentNotFound(outing_id))
}
