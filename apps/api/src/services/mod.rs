// Application services
// Orchestrate domain logic over the repository ports

pub mod team_assignment;

pub use team_assignment::{
    assignment_for_outing, confirm_teams, preview_teams, team_notice, ConfirmedAssignment,
    TeamProposal,
};
