// Team domain module
// Contains the team balancer, the team assignment aggregate root,
// value objects, and domain events

#![allow(clippy::module_inception)]

pub mod assignment;
pub mod balancer;
pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use assignment::TeamAssignment;
pub use balancer::{balance_teams, DEFAULT_TEAM_SIZE};
pub use team::Team;
pub use value_objects::AssignmentStatus;
