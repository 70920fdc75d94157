// Participant domain module
// Roster members as the team balancer sees them

#![allow(clippy::module_inception)]

pub mod participant;
pub mod value_objects;

pub use participant::{Participant, DEFAULT_AVERAGE_SCORE, UNKNOWN_NICKNAME};
pub use value_objects::Gender;
