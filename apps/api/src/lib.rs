//! Golf Join API Library
//!
//! Team assignment for group golf outings: balancing an outing's roster
//! into teams, storing the result, and notifying members, together with
//! the repositories and HTTP layer around it.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;
