// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod outing;
pub mod participant;
pub mod repositories;
pub mod team;

pub use errors::{DomainError, DomainResult};
