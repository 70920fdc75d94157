// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod notification_sender;
pub mod roster_repository;
pub mod team_assignment_repository;

pub use notification_sender::NotificationSender;
pub use roster_repository::RosterRepository;
pub use team_assignment_repository::TeamAssignmentRepository;
