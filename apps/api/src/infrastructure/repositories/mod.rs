// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_notification_sender;
pub mod postgres_roster_repository;
pub mod postgres_team_assignment_repository;

pub use postgres_notification_sender::PostgresNotificationSender;
pub use postgres_roster_repository::PostgresRosterRepository;
pub use postgres_team_assignment_repository::PostgresTeamAssignmentRepository;
