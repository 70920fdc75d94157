// Infrastructure layer module
// PostgreSQL adapters for rosters, team assignments, and member notices

pub mod repositories;
