//! Core entity management for the project board.
//! This crate is the single source of truth for project and roster
//! invariants; views only observe it through hooks.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod snapshot;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::date::{format_date, parse_date, DateParseError};
pub use model::display::ProjectField;
pub use model::project::{
    Project, ProjectFields, ProjectRole, ProjectStatus, ProjectValidationError,
};
pub use model::todo::{ToDo, ToDoFields, ToDoStatus};
pub use model::user::{User, UserFields, UserRole};
pub use model::{generate_id, EntityId, Identified};
pub use service::hooks::ProjectHooks;
pub use service::import::{CandidateError, ImportFailure, ImportReport};
pub use service::project_store::{ProjectStore, StoreError, StoreResult};
pub use service::user_roster::UserRoster;
pub use snapshot::{read_snapshot_file, write_snapshot_file, RecordError, SnapshotError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
