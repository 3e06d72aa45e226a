//! Render hooks fired by the project store.
//!
//! # Invariants
//! - Hooks run synchronously, after the store change is complete.
//! - Receivers get shared references; they change projects only through
//!   store operations.

use crate::model::project::Project;

/// Observer for project lifecycle changes.
///
/// Every method defaults to a no-op so views implement only what they draw.
pub trait ProjectHooks {
    fn on_project_created(&self, _project: &Project) {}

    fn on_project_updated(&self, _project: &Project) {}

    fn on_project_removed(&self, _id: &str) {}
}
