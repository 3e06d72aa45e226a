//! Entity model for the project board.
//!
//! # Responsibility
//! - Define `Project`, `ToDo` and `User` records and their construction
//!   defaults.
//! - Generate collision-free identities for new records.
//!
//! # Invariants
//! - Every record is identified by an opaque `EntityId` assigned once at
//!   construction.
//! - Constructors never validate business rules; the store does.

pub mod date;
pub mod display;
pub mod project;
pub mod todo;
pub mod user;

use uuid::Uuid;

/// Opaque identity shared by every record kind.
///
/// Imported snapshots may carry ids produced elsewhere, so this stays a
/// string rather than a parsed `Uuid`.
pub type EntityId = String;

/// Generates a fresh 128-bit random identity.
pub fn generate_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Returns the supplied id when it is present and non-blank, otherwise a
/// freshly generated one.
pub(crate) fn resolve_id(supplied: Option<EntityId>) -> EntityId {
    match supplied {
        Some(id) if !id.trim().is_empty() => id,
        _ => generate_id(),
    }
}

/// Records addressable by identity inside an ordered collection.
pub trait Identified {
    fn id(&self) -> &str;
}
