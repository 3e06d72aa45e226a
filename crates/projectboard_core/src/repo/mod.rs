//! In-memory record storage.
//!
//! # Responsibility
//! - Hold records in an ordered, identity-keyed collection.
//! - Stay free of business rules; services enforce those.
//!
//! # Invariants
//! - Storage lives only as long as the process; snapshots are the only way
//!   out.

pub mod collection;
