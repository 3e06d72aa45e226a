//! Use-case services over the in-memory collections.
//!
//! # Responsibility
//! - Enforce project invariants (name length, name uniqueness, value ranges).
//! - Implement snapshot export and upsert-merge import.
//! - Notify subscribed view hooks of lifecycle changes.

pub mod hooks;
pub mod import;
pub mod project_store;
pub mod user_roster;
