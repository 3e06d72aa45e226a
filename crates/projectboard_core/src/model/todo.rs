//! ToDo records owned by a project.
//!
//! # Invariants
//! - A ToDo belongs to exactly one project and has no lifecycle of its own.
//! - Status changes happen in place and never reorder the owning list.

use crate::model::{resolve_id, EntityId, Identified};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Three-state ToDo progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToDoStatus {
    #[default]
    Pending,
    InProgress,
    Finished,
}

impl ToDoStatus {
    /// Wire name used in snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Finished => "finished",
        }
    }
}

/// Task entry inside a project's `todo_list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDo {
    pub id: EntityId,
    pub text: String,
    /// Due or reference date.
    pub date: NaiveDate,
    pub status: ToDoStatus,
}

/// Field set for creating a ToDo.
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoFields {
    /// Kept verbatim when present; generated otherwise.
    pub id: Option<EntityId>,
    pub text: String,
    pub date: NaiveDate,
    /// Defaults to `pending`.
    pub status: Option<ToDoStatus>,
}

impl ToDoFields {
    pub fn new(text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            text: text.into(),
            date,
            status: None,
        }
    }
}

impl ToDo {
    pub fn new(fields: ToDoFields) -> Self {
        Self {
            id: resolve_id(fields.id),
            text: fields.text,
            date: fields.date,
            status: fields.status.unwrap_or_default(),
        }
    }
}

impl Identified for ToDo {
    fn id(&self) -> &str {
        &self.id
    }
}
