//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its enumerated attributes.
//! - Derive presentation-neutral values (`initials`) without storing them.
//!
//! # Invariants
//! - `id` is stable once constructed; only import identity migration
//!   rewrites it.
//! - `progress` is a fraction in `[0, 1]`; only presentation multiplies it
//!   by 100.
//! - `todo_list` preserves append order.

use crate::model::todo::ToDo;
use crate::model::{resolve_id, EntityId, Identified};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Role of the viewer with respect to one project.
///
/// Not a system user role; see `model::user::UserRole` for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectRole {
    #[default]
    Engineer,
    Architect,
    Manager,
    Supervisor,
}

impl ProjectRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Engineer => "engineer",
            Self::Architect => "architect",
            Self::Manager => "manager",
            Self::Supervisor => "supervisor",
        }
    }
}

/// Canonical project record.
///
/// Serialized with camelCase keys to match the snapshot wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    /// Unique within a store (exact, case-sensitive).
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: ProjectRole,
    /// Currency units, never negative.
    pub cost: f64,
    /// Completion fraction in `[0, 1]`.
    pub progress: f64,
    pub finish_date: NaiveDate,
    pub todo_list: Vec<ToDo>,
}

/// Typed field set produced by the project form or an import candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    /// Kept verbatim when present and non-blank; generated otherwise.
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: ProjectRole,
    /// Defaults to `0`.
    pub cost: Option<f64>,
    /// Defaults to `0`.
    pub progress: Option<f64>,
    pub finish_date: NaiveDate,
    /// Defaults to an empty list.
    pub todo_list: Option<Vec<ToDo>>,
}

impl ProjectFields {
    /// Creates a field set with default status, role and empty optionals.
    pub fn new(name: impl Into<String>, finish_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::default(),
            user_role: ProjectRole::default(),
            cost: None,
            progress: None,
            finish_date,
            todo_list: None,
        }
    }

    /// Checks the rules a new or edited project must satisfy.
    ///
    /// Name length is counted in characters, not bytes.
    pub fn validate(&self, min_name_length: usize) -> Result<(), ProjectValidationError> {
        let actual = self.name.chars().count();
        if actual < min_name_length {
            return Err(ProjectValidationError::NameTooShort {
                min: min_name_length,
                actual,
            });
        }
        if let Some(cost) = self.cost {
            check_cost(cost)?;
        }
        if let Some(progress) = self.progress {
            check_progress(progress)?;
        }
        Ok(())
    }
}

/// Rejects negative or non-finite cost values.
pub fn check_cost(cost: f64) -> Result<(), ProjectValidationError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(ProjectValidationError::InvalidCost(cost));
    }
    Ok(())
}

/// Rejects non-finite progress values. Range is handled by clamping.
pub fn check_progress(progress: f64) -> Result<(), ProjectValidationError> {
    if !progress.is_finite() {
        return Err(ProjectValidationError::InvalidProgress(progress));
    }
    Ok(())
}

/// Validation failures for project field sets.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectValidationError {
    NameTooShort { min: usize, actual: usize },
    InvalidCost(f64),
    InvalidProgress(f64),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort { min, actual } => write!(
                f,
                "project name must be at least {min} characters, got {actual}"
            ),
            Self::InvalidCost(value) => {
                write!(f, "project cost must be a non-negative number, got {value}")
            }
            Self::InvalidProgress(value) => {
                write!(f, "project progress must be a finite number, got {value}")
            }
        }
    }
}

impl Error for ProjectValidationError {}

impl Project {
    /// Builds a project from a field set.
    ///
    /// Performs no validation; only fills defaults and generates an id when
    /// none was supplied.
    pub fn new(fields: ProjectFields) -> Self {
        Self {
            id: resolve_id(fields.id),
            name: fields.name,
            description: fields.description,
            status: fields.status,
            user_role: fields.user_role,
            cost: fields.cost.unwrap_or(0.0),
            progress: fields.progress.unwrap_or(0.0),
            finish_date: fields.finish_date,
            todo_list: fields.todo_list.unwrap_or_default(),
        }
    }

    /// Two-letter badge derived from the name.
    ///
    /// First letter of each of the first two space-separated words; with a
    /// single word, its first two characters.
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split(' ').collect();
        if words.len() >= 2 {
            return words[..2]
                .iter()
                .filter_map(|word| word.chars().next())
                .collect::<String>()
                .to_uppercase();
        }
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    /// Progress as a percentage for display.
    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }

    pub fn todo(&self, todo_id: &str) -> Option<&ToDo> {
        self.todo_list.iter().find(|todo| todo.id == todo_id)
    }

    pub(crate) fn todo_mut(&mut self, todo_id: &str) -> Option<&mut ToDo> {
        self.todo_list.iter_mut().find(|todo| todo.id == todo_id)
    }
}

impl Identified for Project {
    fn id(&self) -> &str {
        &self.id
    }
}
