//! Wire records for snapshot import.
//!
//! Dates stay textual here and are coerced in `into_fields`, so an
//! unparseable date becomes a per-record error instead of a sentinel value.
//! Unknown fields are ignored.

use crate::model::date::parse_date;
use crate::model::project::{ProjectFields, ProjectRole, ProjectStatus};
use crate::model::todo::{ToDo, ToDoFields, ToDoStatus};
use crate::model::EntityId;
use crate::snapshot::RecordError;
use serde::Deserialize;

/// One project entry of an import document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    pub user_role: ProjectRole,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub progress: Option<f64>,
    pub finish_date: String,
    #[serde(default)]
    pub todo_list: Option<Vec<ToDoRecord>>,
}

/// One ToDo entry nested in a project record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToDoRecord {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub text: String,
    pub date: String,
    #[serde(default)]
    pub status: Option<ToDoStatus>,
}

impl ProjectRecord {
    /// The record id, when present and non-blank.
    pub fn supplied_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Coerces textual dates and builds a typed field set.
    ///
    /// A missing todo list becomes `Some(vec![])` so merges replace the
    /// existing list with an empty one.
    pub fn into_fields(self) -> Result<ProjectFields, RecordError> {
        let finish_date =
            parse_date(&self.finish_date).map_err(|source| RecordError::InvalidDate {
                field: "finishDate",
                source,
            })?;
        let todo_list = self
            .todo_list
            .unwrap_or_default()
            .into_iter()
            .map(ToDoRecord::into_todo)
            .collect::<Result<Vec<_>, _>>()?;
        let id = self.id.filter(|id| !id.trim().is_empty());

        Ok(ProjectFields {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            user_role: self.user_role,
            cost: self.cost,
            progress: self.progress,
            finish_date,
            todo_list: Some(todo_list),
        })
    }
}

impl ToDoRecord {
    pub fn into_todo(self) -> Result<ToDo, RecordError> {
        let date = parse_date(&self.date).map_err(|source| RecordError::InvalidDate {
            field: "todoList.date",
            source,
        })?;
        Ok(ToDo::new(ToDoFields {
            id: self.id,
            text: self.text,
            date,
            status: self.status,
        }))
    }
}
