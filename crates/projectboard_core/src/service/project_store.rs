//! Project store use-cases.
//!
//! # Responsibility
//! - Own the authoritative ordered list of projects.
//! - Enforce creation rules and fire view hooks.
//!
//! # Invariants
//! - No two projects share a `name` after `add`/`update`; import merges are
//!   the only path allowed to bypass this.
//! - A failed operation leaves the store unchanged and fires no hook.
//! - Stored `progress` is always within `[0, 1]`.

use crate::config::StoreConfig;
use crate::model::date::today;
use crate::model::project::{
    Project, ProjectFields, ProjectRole, ProjectStatus, ProjectValidationError,
};
use crate::model::todo::{ToDo, ToDoFields, ToDoStatus};
use crate::model::EntityId;
use crate::repo::collection::Collection;
use crate::service::hooks::ProjectHooks;
use crate::snapshot::{encode_projects, SnapshotError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_PROJECT_NAME: &str = "Default Project";
const DEFAULT_PROJECT_DESCRIPTION: &str = "This is just a default app project";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by project store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    Validation(ProjectValidationError),
    DuplicateName(String),
    DuplicateId(EntityId),
    NotFound(EntityId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => {
                write!(f, "a project with the name \"{name}\" already exists")
            }
            Self::DuplicateId(id) => write!(f, "a project with id {id} already exists"),
            Self::NotFound(id) => write!(f, "not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProjectValidationError> for StoreError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// In-memory project store with render hooks.
pub struct ProjectStore {
    pub(crate) projects: Collection<Project>,
    hooks: Vec<Box<dyn ProjectHooks>>,
    config: StoreConfig,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ProjectStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            projects: Collection::new(),
            hooks: Vec::new(),
            config,
        }
    }

    /// Creates a store holding "Default Project" when the config asks for it.
    ///
    /// Hooks subscribed later do not see the seed's creation.
    pub fn seeded(config: StoreConfig) -> Self {
        let seed = config.seed_default_project;
        let mut store = Self::new(config);
        if seed {
            let mut fields = ProjectFields::new(DEFAULT_PROJECT_NAME, today());
            fields.description = DEFAULT_PROJECT_DESCRIPTION.to_string();
            fields.status = ProjectStatus::Active;
            fields.user_role = ProjectRole::Engineer;
            if let Err(err) = store.add(fields) {
                warn!("event=store_seed module=store status=error error={err}");
            }
        }
        store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Registers a view observer. Observers fire in registration order.
    pub fn subscribe(&mut self, hooks: Box<dyn ProjectHooks>) {
        self.hooks.push(hooks);
    }

    /// Validates a field set and appends the resulting project.
    ///
    /// # Errors
    /// - `Validation` when the name is too short or cost/progress are invalid.
    /// - `DuplicateName` when another project already uses the name.
    /// - `DuplicateId` when an explicitly supplied id is taken.
    pub fn add(&mut self, fields: ProjectFields) -> StoreResult<Project> {
        fields.validate(self.config.min_name_length)?;
        if self.find_by_name(&fields.name).is_some() {
            return Err(StoreError::DuplicateName(fields.name));
        }
        if let Some(id) = fields.id.as_deref().filter(|id| !id.trim().is_empty()) {
            if self.projects.contains(id) {
                return Err(StoreError::DuplicateId(id.to_string()));
            }
        }

        let mut project = Project::new(fields);
        project.progress = clamp_progress(project.progress);
        info!(
            "event=project_created module=store status=ok id={} todos={}",
            project.id,
            project.todo_list.len()
        );
        self.projects.push(project.clone());
        for hook in &self.hooks {
            hook.on_project_created(&project);
        }
        Ok(project)
    }

    /// Exact-match lookup by identity.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    /// Exact, case-sensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }

    /// Detaches a project. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: &str) -> Option<Project> {
        let removed = self.projects.remove(id)?;
        info!("event=project_removed module=store status=ok id={id}");
        for hook in &self.hooks {
            hook.on_project_removed(id);
        }
        Some(removed)
    }

    /// Applies an edit-form submission to an existing project.
    ///
    /// Keeps the project's id and todo list; `fields.id` and
    /// `fields.todo_list` are ignored. Missing cost/progress keep the current
    /// values.
    pub fn update(&mut self, id: &str, fields: ProjectFields) -> StoreResult<Project> {
        if !self.projects.contains(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fields.validate(self.config.min_name_length)?;
        if self
            .projects
            .iter()
            .any(|project| project.id != id && project.name == fields.name)
        {
            return Err(StoreError::DuplicateName(fields.name));
        }

        let project = self
            .projects
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        project.name = fields.name;
        project.description = fields.description;
        project.status = fields.status;
        project.user_role = fields.user_role;
        if let Some(cost) = fields.cost {
            project.cost = cost;
        }
        if let Some(progress) = fields.progress {
            project.progress = clamp_progress(progress);
        }
        project.finish_date = fields.finish_date;

        info!("event=project_updated module=store status=ok id={id} source=edit");
        let snapshot = project.clone();
        self.notify_updated(&snapshot);
        Ok(snapshot)
    }

    /// Appends a ToDo to a project's list.
    pub fn add_todo(&mut self, project_id: &str, fields: ToDoFields) -> StoreResult<ToDo> {
        let project = self
            .projects
            .get_mut(project_id)
            .ok_or_else(|| StoreError::NotFound(project_id.to_string()))?;
        let todo = ToDo::new(fields);
        project.todo_list.push(todo.clone());

        info!(
            "event=todo_added module=store status=ok project_id={project_id} todo_id={}",
            todo.id
        );
        let snapshot = project.clone();
        self.notify_updated(&snapshot);
        Ok(todo)
    }

    /// Changes a ToDo's status in place, keeping list order.
    pub fn set_todo_status(
        &mut self,
        project_id: &str,
        todo_id: &str,
        status: ToDoStatus,
    ) -> StoreResult<()> {
        let project = self
            .projects
            .get_mut(project_id)
            .ok_or_else(|| StoreError::NotFound(project_id.to_string()))?;
        let todo = project
            .todo_mut(todo_id)
            .ok_or_else(|| StoreError::NotFound(todo_id.to_string()))?;
        todo.status = status;

        info!(
            "event=todo_status module=store status=ok project_id={project_id} todo_id={todo_id} todo_status={}",
            status.as_str()
        );
        let snapshot = project.clone();
        self.notify_updated(&snapshot);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Serializes every project, in store order, as a JSON array.
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        let text = encode_projects(self.projects.iter())?;
        info!(
            "event=snapshot_export module=store status=ok projects={} bytes={}",
            self.projects.len(),
            text.len()
        );
        Ok(text)
    }

    pub(crate) fn notify_updated(&self, project: &Project) {
        for hook in &self.hooks {
            hook.on_project_updated(project);
        }
    }
}

/// Clamps a finite progress value into `[0, 1]`.
pub(crate) fn clamp_progress(progress: f64) -> f64 {
    let clamped = progress.clamp(0.0, 1.0);
    if clamped != progress {
        warn!("event=progress_clamped module=store status=ok from={progress} to={clamped}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::{clamp_progress, ProjectStore, StoreError};
    use crate::config::StoreConfig;
    use crate::model::project::ProjectFields;
    use chrono::NaiveDate;

    fn fields(name: &str) -> ProjectFields {
        ProjectFields::new(name, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap())
    }

    #[test]
    fn clamp_progress_bounds_values() {
        assert_eq!(clamp_progress(1.5), 1.0);
        assert_eq!(clamp_progress(-0.2), 0.0);
        assert_eq!(clamp_progress(0.4), 0.4);
    }

    #[test]
    fn seeded_store_respects_config() {
        assert_eq!(ProjectStore::seeded(StoreConfig::default()).len(), 1);

        let config = StoreConfig {
            seed_default_project: false,
            ..StoreConfig::default()
        };
        assert!(ProjectStore::seeded(config).is_empty());
    }

    #[test]
    fn seed_failure_leaves_store_empty() {
        let config = StoreConfig {
            min_name_length: 40,
            ..StoreConfig::default()
        };
        assert!(ProjectStore::seeded(config).is_empty());
    }

    #[test]
    fn add_rejects_taken_explicit_id() {
        let mut store = ProjectStore::default();
        let mut first = fields("First Project");
        first.id = Some("fixed".to_string());
        store.add(first).unwrap();

        let mut second = fields("Second Project");
        second.id = Some("fixed".to_string());
        assert_eq!(
            store.add(second).unwrap_err(),
            StoreError::DuplicateId("fixed".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_clamps_progress() {
        let mut store = ProjectStore::default();
        let mut over = fields("Overachiever");
        over.progress = Some(2.0);
        assert_eq!(store.add(over).unwrap().progress, 1.0);
    }
}
