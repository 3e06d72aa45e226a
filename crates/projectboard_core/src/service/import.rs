//! Snapshot import with upsert-merge semantics.
//!
//! # Responsibility
//! - Apply each candidate of an import document in document order.
//! - Resolve candidates to existing projects by id, then by exact name.
//!
//! # Invariants
//! - A matched project is updated in place and adopts the candidate's
//!   non-empty id (identity migration).
//! - An unmatched candidate goes through the ordinary `add` path, keeping
//!   its own id.
//! - Each candidate is all-or-nothing; one failure never aborts the batch.

use crate::model::project::{check_cost, check_progress, ProjectFields};
use crate::model::EntityId;
use crate::service::project_store::{clamp_progress, ProjectStore, StoreError, StoreResult};
use crate::snapshot::{decode_record, parse_candidates, RecordError, SnapshotError};
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why one import candidate was skipped.
#[derive(Debug)]
pub enum CandidateError {
    /// The record could not be decoded or its dates could not be read.
    Record(RecordError),
    /// The store refused the candidate (validation or uniqueness).
    Rejected(StoreError),
}

impl Display for CandidateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(err) => write!(f, "{err}"),
            Self::Rejected(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CandidateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Record(err) => Some(err),
            Self::Rejected(err) => Some(err),
        }
    }
}

impl From<RecordError> for CandidateError {
    fn from(value: RecordError) -> Self {
        Self::Record(value)
    }
}

impl From<StoreError> for CandidateError {
    fn from(value: StoreError) -> Self {
        Self::Rejected(value)
    }
}

/// A skipped candidate and its position in the document.
#[derive(Debug)]
pub struct ImportFailure {
    pub index: usize,
    pub error: CandidateError,
}

/// Outcome of one import call.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Ids of projects created from unmatched candidates, in document order.
    pub created: Vec<EntityId>,
    /// Ids (after migration) of projects merged in place.
    pub updated: Vec<EntityId>,
    pub failures: Vec<ImportFailure>,
}

impl ImportReport {
    /// Number of candidates that changed the store.
    pub fn applied(&self) -> usize {
        self.created.len() + self.updated.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

enum CandidateOutcome {
    Created(EntityId),
    Updated(EntityId),
}

impl ProjectStore {
    /// Upsert-merges every project of a snapshot document.
    ///
    /// # Errors
    /// - Returns `SnapshotError` only when the document itself is unreadable
    ///   or not an array. Per-candidate failures are logged and reported.
    pub fn import_snapshot(&mut self, text: &str) -> Result<ImportReport, SnapshotError> {
        let candidates = parse_candidates(text)?;
        let total = candidates.len();
        let mut report = ImportReport::default();

        for (index, value) in candidates.into_iter().enumerate() {
            match self.import_candidate(value) {
                Ok(CandidateOutcome::Created(id)) => report.created.push(id),
                Ok(CandidateOutcome::Updated(id)) => report.updated.push(id),
                Err(error) => {
                    warn!(
                        "event=import_candidate module=import status=error index={index} error={error}"
                    );
                    report.failures.push(ImportFailure { index, error });
                }
            }
        }

        info!(
            "event=snapshot_import module=import status=ok candidates={total} created={} updated={} failed={}",
            report.created.len(),
            report.updated.len(),
            report.failures.len()
        );
        Ok(report)
    }

    fn import_candidate(&mut self, value: Value) -> Result<CandidateOutcome, CandidateError> {
        let record = decode_record(value)?;
        let existing = self.resolve_candidate(record.supplied_id(), &record.name);
        let fields = record.into_fields()?;

        match existing {
            Some(index) => Ok(CandidateOutcome::Updated(self.merge_at(index, fields)?)),
            None => Ok(CandidateOutcome::Created(self.add(fields)?.id)),
        }
    }

    /// Finds the position of the project a candidate refers to.
    ///
    /// Id match wins; exact name match is the fallback so a freshly seeded
    /// project reconciles with its exported counterpart.
    fn resolve_candidate(&self, id: Option<&str>, name: &str) -> Option<usize> {
        id.and_then(|id| self.projects.position(id)).or_else(|| {
            self.projects
                .iter()
                .position(|project| project.name == name)
        })
    }

    /// Overwrites the project at `index` with candidate values.
    ///
    /// Name rules are not applied here; cost and progress are still checked
    /// before anything changes.
    fn merge_at(&mut self, index: usize, fields: ProjectFields) -> StoreResult<EntityId> {
        if let Some(cost) = fields.cost {
            check_cost(cost)?;
        }
        if let Some(progress) = fields.progress {
            check_progress(progress)?;
        }

        let project = self
            .projects
            .at_mut(index)
            .ok_or_else(|| StoreError::NotFound(format!("index {index}")))?;
        let previous_id = project.id.clone();

        project.name = fields.name;
        project.description = fields.description;
        project.status = fields.status;
        project.user_role = fields.user_role;
        project.cost = fields.cost.unwrap_or(0.0);
        project.progress = clamp_progress(fields.progress.unwrap_or(0.0));
        project.finish_date = fields.finish_date;
        if let Some(id) = fields.id {
            project.id = id;
        }
        project.todo_list = fields.todo_list.unwrap_or_default();

        if project.id != previous_id {
            info!(
                "event=project_id_migrated module=import status=ok from={previous_id} to={}",
                project.id
            );
        }
        info!(
            "event=project_updated module=import status=ok id={} todos={} source=import",
            project.id,
            project.todo_list.len()
        );
        let snapshot = project.clone();
        self.notify_updated(&snapshot);
        Ok(snapshot.id)
    }
}
