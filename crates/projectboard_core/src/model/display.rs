//! Closed mapping from displayable project fields to formatted text.
//!
//! View layers bind labels by key (`name`, `finishDate`, ...). Every key
//! resolves to a typed accessor here; unknown keys resolve to nothing.

use crate::model::date::format_date;
use crate::model::project::Project;

/// Fields a project detail view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    Status,
    UserRole,
    Cost,
    Progress,
    FinishDate,
    Initials,
}

impl ProjectField {
    pub const ALL: [ProjectField; 8] = [
        Self::Name,
        Self::Description,
        Self::Status,
        Self::UserRole,
        Self::Cost,
        Self::Progress,
        Self::FinishDate,
        Self::Initials,
    ];

    /// Binding key, matching the snapshot field names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Status => "status",
            Self::UserRole => "userRole",
            Self::Cost => "cost",
            Self::Progress => "progress",
            Self::FinishDate => "finishDate",
            Self::Initials => "initials",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl Project {
    /// Formats one field for display.
    ///
    /// Cost renders as `$<amount>` and progress as a percentage.
    pub fn display(&self, field: ProjectField) -> String {
        match field {
            ProjectField::Name => self.name.clone(),
            ProjectField::Description => self.description.clone(),
            ProjectField::Status => self.status.as_str().to_string(),
            ProjectField::UserRole => self.user_role.as_str().to_string(),
            ProjectField::Cost => format!("${}", self.cost),
            ProjectField::Progress => format!("{}%", self.progress_percent()),
            ProjectField::FinishDate => format_date(self.finish_date),
            ProjectField::Initials => self.initials(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectField;
    use crate::model::project::{Project, ProjectFields, ProjectRole, ProjectStatus};
    use chrono::NaiveDate;

    fn sample() -> Project {
        let mut fields = ProjectFields::new(
            "Bridge Retrofit",
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        );
        fields.status = ProjectStatus::Paused;
        fields.user_role = ProjectRole::Architect;
        fields.cost = Some(1500.0);
        fields.progress = Some(0.25);
        Project::new(fields)
    }

    #[test]
    fn every_key_round_trips() {
        for field in ProjectField::ALL {
            assert_eq!(ProjectField::from_key(field.key()), Some(field));
        }
        assert_eq!(ProjectField::from_key("backgroundColor"), None);
    }

    #[test]
    fn formats_presentation_values() {
        let project = sample();
        assert_eq!(project.display(ProjectField::Cost), "$1500");
        assert_eq!(project.display(ProjectField::Progress), "25%");
        assert_eq!(project.display(ProjectField::FinishDate), "2025-06-30");
        assert_eq!(project.display(ProjectField::Status), "paused");
        assert_eq!(project.display(ProjectField::UserRole), "architect");
        assert_eq!(project.display(ProjectField::Initials), "BR");
    }
}
