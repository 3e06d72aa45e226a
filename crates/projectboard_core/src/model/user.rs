//! User roster records.
//!
//! Users carry no uniqueness or merge rules; they only share the identity
//! scheme with projects.

use crate::model::{resolve_id, EntityId, Identified};
use serde::{Deserialize, Serialize};

/// System role of a roster user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Field set produced by the user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl UserFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

impl User {
    pub fn new(fields: UserFields) -> Self {
        Self {
            id: resolve_id(fields.id),
            name: fields.name,
            email: fields.email,
            role: fields.role,
        }
    }

    /// Upper-cased first character of the name, empty for an empty name.
    pub fn avatar_letter(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|first| first.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}
