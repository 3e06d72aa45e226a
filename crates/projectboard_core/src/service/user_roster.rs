//! User roster use-cases.
//!
//! Append-only: no uniqueness rule, no merge, no removal. Row removal in a
//! view does not touch the roster.

use crate::model::user::{User, UserFields, UserRole};
use crate::repo::collection::Collection;
use log::info;

const DEFAULT_USER_NAME: &str = "Admin User";
const DEFAULT_USER_EMAIL: &str = "admin@test.com";

#[derive(Debug, Clone, Default)]
pub struct UserRoster {
    users: Collection<User>,
}

impl UserRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster holding the default admin user.
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        roster.add(UserFields::new(
            DEFAULT_USER_NAME,
            DEFAULT_USER_EMAIL,
            UserRole::Admin,
        ));
        roster
    }

    /// Appends a user. Never fails.
    pub fn add(&mut self, fields: UserFields) -> User {
        let user = User::new(fields);
        info!(
            "event=user_added module=roster status=ok id={} role={}",
            user.id,
            user.role.as_str()
        );
        self.users.push(user.clone());
        user
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
