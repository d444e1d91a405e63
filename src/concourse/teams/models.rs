//! Team data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::auth;

/// Auth configuration of a team: auth kind (`users`, `groups`) to identities
pub type TeamAuth = BTreeMap<String, Vec<String>>;

/// Team as exchanged with the API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub auth: TeamAuth,
}

impl Team {
    /// A team with the given name and auth, not yet saved
    pub fn new(name: &str, auth: TeamAuth) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            auth,
        }
    }

    /// Users allowed to act as this team
    pub fn users(&self) -> &[String] {
        self.auth.get(auth::USERS).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups allowed to act as this team
    pub fn groups(&self) -> &[String] {
        self.auth.get(auth::GROUPS).map(Vec::as_slice).unwrap_or(&[])
    }
}
