//! Rc file data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level rc file
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RcFile {
    /// Map of target name to target configuration
    #[serde(default)]
    pub targets: BTreeMap<String, TargetProps>,
}

/// A named target with connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProps {
    /// API URL of the CI server
    pub api: String,
    /// Team the token was issued for
    #[serde(default)]
    pub team: String,
    /// Skip TLS certificate verification
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub insecure: bool,
    /// Auth token saved by login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<TargetToken>,
}

/// Auth token stored for a target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetToken {
    #[serde(rename = "type")]
    pub token_type: String,
    pub value: String,
}

impl TargetToken {
    /// Value of the Authorization header
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.value)
    }
}
