//! Server info endpoint

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::Result;

use super::ApiClient;

/// Server version information
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub version: String,
    #[serde(default)]
    pub worker_version: String,
}

impl ApiClient {
    /// Fetch server info (also serves as a reachability check)
    pub async fn info(&self) -> Result<Info> {
        let url = format!("{}/{}", self.base_url(), api::INFO);
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, "fetch server info").await
    }
}
