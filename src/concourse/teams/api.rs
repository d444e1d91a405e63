//! Team API operations

use log::debug;

use crate::concourse::client::api_error;
use crate::concourse::ApiClient;
use crate::config::api;
use crate::error::Result;

use super::models::{Team, TeamAuth};

impl ApiClient {
    /// Create the team, or replace its auth if it already exists.
    ///
    /// Returns the saved team plus `(created, updated)` as reported by the
    /// server: 201 means created, 200 means updated.
    pub async fn create_or_update_team(
        &self,
        name: &str,
        auth: &TeamAuth,
    ) -> Result<(Team, bool, bool)> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::TEAMS,
            urlencoding::encode(name)
        );
        let request = Team::new(name, auth.clone());

        let response = self.put(&url).json(&request).send().await?;
        let status = response.status().as_u16();
        let body = self.read_body(response).await?;

        let (created, updated) = match status {
            201 => (true, false),
            200 => (false, true),
            s if (200..300).contains(&s) => (false, false),
            s => return Err(api_error(s, &format!("save team '{}'", name), &body)),
        };
        debug!(
            "Saved team '{}' (status {}, created={}, updated={})",
            name, status, created, updated
        );

        let team = if body.trim().is_empty() {
            request
        } else {
            serde_json::from_str(&body)?
        };
        Ok((team, created, updated))
    }

    /// Get all teams visible to the current token
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let url = format!("{}/{}", self.base_url(), api::TEAMS);
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, "fetch teams").await
    }
}
