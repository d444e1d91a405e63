//! Resolved connection handle for a named target

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use log::debug;

use crate::config::defaults;
use crate::error::{FlyError, Result};
use crate::rc::{TargetProps, TargetToken};

use super::ApiClient;

/// A target loaded from the rc file, ready to talk to its server
pub struct Target {
    pub name: String,
    pub api: String,
    pub team: String,
    pub token: Option<TargetToken>,
    client: ApiClient,
}

impl Target {
    /// Build a target handle from its rc file entry
    pub fn new(name: &str, props: &TargetProps, verbose: bool) -> Result<Self> {
        let api = props.api.trim_end_matches('/').to_string();
        let client = ApiClient::new(&api, props.token.clone(), props.insecure, verbose)?;

        Ok(Self {
            name: name.to_string(),
            api,
            team: props.team.clone(),
            token: props.token.clone(),
            client,
        })
    }

    /// API client bound to this target
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Check the target is usable: logged in, token not expired, server reachable
    pub async fn validate(&self) -> Result<()> {
        let token = self
            .token
            .as_ref()
            .filter(|t| !t.value.trim().is_empty())
            .ok_or_else(|| {
                FlyError::Target(format!(
                    "not logged in to '{}'; run {} -t {} login",
                    self.name,
                    defaults::BIN_NAME,
                    self.name
                ))
            })?;

        if let Some(expiry) = token_expiry(&token.value) {
            if expiry <= Utc::now() {
                return Err(FlyError::Target(format!(
                    "token for target '{}' expired at {}; run {} -t {} login",
                    self.name,
                    expiry.to_rfc2822(),
                    defaults::BIN_NAME,
                    self.name
                )));
            }
            debug!("Token for '{}' valid until {}", self.name, expiry);
        }

        let info = self.client.info().await?;
        debug!(
            "Target '{}' reachable at {} (server version {})",
            self.name, self.api, info.version
        );
        Ok(())
    }
}

/// Expiry time of a JWT token, if the value is a JWT carrying an `exp` claim
pub fn token_expiry(value: &str) -> Option<DateTime<Utc>> {
    let mut parts = value.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    DateTime::from_timestamp(exp, 0)
}
