//! HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{FlyError, Result};
use crate::rc::TargetToken;

/// CI server API client
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<TargetToken>,
    /// Log response bodies as well as request lines
    verbose: bool,
}

impl ApiClient {
    /// Create a new client for the given API URL
    pub fn new(
        api_url: &str,
        token: Option<TargetToken>,
        insecure: bool,
        verbose: bool,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(insecure)
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}{}", api_url.trim_end_matches('/'), api::BASE_PATH),
            token,
            verbose,
        })
    }

    /// Base URL for API requests (`<api>/api/v1`)
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with the auth header attached
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.header("Authorization", token.header_value()),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    /// Read the response body, logging it in verbose mode
    pub(crate) async fn read_body(&self, response: Response) -> Result<String> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("response status {}", status);
        if self.verbose {
            debug!("response body: {}", body);
        }
        Ok(body)
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = self.read_body(response).await?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), error_context, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Build an `Api` error from a failed response body
pub(crate) fn api_error(status: u16, error_context: &str, body: &str) -> FlyError {
    let body = body.trim();
    let message = if body.is_empty() {
        format!("Failed to {}", error_context)
    } else {
        format!("Failed to {}: {}", error_context, body)
    };
    FlyError::Api { status, message }
}

#[cfg(test)]
impl ApiClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            base_url,
            Some(TargetToken {
                token_type: "bearer".to_string(),
                value: "test-token".to_string(),
            }),
            false,
            true,
        )
        .expect("test client")
    }
}
