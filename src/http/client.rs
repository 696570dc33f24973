use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::auth::AuthStore;
use crate::config::ApiSettings;

/// HTTP client with bearer-token auth and the global 401 rule: any
/// unauthorized response clears the stored token and publishes a
/// session-expired event before the error is returned to the caller.
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth: AuthStore,
}

impl HttpClient {
    pub fn new(settings: &ApiSettings, auth: AuthStore) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let request = self.client.post(self.url(path)).multipart(form);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Existence check via HEAD, used for static assets like menu PDFs
    pub async fn head_exists(&self, path: &str) -> Result<bool, ApiError> {
        let request = self.authorize(self.client.head(self.url(path)));
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        Ok(response.status().is_success())
    }

    // --- Helper Methods ---

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await?;
        self.check_status(response)
    }

    fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!("Request to {} failed: HTTP {}", response.url(), status);

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
        }

        Err(ApiError::from_status(status.as_u16()))
    }

    fn handle_unauthorized(&self) {
        if let Err(e) = self.auth.expire_session() {
            error!("Failed to clear expired session: {e:?}");
        }
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
