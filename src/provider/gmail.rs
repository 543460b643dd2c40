//! Gmail REST API client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{ListMessagesResponse, RawMessage};
use super::{MailProvider, ProviderConnector};
use crate::config::GMAIL_API_BASE;
use crate::error::ProviderError;

/// Gmail client for one access token. Always reads the `me` mailbox.
pub struct GmailClient {
    http: Client,
    base_url: String,
    access_token: SecretString,
}

impl GmailClient {
    pub fn new(http: Client, base_url: impl Into<String>, access_token: SecretString) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            access_token,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed {
                reason: e.to_string(),
            })?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse {
                reason: e.to_string(),
            })
    }
}

async fn check_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl MailProvider for GmailClient {
    async fn list_messages(
        &self,
        label: &str,
        max_results: u32,
    ) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/users/me/messages", self.base_url);
        let list: ListMessagesResponse = self
            .get_json(
                &url,
                &[
                    ("labelIds", label.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;

        let ids: Vec<String> = list
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.id)
            .collect();
        debug!(label, count = ids.len(), "Listed messages");
        Ok(ids)
    }

    async fn get_message(&self, id: &str) -> Result<RawMessage, ProviderError> {
        let url = format!("{}/users/me/messages/{}", self.base_url, id);
        self.get_json(&url, &[("format", "full".to_string())]).await
    }
}

/// Builds `GmailClient`s that share one HTTP connection pool.
#[derive(Clone)]
pub struct GmailConnector {
    http: Client,
    base_url: String,
}

impl GmailConnector {
    pub fn new() -> Self {
        Self::with_base_url(GMAIL_API_BASE)
    }

    /// Point at a different API root (e.g. a local fake).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GmailConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderConnector for GmailConnector {
    fn connect(&self, access_token: SecretString) -> Arc<dyn MailProvider> {
        Arc::new(GmailClient::new(
            self.http.clone(),
            self.base_url.clone(),
            access_token,
        ))
    }
}
