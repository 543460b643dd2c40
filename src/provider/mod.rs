//! Mail provider capability.
//!
//! The scan pipeline only needs two operations from a provider: list the IDs
//! under a label, and fetch one full record. `ProviderConnector` builds a
//! provider for the bearer token carried by a single request.

pub mod gmail;
pub mod types;

pub use gmail::{GmailClient, GmailConnector};
pub use types::{Header, MessageBody, MessagePart, RawMessage};

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::ProviderError;

/// A mailbox the scan pipeline can read from.
#[async_trait]
pub trait MailProvider: Send + Sync {
    /// List up to `max_results` message IDs under `label`, newest first.
    async fn list_messages(&self, label: &str, max_results: u32)
    -> Result<Vec<String>, ProviderError>;

    /// Fetch the full record for one message.
    async fn get_message(&self, id: &str) -> Result<RawMessage, ProviderError>;
}

/// Builds a `MailProvider` bound to a caller's access token.
///
/// The token is passed through as-is: no validation, no refresh.
pub trait ProviderConnector: Send + Sync {
    fn connect(&self, access_token: SecretString) -> Arc<dyn MailProvider>;
}
