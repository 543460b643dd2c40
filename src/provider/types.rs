//! Wire types for mail provider records.
//!
//! Field names follow the Gmail REST representation (camelCase JSON).

use serde::Deserialize;

/// A full message record as returned by `messages.get?format=full`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    pub id: String,
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub payload: MessagePart,
}

/// A node in the MIME tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePart {
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub body: Option<MessageBody>,
    #[serde(default)]
    pub parts: Option<Vec<MessagePart>>,
}

/// Header name/value pair (order preserved).
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Inline body of a part. `data` is base64url-encoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl MessageBody {
    /// Body carrying `data`, for building records by hand.
    pub fn with_data(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            size: None,
        }
    }
}

impl MessagePart {
    /// Leaf part with a MIME type and encoded body data.
    pub fn leaf(mime_type: &str, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            body: Some(MessageBody::with_data(data)),
            ..Default::default()
        }
    }

    /// Encoded body data carried directly on this part, if any.
    pub fn body_data(&self) -> Option<&str> {
        self.body.as_ref()?.data.as_deref()
    }
}

/// Response of `messages.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesResponse {
    #[serde(default)]
    pub messages: Option<Vec<MessageRef>>,
    #[serde(default)]
    pub result_size_estimate: Option<u64>,
}

/// ID reference from a listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRef {
    pub id: String,
}
