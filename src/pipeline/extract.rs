//! Message extraction: provider record → subject, sender and plain-text body.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::DecodeError;
use crate::provider::types::{MessagePart, RawMessage};

pub const DEFAULT_SUBJECT: &str = "No Subject";
pub const DEFAULT_SENDER: &str = "Unknown Sender";

/// Standard alphabet, padding optional. Gmail omits padding on some bodies.
const BODY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A message reduced to what the classifier and the response need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEmail {
    pub subject: String,
    pub sender: String,
    /// Decoded `text/plain` content; empty when none was found.
    pub body: String,
}

/// Extract subject, sender and body from a full provider record.
///
/// Only the top level of `parts` is searched, and only the first
/// `text/plain` part counts. A payload with `parts` never falls back to its
/// own body data.
pub fn extract(message: &RawMessage) -> Result<ParsedEmail, DecodeError> {
    let payload = &message.payload;

    let mut subject = DEFAULT_SUBJECT.to_string();
    let mut sender = DEFAULT_SENDER.to_string();
    for header in &payload.headers {
        match header.name.as_str() {
            "Subject" => subject = header.value.clone(),
            "From" => sender = display_name(&header.value).to_string(),
            _ => {}
        }
    }

    let body = match body_data(payload) {
        Some(data) => decode_body(data)?,
        None => String::new(),
    };

    Ok(ParsedEmail {
        subject,
        sender,
        body,
    })
}

/// Everything before the first `<`, or the whole value.
fn display_name(from: &str) -> &str {
    match from.find('<') {
        Some(idx) => &from[..idx],
        None => from,
    }
}

fn body_data(payload: &MessagePart) -> Option<&str> {
    match &payload.parts {
        Some(parts) => parts
            .iter()
            .find(|p| p.mime_type == "text/plain")
            .and_then(MessagePart::body_data),
        None => payload.body_data(),
    }
}

/// Decode base64url body data into UTF-8 text.
pub fn decode_body(data: &str) -> Result<String, DecodeError> {
    let standard = data.replace('-', "+").replace('_', "/");
    let bytes = BODY_ENGINE.decode(standard.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
