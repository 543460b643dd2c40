//! Inbox scan: list → fetch → extract → classify → tally.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::classify::{Category, Classifier};
use super::extract::{ParsedEmail, extract};
use crate::config::ScanOptions;
use crate::error::ScanError;
use crate::provider::MailProvider;

/// One classified message in a scan result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEmail {
    pub subject: String,
    pub sender: String,
    pub category: Category,
}

/// Output of a scan: messages in listing order plus per-category counts.
///
/// Summary keys serialize as category labels, in category declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub emails: Vec<ClassifiedEmail>,
    pub summary: BTreeMap<Category, usize>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Append a classified message and bump its category count.
    pub fn record(&mut self, email: ParsedEmail, category: Category) {
        *self.summary.entry(category).or_insert(0) += 1;
        self.emails.push(ClassifiedEmail {
            subject: email.subject,
            sender: email.sender,
            category,
        });
    }
}

/// Runs scans against whatever provider a request is bound to.
pub struct InboxScanner {
    classifier: Arc<Classifier>,
    options: ScanOptions,
}

impl InboxScanner {
    pub fn new(classifier: Arc<Classifier>, options: ScanOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan the configured label.
    ///
    /// Messages are fetched one at a time in listing order. Any provider
    /// error aborts the scan with no partial result. A body that fails to
    /// decode is logged and skipped; an empty body is dropped silently.
    pub async fn scan(&self, provider: &dyn MailProvider) -> Result<ScanResult, ScanError> {
        let ids = provider
            .list_messages(&self.options.label, self.options.max_results)
            .await?;

        let mut result = ScanResult::default();
        if ids.is_empty() {
            info!(label = %self.options.label, "No messages to scan");
            return Ok(result);
        }

        let mut skipped = 0usize;
        for id in &ids {
            let raw = provider.get_message(id).await?;

            let parsed = match extract(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(id = %id, error = %e, "Skipping message with undecodable body");
                    skipped += 1;
                    continue;
                }
            };

            if parsed.body.is_empty() {
                debug!(id = %id, "Dropping message with no text body");
                skipped += 1;
                continue;
            }

            let category = self.classifier.classify(&parsed.body);
            result.record(parsed, category);
        }

        info!(
            listed = ids.len(),
            classified = result.emails.len(),
            skipped,
            "Scan complete"
        );
        Ok(result)
    }
}
