//! Message scanning pipeline.
//!
//! Every listed message flows through:
//! 1. `MailProvider::get_message()` — provider I/O
//! 2. `extract()` — headers and `text/plain` body
//! 3. `Classifier::classify()` — ordered keyword rules, sentiment fallback
//! 4. `ScanResult::record()` — result list and category tally
//!
//! Messages without a decodable text body never reach the classifier.

pub mod classify;
pub mod extract;
pub mod scan;
pub mod sentiment;

pub use classify::{Category, Classifier};
pub use extract::{ParsedEmail, extract};
pub use scan::{ClassifiedEmail, InboxScanner, ScanResult};
pub use sentiment::{LexiconScorer, SentimentScorer};
