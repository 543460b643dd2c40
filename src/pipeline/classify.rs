//! Keyword rule chain for sorting messages into categories.
//!
//! Rules run top to bottom against the lowercased body and the first match
//! wins. Order encodes confidence: unsubscribe footers and security phrases
//! are checked before the sentiment rule, so an angry-sounding promotion is
//! still a promotion.
//!
//! Keyword checks are plain substring containment, not whole-word matching:
//! "paid" also matches inside "prepaid" or "unpaid".

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::sentiment::SentimentScorer;

/// Compound score below which a message with no keyword hits is urgent.
pub const URGENT_SENTIMENT_THRESHOLD: f64 = -0.3;

/// Fixed set of labels a message can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "SPAM/PROMOTION")]
    SpamPromotion,
    #[serde(rename = "SECURITY ALERT")]
    SecurityAlert,
    #[serde(rename = "INVOICE/BILL")]
    InvoiceBill,
    #[serde(rename = "FINANCE UPDATE")]
    FinanceUpdate,
    #[serde(rename = "URGENT_CLIENT")]
    UrgentClient,
    #[serde(rename = "ACCOUNT UPDATE")]
    AccountUpdate,
    #[serde(rename = "OTHER")]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Self::SpamPromotion,
        Self::SecurityAlert,
        Self::InvoiceBill,
        Self::FinanceUpdate,
        Self::UrgentClient,
        Self::AccountUpdate,
        Self::Other,
    ];

    /// Wire label, as it appears in scan results.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SpamPromotion => "SPAM/PROMOTION",
            Self::SecurityAlert => "SECURITY ALERT",
            Self::InvoiceBill => "INVOICE/BILL",
            Self::FinanceUpdate => "FINANCE UPDATE",
            Self::UrgentClient => "URGENT_CLIENT",
            Self::AccountUpdate => "ACCOUNT UPDATE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Condition a rule checks.
#[derive(Debug)]
pub enum Predicate {
    /// Lowercased body contains at least one phrase.
    ContainsAny(&'static [&'static str]),
    /// Contains one of `any` and none of `except`.
    ContainsAnyExcept {
        any: &'static [&'static str],
        except: &'static [&'static str],
    },
    /// Regex matches the lowercased body.
    Matches(Regex),
    /// Sentiment of the original body is strictly below `threshold`.
    SentimentBelow(f64),
}

/// One step of the chain.
#[derive(Debug)]
pub struct Rule {
    /// Short name for logs.
    pub name: &'static str,
    pub predicate: Predicate,
    pub category: Category,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

impl Rule {
    fn matches(&self, lowered: &str, original: &str, scorer: &dyn SentimentScorer) -> bool {
        match &self.predicate {
            Predicate::ContainsAny(phrases) => contains_any(lowered, phrases),
            Predicate::ContainsAnyExcept { any, except } => {
                contains_any(lowered, any) && !contains_any(lowered, except)
            }
            Predicate::Matches(regex) => regex.is_match(lowered),
            Predicate::SentimentBelow(threshold) => scorer.score(original) < *threshold,
        }
    }
}

/// Ordered rule chain plus the sentiment capability it falls back on.
pub struct Classifier {
    rules: Vec<Rule>,
    scorer: Arc<dyn SentimentScorer>,
}

impl Classifier {
    /// The standard chain.
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        let rules = vec![
            Rule {
                name: "unsubscribe footer",
                predicate: Predicate::ContainsAny(&[
                    "unsubscribe",
                    "view this email in your browser",
                ]),
                category: Category::SpamPromotion,
            },
            Rule {
                name: "security phrase",
                predicate: Predicate::Matches(
                    Regex::new(
                        r"(security alert|login from|unrecognized device|password (changed|reset)|suspicious activity|was disconnected)",
                    )
                    .expect("security pattern is valid"),
                ),
                category: Category::SecurityAlert,
            },
            Rule {
                name: "money due",
                predicate: Predicate::ContainsAnyExcept {
                    any: &["invoice", "payment due", "overdue"],
                    except: &["receipt", "paid", "received your payment"],
                },
                category: Category::InvoiceBill,
            },
            Rule {
                name: "money confirmed",
                predicate: Predicate::ContainsAny(&[
                    "receipt",
                    "payment received",
                    "we received your payment",
                ]),
                category: Category::FinanceUpdate,
            },
            Rule {
                name: "negative sentiment",
                predicate: Predicate::SentimentBelow(URGENT_SENTIMENT_THRESHOLD),
                category: Category::UrgentClient,
            },
            Rule {
                name: "account housekeeping",
                predicate: Predicate::ContainsAny(&[
                    "confirm your email",
                    "personalize your security",
                    "billing method",
                    "added a card",
                ]),
                category: Category::AccountUpdate,
            },
            Rule {
                name: "general promotion",
                predicate: Predicate::ContainsAny(&[
                    "newsletter",
                    "recommendation",
                    "congrats",
                    "% off",
                    "limited time offer",
                ]),
                category: Category::SpamPromotion,
            },
        ];

        Self { rules, scorer }
    }

    /// Sort a plain-text body. Total: anything unmatched is `Other`.
    pub fn classify(&self, body: &str) -> Category {
        let lowered = body.to_lowercase();
        for rule in &self.rules {
            if rule.matches(&lowered, body, self.scorer.as_ref()) {
                debug!(rule = rule.name, category = %rule.category, "Body matched rule");
                return rule.category;
            }
        }
        Category::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::pipeline::sentiment::LexiconScorer;

    /// Scorer returning a fixed value and counting calls.
    struct FixedScorer {
        value: f64,
        calls: AtomicUsize,
    }

    impl FixedScorer {
        fn new(value: f64) -> Arc<Self> {
            Arc::new(Self {
                value,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl SentimentScorer for FixedScorer {
        fn score(&self, _text: &str) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value
        }
    }

    fn neutral() -> Classifier {
        Classifier::new(FixedScorer::new(0.0))
    }

    fn hostile() -> Classifier {
        Classifier::new(FixedScorer::new(-0.9))
    }

    #[test]
    fn unsubscribe_dominates_everything() {
        let c = hostile();
        for body in [
            "Unsubscribe here",
            "Security alert: password reset. Invoice overdue. Unsubscribe.",
            "Your receipt is attached. To stop these emails, unsubscribe.",
            "I am furious! unsubscribe me now",
        ] {
            assert_eq!(c.classify(body), Category::SpamPromotion, "{body}");
        }
    }

    #[test]
    fn view_in_browser_is_promotion() {
        assert_eq!(
            neutral().classify("Having trouble? View this email in your browser."),
            Category::SpamPromotion
        );
    }

    #[test]
    fn security_phrases() {
        let c = hostile();
        for body in [
            "We noticed a login from a new device.",
            "Security Alert for your account",
            "Sign-in from an unrecognized device",
            "Password reset requested",
            "Your password changed today",
            "Request to PASSWORD RESET received",
            "We detected suspicious activity",
            "Your phone was disconnected from the account",
        ] {
            assert_eq!(c.classify(body), Category::SecurityAlert, "{body}");
        }
    }

    #[test]
    fn security_beats_invoice() {
        assert_eq!(
            neutral().classify("Security alert regarding invoice #4"),
            Category::SecurityAlert
        );
    }

    #[test]
    fn invoice_without_payment_confirmation() {
        let c = neutral();
        assert_eq!(
            c.classify("Your invoice #123 is overdue. Please pay soon."),
            Category::InvoiceBill
        );
        assert_eq!(c.classify("Payment due Friday"), Category::InvoiceBill);
    }

    #[test]
    fn adding_paid_flips_invoice_away() {
        let c = neutral();
        assert_eq!(c.classify("invoice 88"), Category::InvoiceBill);
        assert_ne!(c.classify("invoice 88 has been paid"), Category::InvoiceBill);
        assert_ne!(c.classify("invoice 88 we received your payment"), Category::InvoiceBill);
    }

    #[test]
    fn invoice_with_receipt_is_finance_update() {
        assert_eq!(
            neutral().classify("Receipt for invoice 88"),
            Category::FinanceUpdate
        );
    }

    #[test]
    fn paid_invoice_without_receipt_falls_through() {
        // "paid" vetoes INVOICE/BILL but is not itself a finance keyword.
        assert_eq!(neutral().classify("invoice 88 paid"), Category::Other);
    }

    #[test]
    fn finance_phrases() {
        let c = neutral();
        assert_eq!(c.classify("Payment received, thanks"), Category::FinanceUpdate);
        assert_eq!(c.classify("Here is your receipt"), Category::FinanceUpdate);
    }

    #[test]
    fn case_insensitive() {
        let c = neutral();
        assert_eq!(c.classify("INVOICE OVERDUE"), c.classify("invoice overdue"));
        assert_eq!(c.classify("INVOICE OVERDUE"), Category::InvoiceBill);
    }

    #[test]
    fn substring_matching_is_not_word_bounded() {
        // "prepaid" contains "paid" and vetoes the invoice rule.
        assert_eq!(neutral().classify("prepaid invoice"), Category::Other);
    }

    #[test]
    fn negative_sentiment_is_urgent() {
        assert_eq!(
            hostile().classify("Everything about this service is terrible and broken."),
            Category::UrgentClient
        );
    }

    #[test]
    fn threshold_is_strict() {
        let c = Classifier::new(FixedScorer::new(URGENT_SENTIMENT_THRESHOLD));
        assert_eq!(c.classify("meh"), Category::Other);
    }

    #[test]
    fn sentiment_not_consulted_when_keyword_matches() {
        let scorer = FixedScorer::new(-1.0);
        let c = Classifier::new(scorer.clone());
        assert_eq!(c.classify("Here is your receipt"), Category::FinanceUpdate);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn sentiment_sees_original_case() {
        struct CaseProbe;
        impl SentimentScorer for CaseProbe {
            fn score(&self, text: &str) -> f64 {
                if text.contains("ANGRY") { -1.0 } else { 0.0 }
            }
        }
        let c = Classifier::new(Arc::new(CaseProbe));
        assert_eq!(c.classify("I am ANGRY"), Category::UrgentClient);
    }

    #[test]
    fn urgent_beats_account_and_promotion() {
        assert_eq!(
            hostile().classify("Please confirm your email"),
            Category::UrgentClient
        );
        assert_eq!(hostile().classify("Our newsletter"), Category::UrgentClient);
    }

    #[test]
    fn account_update_phrases() {
        let c = neutral();
        for body in [
            "Please confirm your email address",
            "Personalize your security settings",
            "Update your billing method",
            "You added a card to your wallet",
        ] {
            assert_eq!(c.classify(body), Category::AccountUpdate, "{body}");
        }
    }

    #[test]
    fn second_pass_promotion() {
        let c = neutral();
        for body in [
            "This week's newsletter",
            "A recommendation for you",
            "Congrats on your milestone",
            "Take 20% off today",
            "Limited time offer inside",
        ] {
            assert_eq!(c.classify(body), Category::SpamPromotion, "{body}");
        }
    }

    #[test]
    fn total_over_any_input() {
        let c = neutral();
        assert_eq!(c.classify(""), Category::Other);
        assert_eq!(c.classify("Lunch on Thursday?"), Category::Other);
        assert!(Category::ALL.contains(&c.classify("\u{1F600} ~~~ \n\t")));
    }

    #[test]
    fn end_to_end_with_lexicon_scorer() {
        let c = Classifier::new(Arc::new(LexiconScorer::new()));
        assert_eq!(
            c.classify("Everything about this service is terrible and broken."),
            Category::UrgentClient
        );
        assert_eq!(
            c.classify("Your app keeps crashing and I cannot access my account. This is infuriating."),
            Category::UrgentClient
        );
        assert_eq!(
            c.classify("We noticed a login from a new device."),
            Category::SecurityAlert
        );
        assert_eq!(
            c.classify("Your invoice #123 is overdue. Please pay soon."),
            Category::InvoiceBill
        );
        assert_eq!(c.classify("See you at lunch"), Category::Other);
    }

    #[test]
    fn labels_serialize_as_wire_strings() {
        assert_eq!(
            serde_json::to_value(Category::SpamPromotion).unwrap(),
            "SPAM/PROMOTION"
        );
        assert_eq!(Category::UrgentClient.to_string(), "URGENT_CLIENT");
        for category in Category::ALL {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                category.label()
            );
        }
    }
}
