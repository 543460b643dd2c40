//! Sentiment scoring.
//!
//! The classifier only needs a compound polarity in [-1.0, 1.0]. The
//! built-in `LexiconScorer` is rule-based: word valences from a lexicon
//! weighted toward complaint and escalation vocabulary, adjusted for
//! negation, boosters, capitalization, "but" clauses and exclamation marks,
//! then normalized.

/// Something that rates the overall polarity of a text.
pub trait SentimentScorer: Send + Sync {
    /// Compound score in [-1.0, 1.0]; 0.0 is neutral.
    fn score(&self, text: &str) -> f64;
}

/// Normalization constant: `s / sqrt(s^2 + ALPHA)`.
const ALPHA: f64 = 15.0;
/// Multiplier for a word preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Magnitude added by a booster word, or removed by a dampener.
const BOOSTER_INCR: f64 = 0.293;
/// Magnitude added to an ALL-CAPS word in otherwise mixed-case text.
const CAPS_INCR: f64 = 0.733;
/// Per-`!` emphasis, counted up to `MAX_EXCLAMATIONS`.
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// How many preceding tokens a negation or booster reaches.
const LOOKBACK: usize = 3;

const LEXICON: &[(&str, f64)] = &[
    // negative
    ("abuse", -3.2),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("appalled", -2.9),
    ("appalling", -2.8),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broke", -1.8),
    ("broken", -2.1),
    ("buggy", -1.4),
    ("cheated", -2.2),
    ("complain", -1.5),
    ("complained", -1.7),
    ("complaint", -1.2),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("crash", -1.7),
    ("crashed", -1.7),
    ("crashing", -1.6),
    ("damaged", -1.9),
    ("defective", -1.9),
    ("delay", -1.3),
    ("delayed", -1.3),
    ("disappoint", -2.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgrace", -2.2),
    ("disgusted", -2.4),
    ("disgusting", -2.4),
    ("dissatisfaction", -2.2),
    ("dissatisfied", -1.6),
    ("dreadful", -2.6),
    ("enraged", -2.7),
    ("error", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fault", -1.7),
    ("faulty", -1.9),
    ("fraud", -2.8),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("frustration", -2.1),
    ("furious", -2.7),
    ("garbage", -1.7),
    ("hate", -2.7),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("horribly", -2.4),
    ("ignore", -1.5),
    ("ignored", -1.3),
    ("ignoring", -1.7),
    ("inadequate", -1.7),
    ("incompetent", -2.1),
    ("inconvenience", -1.5),
    ("inconvenient", -1.5),
    ("incorrect", -1.5),
    ("infuriated", -3.0),
    ("infuriating", -2.8),
    ("irritated", -2.0),
    ("irritating", -1.8),
    ("lied", -1.6),
    ("livid", -2.5),
    ("lost", -1.3),
    ("lousy", -2.5),
    ("mad", -2.2),
    ("mess", -1.5),
    ("misleading", -1.5),
    ("miss", -0.6),
    ("missing", -1.2),
    ("neglected", -2.4),
    ("nightmare", -1.9),
    ("nonsense", -1.7),
    ("outrage", -2.3),
    ("outraged", -2.5),
    ("outrageous", -2.0),
    ("overcharged", -2.0),
    ("pathetic", -2.2),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("rage", -2.6),
    ("refused", -1.2),
    ("regret", -1.8),
    ("ridiculous", -1.5),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.5),
    ("shameful", -2.0),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("sucks", -1.5),
    ("terrible", -2.5),
    ("terribly", -2.1),
    ("threat", -2.4),
    ("ugly", -2.3),
    ("unable", -1.2),
    ("unacceptable", -2.0),
    ("unfair", -2.1),
    ("unhappy", -1.8),
    ("unprofessional", -2.0),
    ("unreliable", -1.7),
    ("unresolved", -1.4),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
    // positive
    ("amazing", 2.8),
    ("appreciate", 2.7),
    ("awesome", 3.1),
    ("best", 3.2),
    ("congrats", 2.4),
    ("delighted", 2.9),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fantastic", 2.6),
    ("free", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("love", 3.2),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("save", 2.2),
    ("success", 2.7),
    ("successful", 2.8),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wonderful", 2.7),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "cannot", "can't", "cant",
    "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't",
    "wasnt", "won't", "wont", "aren't", "arent", "without",
];

const BOOSTERS: &[&str] = &[
    "absolutely", "completely", "extremely", "highly", "incredibly", "really", "so",
    "totally", "very", "utterly",
];

const DAMPENERS: &[&str] = &["barely", "hardly", "slightly", "somewhat", "kinda", "marginally"];

/// Rule-based lexicon scorer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

fn valence_of(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Split on whitespace and trim surrounding punctuation, keeping case.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Push `x` away from zero by `amount` (negative `amount` pulls toward zero).
fn nudge(x: f64, amount: f64) -> f64 {
    if x < 0.0 { x - amount } else { x + amount }
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        // Typographic apostrophes would hide contractions like "don’t".
        let text = text.replace(['\u{2018}', '\u{2019}'], "'");
        let tokens = tokenize(&text);
        if tokens.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mixed_case = tokens.iter().any(|t| !is_all_caps(t));

        let mut valences = vec![0.0_f64; tokens.len()];
        for (i, word) in lowered.iter().enumerate() {
            let Some(mut v) = valence_of(word) else {
                continue;
            };

            if mixed_case && is_all_caps(tokens[i]) {
                v = nudge(v, CAPS_INCR);
            }

            let window = i.saturating_sub(LOOKBACK)..i;
            for prev in &lowered[window.clone()] {
                if BOOSTERS.contains(&prev.as_str()) {
                    v = nudge(v, BOOSTER_INCR);
                } else if DAMPENERS.contains(&prev.as_str()) {
                    v = nudge(v, -BOOSTER_INCR);
                }
            }
            if lowered[window]
                .iter()
                .any(|prev| NEGATIONS.contains(&prev.as_str()))
            {
                v *= NEGATION_SCALAR;
            }

            valences[i] = v;
        }

        // Contrast: what follows "but" carries the weight.
        if let Some(pivot) = lowered.iter().position(|w| w == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                *v *= if i < pivot { 0.5 } else { 1.5 };
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
            sum = nudge(sum, bangs as f64 * EXCLAMATION_INCR);
        }

        normalize(sum)
    }
}
