// Spam verdict composer.
//
// Combines the keyword base score with the heuristic signal boost:
//
//   base     = keyword fraction over the lower-cased text
//   boost    = capped heuristic boost over the raw text
//   combined = min(1.0, base + boost)
//   label    = spam if combined >= 0.5
//
// The boost cap (0.45) keeps the keyword base score dominant: heuristic
// signals alone can never push a keyword-free text past the threshold.

use anyhow::Result;
use serde::Serialize;

use crate::evaluator::keywords::{self, SPAM_PHRASES};
use crate::evaluator::signals::{SignalBreakdown, SignalDetectors};
use crate::evaluator::MissingContent;

/// Combined score at or above this labels the text as spam.
pub const SPAM_THRESHOLD: f64 = 0.5;

/// Spam/not-spam label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpamLabel {
    Spam,
    NotSpam,
}

impl SpamLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpamLabel::Spam => "spam",
            SpamLabel::NotSpam => "not_spam",
        }
    }
}

/// Full spam evaluation result, at full precision.
///
/// Rounding to 2 decimals is a presentation concern and happens in the
/// response layer, not here.
#[derive(Debug, Clone, Serialize)]
pub struct SignalResult {
    pub base_score: f64,
    pub boost: f64,
    pub combined_score: f64,
    pub label: SpamLabel,
    pub signals: SignalBreakdown,
}

/// Spam evaluator: phrase table + compiled signal detectors.
pub struct SpamEvaluator {
    detectors: SignalDetectors,
}

impl SpamEvaluator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            detectors: SignalDetectors::new()?,
        })
    }

    /// Evaluate `text` for spam.
    ///
    /// Empty or whitespace-only text is a validation failure, not a
    /// scoreable input.
    pub fn evaluate(&self, text: &str) -> Result<SignalResult, MissingContent> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MissingContent);
        }

        let base_score = keywords::base_score(&trimmed.to_lowercase(), SPAM_PHRASES);
        // Raw text here: the caps-run detector needs the original casing.
        let (boost, signals) = self.detectors.boost(trimmed);
        let combined_score = (base_score + boost).min(1.0);

        let label = if combined_score >= SPAM_THRESHOLD {
            SpamLabel::Spam
        } else {
            SpamLabel::NotSpam
        };

        Ok(SignalResult {
            base_score,
            boost,
            combined_score,
            label,
            signals,
        })
    }
}
