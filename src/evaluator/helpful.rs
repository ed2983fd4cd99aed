// Helpfulness evaluator.
//
// Intentionally coarse placeholder: token count of the trimmed text is the
// only input. The thresholds are reproducible rules, not load-bearing
// business logic — a real helpfulness model would replace this wholesale.

use serde::Serialize;

use crate::evaluator::MissingContent;

/// Score assigned to content with more than `HELPFUL_MIN_WORDS` words.
pub const HELPFUL_SCORE: f64 = 0.82;

/// Score assigned to shorter content.
pub const UNHELPFUL_SCORE: f64 = 0.35;

/// Word-count threshold separating the two scores.
pub const HELPFUL_MIN_WORDS: usize = 6;

/// Score at or above this labels the content as helpful.
pub const HELPFUL_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpfulLabel {
    Helpful,
    NotHelpful,
}

impl HelpfulLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpfulLabel::Helpful => "helpful",
            HelpfulLabel::NotHelpful => "not_helpful",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HelpfulResult {
    pub score: f64,
    pub label: HelpfulLabel,
    pub word_count: usize,
}

/// Evaluate `text` for helpfulness.
pub fn evaluate(text: &str) -> Result<HelpfulResult, MissingContent> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(MissingContent);
    }

    let word_count = trimmed.split_whitespace().count();
    let score = if word_count > HELPFUL_MIN_WORDS {
        HELPFUL_SCORE
    } else {
        UNHELPFUL_SCORE
    };
    let label = if score >= HELPFUL_THRESHOLD {
        HelpfulLabel::Helpful
    } else {
        HelpfulLabel::NotHelpful
    };

    Ok(HelpfulResult {
        score,
        label,
        word_count,
    })
}
