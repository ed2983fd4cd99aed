// Evaluators — pure, stateless scoring and validation rules.
//
// Every evaluator is a function of its input and a constant rule table.
// Nothing here touches the network, the filesystem, or shared mutable
// state, so all of it is trivially safe under concurrent requests.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub mod checks;
pub mod helpful;
pub mod keywords;
pub mod signals;
pub mod spam;

/// Error returned when an evaluator receives empty or whitespace-only
/// content. Evaluators never score an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingContent;

impl fmt::Display for MissingContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing content")
    }
}

impl std::error::Error for MissingContent {}

/// Generic pass/fail result shared by the structural checks.
///
/// `detail` carries the named sub-signals (booleans and counts) that went
/// into the decision, so callers can see *why* a check passed or failed.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub score: f64,
    pub detail: Map<String, Value>,
}

/// Round a score to 2 decimal digits for presentation.
///
/// Rounding happens only at the response boundary — score composition
/// always runs at full precision.
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_to_two_digits() {
        assert_eq!(round2(0.456), 0.46);
        assert_eq!(round2(0.454), 0.45);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
