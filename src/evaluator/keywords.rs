// Keyword base scorer — promotional phrase matching.
//
// The base score is the fraction of the promotional phrase table found in
// the (lower-cased) text. It is the dominant component of the spam score;
// the heuristic boost in signals.rs can only add a bounded amount on top.

/// Promotional phrases that indicate marketing spam.
///
/// Matching is substring-based against a lower-cased copy of the text, so
/// every entry here must be lower-case.
pub const SPAM_PHRASES: &[&str] = &["buy now", "click here", "limited time", "free", "discount"];

/// Fraction of `phrases` present in `text`, in [0.0, 1.0].
///
/// `text` must already be lower-cased by the caller. An empty phrase table
/// scores 0.0 rather than dividing by zero.
pub fn base_score(text: &str, phrases: &[&str]) -> f64 {
    if phrases.is_empty() {
        return 0.0;
    }
    let matches = phrases.iter().filter(|p| text.contains(*p)).count();
    matches as f64 / phrases.len() as f64
}

/// Total number of phrase occurrences in `text`, counting repeats.
///
/// Unlike `base_score` this counts every hit: "free free free" contributes
/// three units to the heuristic boost, not one.
pub fn phrase_hits(text: &str, phrases: &[&str]) -> usize {
    phrases.iter().map(|p| text.matches(*p).count()).sum()
}
