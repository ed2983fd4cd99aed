// Domain-specific structural checks — authority, domination, GBP.
//
// Pure counting/membership rules over the request payload plus a constant
// rule table. None of these need the signal-boosting machinery.

use serde_json::{json, Map, Value};

use crate::evaluator::{MissingContent, Verdict};

/// Minimum number of external links for the authority awards check.
pub const MIN_EXTERNAL_LINKS: usize = 2;

/// Minimum number of truthy sections for the domination content check.
pub const MIN_SECTIONS_PRESENT: usize = 10;

/// Call-to-action keywords for the GBP local-relevance check.
///
/// Matching is substring-based against a case-folded copy of the body, so
/// every entry here must be lower-case.
pub const CTA_KEYWORDS: &[&str] = &["call", "schedule", "book", "get a quote"];

/// Maximum body length carried into a GBP post preview.
pub const MAX_PREVIEW_BODY_CHARS: usize = 1500;

/// Python-style truthiness over a JSON value.
///
/// `false`, `0`, `""`, `[]`, `{}`, and `null` are falsy; everything else
/// is truthy. Section payloads arrive from loosely-typed upstream tools,
/// so a strict bool check would reject legitimate `"yes"`/`1` markers.
pub fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Authority awards check: passes when the post cites at least
/// `MIN_EXTERNAL_LINKS` external sources.
pub fn external_validation(external_links: &[String]) -> Verdict {
    let count = external_links.len();
    let passed = count >= MIN_EXTERNAL_LINKS;

    let mut detail = Map::new();
    detail.insert("external_links".into(), json!(count));
    detail.insert("has_external_validation".into(), json!(passed));

    Verdict {
        passed,
        score: count as f64,
        detail,
    }
}

/// Domination content check: counts truthy section entries, passes at
/// `MIN_SECTIONS_PRESENT` or more.
pub fn section_completeness(sections: &Map<String, Value>) -> Verdict {
    let present = sections.values().filter(|v| value_is_truthy(v)).count();
    let passed = present >= MIN_SECTIONS_PRESENT;

    let mut detail = Map::new();
    detail.insert("sections_present".into(), json!(present));
    detail.insert("required".into(), json!(MIN_SECTIONS_PRESENT));

    Verdict {
        passed,
        score: present as f64,
        detail,
    }
}

/// GBP local-relevance check: the body must mention one of the supplied
/// cities AND contain a call-to-action keyword. Both conditions are
/// reported individually so callers can see which one failed.
pub fn local_relevance(body: &str, cities: &[String]) -> Result<Verdict, MissingContent> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(MissingContent);
    }
    let lowered = trimmed.to_lowercase();

    let mentions_city = cities
        .iter()
        .any(|city| !city.is_empty() && lowered.contains(&city.to_lowercase()));
    let has_call_to_action = CTA_KEYWORDS.iter().any(|kw| lowered.contains(kw));
    let passed = mentions_city && has_call_to_action;

    let conditions_met = usize::from(mentions_city) + usize::from(has_call_to_action);

    let mut detail = Map::new();
    detail.insert("mentions_city".into(), json!(mentions_city));
    detail.insert("has_call_to_action".into(), json!(has_call_to_action));

    Ok(Verdict {
        passed,
        score: conditions_met as f64 / 2.0,
        detail,
    })
}

/// Build a GBP post preview payload.
///
/// Fills defaults for missing fields and caps the body length; no
/// validation beyond that.
pub fn build_post_preview(title: Option<String>, body: &str, utm: Option<Value>) -> Value {
    json!({
        "title": title.unwrap_or_else(|| "Untitled".to_string()),
        "body": truncate_chars(body, MAX_PREVIEW_BODY_CHARS),
        "utm": utm.unwrap_or_else(|| json!({ "source": "gbp", "medium": "post" })),
    })
}

/// UTF-8-safe truncation to at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
