// Heuristic signal booster — secondary spam indicators.
//
// Catches what keyword matching alone misses: SHOUTING, "!!!", links,
// phone numbers, money amounts. Each detected unit adds a fixed increment
// to the boost, and the total is capped so the keyword base score can
// still dominate the final label when boost signals alone are weak.

use anyhow::Result;
use regex_lite::Regex;
use serde::Serialize;

use crate::evaluator::keywords::{self, SPAM_PHRASES};

/// Boost contributed by each detected unit.
pub const BOOST_PER_UNIT: f64 = 0.15;

/// Upper bound on the total boost, regardless of how many units fire.
pub const BOOST_CAP: f64 = 0.45;

/// Run of 3+ capital letters (SHOUTING).
const CAPS_RUN_PATTERN: &str = r"\b[A-Z]{3,}\b";

/// `!`, `?`, or `.` repeated 3+ times.
const PUNCTUATION_RUN_PATTERN: &str = r"!{3,}|\?{3,}|\.{3,}";

/// http(s) URL or bare www. link.
const LINK_PATTERN: &str = r"(?i)https?://\S+|\bwww\.\S+";

/// Phone-number-shaped token, e.g. 555-123-4567 or (555) 123 4567.
const PHONE_PATTERN: &str = r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b";

/// Currency/money-shaped token: $99, $ 5, "500 dollars", "20 USD".
const MONEY_PATTERN: &str = r"(?i)\$\s?\d|\b\d+(\.\d{2})?\s?(dollars|usd)\b";

/// Per-signal breakdown reported alongside the spam verdict.
#[derive(Debug, Clone, Serialize)]
pub struct SignalBreakdown {
    /// Promotional phrase occurrences, counting repeats
    pub phrase_hits: usize,
    /// ALL-CAPS word run of length >= 3
    pub caps_run: bool,
    /// `!`, `?`, or `.` repeated >= 3 times
    pub punctuation_run: bool,
    /// http(s) or www. link
    pub link: bool,
    /// Phone-number-shaped token
    pub phone: bool,
    /// Currency/money-shaped token
    pub money: bool,
    /// Total units before the boost cap
    pub units: usize,
}

/// Compiled signal detectors.
///
/// Compiled once at startup and shared read-only across requests.
pub struct SignalDetectors {
    caps_run: Regex,
    punctuation_run: Regex,
    link: Regex,
    phone: Regex,
    money: Regex,
}

impl SignalDetectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            caps_run: Regex::new(CAPS_RUN_PATTERN)?,
            punctuation_run: Regex::new(PUNCTUATION_RUN_PATTERN)?,
            link: Regex::new(LINK_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
            money: Regex::new(MONEY_PATTERN)?,
        })
    }

    pub fn has_caps_run(&self, text: &str) -> bool {
        self.caps_run.is_match(text)
    }

    pub fn has_punctuation_run(&self, text: &str) -> bool {
        self.punctuation_run.is_match(text)
    }

    pub fn has_link(&self, text: &str) -> bool {
        self.link.is_match(text)
    }

    pub fn has_phone(&self, text: &str) -> bool {
        self.phone.is_match(text)
    }

    pub fn has_money(&self, text: &str) -> bool {
        self.money.is_match(text)
    }

    /// Compute the capped boost for `text`.
    ///
    /// Takes the raw (not lower-cased) text — the caps-run detector is
    /// case-sensitive. Phrase hits are counted on a lower-cased copy.
    ///
    /// `boost = min(BOOST_PER_UNIT * units, BOOST_CAP)`
    pub fn boost(&self, text: &str) -> (f64, SignalBreakdown) {
        let lowered = text.to_lowercase();

        let phrase_hits = keywords::phrase_hits(&lowered, SPAM_PHRASES);
        let caps_run = self.has_caps_run(text);
        let punctuation_run = self.has_punctuation_run(text);
        let link = self.has_link(text);
        let phone = self.has_phone(text);
        let money = self.has_money(text);

        let units = phrase_hits
            + usize::from(caps_run)
            + usize::from(punctuation_run)
            + usize::from(link)
            + usize::from(phone)
            + usize::from(money);

        let boost = (BOOST_PER_UNIT * units as f64).min(BOOST_CAP);

        (
            boost,
            SignalBreakdown {
                phrase_hits,
                caps_run,
                punctuation_run,
                link,
                phone,
                money,
                units,
            },
        )
    }
}
