use std::sync::LazyLock;

use regex::Regex;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());
static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());

/// First 4-digit 19xx/20xx token, e.g. "2009[a]" → 2009.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Keep digits only and parse, e.g. "$2,847,397,339F" → 2847397339.
/// No digits (or overflow) yields 0, which drops the row later.
pub fn parse_gross(text: &str) -> i64 {
    let digits = NON_DIGIT_RE.replace_all(text, "");
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(0)
    }
}

/// Collapse runs of whitespace to single spaces, trimming the ends.
pub fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──
