//! Gradient expression composition and decomposition.
//!
//! The portable record stores each gradient pair as a single CSS-style
//! `linear-gradient(to right, <start>, <end>)` string; in memory the
//! pair stays decomposed. Decomposition scans for embedded `#rrggbb`
//! tokens rather than parsing CSS.

use crate::model::GradientPair;
use regex_lite::Regex;
use std::sync::OnceLock;

fn hex_color() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("hex color pattern"))
}

/// Render the pair as the record's gradient expression.
pub fn compose(pair: &GradientPair) -> String {
    format!("linear-gradient(to right, {}, {})", pair.start, pair.end)
}

/// Extract the first two hex color tokens from a gradient expression.
///
/// Absent input, or fewer than two embedded tokens, falls back to the
/// given default pair — the import tolerance policy, not an error.
pub fn decompose(raw: Option<&str>, fallback: &GradientPair) -> GradientPair {
    let Some(raw) = raw else {
        return fallback.clone();
    };

    let mut tokens = hex_color().find_iter(raw);
    match (tokens.next(), tokens.next()) {
        (Some(start), Some(end)) => GradientPair::new(start.as_str(), end.as_str()),
        _ => fallback.clone(),
    }
}
