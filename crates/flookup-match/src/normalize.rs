//! Text canonicalization applied to queries and key cells before scoring.
//!
//! Human-entered name data carries casing noise, punctuation, courtesy
//! titles, and business suffixes that should not count against a match.
//! Normalization is total, deterministic, and idempotent:
//! `normalize(normalize(s)) == normalize(s)`.

/// Business suffixes dropped as whole words.
const BUSINESS_SUFFIXES: [&str; 6] = ["inc", "llc", "corp", "ltd", "company", "co"];

/// Courtesy titles dropped as whole words.
const TITLES: [&str; 5] = ["mr", "mrs", "ms", "dr", "prof"];

/// Canonicalizes a text value: lowercase, strip everything that is not
/// alphanumeric or whitespace, collapse whitespace runs, and drop known
/// title and business-suffix words. Empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .collect();
    stripped
        .split_whitespace()
        .filter(|word| !BUSINESS_SUFFIXES.contains(word) && !TITLES.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
