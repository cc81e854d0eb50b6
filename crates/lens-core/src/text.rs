//! Text helpers shared by builders and retrieval: term extraction,
//! keyword matching, and cosine similarity.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::MIN_TERM_LEN;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "has", "have",
    "her", "his", "its", "our", "out", "was", "were", "will", "with", "this", "that", "these",
    "those", "from", "into", "onto", "than", "then", "them", "they", "their", "there", "what",
    "when", "where", "which", "while", "who", "whom", "why", "how", "also", "been", "being",
    "should", "would", "could", "about", "over", "under", "more", "most", "some", "such", "only",
    "other", "each", "per", "via", "does", "did", "done", "just", "very",
];

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9_\-]*").expect("static token regex"))
}

/// Lowercase and trim a term. Returns an empty string for stopwords and short tokens.
pub fn normalize_term(term: &str) -> String {
    let t = term.trim().trim_matches(|c: char| c == '-' || c == '_').to_lowercase();
    if t.chars().count() < MIN_TERM_LEN || STOPWORDS.contains(&t.as_str()) {
        return String::new();
    }
    t
}

/// Tokenize free text into a normalized term set.
pub fn extract_terms(text: &str) -> BTreeSet<String> {
    token_regex()
        .find_iter(text)
        .map(|m| normalize_term(m.as_str()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Case-insensitive: does any keyword occur in any of the fields?
pub fn contains_any_keyword(fields: &[&str], keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let lowered: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .any(|k| lowered.iter().any(|f| f.contains(&k)))
}

/// Truncate to at most `max` characters on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

/// Cosine similarity between two vectors.
/// Returns 0.0 when the lengths differ or either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}
