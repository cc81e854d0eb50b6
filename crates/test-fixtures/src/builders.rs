//! Record builders with fixed timestamps so test output is deterministic.

use chrono::{DateTime, TimeZone, Utc};
use lens_core::model::*;

/// `2026-01-01T00:00:00Z` plus `offset_secs`.
pub fn ts(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_767_225_600 + offset_secs, 0)
        .single()
        .expect("valid timestamp")
}

/// Unit vector along `axis`.
pub fn axis(dims: usize, axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis % dims] = 1.0;
    v
}

/// Unit vector whose cosine with `axis(dims, a)` is `cos`, leaning toward axis `b`.
pub fn tilted(dims: usize, a: usize, b: usize, cos: f32) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[a % dims] = cos;
    v[b % dims] = (1.0 - cos * cos).max(0.0).sqrt();
    v
}

pub fn chunk(id: &str, source_id: &str, content: &str, embedding: Vec<f32>) -> Chunk {
    Chunk {
        id: id.to_string(),
        content: content.to_string(),
        source_id: source_id.to_string(),
        lens: "engineering".to_string(),
        embedding,
        key_terms: Vec::new(),
        time_refs: Vec::new(),
        created_at: ts(0),
        superseded_by: None,
    }
}

/// A chunk with explicit key terms.
pub fn chunk_with_terms(
    id: &str,
    source_id: &str,
    content: &str,
    embedding: Vec<f32>,
    terms: &[&str],
) -> Chunk {
    let mut c = chunk(id, source_id, content, embedding);
    c.key_terms = terms.iter().map(|t| t.to_string()).collect();
    c
}

pub fn decision(id: &str, title: &str, text: &str, created_offset: i64) -> Node {
    Node::new(
        id,
        NodeAttributes::Decision(DecisionAttributes {
            title: title.to_string(),
            text: text.to_string(),
            rationale: None,
            created_at: ts(created_offset),
            conflicts_with: Vec::new(),
        }),
    )
}

pub fn question(id: &str, text: &str, status: QuestionStatus, priority: Priority) -> Node {
    Node::new(
        id,
        NodeAttributes::Question(QuestionAttributes {
            text: text.to_string(),
            status,
            priority,
            answer: None,
            answered_by: None,
            superseded_by: None,
        }),
    )
}

pub fn roadmap_item(id: &str, name: &str, description: &str, horizon: Horizon) -> Node {
    Node::new(
        id,
        NodeAttributes::RoadmapItem(RoadmapItemAttributes {
            name: name.to_string(),
            description: description.to_string(),
            horizon,
            depends_on: Vec::new(),
        }),
    )
}

pub fn assessment(id: &str, title: &str, summary: &str) -> Node {
    Node::new(
        id,
        NodeAttributes::Assessment(AssessmentAttributes {
            title: title.to_string(),
            summary: summary.to_string(),
            verdict: None,
        }),
    )
}

pub fn gap(id: &str, name: &str, description: &str, severity: Severity) -> Node {
    Node::new(
        id,
        NodeAttributes::Gap(GapAttributes {
            name: name.to_string(),
            description: description.to_string(),
            severity,
        }),
    )
}
