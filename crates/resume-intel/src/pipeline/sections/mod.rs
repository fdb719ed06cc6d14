//! Section segmentation: turns raw résumé text into a map of canonical
//! sections via confidence-scored header detection.
//!
//! The pipeline never fails: text with no detectable headers maps entirely
//! to the `summary` section.

mod context;
mod headers;
mod preprocess;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

pub use headers::{HeaderCandidate, HeaderStyle};

/// Canonical section key → body text. Built fresh per input; `BTreeMap`
/// keeps downstream iteration deterministic.
pub type SectionMap = BTreeMap<String, String>;

/// The four canonical section targets of header-keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }
}

/// Splits résumé text into canonical sections.
pub fn split_text_into_sections(text: &str) -> SectionMap {
    let preprocessed = preprocess::preprocess(text);
    let mut lines: Vec<&str> = preprocessed.split('\n').collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut accepted: Vec<HeaderCandidate> = Vec::new();
    for mut candidate in headers::detect_candidates(&lines) {
        if let Some(confidence) = context::validate_candidate(&candidate, &lines) {
            candidate.confidence = confidence;
            accepted.push(candidate);
        }
    }

    let mut resolved = resolve_overlaps(accepted);
    resolved.sort_by_key(|candidate| candidate.start_line);

    if resolved.is_empty() {
        debug!("no section headers detected; treating entire text as summary");
    }

    extract_sections(&resolved, &lines)
}

/// When two accepted candidates claim intersecting line ranges, the higher
/// confidence one wins.
fn resolve_overlaps(candidates: Vec<HeaderCandidate>) -> Vec<HeaderCandidate> {
    let mut kept: Vec<HeaderCandidate> = Vec::new();

    for candidate in candidates {
        let mut overlapped = false;
        for existing in kept.iter_mut() {
            if candidate.start_line <= existing.end_line
                && candidate.end_line >= existing.start_line
            {
                overlapped = true;
                if candidate.confidence > existing.confidence {
                    *existing = candidate.clone();
                }
                break;
            }
        }
        if !overlapped {
            kept.push(candidate);
        }
    }

    kept
}

fn extract_sections(accepted: &[HeaderCandidate], lines: &[&str]) -> SectionMap {
    let mut sections = SectionMap::new();

    if accepted.is_empty() {
        sections.insert(SectionKind::Summary.key().to_string(), lines.join("\n"));
        return sections;
    }

    if accepted[0].start_line > 0 {
        let summary = lines[..accepted[0].start_line].join("\n");
        let summary = summary.trim();
        if !summary.is_empty() {
            sections.insert(SectionKind::Summary.key().to_string(), summary.to_string());
        }
    }

    for (index, header) in accepted.iter().enumerate() {
        let body_start = header.end_line + 1;
        let body_end = accepted
            .get(index + 1)
            .map_or(lines.len(), |next| next.start_line);
        let body = if body_start < body_end {
            lines[body_start..body_end].join("\n")
        } else {
            String::new()
        };
        merge_section(&mut sections, header.kind.key(), body.trim());
    }

    sections
}

/// Two headers can map to the same canonical key (a Summary header after
/// leading free text, duplicated Experience blocks). Their bodies are
/// concatenated so no content is lost.
fn merge_section(sections: &mut SectionMap, key: &str, body: &str) {
    match sections.get_mut(key) {
        Some(existing) if !existing.is_empty() && !body.is_empty() => {
            existing.push('\n');
            existing.push_str(body);
        }
        Some(existing) if existing.is_empty() => *existing = body.to_string(),
        Some(_) => {}
        None => {
            sections.insert(key.to_string(), body.to_string());
        }
    }
}
