//! Hybrid anonymization: drop personal sections whole, keep professional
//! sections, and scrub any PII that leaked into the kept text. The output
//! is clean professional content with fixed `[X_REMOVED]` tags, suitable
//! for a downstream parser or human reviewer.

mod config;
mod fallback;
mod stats;

pub use config::AnonymizationConfig;
pub use stats::AnonymizationStats;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::pipeline::personal::{self, EMAIL, PHONE};
use crate::pipeline::sections::{split_text_into_sections, SectionMap};

/// Full-URL variant of the LinkedIn pattern: scrubbing must take the
/// scheme and host along with the handle.
static LINKEDIN_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(https?://)?(www\.)?linkedin\.com/in/[a-zA-Z0-9-]+/?").expect("compiles")
});

/// Sections kept unconditionally.
const PROFESSIONAL_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "certifications",
    "projects",
    "achievements",
    "publications",
    "awards",
];

/// Sections dropped unconditionally.
const PERSONAL_SECTIONS: &[&str] = &[
    "summary",
    "profile",
    "objective",
    "about",
    "contact",
    "personal",
    "interests",
    "hobbies",
    "references",
];

/// Output ordering for reconstruction; anything else follows in map order.
const PREFERRED_ORDER: &[&str] = &[
    "professional_summary",
    "experience",
    "education",
    "skills",
    "certifications",
    "projects",
    "achievements",
    "awards",
    "publications",
];

/// Minimum digits-and-punctuation length for a phone match to count;
/// shorter runs are usually years or ids.
const MIN_PHONE_LENGTH: usize = 7;

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("compiles"));
static SHORT_PHONE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9 ()\-]{6,}").expect("compiles"));

/// Result of one anonymization pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnonymizationOutcome {
    pub anonymized_text: String,
    pub stats: AnonymizationStats,
}

/// Anonymizes with the standard preset.
pub fn anonymize_with_defaults(resume_text: &str) -> AnonymizationOutcome {
    anonymize(resume_text, AnonymizationConfig::standard())
}

/// Section-based anonymization with leak scrubbing. Never fails: empty
/// input yields an empty outcome.
pub fn anonymize(resume_text: &str, config: AnonymizationConfig) -> AnonymizationOutcome {
    if resume_text.trim().is_empty() {
        return AnonymizationOutcome {
            anonymized_text: String::new(),
            stats: AnonymizationStats::default(),
        };
    }

    let mut stats = AnonymizationStats::default();

    let mut sections = split_text_into_sections(resume_text);

    // A single long summary means header detection failed; re-split with
    // the simpler fallbacks before classifying.
    if sections.len() == 1 {
        let degenerate = sections
            .get("summary")
            .filter(|body| body.len() > 200)
            .cloned();
        if let Some(body) = degenerate {
            debug!("section splitting degenerated; engaging fallback detection");
            sections = fallback::fallback_section_detection(&body, &mut stats);
        }
    }

    stats.original_sections = sections.keys().cloned().collect();

    let mut kept = SectionMap::new();
    for (key, body) in &sections {
        if should_keep_section(key, config) {
            stats.kept_sections.insert(key.clone());
            kept.insert(key.clone(), body.clone());
        } else {
            stats.removed_sections.insert(key.clone());
            stats.removed_character_count += body.len();
        }
    }

    let mut cleaned = SectionMap::new();
    for (key, body) in &kept {
        cleaned.insert(key.clone(), scrub_leaked_pii(body, config, &mut stats));
    }

    if config.include_cleaned_summary {
        if let Some(summary) = sections.get("summary") {
            let detected_name = personal::detect_personal_info(resume_text).name;
            let professional_summary =
                extract_professional_summary(summary, detected_name.as_deref(), &mut stats);
            if !professional_summary.trim().is_empty() {
                cleaned.insert("professional_summary".to_string(), professional_summary);
            }
        }
    }

    AnonymizationOutcome {
        anonymized_text: reconstruct(&cleaned),
        stats,
    }
}

fn should_keep_section(key: &str, config: AnonymizationConfig) -> bool {
    let key = key.to_lowercase();
    if PROFESSIONAL_SECTIONS.contains(&key.as_str()) {
        return true;
    }
    if PERSONAL_SECTIONS.contains(&key.as_str()) {
        return false;
    }
    config.keep_unknown_sections
}

/// Repeated find-and-replace of leaked email/phone/LinkedIn literals with
/// fixed tags, each removal logged.
fn scrub_leaked_pii(
    content: &str,
    config: AnonymizationConfig,
    stats: &mut AnonymizationStats,
) -> String {
    let mut cleaned = content.to_string();

    if config.remove_leaked_emails {
        cleaned = scrub_pattern(&cleaned, &EMAIL, "[EMAIL_REMOVED]", "EMAIL", 0, stats);
    }
    if config.remove_leaked_phones {
        cleaned = scrub_pattern(
            &cleaned,
            &PHONE,
            "[PHONE_REMOVED]",
            "PHONE",
            MIN_PHONE_LENGTH,
            stats,
        );
    }
    if config.remove_leaked_social_media {
        cleaned = scrub_pattern(
            &cleaned,
            &LINKEDIN_URL,
            "[LINKEDIN_REMOVED]",
            "LINKEDIN",
            0,
            stats,
        );
    }

    cleaned
}

fn scrub_pattern(
    content: &str,
    pattern: &Regex,
    tag: &str,
    label: &str,
    min_length: usize,
    stats: &mut AnonymizationStats,
) -> String {
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(found) = pattern.find(rest) {
        let literal = found.as_str().trim();
        if literal.len() >= min_length {
            stats.anonymized_items.push(format!("{label}: {literal}"));
            result.push_str(&rest[..found.start()]);
            result.push_str(tag);
        } else {
            result.push_str(&rest[..found.end()]);
        }
        rest = &rest[found.end()..];
    }

    result.push_str(rest);
    result
}

/// Keeps summary sentences that read professional and carry no personal
/// markers, joined with ". ". Dropped sentences are logged. The detected
/// candidate name is treated as a personal marker: the summary bucket also
/// holds the contact block when no explicit Summary header exists.
fn extract_professional_summary(
    summary: &str,
    detected_name: Option<&str>,
    stats: &mut AnonymizationStats,
) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for sentence in SENTENCE_SPLIT.split(summary) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        if is_professional_sentence(sentence, detected_name) {
            kept.push(sentence);
        } else {
            stats.removed_summary_elements.push(sentence.to_string());
        }
    }

    kept.join(". ")
}

fn is_professional_sentence(sentence: &str, detected_name: Option<&str>) -> bool {
    if sentence.len() < 10 {
        return false;
    }

    let lower = sentence.to_lowercase();

    let personal = lower.contains("years old")
        || lower.contains("born")
        || lower.contains("married")
        || lower.contains("live in")
        || lower.contains("based in")
        || lower.contains("from")
        || lower.contains('@')
        || SHORT_PHONE_LIKE.is_match(&lower);
    if personal {
        return false;
    }

    if let Some(name) = detected_name {
        if !name.is_empty() && lower.contains(&name.to_lowercase()) {
            return false;
        }
    }

    const PROFESSIONAL_SIGNALS: &[&str] = &[
        "experience",
        "skilled",
        "expertise",
        "developer",
        "engineer",
        "manager",
        "professional",
        "specializ",
        "focus",
    ];
    PROFESSIONAL_SIGNALS
        .iter()
        .any(|signal| lower.contains(signal))
}

/// Emits kept sections in the preferred order, then any remaining ones in
/// map order, each under an upper-cased header. Empty sections vanish.
fn reconstruct(sections: &SectionMap) -> String {
    let mut output = String::new();

    for key in PREFERRED_ORDER {
        if let Some(body) = sections.get(*key) {
            append_section(&mut output, key, body);
        }
    }
    for (key, body) in sections {
        if !PREFERRED_ORDER.contains(&key.as_str()) {
            append_section(&mut output, key, body);
        }
    }

    output.trim().to_string()
}

fn append_section(output: &mut String, key: &str, body: &str) {
    let body = body.trim();
    if body.is_empty() {
        return;
    }
    output.push_str(&format_section_header(key));
    output.push('\n');
    output.push_str(body);
    output.push_str("\n\n");
}

fn format_section_header(key: &str) -> String {
    key.to_uppercase().replace('_', " ")
}

/// Whole-text identity redaction: detects name/email/phone/LinkedIn and
/// replaces every literal occurrence with a tag. A lighter alternative to
/// the section-based pass when structure does not matter.
pub fn redact_detected_identity(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let info = personal::detect_personal_info(text);
    let mut redacted = text.to_string();

    if let Some(name) = info.name.as_deref().filter(|name| !name.is_empty()) {
        redacted = redacted.replace(name, "[NAME]");
    }
    if let Some(email) = info.email.as_deref().filter(|email| !email.is_empty()) {
        redacted = redacted.replace(email, "[EMAIL]");
    }
    if let Some(phone) = info.phone.as_deref().filter(|phone| !phone.is_empty()) {
        redacted = redacted.replace(phone, "[PHONE]");
    }
    if let Some(url) = personal::extract_linkedin_url(text) {
        let handle = url.trim_start_matches("https://www.");
        redacted = redacted.replace(handle, "[LINKEDIN]");
    }

    redacted
}
