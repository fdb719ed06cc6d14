//! Safety nets for when section splitting degenerates on unstructured
//! input. First a simple keyword-line splitter; if that also fails, a
//! line-level classifier keeps only provably professional lines. The bias
//! is always toward over-redaction: personal data must not survive just
//! because the document had no headers.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::stats::AnonymizationStats;
use crate::pipeline::sections::SectionMap;

struct FallbackPattern {
    key: &'static str,
    regex: Regex,
}

static FALLBACK_HEADERS: Lazy<Vec<FallbackPattern>> = Lazy::new(|| {
    let table: &[(&str, &str)] = &[
        (
            "experience",
            r"(?i)^(work\s+experience|experience|professional\s+experience)$",
        ),
        ("education", r"(?i)^(education|academic\s+background|formation)$"),
        ("skills", r"(?i)^(skills|technical\s+skills|comp[eé]tences)$"),
        ("summary", r"(?i)^(summary|profile|profil|objective|about)$"),
    ];
    table
        .iter()
        .map(|&(key, pattern)| FallbackPattern {
            key,
            regex: Regex::new(pattern).expect("static fallback pattern compiles"),
        })
        .collect()
});

static PHONE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9 ()\-]{8,}").expect("compiles"));
static BARE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+\s+[a-zA-Z]+$").expect("compiles"));
static HEADER_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(summary|profile|experience|education|skills|about)$").expect("compiles")
});
static DATE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}\s*[-–]\s*\d{4}").expect("compiles"));
static DATE_TO_PRESENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}\s*[-–]\s*(present|current)").expect("compiles"));
static YEARS_OF_EXPERIENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+.*years").expect("compiles"));

/// Simple keyword-line re-splitting of text the main splitter could not
/// segment. Lines matching a known header pattern open a new section;
/// everything else accumulates under the current key.
pub(super) fn fallback_section_detection(text: &str, stats: &mut AnonymizationStats) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current_key = "summary";
    let mut current_body = String::new();

    for line in text.lines() {
        let line = line.trim();

        let header = FALLBACK_HEADERS
            .iter()
            .find(|pattern| pattern.regex.is_match(line));

        if let Some(header) = header {
            if !current_body.is_empty() {
                sections.insert(current_key.to_string(), current_body.trim().to_string());
            }
            current_key = header.key;
            current_body = String::new();
        } else if !line.is_empty() {
            if !current_body.is_empty() {
                current_body.push('\n');
            }
            current_body.push_str(line);
        }
    }

    if !current_body.is_empty() {
        sections.insert(current_key.to_string(), current_body.trim().to_string());
    }

    if sections.len() <= 1 {
        debug!("keyword fallback degenerated; extracting professional lines only");
        sections = extract_professional_content(text, stats);
    }

    stats
        .anonymized_items
        .push("FALLBACK: used simple section detection".to_string());
    sections
}

/// Last resort: keep only lines the classifier accepts as professional
/// and present them as a synthetic experience section.
fn extract_professional_content(text: &str, stats: &mut AnonymizationStats) -> SectionMap {
    let mut sections = SectionMap::new();

    // Some upstream extractors hand over text with literal "\n" escapes.
    let normalized = text.replace("\\n", "\n");
    let professional: Vec<&str> = normalized
        .lines()
        .map(str::trim)
        .filter(|line| is_professional_line(line))
        .collect();

    if professional.is_empty() {
        sections.insert(
            "experience".to_string(),
            "No professional content found after anonymization.".to_string(),
        );
        stats
            .anonymized_items
            .push("FALLBACK: no professional content detected".to_string());
    } else {
        sections.insert("experience".to_string(), professional.join("\n"));
    }

    stats
        .anonymized_items
        .push("FALLBACK: extracted professional content only".to_string());
    sections
}

/// Line-level classifier: rejects anything carrying personal markers,
/// then requires a positive professional signal.
pub(super) fn is_professional_line(line: &str) -> bool {
    if line.len() < 5 {
        return false;
    }

    let lower = line.trim().to_lowercase();

    let personal_marker = lower.contains('@')
        || PHONE_LIKE.is_match(&lower)
        || lower.contains("linkedin")
        || lower.contains("years old")
        || lower.contains("born")
        || lower.contains("live in")
        || lower.contains("based in")
        || lower.contains("living in")
        || lower.contains("love hiking")
        || lower.contains("love playing")
        || lower.contains("free time")
        || lower.contains("hobbies")
        || lower.contains("guitar")
        || lower.contains("photography")
        || BARE_NAME.is_match(&lower);
    if personal_marker {
        return false;
    }

    // Headers carry no content of their own.
    if HEADER_ONLY.is_match(&lower) {
        return false;
    }

    const PROFESSIONAL_MARKERS: &[&str] = &[
        // Roles
        "engineer",
        "developer",
        "manager",
        "analyst",
        "director",
        "consultant",
        "senior",
        "lead",
        // Work-experience verbs and context
        "developed",
        "led",
        "managed",
        "implemented",
        "microservices",
        "team",
        // Education
        "university",
        "college",
        "degree",
        "bachelor",
        "master",
        "phd",
        "gpa",
        "computer science",
        // Technology
        "java",
        "python",
        "javascript",
        "react",
        "spring",
        "aws",
        "docker",
        "sql",
        // Company suffixes
        "corp",
        "inc",
        "ltd",
        "llc",
        // French equivalents
        "ingénieur",
        "développeur",
        "université",
        "diplôme",
        "sarl",
        "sas",
    ];

    if PROFESSIONAL_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
    {
        return true;
    }

    if DATE_RANGE.is_match(&lower) || DATE_TO_PRESENT.is_match(&lower) {
        return true;
    }

    lower.contains("experience") && YEARS_OF_EXPERIENCE.is_match(&lower)
}
