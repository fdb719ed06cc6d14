//! Context validation for header candidates: filters company-name
//! lookalikes, scores the content that follows a candidate against the
//! section type it claims, and folds both into the final confidence.

use once_cell::sync::Lazy;
use regex::Regex;

use super::headers::{contains_company_suffix, HeaderCandidate, HeaderStyle};
use super::SectionKind;

const JOB_TITLE_WORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "ingénieur",
    "développeur",
    "responsable",
    "directeur",
];

const MIN_FINAL_CONFIDENCE: f64 = 0.4;

static YEAR_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}\s*[-–]\s*\d{4}").expect("compiles"));
static YEAR_TO_PRESENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{4}\s*[-–]\s*(present|current|aujourd'hui|actuel)").expect("compiles")
});
static ANY_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("compiles"));

/// Returns the refined confidence for an accepted candidate, or `None`
/// when the candidate is rejected.
pub(crate) fn validate_candidate(candidate: &HeaderCandidate, lines: &[&str]) -> Option<f64> {
    // Headers hugging the end of the document have nothing to introduce.
    if candidate.end_line + 2 >= lines.len() {
        return None;
    }

    if looks_like_company_entry(candidate, lines) {
        return None;
    }

    let content_score = score_following_content(candidate, lines);
    if content_score < 0.3 {
        return None;
    }

    let mut multiplier = 0.7 + 0.3 * content_score;
    multiplier *= 0.8 + 0.2 * surrounding_context_score(candidate, lines);

    if candidate.style == HeaderStyle::MultiLine && candidate.text.len() > 60 {
        multiplier *= 0.6;
    }

    let final_confidence = (candidate.confidence * multiplier).min(1.0);
    (final_confidence >= MIN_FINAL_CONFIDENCE).then_some(final_confidence)
}

/// A keyword embedded in a longer line next to date ranges or job titles
/// is usually a company name ("Experience Solutions Inc"), not a header.
/// Exact keyword headers are exempt: a real Experience header legitimately
/// abuts job entries.
fn looks_like_company_entry(candidate: &HeaderCandidate, lines: &[&str]) -> bool {
    let header_lower = candidate.text.to_lowercase();
    if contains_company_suffix(&header_lower) {
        return true;
    }

    if candidate.exact {
        return false;
    }

    let from = candidate.start_line.saturating_sub(2);
    let to = (candidate.end_line + 3).min(lines.len());

    for index in from..to {
        if (candidate.start_line..=candidate.end_line).contains(&index) {
            continue;
        }
        let line = lines[index].to_lowercase();

        if YEAR_RANGE.is_match(&line) || YEAR_TO_PRESENT.is_match(&line) {
            return true;
        }
        if JOB_TITLE_WORDS.iter().any(|word| line.contains(word)) {
            return true;
        }
    }

    false
}

/// Average per-line score of the first ten non-empty lines after the
/// candidate, judged by the section type's own keyword profile.
fn score_following_content(candidate: &HeaderCandidate, lines: &[&str]) -> f64 {
    let start = candidate.end_line + 1;
    let end = (start + 10).min(lines.len());
    if start >= lines.len() {
        return 0.0;
    }

    let mut total = 0.0;
    let mut scored_lines = 0u32;

    for line in &lines[start..end] {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }
        scored_lines += 1;
        total += match candidate.kind {
            SectionKind::Experience => score_experience_line(&line),
            SectionKind::Education => score_education_line(&line),
            SectionKind::Skills => score_skills_line(&line),
            SectionKind::Summary => 0.5,
        };
    }

    if scored_lines == 0 {
        0.0
    } else {
        total / f64::from(scored_lines)
    }
}

fn score_experience_line(line: &str) -> f64 {
    let mut score: f64 = 0.3;

    const TITLE_WORDS: &[&str] = &[
        "engineer",
        "developer",
        "manager",
        "analyst",
        "consultant",
        "director",
        "ingénieur",
        "développeur",
        "responsable",
        "chef",
        "directeur",
    ];
    if TITLE_WORDS.iter().any(|word| line.contains(word)) {
        score += 0.3;
    }

    if ANY_YEAR.is_match(line) || contains_company_suffix(line) {
        score += 0.2;
    }

    const ACTION_WORDS: &[&str] = &[
        "developed",
        "managed",
        "led",
        "implemented",
        "designed",
        "développé",
        "géré",
        "dirigé",
        "implémenté",
        "conçu",
    ];
    if ACTION_WORDS.iter().any(|word| line.contains(word)) {
        score += 0.3;
    }

    score.min(1.0)
}

fn score_education_line(line: &str) -> f64 {
    let mut score: f64 = 0.3;

    const DEGREE_WORDS: &[&str] = &[
        "bachelor", "master", "phd", "diploma", "degree", "licence", "doctorat", "diplôme", "bts",
        "dut",
    ];
    if DEGREE_WORDS.iter().any(|word| line.contains(word)) {
        score += 0.4;
    }

    const SCHOOL_WORDS: &[&str] = &[
        "university",
        "college",
        "school",
        "institute",
        "université",
        "école",
        "institut",
        "lycée",
    ];
    if SCHOOL_WORDS.iter().any(|word| line.contains(word)) {
        score += 0.3;
    }

    if ANY_YEAR.is_match(line) || line.contains("graduated") || line.contains("diplômé") {
        score += 0.2;
    }

    score.min(1.0)
}

fn score_skills_line(line: &str) -> f64 {
    let mut score: f64 = 0.3;

    const TECH_WORDS: &[&str] = &[
        "java",
        "python",
        "javascript",
        "sql",
        "aws",
        "docker",
        "react",
        "angular",
        "spring",
    ];
    if TECH_WORDS.iter().any(|word| line.contains(word)) {
        score += 0.4;
    }

    const CATEGORY_WORDS: &[&str] = &[
        "programming",
        "languages",
        "frameworks",
        "databases",
        "tools",
        "programmation",
        "langages",
        "outils",
    ];
    if CATEGORY_WORDS.iter().any(|word| line.contains(word)) {
        score += 0.3;
    }

    if line.matches(',').count() >= 2 {
        score += 0.3;
    }

    score.min(1.0)
}

/// Real section breaks have substance on both sides.
fn surrounding_context_score(candidate: &HeaderCandidate, lines: &[&str]) -> f64 {
    let mut score: f64 = 0.5;

    let before_start = candidate.start_line.saturating_sub(3);
    let has_content_before = lines[before_start..candidate.start_line]
        .iter()
        .any(|line| line.trim().len() > 10);
    if has_content_before {
        score += 0.2;
    }

    let after_start = candidate.end_line + 1;
    let after_end = (after_start + 4).min(lines.len());
    let has_content_after = after_start < lines.len()
        && lines[after_start..after_end]
            .iter()
            .any(|line| line.trim().len() > 5);
    if has_content_after {
        score += 0.3;
    }

    score.min(1.0)
}
