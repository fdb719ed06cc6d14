//! Header-candidate detection. Each line (and short line window) is tested
//! against the section-keyword table in four styles; every hit gets a
//! confidence score for the later context-validation pass to refine.

use serde::Serialize;

use super::SectionKind;

/// Keyword table evaluated in priority order. Adding a locale is a data
/// change: new rows, no new code.
pub(crate) const SECTION_KEYWORDS: &[(&str, SectionKind)] = &[
    // English
    ("experience", SectionKind::Experience),
    ("employment history", SectionKind::Experience),
    ("work experience", SectionKind::Experience),
    ("professional experience", SectionKind::Experience),
    ("work history", SectionKind::Experience),
    ("career history", SectionKind::Experience),
    ("employment", SectionKind::Experience),
    ("education", SectionKind::Education),
    ("academic background", SectionKind::Education),
    ("academic history", SectionKind::Education),
    ("skills", SectionKind::Skills),
    ("technical skills", SectionKind::Skills),
    ("competencies", SectionKind::Skills),
    ("core competencies", SectionKind::Skills),
    ("summary", SectionKind::Summary),
    ("profile", SectionKind::Summary),
    ("objective", SectionKind::Summary),
    ("about", SectionKind::Summary),
    // French
    ("expérience professionnelle", SectionKind::Experience),
    ("expériences professionnelles", SectionKind::Experience),
    ("expériences", SectionKind::Experience),
    ("expérience", SectionKind::Experience),
    ("historique professionnel", SectionKind::Experience),
    ("parcours professionnel", SectionKind::Experience),
    ("formation", SectionKind::Education),
    ("formations", SectionKind::Education),
    ("éducation", SectionKind::Education),
    ("parcours académique", SectionKind::Education),
    ("compétences", SectionKind::Skills),
    ("compétences techniques", SectionKind::Skills),
    ("savoir-faire", SectionKind::Skills),
    ("profil", SectionKind::Summary),
    ("à propos", SectionKind::Summary),
    ("résumé", SectionKind::Summary),
    ("objectif", SectionKind::Summary),
];

const COMPANY_SUFFIXES: &[&str] = &[
    "inc", "corp", "ltd", "llc", "sarl", "sas", "gmbh", "ag",
];

/// Visual style a header candidate was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    SingleLine,
    MultiLine,
    Bulleted,
    Indented,
}

/// A line or line-group hypothesized to be a section title. Transient:
/// lives only while segmentation runs.
#[derive(Debug, Clone)]
pub struct HeaderCandidate {
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
    pub style: HeaderStyle,
    pub confidence: f64,
    pub keyword: &'static str,
    pub kind: SectionKind,
    /// The candidate is nothing but the keyword itself (ignoring case and
    /// a trailing colon). Exact headers skip the job-entry adjacency
    /// rejection, which exists to weed out company-name lookalikes.
    pub exact: bool,
}

/// True when any whitespace-delimited token of the line, stripped of
/// punctuation, is a company-suffix word.
pub(crate) fn contains_company_suffix(line_lower: &str) -> bool {
    line_lower
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|word| COMPANY_SUFFIXES.contains(&word))
}

fn strip_header_decoration(line: &str) -> &str {
    line.trim().trim_end_matches(':').trim()
}

fn is_exact_keyword(line: &str, keyword: &str) -> bool {
    strip_header_decoration(line).to_lowercase() == keyword
}

pub(crate) fn detect_candidates(lines: &[&str]) -> Vec<HeaderCandidate> {
    let mut candidates = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(candidate) = check_single_line(line, index) {
            candidates.push(candidate);
        }
        if let Some(candidate) = check_bulleted(line, index) {
            candidates.push(candidate);
        }
        if let Some(candidate) = check_indented(raw, index) {
            candidates.push(candidate);
        }
        if let Some(candidate) = check_multi_line(lines, index) {
            candidates.push(candidate);
        }
    }

    candidates
}

fn check_single_line(line: &str, index: usize) -> Option<HeaderCandidate> {
    let lower = line.to_lowercase();

    for &(keyword, kind) in SECTION_KEYWORDS {
        let exact = is_exact_keyword(line, keyword);
        let caps_with_keyword =
            line == line.to_uppercase() && lower.contains(keyword) && line.len() < 50;

        if !exact && !caps_with_keyword {
            continue;
        }

        let mut confidence: f64 = 0.5;
        if exact {
            confidence += 0.4;
        }
        if line == line.to_uppercase() {
            confidence += 0.2;
        }
        if line.len() < 30 {
            confidence += 0.1;
        }
        if contains_company_suffix(&lower) {
            confidence -= 0.3;
        }
        let confidence = confidence.min(1.0);

        if confidence > 0.6 {
            return Some(HeaderCandidate {
                text: line.to_string(),
                start_line: index,
                end_line: index,
                style: HeaderStyle::SingleLine,
                confidence,
                keyword,
                kind,
                exact,
            });
        }
    }

    None
}

fn check_bulleted(line: &str, index: usize) -> Option<HeaderCandidate> {
    let rest = line.strip_prefix(['•', '-', '*', '+'])?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let content = rest.trim_start();
    if content.is_empty() {
        return None;
    }
    decorated_candidate(line, content, index, HeaderStyle::Bulleted)
}

fn check_indented(raw: &str, index: usize) -> Option<HeaderCandidate> {
    let indent = raw.len() - raw.trim_start().len();
    if indent < 3 {
        return None;
    }
    decorated_candidate(raw.trim(), raw.trim(), index, HeaderStyle::Indented)
}

/// Shared scoring for bulleted and indented variants.
fn decorated_candidate(
    full: &str,
    content: &str,
    index: usize,
    style: HeaderStyle,
) -> Option<HeaderCandidate> {
    let lower = content.to_lowercase();

    for &(keyword, kind) in SECTION_KEYWORDS {
        if !lower.contains(keyword) || content.len() >= 50 {
            continue;
        }

        let exact = is_exact_keyword(content, keyword);
        let mut confidence: f64 = 0.6;
        if exact {
            confidence += 0.3;
        }
        if content.len() < 25 {
            confidence += 0.1;
        }
        if contains_company_suffix(&lower) {
            confidence -= 0.3;
        }
        let confidence = confidence.min(1.0);

        if confidence > 0.6 {
            return Some(HeaderCandidate {
                text: full.to_string(),
                start_line: index,
                end_line: index,
                style,
                confidence,
                keyword,
                kind,
                exact,
            });
        }
    }

    None
}

/// Tests 2- and 3-line windows for headers wrapped across lines
/// ("EXPÉRIENCE\nPROFESSIONNELLE").
fn check_multi_line(lines: &[&str], index: usize) -> Option<HeaderCandidate> {
    if index + 1 >= lines.len() {
        return None;
    }

    let first = lines[index].trim();
    let second = lines[index + 1].trim();
    if first.is_empty() || second.is_empty() {
        return None;
    }

    if let Some(candidate) = check_window(first, second, index, index + 1) {
        return Some(candidate);
    }

    if index + 2 < lines.len() {
        let third = lines[index + 2].trim();
        if !third.is_empty() && third.len() < 30 {
            let rest = format!("{second} {third}");
            return check_window(first, &rest, index, index + 2);
        }
    }

    None
}

fn check_window(
    first: &str,
    rest: &str,
    start_line: usize,
    end_line: usize,
) -> Option<HeaderCandidate> {
    let combo = format!("{} {}", first, rest).to_lowercase();

    for &(keyword, kind) in SECTION_KEYWORDS {
        if !combo.contains(keyword) {
            continue;
        }

        let mut confidence: f64 = 0.6;
        if first.len() < 20 && rest.len() < 30 {
            confidence += 0.2;
        }
        if combo.contains("expérience professionnelle")
            || combo.contains("work experience")
            || combo.contains("professional experience")
        {
            confidence += 0.2;
        }
        let confidence: f64 = confidence.min(1.0);

        if confidence > 0.7 {
            return Some(HeaderCandidate {
                text: format!("{first}\n{rest}"),
                start_line,
                end_line,
                style: HeaderStyle::MultiLine,
                confidence,
                keyword,
                kind,
                exact: combo.trim() == keyword,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keyword_line_is_a_strong_candidate() {
        let lines = vec!["Experience"];
        let candidates = detect_candidates(&lines);
        assert_eq!(candidates.len(), 1);
        let header = &candidates[0];
        assert_eq!(header.kind, SectionKind::Experience);
        assert!(header.exact);
        assert!(header.confidence > 0.8);
    }

    #[test]
    fn uppercase_keyword_with_extra_words_is_detected_but_inexact() {
        let lines = vec!["WORK EXPERIENCE DETAILS"];
        let candidates = detect_candidates(&lines);
        assert!(!candidates.is_empty());
        assert!(!candidates[0].exact);
    }

    #[test]
    fn company_suffix_lowers_confidence_below_threshold() {
        let lines = vec!["EXPERIENCE SOLUTIONS INC"];
        let candidates = detect_candidates(&lines);
        assert!(
            candidates.iter().all(|c| c.confidence <= 0.7),
            "company-like line should not score as a confident header"
        );
    }

    #[test]
    fn bulleted_header_is_detected() {
        let lines = vec!["• Skills"];
        let candidates = detect_candidates(&lines);
        assert!(candidates
            .iter()
            .any(|c| c.style == HeaderStyle::Bulleted && c.kind == SectionKind::Skills));
    }

    #[test]
    fn indented_header_is_detected() {
        let lines = vec!["    FORMATION"];
        let candidates = detect_candidates(&lines);
        assert!(candidates
            .iter()
            .any(|c| c.style == HeaderStyle::Indented && c.kind == SectionKind::Education));
    }

    #[test]
    fn wrapped_french_header_is_detected_across_lines() {
        let lines = vec!["EXPÉRIENCE", "PROFESSIONNELLE"];
        let candidates = detect_candidates(&lines);
        assert!(candidates
            .iter()
            .any(|c| c.style == HeaderStyle::MultiLine && c.kind == SectionKind::Experience));
    }

    #[test]
    fn plain_prose_produces_no_candidates() {
        let lines = vec!["Built resilient data pipelines for retail clients."];
        assert!(detect_candidates(&lines).is_empty());
    }

    #[test]
    fn suffix_matching_is_word_bounded() {
        assert!(contains_company_suffix("acme corp."));
        assert!(contains_company_suffix("dupont sarl"));
        assert!(!contains_company_suffix("management team"));
        assert!(!contains_company_suffix("incremental gains"));
    }
}
