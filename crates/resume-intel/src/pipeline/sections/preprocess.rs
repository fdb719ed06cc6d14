//! Text normalization ahead of header detection: Unicode NFC, common OCR
//! substitution repair, and whitespace cleanup that keeps the blank-line
//! structure intact.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

pub(crate) fn preprocess(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let normalized: String = text.nfc().collect();
    let repaired = repair_ocr_artifacts(&normalized);
    let unified = repaired.replace("\r\n", "\n").replace('\r', "\n");
    clean_whitespace(&unified)
}

/// Undoes the substitutions OCR engines commonly make in résumé scans:
/// stray apostrophes standing in for accents, lone `l`/`O`/`rn` misreads,
/// and space drift around `:` and `;`.
fn repair_ocr_artifacts(text: &str) -> String {
    static LONE_L: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bl\b").expect("compiles"));
    static LONE_RN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\brn\b").expect("compiles"));
    static LONE_O: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bO\b").expect("compiles"));
    static SPACE_BEFORE_COLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+:").expect("compiles"));
    static SPACE_BEFORE_SEMICOLON: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\s+;").expect("compiles"));

    let text = LONE_L.replace_all(text, "I");
    let text = LONE_RN.replace_all(&text, "m");
    let text = LONE_O.replace_all(&text, "0");
    let text = text
        .replace("e'", "é")
        .replace("a'", "à")
        .replace("E'", "É")
        .replace("A'", "À");
    let text = SPACE_BEFORE_COLON.replace_all(&text, ":");
    SPACE_BEFORE_SEMICOLON.replace_all(&text, ";").into_owned()
}

/// Trims trailing whitespace and collapses interior runs to one space.
/// Leading indentation survives (indented headers depend on it) and runs
/// of blank lines collapse to a single separator.
fn clean_whitespace(text: &str) -> String {
    static INNER_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("compiles"));

    let mut cleaned = String::with_capacity(text.len());
    let mut previous_blank = false;

    for line in text.split('\n') {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            if !previous_blank && !cleaned.is_empty() {
                cleaned.push('\n');
                previous_blank = true;
            }
            continue;
        }

        let indent_end = line.len() - line.trim_start().len();
        let (indent, body) = line.split_at(indent_end);
        cleaned.push_str(indent);
        cleaned.push_str(&INNER_WHITESPACE.replace_all(body, " "));
        cleaned.push('\n');
        previous_blank = false;
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repairs_accent_apostrophes() {
        let cleaned = preprocess("Expe'rience professionnelle");
        assert!(cleaned.contains("Expérience"));
    }

    #[test]
    fn normalizes_line_endings() {
        let cleaned = preprocess("Experience\r\nSkills\rEducation");
        assert_eq!(cleaned, "Experience\nSkills\nEducation\n");
    }

    #[test]
    fn collapses_interior_whitespace_but_keeps_indentation() {
        let cleaned = preprocess("   FORMATION\nJava    Developer");
        assert!(cleaned.contains("   FORMATION"));
        assert!(cleaned.contains("Java Developer"));
    }

    #[test]
    fn collapses_blank_line_runs() {
        let cleaned = preprocess("Experience\n\n\n\nSkills");
        assert_eq!(cleaned, "Experience\n\nSkills\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess("   \n  \n"), "");
    }
}
