//! Education extraction: degree line, institution line, then a graduation
//! date (optionally prefixed with "Graduated:" / "Obtenu en"), with an
//! optional free-text details block consumed until the next degree-like
//! block begins.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::candidate::EducationEntry;
use super::dates::resolve_month_name;

static GRADUATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:graduated:\s*|obtenu en\s*)?((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|janv|févr|fevr|mars|avr|mai|juin|juil|août|aout|sept|déc)[\wé.]*\s+\d{4}|\d{1,2}/\d{4}|\d{4})$",
    )
    .expect("compiles")
});

static MONTH_SLASH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})/(\d{4})\b").expect("compiles"));
static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").expect("compiles"));

/// Parses an education section into entries. A block is three consecutive
/// non-empty lines where the third is a graduation-date line; anything
/// after it that does not start a new block is skimmed as details.
pub fn parse_education(section_text: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = section_text.lines().map(str::trim).collect();
    let mut entries = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        if let Some(entry) = block_at(&lines, index) {
            entries.push(entry);
            // Skip the block itself, then skim the details run.
            index += 3;
            while index < lines.len() && block_at(&lines, index).is_none() {
                index += 1;
            }
        } else {
            index += 1;
        }
    }

    entries
}

fn block_at(lines: &[&str], index: usize) -> Option<EducationEntry> {
    let degree = *lines.get(index)?;
    let institution = *lines.get(index + 1)?;
    let date_line = *lines.get(index + 2)?;

    if degree.is_empty() || institution.is_empty() {
        return None;
    }
    let captures = GRADUATION_LINE.captures(date_line)?;

    Some(EducationEntry {
        institution: institution.to_string(),
        degree: degree.to_string(),
        graduation_date: parse_graduation_date(captures.get(1).map_or("", |m| m.as_str())),
    })
}

/// Flexible single-date parsing: ongoing markers mean "no date yet";
/// otherwise MM/YYYY, bare year, then a month-name + year token scan.
pub(crate) fn parse_graduation_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_lowercase();
    if ["present", "current", "aujourd'hui", "actuel"].contains(&lower.as_str()) {
        return None;
    }

    let cleaned = lower.replace('.', "");

    if let Some(captures) = MONTH_SLASH_YEAR.captures(&cleaned) {
        let month: u32 = captures[1].parse().ok()?;
        let year: i32 = captures[2].parse().ok()?;
        if (1..=12).contains(&month) {
            return NaiveDate::from_ymd_opt(year, month, 1);
        }
    }

    let mut year: Option<i32> = None;
    let mut month: Option<u32> = None;

    if let Some(captures) = BARE_YEAR.captures(&cleaned) {
        year = captures[1].parse().ok();
    }
    for token in cleaned.split_whitespace() {
        if token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if let Some(resolved) = resolve_month_name(token) {
            month = Some(resolved);
            break;
        }
    }

    let year = year?;
    NaiveDate::from_ymd_opt(year, month.unwrap_or(1), 1)
}
