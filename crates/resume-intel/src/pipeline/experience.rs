//! Work-experience extraction from a résumé's experience section.
//!
//! Entries are segmented around "date-range lines" when any are present;
//! otherwise segmentation falls back to lines that look like job titles.
//! The date grammar here is deliberately its own list, looser than the
//! dispatch table in [`super::dates`]: a date line only needs to be
//! recognized, not validated.

use std::cmp::Ordering;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::candidate::WorkExperienceEntry;
use super::dates::resolve_month_name;

const JOB_TITLE_WORDS: &[&str] = &[
    // English
    "engineer",
    "developer",
    "manager",
    "director",
    "analyst",
    "consultant",
    "lead",
    "senior",
    "junior",
    "principal",
    "staff",
    "architect",
    "specialist",
    "coordinator",
    "supervisor",
    "executive",
    "officer",
    "administrator",
    // French
    "ingénieur",
    "développeur",
    "responsable",
    "directeur",
    "analyste",
    "chef",
    "architecte",
    "spécialiste",
    "coordinateur",
    "superviseur",
    "chargé",
    "attaché",
    "gérant",
];

const COMPANY_INDICATORS: &[&str] = &[
    "inc",
    "corp",
    "corporation",
    "company",
    "ltd",
    "limited",
    "llc",
    "group",
    "sarl",
    "sas",
    "sa",
    "eurl",
    "société",
    "entreprise",
    "groupe",
    "gmbh",
    "ag",
];

const ACTION_VERBS: &[&str] = &[
    // English
    "developed",
    "led",
    "managed",
    "implemented",
    "designed",
    "built",
    "created",
    "delivered",
    "improved",
    "maintained",
    "automated",
    "migrated",
    // French
    "développé",
    "dirigé",
    "géré",
    "implémenté",
    "conçu",
    "créé",
    "livré",
    "amélioré",
    "maintenu",
    "optimisé",
];

struct DateLinePattern {
    regex: Regex,
    /// Capture slots for (start month, start year, end month, end year);
    /// `None` defaults to January.
    slots: [Option<usize>; 4],
}

impl DateLinePattern {
    fn new(pattern: &str, slots: [Option<usize>; 4]) -> Self {
        Self {
            regex: Regex::new(pattern).expect("static date-line pattern compiles"),
            slots,
        }
    }
}

static DATE_LINE_PATTERNS: Lazy<Vec<DateLinePattern>> = Lazy::new(|| {
    vec![
        // "Jan 2020 - Dec 2022"
        DateLinePattern::new(
            r"(?i)(\w{3,})\s+(\d{4})\s*[-–]\s*(\w{3,})\s+(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "01/2020 - 12/2022"
        DateLinePattern::new(
            r"(\d{1,2})/(\d{4})\s*[-–]\s*(\d{1,2})/(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "2020-01 - 2022-12"
        DateLinePattern::new(
            r"(\d{4})[-.]?(\d{2})\s*[-–]\s*(\d{4})[-.]?(\d{2})",
            [Some(2), Some(1), Some(4), Some(3)],
        ),
        // "Jan 2020 - Present"
        DateLinePattern::new(
            r"(?i)(\w{3,})\s+(\d{4})\s*[-–]\s*(present|current)\b",
            [Some(1), Some(2), None, None],
        ),
        // "janv 2020 - Aujourd'hui"
        DateLinePattern::new(
            r"(?i)(\w{3,})\s+(\d{4})\s*[-–]\s*(aujourd'hui|actuel)",
            [Some(1), Some(2), None, None],
        ),
        // "01/2020 - Aujourd'hui"
        DateLinePattern::new(
            r"(?i)(\d{1,2})/(\d{4})\s*[-–]\s*(aujourd'hui|actuel)",
            [Some(1), Some(2), None, None],
        ),
        // "du janv 2020 au déc 2022"
        DateLinePattern::new(
            r"(?i)du\s+(\w{3,})\s+(\d{4})\s+au\s+(\w{3,})\s+(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "de 01/2020 à 12/2022"
        DateLinePattern::new(
            r"(?i)de\s+(\d{1,2})/(\d{4})\s+[àa]\s+(\d{1,2})/(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "2020 - 2022"
        DateLinePattern::new(r"(\d{4})\s*[-–]\s*(\d{4})", [None, Some(1), None, Some(2)]),
        // "2020 - Present"
        DateLinePattern::new(
            r"(?i)(\d{4})\s*[-–]\s*(present|current|aujourd'hui|actuel)",
            [None, Some(1), None, None],
        ),
    ]
});

#[derive(Default)]
struct EntryBlock {
    title_lines: Vec<String>,
    date_lines: Vec<String>,
    description_lines: Vec<String>,
}

/// Parses one experience section into structured entries, ordered most
/// recent first (undated entries last, stable).
pub fn parse_work_experience(section_text: &str) -> Vec<WorkExperienceEntry> {
    if section_text.trim().is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = section_text.lines().collect();
    let date_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_date_line(line))
        .map(|(index, _)| index)
        .collect();

    let blocks = if date_lines.is_empty() {
        segment_by_job_titles(&lines)
    } else {
        segment_by_date_lines(&lines, &date_lines)
    };

    let mut entries: Vec<WorkExperienceEntry> = blocks.iter().filter_map(parse_entry).collect();

    entries.sort_by(|a, b| match (a.start_date, b.start_date) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    entries
}

fn is_date_line(line: &str) -> bool {
    DATE_LINE_PATTERNS
        .iter()
        .any(|pattern| pattern.regex.is_match(line))
}

fn is_bullet_line(line: &str) -> bool {
    matches!(line.chars().next(), Some('•' | '-' | '*' | '+'))
}

fn starts_with_action_verb(line: &str) -> bool {
    let first_word = line
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    ACTION_VERBS.contains(&first_word.as_str())
}

fn is_description_line(line: &str) -> bool {
    is_bullet_line(line) || starts_with_action_verb(line)
}

fn looks_like_job_title(line: &str) -> bool {
    static TITLE_CASE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(?:\s+[A-Z][a-z]*)*$").expect("compiles"));

    let lower = line.to_lowercase();
    if JOB_TITLE_WORDS.iter().any(|word| lower.contains(word)) {
        return true;
    }
    TITLE_CASE.is_match(line) && line.len() < 60
}

/// One block per date line: the 1–3 non-empty lines immediately above it
/// carry the title and company; the lines below, up to the next date line,
/// carry the description (bullets and action-verb lines only).
fn segment_by_date_lines(lines: &[&str], date_indices: &[usize]) -> Vec<EntryBlock> {
    let mut blocks = Vec::new();

    for (position, &date_index) in date_indices.iter().enumerate() {
        let floor = if position == 0 {
            0
        } else {
            date_indices[position - 1] + 1
        };

        let mut title_lines: Vec<String> = Vec::new();
        for index in (floor..date_index).rev() {
            let line = lines[index].trim();
            if line.is_empty() || is_description_line(line) {
                break;
            }
            title_lines.push(line.to_string());
            if title_lines.len() == 3 {
                break;
            }
        }
        title_lines.reverse();

        let description_end = date_indices
            .get(position + 1)
            .copied()
            .unwrap_or(lines.len());
        let description_lines: Vec<String> = lines[date_index + 1..description_end]
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && is_description_line(line))
            .map(str::to_string)
            .collect();

        blocks.push(EntryBlock {
            title_lines,
            date_lines: vec![lines[date_index].trim().to_string()],
            description_lines,
        });
    }

    blocks
}

/// Fallback when the section has no recognizable date lines: segment on
/// job-title-looking lines and classify the rest by content.
fn segment_by_job_titles(lines: &[&str]) -> Vec<EntryBlock> {
    let mut blocks: Vec<EntryBlock> = Vec::new();
    let mut current: Option<EntryBlock> = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if looks_like_job_title(line) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(EntryBlock {
                title_lines: vec![line.to_string()],
                ..EntryBlock::default()
            });
        } else if let Some(block) = current.as_mut() {
            if is_date_line(line) {
                block.date_lines.push(line.to_string());
            } else {
                block.description_lines.push(line.to_string());
            }
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks
}

fn parse_entry(block: &EntryBlock) -> Option<WorkExperienceEntry> {
    let (job_title, positional_company) = resolve_title_and_company(&block.title_lines)?;

    let company = positional_company
        .filter(|company| !company.is_empty())
        .or_else(|| {
            block
                .title_lines
                .iter()
                .chain(block.description_lines.iter())
                .find_map(|line| extract_company_from_line(line))
        })
        .unwrap_or_else(|| "Unknown".to_string());

    let (start_date, end_date) = block
        .date_lines
        .iter()
        .find_map(|line| parse_date_line(line))
        .unwrap_or((None, None));

    let mut entry = WorkExperienceEntry {
        job_title,
        company,
        start_date,
        end_date,
        description: block.description_lines.join("\n"),
    };
    // A reversed end date is treated as unparsed rather than kept.
    if !entry.dates_in_order() {
        entry.end_date = None;
    }

    Some(entry)
}

/// Positional title/company resolution over the 1–3 lines above the date
/// line. With three lines the keyword/casing heuristic decides which of
/// the first two is the title.
fn resolve_title_and_company(title_lines: &[String]) -> Option<(String, Option<String>)> {
    match title_lines {
        [] => None,
        [only] => Some((clean_job_title(only)?, None)),
        [first, second] => Some((clean_job_title(first)?, Some(second.trim().to_string()))),
        [first, second, ..] => {
            let (title, company) = if looks_like_job_title(first) {
                (first, second)
            } else if looks_like_job_title(second) {
                (second, first)
            } else {
                (first, second)
            };
            Some((clean_job_title(title)?, Some(company.trim().to_string())))
        }
    }
}

fn clean_job_title(line: &str) -> Option<String> {
    static BULLET_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[•\-*+]\s+").expect("compiles"));
    static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("compiles"));

    let cleaned = BULLET_PREFIX.replace(line.trim(), "");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ").trim().to_string();
    if cleaned.is_empty() || cleaned.len() >= 80 {
        return None;
    }
    Some(cleaned)
}

/// Pulls a company name out of a line by anchoring on a company-suffix
/// word and keeping a window of neighbors around it.
fn extract_company_from_line(line: &str) -> Option<String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    let anchor = words.iter().position(|word| {
        let bare = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        COMPANY_INDICATORS.contains(&bare.as_str())
    })?;

    let from = anchor.saturating_sub(2);
    let to = (anchor + 2).min(words.len());
    let company = words[from..to]
        .join(" ")
        .trim_matches(|c: char| c == '-' || c == '–' || c == ',' || c.is_whitespace())
        .to_string();

    (!company.is_empty() && company.len() < 100).then_some(company)
}

fn parse_date_line(line: &str) -> Option<(Option<NaiveDate>, Option<NaiveDate>)> {
    let lower = line.to_lowercase();
    let ongoing = ["present", "current", "aujourd'hui", "actuel"]
        .iter()
        .any(|marker| lower.contains(marker));

    for pattern in DATE_LINE_PATTERNS.iter() {
        let Some(captures) = pattern.regex.captures(line) else {
            continue;
        };
        let slot = |index: Option<usize>| index.and_then(|i| captures.get(i)).map(|m| m.as_str());

        let start = assemble_lenient(slot(pattern.slots[0]), slot(pattern.slots[1]));
        if start.is_none() {
            continue;
        }
        let end = if ongoing {
            None
        } else {
            assemble_lenient(slot(pattern.slots[2]), slot(pattern.slots[3]))
        };
        return Some((start, end));
    }

    None
}

/// Lenient component assembly: an unknown or out-of-range month falls back
/// to January instead of failing the entry.
fn assemble_lenient(month: Option<&str>, year: Option<&str>) -> Option<NaiveDate> {
    let year: i32 = year?.trim().parse().ok()?;

    let month = match month.map(str::trim) {
        None | Some("") => 1,
        Some(raw) if raw.bytes().all(|b| b.is_ascii_digit()) => match raw.parse::<u32>() {
            Ok(value) if (1..=12).contains(&value) => value,
            _ => 1,
        },
        Some(raw) => resolve_month_name(raw).unwrap_or(1),
    };

    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).expect("valid date")
    }

    const TWO_JOB_SECTION: &str = "\
Senior Software Engineer - Tech Corp
January 2020 - Present
• Developed microservices using Java and Spring Boot
• Led a team of 5 developers

Software Engineer
Startup Inc
June 2018 - December 2019
Built REST APIs for the billing platform
Improved deployment times by 40%
";

    #[test]
    fn extracts_entries_around_date_lines() {
        let entries = parse_work_experience(TWO_JOB_SECTION);
        assert_eq!(entries.len(), 2);

        let current = &entries[0];
        assert_eq!(current.job_title, "Senior Software Engineer - Tech Corp");
        assert_eq!(current.start_date, Some(date(2020, 1)));
        assert_eq!(current.end_date, None);
        assert!(current.description.contains("Developed microservices"));
        assert!(current.description.contains("Led a team"));
        assert!(!current.description.contains("Software Engineer\n"));

        let previous = &entries[1];
        assert_eq!(previous.job_title, "Software Engineer");
        assert_eq!(previous.company, "Startup Inc");
        assert_eq!(previous.start_date, Some(date(2018, 6)));
        assert_eq!(previous.end_date, Some(date(2019, 12)));
        assert!(previous.description.contains("Built REST APIs"));
    }

    #[test]
    fn entries_are_sorted_most_recent_first() {
        let section = "\
Junior Developer
Old Company Ltd
03/2015 - 05/2017

Senior Developer
New Company Inc
06/2019 - Present
";
        let entries = parse_work_experience(section);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_title, "Senior Developer");
        assert_eq!(entries[1].job_title, "Junior Developer");
    }

    #[test]
    fn positional_company_wins_without_indicators() {
        let section = "\
Backend Engineer
Acme
January 2020 - December 2021
";
        let entries = parse_work_experience(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Acme");
    }

    #[test]
    fn reversed_date_range_drops_the_end_date() {
        let section = "\
Platform Engineer
Acme Corp
December 2022 - January 2020
";
        let entries = parse_work_experience(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start_date, Some(date(2022, 12)));
        assert_eq!(entries[0].end_date, None);
        assert!(entries[0].dates_in_order());
    }

    #[test]
    fn falls_back_to_title_segmentation_without_date_lines() {
        let section = "\
Lead Engineer
Worked on compilers and toolchains
Ran weekly design reviews

Data Analyst
Analyzed churn cohorts for retail accounts
";
        let entries = parse_work_experience(section);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].job_title, "Lead Engineer");
        assert!(entries[0].description.contains("compilers"));
        assert_eq!(entries[1].job_title, "Data Analyst");
    }

    #[test]
    fn french_entries_parse() {
        let section = "\
Développeur Senior
Solutions SARL
janvier 2019 - décembre 2022
Conçu des microservices bancaires
";
        let entries = parse_work_experience(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job_title, "Développeur Senior");
        assert_eq!(entries[0].company, "Solutions SARL");
        assert_eq!(entries[0].start_date, Some(date(2019, 1)));
        assert_eq!(entries[0].end_date, Some(date(2022, 12)));
        assert!(entries[0].description.contains("Conçu"));
    }

    #[test]
    fn empty_section_yields_no_entries() {
        assert!(parse_work_experience("").is_empty());
        assert!(parse_work_experience("   \n  ").is_empty());
    }
}
