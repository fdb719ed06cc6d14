//! Locale-tagged date-range pattern table and month-name resolution.
//!
//! Patterns are tried in declaration order; the first structural match wins.
//! Capture slots map matched groups to (start month, start year, end month,
//! end year) so that a new locale is a pure data addition.

use once_cell::sync::Lazy;
use regex::Regex;

/// Identifies which grammar a pattern implements. Carried into the
/// diagnostic message of the parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternKind {
    MonthYearRange,
    NumericMonthSlashYearRange,
    NumericYearDashMonthRange,
    MonthYearToPresent,
    FrenchMonthYearRange,
    FrenchMonthYearToPresent,
    FrenchDuAu,
    FrenchDeA,
    YearRange,
    YearToPresent,
    QuarterRange,
}

impl PatternKind {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::MonthYearRange => "month-year range",
            Self::NumericMonthSlashYearRange => "mm/yyyy range",
            Self::NumericYearDashMonthRange => "yyyy-mm range",
            Self::MonthYearToPresent => "month-year to present",
            Self::FrenchMonthYearRange => "french month-year range",
            Self::FrenchMonthYearToPresent => "french month-year to present",
            Self::FrenchDuAu => "french du-au range",
            Self::FrenchDeA => "french de-a range",
            Self::YearRange => "year range",
            Self::YearToPresent => "year to present",
            Self::QuarterRange => "quarter range",
        }
    }
}

/// One dispatch entry. `slots` holds the capture-group index for
/// (start month, start year, end month, end year); `None` means the
/// component is absent from the grammar and defaults to January.
pub(crate) struct DatePattern {
    pub(crate) kind: PatternKind,
    pub(crate) regex: Regex,
    pub(crate) slots: [Option<usize>; 4],
    /// Month captures are quarter digits (`Q1`..`Q4`) rather than months.
    pub(crate) quarters: bool,
}

impl DatePattern {
    fn new(kind: PatternKind, pattern: &str, slots: [Option<usize>; 4]) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("static date pattern compiles"),
            slots,
            quarters: false,
        }
    }

    fn with_quarters(kind: PatternKind, pattern: &str, slots: [Option<usize>; 4]) -> Self {
        Self {
            quarters: true,
            ..Self::new(kind, pattern, slots)
        }
    }
}

const FRENCH_MONTH_ALTERNATION: &str = "janvier|février|fevrier|mars|avril|mai|juin|juillet|août|aout|septembre|octobre|novembre|décembre|decembre|janv|févr|fevr|avr|juil|sept|oct|nov|déc|dec";

pub(crate) static DATE_PATTERNS: Lazy<Vec<DatePattern>> = Lazy::new(|| {
    vec![
        // "january 2020 - december 2022"
        DatePattern::new(
            PatternKind::MonthYearRange,
            r"(?i)(\w{3,9})\s+(\d{4})\s*-\s*(\w{3,9})\s+(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "01/2020 - 12/2022"
        DatePattern::new(
            PatternKind::NumericMonthSlashYearRange,
            r"(\d{1,2})/(\d{4})\s*-\s*(\d{1,2})/(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "2020-01 - 2022-12" (also "2019.06 - 2021.08")
        DatePattern::new(
            PatternKind::NumericYearDashMonthRange,
            r"(\d{4})[-.]?(\d{2})\s*-\s*(\d{4})[-.]?(\d{2})",
            [Some(2), Some(1), Some(4), Some(3)],
        ),
        // "january 2020 - present"
        DatePattern::new(
            PatternKind::MonthYearToPresent,
            r"(?i)(\w{3,9})\s+(\d{4})\s*-\s*(present|current|now)\b",
            [Some(1), Some(2), None, None],
        ),
        // "janvier 2020 - décembre 2022"
        DatePattern::new(
            PatternKind::FrenchMonthYearRange,
            &format!(
                r"(?i)({m})\s+(\d{{4}})\s*-\s*({m})\s+(\d{{4}})",
                m = FRENCH_MONTH_ALTERNATION
            ),
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "janvier 2020 - aujourd'hui"
        DatePattern::new(
            PatternKind::FrenchMonthYearToPresent,
            r"(?i)(\w{3,9})\s+(\d{4})\s*-\s*(aujourd'hui|actuel|maintenant)",
            [Some(1), Some(2), None, None],
        ),
        // "du janvier 2020 au décembre 2022"
        DatePattern::new(
            PatternKind::FrenchDuAu,
            r"(?i)du\s+(\w{3,9})\s+(\d{4})\s+au\s+(\w{3,9})\s+(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "de 01/2020 à 12/2022"
        DatePattern::new(
            PatternKind::FrenchDeA,
            r"(?i)de\s+(\d{1,2})/(\d{4})\s+[àa]\s+(\d{1,2})/(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
        // "2020 - 2022"
        DatePattern::new(
            PatternKind::YearRange,
            r"(\d{4})\s*-\s*(\d{4})",
            [None, Some(1), None, Some(2)],
        ),
        // "2020 - present"
        DatePattern::new(
            PatternKind::YearToPresent,
            r"(?i)(\d{4})\s*-\s*(present|current|aujourd'hui|actuel)",
            [None, Some(1), None, None],
        ),
        // "q1 2020 - q4 2022"
        DatePattern::with_quarters(
            PatternKind::QuarterRange,
            r"(?i)q(\d)\s+(\d{4})\s*-\s*q(\d)\s+(\d{4})",
            [Some(1), Some(2), Some(3), Some(4)],
        ),
    ]
});

/// English and French month names, full and abbreviated, with and without
/// diacritics. Lookup is case-insensitive on pre-lowercased input.
const MONTH_NAMES: &[(&str, u32)] = &[
    // English
    ("jan", 1),
    ("january", 1),
    ("feb", 2),
    ("february", 2),
    ("mar", 3),
    ("march", 3),
    ("apr", 4),
    ("april", 4),
    ("may", 5),
    ("jun", 6),
    ("june", 6),
    ("jul", 7),
    ("july", 7),
    ("aug", 8),
    ("august", 8),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("oct", 10),
    ("october", 10),
    ("nov", 11),
    ("november", 11),
    ("dec", 12),
    ("december", 12),
    // French
    ("janv", 1),
    ("janvier", 1),
    ("févr", 2),
    ("février", 2),
    ("fevr", 2),
    ("fevrier", 2),
    ("mars", 3),
    ("avr", 4),
    ("avril", 4),
    ("mai", 5),
    ("juin", 6),
    ("juil", 7),
    ("juillet", 7),
    ("août", 8),
    ("aout", 8),
    ("septembre", 9),
    ("octobre", 10),
    ("novembre", 11),
    ("déc", 12),
    ("décembre", 12),
    ("decembre", 12),
];

/// Resolves a month name to 1..=12. Exact lookup first, then prefix
/// matching in either direction to absorb truncated abbreviations.
/// Unknown names are a hard failure for the current pattern attempt.
pub(crate) fn resolve_month_name(name: &str) -> Option<u32> {
    let cleaned = name
        .trim()
        .trim_matches(|c| c == '.' || c == ',')
        .to_lowercase();
    if cleaned.is_empty() {
        return Some(1);
    }

    for (known, month) in MONTH_NAMES {
        if *known == cleaned {
            return Some(*month);
        }
    }

    for (known, month) in MONTH_NAMES {
        if known.starts_with(&cleaned) || cleaned.starts_with(known) {
            return Some(*month);
        }
    }

    None
}
