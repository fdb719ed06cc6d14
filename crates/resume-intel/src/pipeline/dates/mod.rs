//! Locale-aware date-range parsing with chronological validation.

mod patterns;
pub mod timeline;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use patterns::{DatePattern, DATE_PATTERNS};

pub(crate) use patterns::resolve_month_name;

/// Outcome of parsing one free-text date-range expression.
///
/// `message` is diagnostic only; it may carry non-fatal warnings even when
/// `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRangeResult {
    pub start_date: Option<NaiveDate>,
    /// `None` means ongoing (or unparsed on an invalid result).
    pub end_date: Option<NaiveDate>,
    pub is_valid: bool,
    pub message: String,
}

impl DateRangeResult {
    fn failure(message: &str) -> Self {
        Self {
            start_date: None,
            end_date: None,
            is_valid: false,
            message: message.to_string(),
        }
    }
}

/// Parses free-text date ranges against an ordered, locale-tagged pattern
/// table. The reference date is pinned at construction so repeated calls
/// are reproducible.
pub struct DateRangeParser {
    today: NaiveDate,
}

impl DateRangeParser {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Parses a date-range expression. Never panics; unparseable input
    /// yields an invalid result carrying a diagnostic message.
    pub fn parse_date_range(&self, text: &str) -> DateRangeResult {
        if text.trim().is_empty() {
            return DateRangeResult::failure("empty date text");
        }

        let cleaned = normalize_date_text(text);

        for pattern in DATE_PATTERNS.iter() {
            let Some(captures) = pattern.regex.captures(&cleaned) else {
                continue;
            };
            if let Some(result) = self.parse_with_pattern(&captures, pattern, &cleaned) {
                return self.validate(result);
            }
        }

        DateRangeResult::failure("no matching date pattern found")
    }

    fn parse_with_pattern(
        &self,
        captures: &regex::Captures<'_>,
        pattern: &DatePattern,
        cleaned: &str,
    ) -> Option<DateRangeResult> {
        let slot = |index: Option<usize>| index.and_then(|i| captures.get(i)).map(|m| m.as_str());

        let start_month = slot(pattern.slots[0]);
        let start_year = slot(pattern.slots[1]);
        let end_month = slot(pattern.slots[2]);
        let end_year = slot(pattern.slots[3]);

        let start_date = self.assemble_date(start_month, start_year, pattern.quarters)?;
        let end_date = if is_ongoing(cleaned) {
            None
        } else {
            Some(self.assemble_date(end_month, end_year, pattern.quarters)?)
        };

        Some(DateRangeResult {
            start_date: Some(start_date),
            end_date,
            is_valid: true,
            message: format!("parsed as {}", pattern.kind.label()),
        })
    }

    /// Builds the first-of-month date for one captured component. `None`
    /// month defaults to January; quarter digits map Q1/Q2/Q3/Q4 to
    /// January/April/July/October.
    fn assemble_date(
        &self,
        month: Option<&str>,
        year: Option<&str>,
        quarters: bool,
    ) -> Option<NaiveDate> {
        let year_text = year?.trim();
        let mut year: i32 = year_text.parse().ok()?;
        if year < 100 {
            year += if year < 50 { 2000 } else { 1900 };
        }
        if year < 1950 || year > self.today.year() + 1 {
            return None;
        }

        let month = match month.map(str::trim) {
            None | Some("") => 1,
            Some(raw) if raw.bytes().all(|b| b.is_ascii_digit()) => {
                let value: u32 = raw.parse().ok()?;
                if quarters {
                    if !(1..=4).contains(&value) {
                        return None;
                    }
                    (value - 1) * 3 + 1
                } else if (1..=12).contains(&value) {
                    value
                } else {
                    return None;
                }
            }
            Some(raw) => resolve_month_name(raw)?,
        };

        NaiveDate::from_ymd_opt(year, month, 1)
    }

    /// Chronological validation: rejects future starts/ends and reversed
    /// ranges, and appends non-fatal warnings for implausible durations.
    fn validate(&self, result: DateRangeResult) -> DateRangeResult {
        let Some(start) = result.start_date else {
            return DateRangeResult::failure("start date is required");
        };

        let mut warnings: Vec<String> = Vec::new();
        let mut is_valid = true;

        if start > self.today {
            warnings.push("start date is in the future".to_string());
            is_valid = false;
        }

        if let Some(end) = result.end_date {
            if end < start {
                warnings.push("end date is before start date".to_string());
                is_valid = false;
            }
            if end > self.today {
                warnings.push("end date is in the future".to_string());
                is_valid = false;
            }

            let months = months_between(start, end);
            if months > 600 {
                warnings.push(format!(
                    "position duration seems unreasonably long ({months} months)"
                ));
            }
            let days = (end - start).num_days();
            if (0..7).contains(&days) {
                warnings.push(format!("position duration seems very short ({days} days)"));
            }
        }

        let message = if warnings.is_empty() {
            result.message
        } else {
            format!("{}; validation warnings: {}", result.message, warnings.join(", "))
        };

        DateRangeResult {
            start_date: result.start_date,
            end_date: result.end_date,
            is_valid,
            message,
        }
    }
}

/// Normalizes separators and noise so a single dash-based grammar covers
/// the common textual variants.
fn normalize_date_text(text: &str) -> String {
    static TO_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bto\b").expect("compiles"));
    static TILL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btill?\b").expect("compiles"));
    static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("compiles"));

    let mut cleaned = text.to_lowercase();
    cleaned.retain(|c| c != ',' && c != '.');
    let cleaned = cleaned.replace('–', "-").replace('—', "-");
    let cleaned = TO_WORD.replace_all(&cleaned, " - ");
    let cleaned = TILL_WORD.replace_all(&cleaned, " - ");
    WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}

/// Markers that force a null end date regardless of captured end tokens.
fn is_ongoing(text: &str) -> bool {
    ["present", "current", "now", "aujourd'hui", "actuel", "maintenant"]
        .iter()
        .any(|marker| text.contains(marker))
}

/// Whole months between two dates, truncated toward zero, matching
/// calendar-month arithmetic on first-of-month anchored dates.
pub(crate) fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let raw = (i64::from(end.year()) - i64::from(start.year())) * 12 + i64::from(end.month())
        - i64::from(start.month());
    if raw > 0 && end.day() < start.day() {
        raw - 1
    } else if raw < 0 && end.day() > start.day() {
        raw + 1
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> DateRangeParser {
        DateRangeParser::new(NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid pinned date"))
    }

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).expect("valid date")
    }

    #[test]
    fn parses_english_month_year_range() {
        let result = parser().parse_date_range("January 2020 - December 2022");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2020, 1)));
        assert_eq!(result.end_date, Some(date(2022, 12)));
    }

    #[test]
    fn parses_abbreviated_months() {
        let result = parser().parse_date_range("Jan 2020 - Dec 2022");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2020, 1)));
        assert_eq!(result.end_date, Some(date(2022, 12)));
    }

    #[test]
    fn present_forces_null_end_date() {
        let result = parser().parse_date_range("March 2021 - Present");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2021, 3)));
        assert_eq!(result.end_date, None);

        let result = parser().parse_date_range("June 2020 - Current");
        assert!(result.is_valid);
        assert_eq!(result.end_date, None);
    }

    #[test]
    fn parses_numeric_formats() {
        let result = parser().parse_date_range("01/2020 - 12/2022");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2020, 1)));
        assert_eq!(result.end_date, Some(date(2022, 12)));

        let result = parser().parse_date_range("2020-03 - 2022-11");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2020, 3)));
        assert_eq!(result.end_date, Some(date(2022, 11)));

        let result = parser().parse_date_range("2019.06 - 2021.08");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2019, 6)));
        assert_eq!(result.end_date, Some(date(2021, 8)));
    }

    #[test]
    fn parses_bare_year_ranges() {
        let result = parser().parse_date_range("2018 - 2020");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2018, 1)));
        assert_eq!(result.end_date, Some(date(2020, 1)));

        let result = parser().parse_date_range("2021 - Present");
        assert!(result.is_valid);
        assert_eq!(result.start_date, Some(date(2021, 1)));
        assert_eq!(result.end_date, None);
    }

    #[test]
    fn parses_french_patterns() {
        let result = parser().parse_date_range("mars 2021 - Aujourd'hui");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2021, 3)));
        assert_eq!(result.end_date, None);

        let result = parser().parse_date_range("avril 2022 - actuel");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2022, 4)));
        assert_eq!(result.end_date, None);

        let result = parser().parse_date_range("de 03/2018 à 11/2020");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2018, 3)));
        assert_eq!(result.end_date, Some(date(2020, 11)));

        let result = parser().parse_date_range("du janvier 2020 au décembre 2022");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2020, 1)));
        assert_eq!(result.end_date, Some(date(2022, 12)));
    }

    #[test]
    fn parses_french_accented_and_plain_months() {
        let result = parser().parse_date_range("février 2020 - août 2022");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2020, 2)));
        assert_eq!(result.end_date, Some(date(2022, 8)));

        let result = parser().parse_date_range("fevrier 2020 - aout 2022");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2020, 2)));
        assert_eq!(result.end_date, Some(date(2022, 8)));
    }

    #[test]
    fn quarter_ranges_map_to_quarter_start_months() {
        let result = parser().parse_date_range("Q1 2020 - Q4 2022");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2020, 1)));
        assert_eq!(result.end_date, Some(date(2022, 10)));

        let result = parser().parse_date_range("Q2 2020 to Q1 2023");
        assert!(result.is_valid, "{}", result.message);
        assert_eq!(result.start_date, Some(date(2020, 4)));
        assert_eq!(result.end_date, Some(date(2023, 1)));
    }

    #[test]
    fn normalizes_dashes_to_and_noise() {
        assert!(parser().parse_date_range("Jan 2020 – Dec 2022").is_valid);
        assert!(parser().parse_date_range("Jan 2020 — Dec 2022").is_valid);
        assert!(parser().parse_date_range("Jan 2020 to Dec 2022").is_valid);
        assert!(parser().parse_date_range("  Jan  2020   -   Dec  2022  ").is_valid);
        assert!(parser().parse_date_range("Jan., 2020 - Dec., 2022").is_valid);
        assert!(parser().parse_date_range("Sept. 2019 till March 2022").is_valid);
    }

    #[test]
    fn reversed_range_is_invalid() {
        let result = parser().parse_date_range("December 2022 - January 2020");
        assert!(!result.is_valid);
        assert!(result.message.contains("before start"));
    }

    #[test]
    fn future_dates_are_invalid() {
        let result = parser().parse_date_range("January 2026 - December 2026");
        assert!(!result.is_valid);
        assert!(result.message.contains("future"));
    }

    #[test]
    fn years_outside_window_are_rejected() {
        let result = parser().parse_date_range("January 1949 - December 1951");
        assert!(!result.is_valid);

        // today is pinned to 2025, so 2027 exceeds the +1 year allowance
        let result = parser().parse_date_range("2027 - 2028");
        assert!(!result.is_valid);
    }

    #[test]
    fn long_duration_warns_but_stays_valid() {
        let result = parser().parse_date_range("January 1960 - December 2020");
        assert!(result.is_valid, "{}", result.message);
        assert!(result.message.contains("unreasonably long"));
    }

    #[test]
    fn unparseable_text_reports_no_pattern() {
        let result = parser().parse_date_range("this is not a date");
        assert!(!result.is_valid);
        assert_eq!(result.start_date, None);
        assert_eq!(result.end_date, None);
        assert!(result.message.contains("no matching date pattern"));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(!parser().parse_date_range("").is_valid);
        assert!(!parser().parse_date_range("   \t\n  ").is_valid);
    }

    #[test]
    fn valid_results_keep_end_after_start() {
        let samples = [
            "January 2020 - December 2022",
            "2018 - 2020",
            "Q1 2020 - Q4 2022",
            "02/2019 - 03/2019",
        ];
        for sample in samples {
            let result = parser().parse_date_range(sample);
            if let (Some(start), Some(end)) = (result.start_date, result.end_date) {
                assert!(end >= start, "{sample} produced end before start");
            }
        }
    }

    #[test]
    fn months_between_truncates_toward_zero() {
        assert_eq!(months_between(date(2020, 1), date(2022, 1)), 24);
        assert_eq!(months_between(date(2020, 6), date(2020, 3)), -3);
        assert_eq!(
            months_between(
                NaiveDate::from_ymd_opt(2020, 1, 15).expect("valid"),
                NaiveDate::from_ymd_opt(2020, 3, 1).expect("valid")
            ),
            1
        );
    }
}
