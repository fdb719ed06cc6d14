//! Career-timeline analysis over parsed date ranges: total experience,
//! employment gaps, and overlapping positions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{months_between, DateRangeResult};

/// Aggregate view of a candidate's work timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub total_experience_months: i64,
    pub career_start_date: Option<NaiveDate>,
    /// `None` when the most recent position is ongoing.
    pub career_end_date: Option<NaiveDate>,
    pub has_gaps: bool,
    pub has_overlaps: bool,
    pub gaps: Vec<CareerGap>,
    pub overlaps: Vec<CareerOverlap>,
}

/// A hole between the end of one position and the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerGap {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub months: i64,
}

/// Two positions running concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerOverlap {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub months: i64,
}

/// Walks the valid, start-dated ranges in chronological order. An open end
/// date counts as `today` for duration math only; the reported
/// `career_end_date` keeps `None` to mean "currently employed".
pub fn analyze_career_timeline(ranges: &[DateRangeResult], today: NaiveDate) -> CareerAnalysis {
    let mut spans: Vec<(NaiveDate, Option<NaiveDate>)> = ranges
        .iter()
        .filter(|range| range.is_valid)
        .filter_map(|range| range.start_date.map(|start| (start, range.end_date)))
        .collect();
    spans.sort_by_key(|(start, _)| *start);

    let mut analysis = CareerAnalysis::default();
    if spans.is_empty() {
        return analysis;
    }

    let mut previous_end: Option<NaiveDate> = None;
    for (start, stored_end) in &spans {
        let effective_end = stored_end.unwrap_or(today);
        analysis.total_experience_months += months_between(*start, effective_end);

        if let Some(previous) = previous_end {
            let delta = months_between(previous, *start);
            if delta > 1 {
                analysis.has_gaps = true;
                analysis.gaps.push(CareerGap {
                    start: previous,
                    end: *start,
                    months: delta,
                });
            } else if delta < 0 {
                analysis.has_overlaps = true;
                analysis.overlaps.push(CareerOverlap {
                    start: *start,
                    end: previous,
                    months: delta.abs(),
                });
            }
        }

        previous_end = Some(effective_end);
    }

    analysis.career_start_date = spans.first().map(|(start, _)| *start);
    analysis.career_end_date = spans.last().and_then(|(_, end)| *end);

    analysis
}
