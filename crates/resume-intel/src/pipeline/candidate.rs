use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured candidate profile assembled by one parsing pass.
///
/// Every field is extracted from the source text; nothing is synthesized.
/// Missing information stays `None` / empty rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Comma-joined skill list, deduplicated in first-seen order.
    pub skills: String,
    pub work_experiences: Vec<WorkExperienceEntry>,
    pub educations: Vec<EducationEntry>,
}

/// One position in the candidate's work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub start_date: Option<NaiveDate>,
    /// `None` means the position is ongoing.
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl WorkExperienceEntry {
    /// Cross-field check: an end date, when present, may not precede the start.
    pub fn dates_in_order(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => end >= start,
            _ => true,
        }
    }
}

/// One degree or diploma entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    /// `None` when the graduation date could not be parsed.
    pub graduation_date: Option<NaiveDate>,
}
