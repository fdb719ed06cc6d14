//! The résumé-understanding pipeline: personal-info detection, section
//! segmentation, per-section extraction, and the orchestrating
//! `parse_candidate_from_text` pass that assembles a [`Candidate`].

pub mod candidate;
pub mod dates;
pub mod education;
pub mod experience;
pub mod personal;
pub mod sections;
pub mod skills;

#[cfg(test)]
mod tests;

pub use candidate::{Candidate, EducationEntry, WorkExperienceEntry};
pub use dates::timeline::{analyze_career_timeline, CareerAnalysis, CareerGap, CareerOverlap};
pub use dates::{DateRangeParser, DateRangeResult};
pub use personal::{detect_personal_info, extract_linkedin_url, PersonalInfo};
pub use sections::{split_text_into_sections, SectionKind, SectionMap};

use tracing::debug;

/// Rule-based extraction of a structured candidate from raw résumé text.
///
/// Purely extractive: every field in the result is lifted from the input
/// text. Malformed input degrades to empty collections, never an error.
pub fn parse_candidate_from_text(text: &str) -> Candidate {
    let info = personal::detect_personal_info(text);
    let sections = sections::split_text_into_sections(text);

    let work_experiences = experience::parse_work_experience(
        sections.get("experience").map_or("", String::as_str),
    );
    let educations =
        education::parse_education(sections.get("education").map_or("", String::as_str));

    let mut skills = skills::parse_skills(sections.get("skills").map_or("", String::as_str));
    if skills.is_empty() {
        // The skills section may be missing or mislabeled; sweep the
        // whole document before giving up.
        skills = skills::parse_skills(text);
    }

    debug!(
        experiences = work_experiences.len(),
        educations = educations.len(),
        "assembled candidate from text"
    );

    Candidate {
        name: info.name,
        email: info.email,
        phone: info.phone,
        skills,
        work_experiences,
        educations,
    }
}
