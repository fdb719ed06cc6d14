//! Rule-based résumé text understanding.
//!
//! The crate is a pure function library: section segmentation, locale-aware
//! (English/French) date-range parsing, career-timeline analysis,
//! work-experience/education/skills extraction, and hybrid anonymization.
//! Every entry point is synchronous, CPU-bound, and free of shared mutable
//! state; "today" is always passed in by the caller so results are
//! reproducible. Malformed input degrades to partial results, never errors.

pub mod anonymize;
pub mod pipeline;

pub use anonymize::{
    anonymize, anonymize_with_defaults, redact_detected_identity, AnonymizationConfig,
    AnonymizationOutcome, AnonymizationStats,
};
pub use pipeline::{
    analyze_career_timeline, detect_personal_info, extract_linkedin_url,
    parse_candidate_from_text, split_text_into_sections, Candidate, CareerAnalysis, CareerGap,
    CareerOverlap, DateRangeParser, DateRangeResult, EducationEntry, PersonalInfo, SectionKind,
    SectionMap, WorkExperienceEntry,
};
