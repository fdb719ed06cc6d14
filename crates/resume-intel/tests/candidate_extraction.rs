use chrono::NaiveDate;
use resume_intel::{
    analyze_career_timeline, parse_candidate_from_text, DateRangeParser,
};

const RESUME: &str = "\
Alice Johnson
Staff Engineer
alice.johnson@example.com
+1 628 555 0199

Summary
Backend specialist with a focus on high-volume payment systems.

Experience
Staff Engineer - Fintech Corp
March 2021 - Present
• Designed the settlement pipeline
• Led migration to event-driven services

Senior Engineer
Cloudline Inc
01/2018 - 12/2020
Developed APIs consumed by 40 internal teams

Education
Master of Science in Computer Science
Carnegie Mellon University
Graduated: May 2017

Skills
Go, Python, PostgreSQL, Docker, Kubernetes
Git, Jenkins
";

fn pinned_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid pinned date")
}

#[test]
fn full_resume_extraction_end_to_end() {
    let candidate = parse_candidate_from_text(RESUME);

    assert_eq!(candidate.name.as_deref(), Some("Alice Johnson"));
    assert_eq!(candidate.email.as_deref(), Some("alice.johnson@example.com"));

    assert_eq!(candidate.work_experiences.len(), 2);
    assert!(candidate.work_experiences[0]
        .job_title
        .contains("Staff Engineer"));
    assert_eq!(candidate.work_experiences[0].end_date, None);
    assert_eq!(
        candidate.work_experiences[1].start_date,
        Some(NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid"))
    );

    assert_eq!(candidate.educations.len(), 1);
    assert_eq!(
        candidate.educations[0].institution,
        "Carnegie Mellon University"
    );

    for skill in ["Go", "Python", "PostgreSQL", "Docker", "Kubernetes"] {
        assert!(
            candidate.skills.contains(skill),
            "missing skill {skill} in {:?}",
            candidate.skills
        );
    }

    for entry in &candidate.work_experiences {
        assert!(entry.dates_in_order());
    }
}

#[test]
fn timeline_from_extracted_experience_detects_gap() {
    let parser = DateRangeParser::new(pinned_today());
    let ranges = vec![
        parser.parse_date_range("January 2015 - December 2016"),
        parser.parse_date_range("July 2017 - Present"),
    ];

    let analysis = analyze_career_timeline(&ranges, pinned_today());

    assert!(analysis.has_gaps);
    assert_eq!(analysis.gaps.len(), 1);
    assert!(analysis.gaps[0].months >= 5);
    assert!(!analysis.has_overlaps);
    assert_eq!(analysis.career_end_date, None);
}

#[test]
fn parsing_is_deterministic_across_calls() {
    let first = parse_candidate_from_text(RESUME);
    let second = parse_candidate_from_text(RESUME);
    assert_eq!(first, second);
}

#[test]
fn skills_extraction_is_idempotent_and_order_stable() {
    let first = parse_candidate_from_text(RESUME).skills;
    let second = parse_candidate_from_text(RESUME).skills;
    assert_eq!(first, second);

    let skills: Vec<&str> = first.split(", ").collect();
    let mut deduped = skills.clone();
    deduped.dedup();
    assert_eq!(skills, deduped, "skill list must be free of duplicates");
}

#[test]
fn candidate_serializes_to_json_and_back() {
    let candidate = parse_candidate_from_text(RESUME);
    let json = serde_json::to_string(&candidate).expect("candidate serializes");
    let decoded: resume_intel::Candidate =
        serde_json::from_str(&json).expect("candidate deserializes");
    assert_eq!(candidate, decoded);
}

#[test]
fn garbage_input_produces_empty_candidate_without_panic() {
    for input in ["", "    ", "\u{0}\u{1}\u{2}", "a\nb\nc", "%%%%%\n-----"] {
        let candidate = parse_candidate_from_text(input);
        assert!(candidate.work_experiences.is_empty(), "input {input:?}");
        assert!(candidate.educations.is_empty(), "input {input:?}");
    }
}
