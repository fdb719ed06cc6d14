use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use serde_json::json;
use tracing::info;

use resume_intel::{
    analyze_career_timeline, anonymize, parse_candidate_from_text, AnonymizationConfig,
    DateRangeResult,
};

use crate::error::AppError;
use crate::infra;

#[derive(Args, Debug)]
pub(crate) struct ParseArgs {
    /// Resume text file; reads stdin when omitted
    pub(crate) input: Option<PathBuf>,
    /// Include a career-timeline analysis alongside the candidate
    #[arg(long)]
    pub(crate) timeline: bool,
    /// Reference date for timeline math (defaults to today)
    #[arg(long, value_parser = infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct AnonymizeArgs {
    /// Resume text file; reads stdin when omitted
    pub(crate) input: Option<PathBuf>,
    /// Anonymization preset to start from
    #[arg(long, value_enum, default_value = "standard")]
    pub(crate) preset: Preset,
    /// Force the cleaned professional summary on
    #[arg(long)]
    pub(crate) include_summary: bool,
    /// Force unknown sections to be kept
    #[arg(long)]
    pub(crate) keep_unknown: bool,
    /// Emit JSON with the anonymization statistics instead of plain text
    #[arg(long)]
    pub(crate) stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum Preset {
    Standard,
    Conservative,
    Aggressive,
}

impl Preset {
    fn config(self) -> AnonymizationConfig {
        match self {
            Self::Standard => AnonymizationConfig::standard(),
            Self::Conservative => AnonymizationConfig::conservative(),
            Self::Aggressive => AnonymizationConfig::aggressive(),
        }
    }
}

pub(crate) fn run_parse(args: ParseArgs) -> Result<(), AppError> {
    let text = infra::read_input(args.input.as_deref())?;
    let candidate = parse_candidate_from_text(&text);

    info!(
        experiences = candidate.work_experiences.len(),
        educations = candidate.educations.len(),
        "parsed candidate"
    );

    if args.timeline {
        let today = args.today.unwrap_or_else(|| Local::now().date_naive());
        let ranges: Vec<DateRangeResult> = candidate
            .work_experiences
            .iter()
            .map(|entry| DateRangeResult {
                start_date: entry.start_date,
                end_date: entry.end_date,
                is_valid: entry.start_date.is_some(),
                message: String::new(),
            })
            .collect();
        let timeline = analyze_career_timeline(&ranges, today);
        let output = json!({ "candidate": candidate, "timeline": timeline });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&candidate)?);
    }

    Ok(())
}

pub(crate) fn run_anonymize(args: AnonymizeArgs) -> Result<(), AppError> {
    let text = infra::read_input(args.input.as_deref())?;

    let mut config = args.preset.config();
    if args.include_summary {
        config.include_cleaned_summary = true;
    }
    if args.keep_unknown {
        config.keep_unknown_sections = true;
    }

    let outcome = anonymize(&text, config);

    info!(
        kept = outcome.stats.kept_sections.len(),
        removed = outcome.stats.removed_sections.len(),
        scrubbed = outcome.stats.anonymized_items.len(),
        "anonymized resume"
    );

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.anonymized_text);
    }

    Ok(())
}
