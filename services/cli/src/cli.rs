use clap::{Parser, Subcommand};

use crate::commands::{run_anonymize, run_parse, AnonymizeArgs, ParseArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "resume-intel",
    about = "Extract structured candidate data from resume text, or produce a privacy-scrubbed version of it",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse resume text into a structured candidate document (JSON)
    Parse(ParseArgs),
    /// Remove personal sections and scrub leaked PII from resume text
    Anonymize(AnonymizeArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Anonymize(args) => run_anonymize(args),
    }
}
