mod cli;
mod commands;
mod config;
mod error;
mod infra;
mod telemetry;

pub use error::AppError;
pub use telemetry::TelemetryError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
