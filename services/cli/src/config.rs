use std::env;

/// Runtime settings for the CLI, loaded from the environment (a `.env`
/// file is honored when present).
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) telemetry: TelemetryConfig,
}

#[derive(Debug, Clone)]
pub(crate) struct TelemetryConfig {
    pub(crate) log_level: String,
}

impl AppConfig {
    pub(crate) fn load() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("RESUME_INTEL_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            telemetry: TelemetryConfig { log_level },
        }
    }
}
