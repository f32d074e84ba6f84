use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use marketer_engine::{ServiceSettings, DEFAULT_SERVICE_URL};

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "keyword_marketer",
    version,
    about = "Scan a website for keywords and generate marketing sentences",
    long_about = None
)]
pub struct CliArgs {
    /// Base URL of the generation service.
    #[arg(
        long,
        env = "KEYWORD_MARKETER_SERVICE_URL",
        value_name = "URL",
        default_value = DEFAULT_SERVICE_URL
    )]
    pub service_url: String,

    /// Connect timeout in seconds (transport default when unset).
    #[arg(long, value_name = "SECS")]
    pub connect_timeout_secs: Option<u64>,

    /// Whole-request timeout in seconds (transport default when unset).
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log verbosity level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl CliArgs {
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            base_url: self.service_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
