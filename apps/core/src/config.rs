//! Runtime configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Every setting has a default so the companion runs with no setup.

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const KNOWLEDGE_FILE_VAR: &str = "PORTFOLIO_KNOWLEDGE_FILE";
pub const DATA_DIR_VAR: &str = "PORTFOLIO_DATA_DIR";
pub const LOG_FORMAT_VAR: &str = "PORTFOLIO_LOG_FORMAT";
pub const REPLY_DELAY_MIN_VAR: &str = "PORTFOLIO_REPLY_DELAY_MIN_MS";
pub const REPLY_DELAY_MAX_VAR: &str = "PORTFOLIO_REPLY_DELAY_MAX_MS";

const DEFAULT_REPLY_DELAY_MIN_MS: u64 = 800;
const DEFAULT_REPLY_DELAY_MAX_MS: u64 = 1600;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Bounds of the simulated "thinking" delay before a chat reply is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub min: Duration,
    pub max: Duration,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(DEFAULT_REPLY_DELAY_MIN_MS),
            max: Duration::from_millis(DEFAULT_REPLY_DELAY_MAX_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON knowledge base to load instead of the builtin one.
    pub knowledge_file: Option<PathBuf>,
    /// Directory holding the persisted key-value store.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
    pub reply_delay: ReplyDelay,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            knowledge_file: None,
            data_dir: PortablePathManager::default_data_dir(),
            log_format: LogFormat::default(),
            reply_delay: ReplyDelay::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and then reads the configuration from the environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is the normal case.
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Reads the configuration from the current process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let knowledge_file = non_empty_var(KNOWLEDGE_FILE_VAR).map(PathBuf::from);
        let data_dir = non_empty_var(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let log_format = match non_empty_var(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        let min = millis_var(REPLY_DELAY_MIN_VAR)?.unwrap_or(defaults.reply_delay.min);
        let max = millis_var(REPLY_DELAY_MAX_VAR)?.unwrap_or(defaults.reply_delay.max);
        if min > max {
            return Err(AppError::Config(format!(
                "{} ({:?}) must not exceed {} ({:?})",
                REPLY_DELAY_MIN_VAR, min, REPLY_DELAY_MAX_VAR, max
            )));
        }

        Ok(Self {
            knowledge_file,
            data_dir,
            log_format,
            reply_delay: ReplyDelay { min, max },
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn millis_var(name: &str) -> Result<Option<Duration>, AppError> {
    match non_empty_var(name) {
        Some(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{}: {}", name, e)))?;
            Ok(Some(Duration::from_millis(ms)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        KNOWLEDGE_FILE_VAR,
        DATA_DIR_VAR,
        LOG_FORMAT_VAR,
        REPLY_DELAY_MIN_VAR,
        REPLY_DELAY_MAX_VAR,
    ];

    fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|v| (*v, None)).collect()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        temp_env::with_vars(cleared(), || {
            let config = AppConfig::from_env().unwrap();
            assert!(config.knowledge_file.is_none());
            assert_eq!(config.log_format, LogFormat::Pretty);
            assert_eq!(config.reply_delay, ReplyDelay::default());
            assert!(config.data_dir.ends_with("data"));
        });
    }

    #[test]
    fn test_reads_overrides() {
        temp_env::with_vars(
            [
                (KNOWLEDGE_FILE_VAR, Some("/srv/kb.json")),
                (DATA_DIR_VAR, Some("/srv/state")),
                (LOG_FORMAT_VAR, Some("JSON")),
                (REPLY_DELAY_MIN_VAR, Some("10")),
                (REPLY_DELAY_MAX_VAR, Some("20")),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.knowledge_file, Some(PathBuf::from("/srv/kb.json")));
                assert_eq!(config.data_dir, PathBuf::from("/srv/state"));
                assert_eq!(config.log_format, LogFormat::Json);
                assert_eq!(config.reply_delay.min, Duration::from_millis(10));
                assert_eq!(config.reply_delay.max, Duration::from_millis(20));
            },
        );
    }

    #[test]
    fn test_rejects_bad_delay() {
        let mut vars = cleared();
        vars.push((REPLY_DELAY_MIN_VAR, Some("soon")));
        temp_env::with_vars(vars, || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_rejects_inverted_delay_bounds() {
        let mut vars = cleared();
        vars.push((REPLY_DELAY_MIN_VAR, Some("900")));
        vars.push((REPLY_DELAY_MAX_VAR, Some("100")));
        temp_env::with_vars(vars, || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }
}
