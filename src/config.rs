use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::analysis::SynergyMode;
use crate::pokeapi::DEFAULT_API_BASE;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_POOL_LIMIT: u32 = 2000;
pub const DEFAULT_FETCH_CONCURRENCY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {message}")]
    Invalid {
        key: &'static str,
        value: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: String,
    pub api_base: String,
    /// Number of list entries loaded for the team-builder pool and the catalog.
    pub pool_limit: u32,
    pub fetch_concurrency: usize,
    pub synergy: SynergyMode,
    /// Flavor-text language preference, most preferred first.
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            pool_limit: DEFAULT_POOL_LIMIT,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            synergy: SynergyMode::default(),
            languages: vec!["en".to_string()],
        }
    }
}

struct Reader<'a> {
    lookup: &'a dyn Fn(&str) -> Option<String>,
    errors: Vec<ConfigError>,
}

impl Reader<'_> {
    fn raw(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn get<T>(&mut self, key: &'static str, default: T) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(raw) = self.raw(key) else {
            return default;
        };
        match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(err) => {
                self.errors.push(ConfigError::Invalid {
                    key,
                    value: raw,
                    message: err.to_string(),
                });
                default
            }
        }
    }
}

impl Config {
    /// Reads `.env` (if present) and the process environment. Invalid values fall
    /// back to their defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let (config, errors) = Self::read(&|key| env::var(key).ok());
        for err in errors {
            tracing::warn!("{err}; using default");
        }
        config
    }

    /// Strict variant: the first invalid value is an error.
    pub fn parse_from(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let (config, errors) = Self::read(lookup);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(config),
        }
    }

    fn read(lookup: &dyn Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut reader = Reader {
            lookup,
            errors: Vec::new(),
        };

        let bind = reader.raw("POKECOACH_BIND").unwrap_or(defaults.bind);
        let api_base = reader
            .raw("POKECOACH_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);
        let pool_limit = reader.get("POKECOACH_POOL_LIMIT", defaults.pool_limit);
        let mut fetch_concurrency =
            reader.get("POKECOACH_FETCH_CONCURRENCY", defaults.fetch_concurrency);
        if fetch_concurrency == 0 {
            reader.errors.push(ConfigError::Invalid {
                key: "POKECOACH_FETCH_CONCURRENCY",
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
            fetch_concurrency = DEFAULT_FETCH_CONCURRENCY;
        }
        let synergy = reader.get("POKECOACH_SYNERGY", defaults.synergy);
        let languages = reader
            .raw("POKECOACH_LANGS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|langs| !langs.is_empty())
            .unwrap_or(defaults.languages);

        let config = Self {
            bind,
            api_base,
            pool_limit,
            fetch_concurrency,
            synergy,
            languages,
        };
        (config, reader.errors)
    }
}
