//! Environment configuration for the sync run.
//!
//! All three values are required. Every missing name is collected before
//! failing so the caller can report them in one message.

use std::fmt;
use thiserror::Error;

pub const CREXI_API_KEY: &str = "CREXI_API_KEY";
pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_KEY: &str = "SUPABASE_KEY";

/// Optional comma-separated hosts replacing the built-in Crexi base URLs
pub const CREXI_BASE_URLS: &str = "CREXI_BASE_URLS";

/// Required variables, in reporting order
pub const REQUIRED_VARS: [&str; 3] = [CREXI_API_KEY, SUPABASE_URL, SUPABASE_KEY];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

impl ConfigError {
    pub fn missing(&self) -> &[&'static str] {
        match self {
            ConfigError::MissingVariables(names) => names,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub crexi_api_key: String,
    pub supabase_url: String,
    pub supabase_key: String,
    pub crexi_base_urls: Option<Vec<String>>,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let crexi_api_key = read(CREXI_API_KEY);
        let supabase_url = read(SUPABASE_URL);
        let supabase_key = read(SUPABASE_KEY);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let crexi_base_urls = lookup(CREXI_BASE_URLS)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|urls| !urls.is_empty());

        Ok(Self {
            crexi_api_key,
            supabase_url,
            supabase_key,
            crexi_base_urls,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("crexi_api_key", &"<redacted>")
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"<redacted>")
            .field("crexi_base_urls", &self.crexi_base_urls)
            .finish()
    }
}
