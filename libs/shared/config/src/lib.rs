use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How loosely free-text fields are matched.
///
/// `Strict` refuses empty comparison keys and ignores single-letter shift
/// markers. `Legacy` reproduces the website's original loose matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingMode {
    #[default]
    Strict,
    Legacy,
}

impl FromStr for MatchingMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MatchingMode::Strict),
            "legacy" => Ok(MatchingMode::Legacy),
            other => Err(format!("unknown matching mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub port: u16,
    pub matching_mode: MatchingMode,
    pub checkout_redirect_delay_ms: u64,
}

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHECKOUT_REDIRECT_DELAY_MS: u64 = 3000;

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            matching_mode: env::var("MATCHING_MODE")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(mode) => Some(mode),
                    Err(e) => {
                        warn!("{}, using strict matching", e);
                        None
                    }
                })
                .unwrap_or_default(),
            checkout_redirect_delay_ms: env::var("CHECKOUT_REDIRECT_DELAY_MS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_CHECKOUT_REDIRECT_DELAY_MS),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_anon_key.is_empty()
    }
}
