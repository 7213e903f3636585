use std::time::Duration;

use crate::i18n::Language;

/// Application-level constants
pub const APP_NAME: &str = "ctas-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// System label reported by the health endpoint.
pub const SYSTEM_LABEL: &str = "CTAS Triage System - Saudi Arabia";
/// Service version reported by the health endpoint.
pub const SERVICE_VERSION: &str = "2.0.0-ctas";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENVIRONMENT: &str = "production";
const DEFAULT_SESSION_LIFETIME_SECS: u64 = 3600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("unsupported language code {0:?}")]
    UnknownLanguage(String),
    #[error("DEFAULT_LANGUAGE {0} is not listed in SUPPORTED_LANGUAGES")]
    DefaultNotSupported(Language),
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub default_language: Language,
    pub supported_languages: Vec<Language>,
    pub log_level: String,
    pub environment: String,
    pub session_cookie_secure: bool,
    pub session_lifetime: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_language: Language::Ar,
            supported_languages: vec![Language::Ar, Language::En],
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            session_cookie_secure: true,
            session_lifetime: Duration::from_secs(DEFAULT_SESSION_LIFETIME_SECS),
        }
    }
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or blank keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => defaults.port,
        };

        let supported_languages = match get("SUPPORTED_LANGUAGES") {
            Some(raw) => parse_languages(&raw)?,
            None => defaults.supported_languages,
        };

        let default_language = match get("DEFAULT_LANGUAGE") {
            Some(raw) => Language::parse(&raw).ok_or(ConfigError::UnknownLanguage(raw))?,
            None => defaults.default_language,
        };
        if !supported_languages.contains(&default_language) {
            return Err(ConfigError::DefaultNotSupported(default_language));
        }

        let session_cookie_secure = match get("SESSION_COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                key: "SESSION_COOKIE_SECURE",
                expected: "true or false",
                value: raw,
            })?,
            None => defaults.session_cookie_secure,
        };

        let session_lifetime = match get("SESSION_LIFETIME_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "SESSION_LIFETIME_SECS",
                        expected: "a positive number of seconds",
                        value: raw,
                    })
                }
            },
            None => defaults.session_lifetime,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            default_language,
            supported_languages,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: get("APP_ENV").unwrap_or(defaults.environment),
            session_cookie_secure,
            session_lifetime,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_supported(&self, lang: Language) -> bool {
        self.supported_languages.contains(&lang)
    }
}

fn parse_languages(raw: &str) -> Result<Vec<Language>, ConfigError> {
    let mut langs = Vec::new();
    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let lang = Language::parse(code).ok_or_else(|| ConfigError::UnknownLanguage(code.into()))?;
        if !langs.contains(&lang) {
            langs.push(lang);
        }
    }
    Ok(langs)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter(level: &str) -> String {
    format!("{level},ctas_triage={level},triage_lib={level},tower_http=warn,hyper=warn")
}
