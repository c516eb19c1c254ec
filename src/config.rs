/*
 * Responsibility
 * - Read settings from the environment (.env is honoured via dotenvy)
 * - Validate them up front: a bad value fails startup, never a request
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::auth::ClaimSource;
use crate::services::auth::options::{DEFAULT_DELIMITER, DEFAULT_SCHEME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// `Field` or `Field:claim_type`. Without a claim type the field name is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSpec {
    pub field: String,
    pub claim_type: Option<String>,
}

impl MappingSpec {
    fn parse(raw: &str, key: &'static str) -> Result<Self, ConfigError> {
        let (field, claim_type) = match raw.split_once(':') {
            Some((field, claim_type)) => {
                let claim_type = claim_type.trim();
                if claim_type.is_empty() {
                    return Err(ConfigError::Invalid(key));
                }
                (field.trim(), Some(claim_type.to_string()))
            }
            None => (raw.trim(), None),
        };

        if field.is_empty() {
            return Err(ConfigError::Invalid(key));
        }

        Ok(Self {
            field: field.to_string(),
            claim_type,
        })
    }

    pub fn claim_type(&self) -> &str {
        self.claim_type.as_deref().unwrap_or(&self.field)
    }
}

/// Settings for the field-based authentication engine.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub scheme: String,
    pub source: ClaimSource,
    pub delimiter: String,
    pub subject: Option<MappingSpec>,
    pub name: Option<MappingSpec>,
    pub role: Option<MappingSpec>,
    pub claims: Vec<MappingSpec>,
    pub audit: bool,
    pub denied_subjects: Vec<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            source: ClaimSource::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            subject: None,
            name: None,
            role: None,
            claims: Vec::new(),
            audit: false,
            denied_subjects: Vec::new(),
        }
    }
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,

    pub auth: AuthSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let body_limit_bytes = lookup("BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        let auth = auth_settings(&lookup)?;

        Ok(Self {
            addr,
            app_env,
            request_timeout_secs,
            body_limit_bytes,
            auth,
        })
    }
}

fn auth_settings<F>(lookup: &F) -> Result<AuthSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = AuthSettings::default();

    let scheme = lookup("INTERNAL_AUTH_SCHEME")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.scheme);

    let source = match lookup("INTERNAL_AUTH_SOURCE") {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<ClaimSource>()
            .map_err(|_| ConfigError::Invalid("INTERNAL_AUTH_SOURCE"))?,
        _ => defaults.source,
    };

    // Not trimmed: whitespace is a legitimate delimiter.
    let delimiter = lookup("INTERNAL_AUTH_DELIMITER")
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.delimiter);

    let single = |key: &'static str| -> Result<Option<MappingSpec>, ConfigError> {
        match lookup(key) {
            Some(raw) if !raw.trim().is_empty() => MappingSpec::parse(&raw, key).map(Some),
            _ => Ok(None),
        }
    };

    let subject = single("INTERNAL_AUTH_SUBJECT_FIELD")?;
    let name = single("INTERNAL_AUTH_NAME_FIELD")?;
    let role = single("INTERNAL_AUTH_ROLE_FIELD")?;

    let claims = list(lookup("INTERNAL_AUTH_CLAIM_FIELDS"))
        .iter()
        .map(|raw| MappingSpec::parse(raw, "INTERNAL_AUTH_CLAIM_FIELDS"))
        .collect::<Result<Vec<_>, _>>()?;

    let audit = lookup("INTERNAL_AUTH_AUDIT")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    let denied_subjects = list(lookup("INTERNAL_AUTH_DENIED_SUBJECTS"));

    Ok(AuthSettings {
        scheme,
        source,
        delimiter,
        subject,
        name,
        role,
        claims,
        audit,
        denied_subjects,
    })
}

fn list(raw: Option<String>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
