// Start of file: /src/config/environment.rs

// * Environment configuration with a singleton pattern
// * and zero-copy defaults.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_GLOBAL_PREFIX: &str = "api";
const DEFAULT_CORS_ORIGINS: &str = "*";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

// * Which origins receive CORS-permitting headers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    // * "*" (or nothing at all) means any origin, otherwise a comma separated list
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_owned)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    // ? Normalized: no leading/trailing slashes, None when disabled
    pub global_prefix: Option<String>,
    pub cors_origins: CorsOrigins,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            global_prefix: Some(DEFAULT_GLOBAL_PREFIX.to_owned()),
            cors_origins: CorsOrigins::parse(DEFAULT_CORS_ORIGINS),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process (and .env).
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars (.env values are already in the process env).
        // ! Non-Unicode entries are skipped; none of our keys can hold them
        let vars: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => Some((key, value)),
                (key, _) => {
                    let key: String = key.unwrap_or_else(|k| k.to_string_lossy().into_owned());
                    warn!("Skipping non-Unicode environment variable '{key}'");
                    None
                }
            })
            .collect();

        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit variable map, providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.trim().parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            // ! An explicitly empty GLOBAL_PREFIX disables prefixing
            global_prefix: normalize_prefix(get_var("GLOBAL_PREFIX").unwrap_or(DEFAULT_GLOBAL_PREFIX))?,

            cors_origins: CorsOrigins::parse(
                get_var("CORS_ALLOWED_ORIGINS").unwrap_or(DEFAULT_CORS_ORIGINS),
            ),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.trim().parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.trim().parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    // * Address the listener binds to, e.g. "0.0.0.0:3001"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // * Joins a route onto the global prefix: "/health" -> "/api/health"
    pub fn prefixed(&self, path: &str) -> String {
        let path: &str = path.trim_start_matches('/');
        match &self.global_prefix {
            Some(prefix) => format!("/{prefix}/{path}"),
            None => format!("/{path}"),
        }
    }

    // * Returns the lazily-initialized process configuration; load errors are kept and re-reported
    pub fn instance() -> Result<&'static Self> {
        static INSTANCE: Lazy<Result<EnvironmentVariables, anyhow::Error>> = Lazy::new(|| {
            let config: EnvironmentVariables = EnvironmentVariables::load()?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        INSTANCE
            .as_ref()
            .map_err(|err| anyhow::anyhow!("Failed to load environment configuration: {err:#}"))
    }
}

// * "/api/" -> Some("api"), "" or "/" -> None
// ! Segments must be literal: no empty segments, no ":"/"*" captures, no braces
fn normalize_prefix(raw: &str) -> Result<Option<String>> {
    let trimmed: &str = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }

    let literal = |segment: &str| {
        !segment.is_empty()
            && !segment.starts_with(':')
            && !segment.starts_with('*')
            && !segment.contains(['{', '}'])
    };

    if !trimmed.split('/').all(literal) {
        anyhow::bail!("Invalid GLOBAL_PREFIX '{raw}': segments must be literal path text");
    }

    Ok(Some(trimmed.to_owned()))
}


// End of file: /src/config/environment.rs
