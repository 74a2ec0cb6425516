use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Format used when `LOG_FORMAT` is unset: JSON for shared environments.
    #[must_use]
    pub fn default_for(deployment: Deployment) -> Self {
        match deployment {
            Deployment::Stage | Deployment::Prod => Self::Json,
            Deployment::Local | Deployment::Dev => Self::Text,
        }
    }
}

pub const DEFAULT_HYDRO_BASE_URL: &str = "https://www.hydrodaten.admin.ch";

/// Longest accepted refresh interval (one day).
pub const MAX_REFRESH_INTERVAL_SECONDS: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    // Hydrodaten API
    pub hydro_base_url: String,
    pub hydro_timeout_seconds: u64,

    // Refresh settings
    pub refresh_interval_seconds: u64,

    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Rate limiting
    pub disable_rate_limiting: bool,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,

    // Application metadata
    pub log_format: LogFormat,
    pub deployment: Deployment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hydro_base_url: DEFAULT_HYDRO_BASE_URL.to_string(),
            hydro_timeout_seconds: 30,
            refresh_interval_seconds: 600,
            api_host: "0.0.0.0".to_string(),
            api_port: 8050,
            disable_rate_limiting: false,
            rate_limit_per_second: 5,
            rate_limit_burst: 60,
            log_format: LogFormat::Text,
            deployment: Deployment::Local,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so an empty environment yields a working
    /// configuration pointed at the public hydrodaten host.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if any value fails [`Config::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let deployment = Deployment::from_str(
            &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
        );

        Self {
            // Hydrodaten API
            hydro_base_url: env::var("HYDRO_BASE_URL")
                .unwrap_or(defaults.hydro_base_url)
                .trim_end_matches('/')
                .to_string(),
            hydro_timeout_seconds: parse_var("HYDRO_TIMEOUT_SECONDS", defaults.hydro_timeout_seconds),

            // Refresh settings
            refresh_interval_seconds: parse_var(
                "REFRESH_INTERVAL_SECONDS",
                defaults.refresh_interval_seconds,
            ),

            // API settings
            api_host: env::var("API_HOST").unwrap_or(defaults.api_host),
            api_port: parse_var("API_PORT", defaults.api_port),

            // Rate limiting
            disable_rate_limiting: parse_var("DISABLE_RATE_LIMITING", defaults.disable_rate_limiting),
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND", defaults.rate_limit_per_second),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst),

            // Application metadata
            log_format: env::var("LOG_FORMAT")
                .map_or_else(|_| LogFormat::default_for(deployment), |s| LogFormat::from_str(&s)),
            deployment,
        }
        .validate()
    }

    /// Check values that would break the client or the dashboard page.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `hydro_base_url` is not an http(s) URL
    /// or `refresh_interval_seconds` is outside `1..=MAX_REFRESH_INTERVAL_SECONDS`.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.hydro_base_url.starts_with("http://") && !self.hydro_base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid("HYDRO_BASE_URL", self.hydro_base_url));
        }

        if !(1..=MAX_REFRESH_INTERVAL_SECONDS).contains(&self.refresh_interval_seconds) {
            return Err(ConfigError::Invalid(
                "REFRESH_INTERVAL_SECONDS",
                self.refresh_interval_seconds.to_string(),
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// Refresh interval in milliseconds, as handed to the dashboard page.
    ///
    /// Capped at `MAX_REFRESH_INTERVAL_SECONDS` so the value stays within the
    /// browser timer range even for a config that skipped validation.
    #[must_use]
    pub fn refresh_interval_ms(&self) -> u64 {
        self.refresh_interval_seconds
            .min(MAX_REFRESH_INTERVAL_SECONDS)
            .saturating_mul(1000)
    }
}

/// Parse an environment variable, falling back to `default` when unset or malformed.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
