use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    pub session: SessionConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `json` or `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Allowed CORS origins; empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Adds Strict-Transport-Security. Only enable behind TLS termination.
    #[serde(default)]
    pub hsts_enabled: bool,
}

/// Per-visitor session settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// A session idle for longer than this is destroyed with its alerts.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    /// Upper bound on live sessions; the least recently seen one is evicted first.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    #[serde(default)]
    pub secure_cookie: bool,

    #[serde(default = "default_same_site")]
    pub same_site: String,
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_map_style")]
    pub map_style: String,

    /// Mapbox access token. Without one the basemap is omitted and only the
    /// alert overlay is drawn.
    #[serde(default)]
    pub mapbox_token: String,

    #[serde(default = "default_deck_script_url")]
    pub deck_script_url: String,

    #[serde(default = "default_deck_json_script_url")]
    pub deck_json_script_url: String,

    #[serde(default = "default_mapbox_script_url")]
    pub mapbox_script_url: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8501
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_cookie_name() -> String {
    "eco_pulse_session".to_string()
}
fn default_idle_timeout() -> u64 {
    3600
}
fn default_sweep_interval() -> u64 {
    60
}
fn default_max_sessions() -> usize {
    10_000
}
fn default_same_site() -> String {
    "Lax".to_string()
}
fn default_map_style() -> String {
    domain::services::DEFAULT_MAP_STYLE.to_string()
}
fn default_deck_script_url() -> String {
    "https://unpkg.com/deck.gl@8.9.35/dist.min.js".to_string()
}
fn default_deck_json_script_url() -> String {
    "https://unpkg.com/@deck.gl/json@8.9.35/dist.min.js".to_string()
}
fn default_mapbox_script_url() -> String {
    "https://api.mapbox.com/mapbox-gl-js/v1.13.3/mapbox-gl.js".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with ECO__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("ECO").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration from embedded defaults plus `overrides`, without
    /// touching the file system.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 8501
            request_timeout_secs = 30

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []
            hsts_enabled = false

            [session]
            cookie_name = "eco_pulse_session"
            idle_timeout_secs = 3600
            sweep_interval_secs = 60
            max_sessions = 100
            secure_cookie = false
            same_site = "Lax"

            [dashboard]
            map_style = "mapbox://styles/mapbox/dark-v10"
            mapbox_token = ""
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "ECO__SESSION__COOKIE_NAME must not be empty".to_string(),
            ));
        }

        if self.session.idle_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "session idle_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.session.sweep_interval_secs == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "session sweep_interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.session.max_sessions == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "session max_sessions must be greater than 0".to_string(),
            ));
        }

        if !matches!(self.session.same_site.as_str(), "Strict" | "Lax" | "None") {
            return Err(ConfigValidationError::InvalidValue(format!(
                "session same_site must be Strict, Lax or None (got {})",
                self.session.same_site
            )));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
