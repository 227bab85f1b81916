//! Client configuration resolved from build-time environment variables.
//!
//! DESIGN
//! ======
//! A static WASM bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed here into
//! a typed [`ClientConfig`]. Everything has a default; only malformed values
//! are errors.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "userData";
pub const DEFAULT_ALERT_TTL: Duration = Duration::from_secs(5);
pub const DEFAULT_LOGIN_DEMO_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_SIGNUP_SUCCESS_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_SIGNUP_DEMO_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// REST endpoints the flows talk to.
///
/// `profile` is declared for completeness; no flow calls it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub login: String,
    pub signup: String,
    pub logout: String,
    pub profile: String,
}

impl ApiEndpoints {
    /// Build endpoint URLs under `base` (empty for same-origin).
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        Self {
            login: format!("{base}/api/login"),
            signup: format!("{base}/api/signup"),
            logout: format!("{base}/api/logout"),
            profile: format!("{base}/api/profile"),
        }
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::with_base("")
    }
}

/// Whether an unreachable backend is treated as a successful demo login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoMode {
    Enabled,
    Disabled,
}

impl DemoMode {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Navigation delays applied after a flow finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub alert_ttl: Duration,
    pub login_demo: Duration,
    pub signup_success: Duration,
    pub signup_demo: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            alert_ttl: DEFAULT_ALERT_TTL,
            login_demo: DEFAULT_LOGIN_DEMO_DELAY,
            signup_success: DEFAULT_SIGNUP_SUCCESS_DELAY,
            signup_demo: DEFAULT_SIGNUP_DEMO_DELAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: ApiEndpoints,
    pub storage_key: String,
    pub demo_mode: DemoMode,
    pub delays: Delays,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: ApiEndpoints::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            demo_mode: DemoMode::Enabled,
            delays: Delays::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `AUTHPAGES_API_BASE`: origin prefix for `/api/*` (default same-origin)
    /// - `AUTHPAGES_DEMO_MODE`: `true`/`false`/`1`/`0`/`on`/`off` (default on)
    /// - `AUTHPAGES_STORAGE_KEY`: session storage key (default `userData`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparsable value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("AUTHPAGES_API_BASE"),
            option_env!("AUTHPAGES_DEMO_MODE"),
            option_env!("AUTHPAGES_STORAGE_KEY"),
        )
    }

    /// Build config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `demo_mode` or `storage_key` is malformed.
    pub fn from_vars(
        api_base: Option<&str>,
        demo_mode: Option<&str>,
        storage_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let endpoints = ApiEndpoints::with_base(api_base.unwrap_or_default());
        let demo_mode = parse_demo_mode(demo_mode)?;
        let storage_key = match storage_key.map(str::trim) {
            None => DEFAULT_STORAGE_KEY.to_owned(),
            Some("") => {
                return Err(ConfigError::InvalidValue { var: "AUTHPAGES_STORAGE_KEY", value: String::new() });
            }
            Some(key) => key.to_owned(),
        };
        Ok(Self { endpoints, storage_key, demo_mode, delays: Delays::default() })
    }
}

fn parse_demo_mode(raw: Option<&str>) -> Result<DemoMode, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DemoMode::Enabled);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(DemoMode::Enabled),
        "0" | "false" | "off" | "no" => Ok(DemoMode::Disabled),
        _ => Err(ConfigError::InvalidValue { var: "AUTHPAGES_DEMO_MODE", value: raw.to_owned() }),
    }
}
