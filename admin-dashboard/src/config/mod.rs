use jsonwebtoken::Algorithm;
use secrecy::Secret;
use serde::Deserialize;
use service_core::error::AppError;

pub const SERVICE_DIR: &str = "admin-dashboard";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub observability: ObservabilitySettings,
    #[serde(default)]
    pub permissions: PermissionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Mark the session cookie `Secure`. Leave off only for plain-HTTP development.
    #[serde(default)]
    pub secure_cookies: bool,
    #[serde(default = "default_session_inactivity_hours")]
    pub session_inactivity_hours: i64,
}

fn default_session_inactivity_hours() -> i64 {
    24
}

/// How access tokens from the auth service are verified.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    #[serde(default = "default_algorithm")]
    pub algorithm: Algorithm,
    /// PEM public key, for asymmetric algorithms.
    #[serde(default)]
    pub public_key_path: Option<String>,
    /// Shared secret, for HS256/384/512.
    #[serde(default)]
    pub shared_secret: Option<Secret<String>>,
    /// Required `iss` claim, when set.
    #[serde(default)]
    pub issuer: Option<String>,
}

fn default_algorithm() -> Algorithm {
    Algorithm::RS256
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilitySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector; tracing stays local when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PermissionSettings {
    /// Cache resolved permission sets per (role, area) pair.
    #[serde(default = "default_memoize")]
    pub memoize: bool,
}

impl Default for PermissionSettings {
    fn default() -> Self {
        Self {
            memoize: default_memoize(),
        }
    }
}

fn default_memoize() -> bool {
    true
}

pub fn get_configuration() -> Result<Settings, AppError> {
    service_core::config::load_settings::<Settings>(SERVICE_DIR)
}
