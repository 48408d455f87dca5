use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub cors_allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "*".to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub submit_timeout: Duration,
    pub success_display: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:3000/api/booking".to_string(),
            submit_timeout: Duration::from_secs(10),
            success_display: Duration::from_secs(3),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint_url: env::var("BOOKING_ENDPOINT_URL").unwrap_or(defaults.endpoint_url),
            submit_timeout: secs_from_env("SUBMIT_TIMEOUT_SECS").unwrap_or(defaults.submit_timeout),
            success_display: secs_from_env("SUCCESS_DISPLAY_SECS")
                .unwrap_or(defaults.success_display),
        }
    }
}

fn secs_from_env(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
}
