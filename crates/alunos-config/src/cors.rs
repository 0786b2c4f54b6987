use std::env;

const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Origins allowed to call the API from a browser.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
        }
    }
}

impl CorsConfig {
    /// Reads `ALLOWED_ORIGINS` as a comma-separated list.
    pub fn from_env() -> Self {
        env::var("ALLOWED_ORIGINS")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    fn parse(raw: &str) -> Self {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Self::default();
        }
        Self { allowed_origins }
    }
}
