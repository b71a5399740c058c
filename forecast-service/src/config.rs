use std::env;

pub struct Config {
    pub port: u16,
    pub default_location: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3004),
            default_location: env::var("DEFAULT_LOCATION")
                .unwrap_or_else(|_| "Unknown".to_string()),
        }
    }
}
