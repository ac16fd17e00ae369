use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Populate an empty database with demo departments at startup
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port,
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }
}

/// Anything other than an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
