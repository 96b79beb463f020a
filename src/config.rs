use std::{env, fmt::Display, str::FromStr};

use axum::http::HeaderValue;
use tracing::{info, warn};

use crate::errors::AppError;

pub struct Config {
    pub port: u16,
    pub redis_url: Option<String>,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let redis_url = env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty());
        if redis_url.is_none() {
            warn!("REDIS_URL not set, feedback is kept in memory only");
        }

        Ok(Self {
            port: try_load("PORT", "3000")?,
            redis_url,
            allowed_origins: parse_origins(&load_or("ALLOWED_ORIGINS", "http://localhost:5173"))?,
        })
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    load_or(key, default)
        .trim()
        .parse()
        .map_err(|e| AppError::EnvError(format!("Invalid {key} value: {e}")))
}

pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| AppError::EnvError(format!("Invalid origin {s}: {e}")))
        })
        .collect()
}
