use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    /// Year used for dates entered as `day.month`
    pub default_year: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = database_url_from_env()?;

        let port_str = non_blank_var("HTTP_PORT").unwrap_or_else(|| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let default_year = match non_blank_var("DEFAULT_YEAR") {
            Some(year) => year
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|year| (1..=9999).contains(year))
                .ok_or_else(|| anyhow!("Invalid DEFAULT_YEAR"))?,
            None => Local::now().year(),
        };

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            default_year,
        })
    }
}

/// `DATABASE_URL` wins; a bare `SQLITE_PATH` is accepted as well and turned into a URL.
fn database_url_from_env() -> Result<String> {
    if let Some(url) = non_blank_var("DATABASE_URL") {
        return Ok(url.trim().to_string());
    }

    if let Some(path) = non_blank_var("SQLITE_PATH") {
        return Ok(format!("sqlite:{}", path.trim()));
    }

    Err(anyhow!("DATABASE_URL (or SQLITE_PATH) must be set"))
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
