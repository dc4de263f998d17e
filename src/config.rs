use dotenv::dotenv;
use std::env;

use crate::error::RosterError;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads configuration from the environment, honoring a local `.env`.
    /// A missing `DATABASE_URL` is fatal: the process must not start
    /// serving without a store behind it.
    pub fn from_env() -> Result<Self, RosterError> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| RosterError::Config("DATABASE_URL is not set".to_string()))?;
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Ok(Self { port, database_url })
    }
}
