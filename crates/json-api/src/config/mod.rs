//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

/// Academy JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "academy-json", about = "Academy JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database and calendar settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::logging::LogFormat;

    use super::*;

    #[test]
    fn parses_server_flags() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "academy-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/academy",
            "--time-zone",
            "Asia/Kolkata",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert_eq!(config.database.time_zone, "Asia/Kolkata");

        Ok(())
    }
}
