//! Application configuration management.

use serde::Deserialize;

use crate::types::EvolutionAnchor;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL. Required once every source is merged.
    #[serde(default)]
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

/// DRE report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Number of trailing months in the evolution series.
    #[serde(default = "default_evolution_months")]
    pub evolution_months: u32,
    /// Which date the evolution series ends on.
    #[serde(default)]
    pub evolution_anchor: EvolutionAnchor,
}

fn default_evolution_months() -> u32 {
    6
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            evolution_months: default_evolution_months(),
            evolution_anchor: EvolutionAnchor::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "fluxo=info,sea_orm=warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `FLUXO__*` environment variables (`__` separates sections).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or no database URL
    /// is configured.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_database_url(None)
    }

    /// Loads configuration, letting `database_url` win over every source.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or no database URL
    /// remains after the override.
    pub fn load_with_database_url(
        database_url: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut config = Self::merge_sources()?;
        if let Some(url) = database_url {
            config.database.url = url;
        }
        if config.database.url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "database.url is not set (FLUXO__DATABASE__URL or --database-url)".to_string(),
            ));
        }
        Ok(config)
    }

    fn merge_sources() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FLUXO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("FLUXO__DATABASE__URL", Some("postgres://localhost/fluxo_test")),
                ("FLUXO__REPORT__EVOLUTION_MONTHS", Some("12")),
                ("FLUXO__REPORT__EVOLUTION_ANCHOR", Some("period_end")),
                ("RUN_MODE", Some("test")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.url, "postgres://localhost/fluxo_test");
                assert_eq!(config.database.max_connections, 10);
                assert_eq!(config.report.evolution_months, 12);
                assert_eq!(config.report.evolution_anchor, EvolutionAnchor::PeriodEnd);
                assert!(!config.log.json);
            },
        );
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_vars(
            [
                ("FLUXO__DATABASE__URL", None::<&str>),
                ("RUN_MODE", Some("test")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }

    #[test]
    fn test_database_url_override_without_sources() {
        temp_env::with_vars(
            [
                ("FLUXO__DATABASE__URL", None::<&str>),
                ("RUN_MODE", Some("test")),
            ],
            || {
                let config = AppConfig::load_with_database_url(Some(
                    "postgres://localhost/fluxo_cli".to_string(),
                ))
                .unwrap();
                assert_eq!(config.database.url, "postgres://localhost/fluxo_cli");
                assert_eq!(config.database.min_connections, 1);
                assert_eq!(config.report.evolution_months, 6);
            },
        );
    }

    #[test]
    fn test_database_url_override_wins() {
        temp_env::with_vars(
            [
                ("FLUXO__DATABASE__URL", Some("postgres://localhost/from_env")),
                ("RUN_MODE", Some("test")),
            ],
            || {
                let config =
                    AppConfig::load_with_database_url(Some("postgres://localhost/flag".into()))
                        .unwrap();
                assert_eq!(config.database.url, "postgres://localhost/flag");
            },
        );
    }

    #[test]
    fn test_report_defaults() {
        let report = ReportConfig::default();
        assert_eq!(report.evolution_months, 6);
        assert_eq!(report.evolution_anchor, EvolutionAnchor::Today);
        assert_eq!(LogConfig::default().filter, "fluxo=info,sea_orm=warn");
    }
}
