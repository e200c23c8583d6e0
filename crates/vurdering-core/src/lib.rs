pub mod config;
pub mod query;
pub mod record;
pub mod scraper_config;

pub use config::{load_scraper_config, load_scraper_config_from_env};
pub use query::{Query, QueryBuilder, ValidationError};
pub use record::{parse_leading_int, parse_valuation, Record};
pub use scraper_config::{ScraperConfig, DEFAULT_BASE_URL};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
