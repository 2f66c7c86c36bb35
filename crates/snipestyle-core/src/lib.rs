pub mod app_config;
pub mod budget;
pub mod config;
pub mod price;
pub mod record;

pub use app_config::AppConfig;
pub use budget::{BudgetPreset, FormError, SearchForm, DEFAULT_MAX_PRICE, MAX_QUERIES, PRICE_CEILING};
pub use config::{load_app_config, load_app_config_from_env};
pub use price::{extract_price, filter_by_price, PriceRange, PriceStats, PRICE_UNAVAILABLE};
pub use record::ResultRecord;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
