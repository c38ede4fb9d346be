use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod format;
pub mod tree;

pub use app_config::AppConfig;
pub use catalog::{
    Attribute, Brand, Category, Company, Delivery, Discount, Product, StockLevel, StockStatus,
    TaxClass, User, Variant, Warranty,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use tree::{collect_descendants, expand_selection, flatten_tree, TreeItem};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
