pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::{BookConfig, OutputFormat};

pub use core::{engine::ReportEngine, pipeline::CatalogPipeline, preview::dry_run_summary};
pub use domain::dietary::{DietFilter, DietaryProfile};
pub use domain::model::{Ingredient, Recipe};
pub use utils::error::{RecipeError, Result};
