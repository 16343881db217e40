pub mod engine;
pub mod pipeline;
pub mod preview;

pub use crate::domain::model::{CatalogReport, Ingredient, Recipe, ReportRow};
pub use crate::domain::ports::{Pipeline, RecipeSource, Storage};
pub use crate::utils::error::Result;
