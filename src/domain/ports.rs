use crate::domain::model::{CatalogReport, Recipe};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn load_recipes(&self) -> Result<Vec<Recipe>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Recipe>>;
    async fn transform(&self, recipes: Vec<Recipe>) -> Result<CatalogReport>;
    async fn load(&self, report: CatalogReport) -> Result<String>;
}
