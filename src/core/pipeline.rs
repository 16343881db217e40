use crate::config::toml_config::{BookConfig, OutputFormat};
use crate::core::{CatalogReport, Pipeline, Recipe, RecipeSource, ReportRow, Storage};
use crate::domain::dietary;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::Validate;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct CatalogPipeline<S: Storage> {
    storage: S,
    config: BookConfig,
}

impl<S: Storage> CatalogPipeline<S> {
    pub fn new(storage: S, config: BookConfig) -> Self {
        Self { storage, config }
    }

    /// The header row is always written, so an empty report still names its columns.
    fn render_delimited(rows: &[ReportRow], delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(ReportRow::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        let bytes = writer.into_inner().map_err(|e| RecipeError::ProcessingError {
            message: format!("Failed to flush report: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| RecipeError::ProcessingError {
            message: format!("Report is not valid UTF-8: {}", e),
        })
    }

    fn render_json(&self, rows: &[ReportRow]) -> Result<String> {
        let document = serde_json::json!({
            "book": self.config.book.name,
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "recipes": rows,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn rendered(report: &CatalogReport, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Csv => &report.csv_output,
            OutputFormat::Tsv => &report.tsv_output,
            OutputFormat::Json => &report.json_output,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for CatalogPipeline<S> {
    async fn extract(&self) -> Result<Vec<Recipe>> {
        self.config.validate()?;
        let recipes = self.config.load_recipes().await?;

        for recipe in &recipes {
            tracing::debug!(
                "Loaded recipe '{}' with {} ingredients",
                recipe.name(),
                recipe.ingredients().len()
            );
        }

        if recipes.is_empty() {
            tracing::warn!("Recipe book '{}' has no recipes", self.config.book.name);
        }

        Ok(recipes)
    }

    async fn transform(&self, recipes: Vec<Recipe>) -> Result<CatalogReport> {
        let rows: Vec<ReportRow> = dietary::classify(&recipes, self.config.only())
            .into_iter()
            .map(|(recipe, profile)| ReportRow {
                recipe: recipe.name().to_string(),
                ingredient_count: recipe.ingredients().len(),
                ingredients: recipe.ingredient_names().join(", "),
                vegetarian: profile.vegetarian,
                gluten_free: profile.gluten_free,
            })
            .collect();

        Ok(CatalogReport {
            csv_output: Self::render_delimited(&rows, b',')?,
            tsv_output: Self::render_delimited(&rows, b'\t')?,
            json_output: self.render_json(&rows)?,
            rows,
        })
    }

    async fn load(&self, report: CatalogReport) -> Result<String> {
        let formats = &self.config.output.formats;

        if self.config.compression_enabled() {
            let archive_name = self.config.archive_filename();
            tracing::debug!("Creating ZIP file with {} files", formats.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for &format in formats {
                    zip.start_file::<_, ()>(self.config.filename_for(format), FileOptions::default())?;
                    zip.write_all(Self::rendered(&report, format).as_bytes())?;
                }
                zip.finish()?.into_inner()
            };

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive_name, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for &format in formats {
            let filename = self.config.filename_for(format);
            tracing::debug!("Writing {} report to {}", format, filename);
            self.storage
                .write_file(&filename, Self::rendered(&report, format).as_bytes())
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
