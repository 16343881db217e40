use crate::domain::dietary::{self, DietFilter, DietaryProfile};
use crate::domain::model::Recipe;
use crate::domain::ports::RecipeSource;
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::{self, Validate};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    pub book: BookInfo,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
    pub only: Option<DietFilter>,
    pub compression: Option<CompressionConfig>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub tsv: Option<String>,
    pub json: Option<String>,
}

impl FilenameConfig {
    pub fn get(&self, format: OutputFormat) -> Option<&str> {
        match format {
            OutputFormat::Csv => self.csv.as_deref(),
            OutputFormat::Tsv => self.tsv.as_deref(),
            OutputFormat::Json => self.json.as_deref(),
        }
    }
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Csv]
}

impl BookConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn only(&self) -> Option<DietFilter> {
        self.output.only
    }

    /// The book's recipes with their dietary profile, narrowed by `output.only`.
    pub fn classified(&self) -> Vec<(&Recipe, DietaryProfile)> {
        dietary::classify(&self.recipes, self.only())
    }

    pub fn compression_enabled(&self) -> bool {
        self.output
            .compression
            .as_ref()
            .map(|c| c.enabled)
            .unwrap_or(false)
    }

    pub fn archive_filename(&self) -> &str {
        self.output
            .compression
            .as_ref()
            .and_then(|c| c.filename.as_deref())
            .unwrap_or("recipes.zip")
    }

    /// Configured filename for `format`, else `recipes.<ext>`.
    pub fn filename_for(&self, format: OutputFormat) -> String {
        self.output
            .filenames
            .as_ref()
            .and_then(|f| f.get(format))
            .map(str::to_string)
            .unwrap_or_else(|| format!("recipes.{}", format.extension()))
    }

    fn validate_outputs(&self) -> Result<()> {
        if self.output.formats.is_empty() {
            return Err(RecipeError::ConfigValidationError {
                field: "output.formats".to_string(),
                message: "At least one output format is required".to_string(),
            });
        }

        if let Some(filenames) = &self.output.filenames {
            for format in [OutputFormat::Csv, OutputFormat::Tsv, OutputFormat::Json] {
                if let Some(filename) = filenames.get(format) {
                    validation::validate_path(&format!("output.filenames.{}", format), filename)?;
                }
            }
        }

        let mut seen = HashSet::new();
        let mut claimed: HashMap<String, OutputFormat> = HashMap::new();
        for &format in &self.output.formats {
            if !seen.insert(format) {
                return Err(RecipeError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: format.to_string(),
                    reason: "Format is listed more than once".to_string(),
                });
            }

            let filename = self.filename_for(format);
            if let Some(other) = claimed.insert(filename.clone(), format) {
                return Err(RecipeError::InvalidConfigValueError {
                    field: format!("output.filenames.{}", format),
                    value: filename,
                    reason: format!("Filename is already used by the {} report", other),
                });
            }
        }

        Ok(())
    }
}

impl Validate for BookConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("book.name", &self.book.name)?;
        validation::validate_path("output.path", &self.output.path)?;
        self.validate_outputs()?;

        if let Some(compression) = &self.output.compression {
            if compression.enabled {
                let filename = validation::validate_required_field(
                    "output.compression.filename",
                    &compression.filename,
                )?;
                validation::validate_path("output.compression.filename", filename)?;
            }
        }

        for recipe in &self.recipes {
            recipe.validate()?;
        }

        Ok(())
    }
}

#[async_trait]
impl RecipeSource for BookConfig {
    async fn load_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }
}
