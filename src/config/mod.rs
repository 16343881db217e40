pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::dietary::DietFilter;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-book")]
#[command(about = "Classify a recipe book and write a dietary report")]
pub struct CliConfig {
    /// Path to the TOML recipe book
    #[arg(short, long, default_value = "recipe-book.toml")]
    pub config: String,

    /// Override the output directory from the recipe book
    #[arg(long)]
    pub output_path: Option<String>,

    /// Only report recipes with this label
    #[arg(long, value_enum)]
    pub only: Option<DietFilter>,

    /// Print the classification without writing any files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies command-line overrides on top of the recipe book.
    pub fn apply_overrides(&self, book: &mut toml_config::BookConfig) {
        if let Some(path) = &self.output_path {
            tracing::info!("🔧 Output path overridden to: {}", path);
            book.output.path = path.clone();
        }
        if let Some(only) = self.only {
            tracing::info!("🔧 Diet filter overridden to: {}", only);
            book.output.only = Some(only);
        }
    }
}
