use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid ingredient '{ingredient}' in recipe '{recipe}': {reason}")]
    InvalidIngredient {
        recipe: String,
        ingredient: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TomlError(_)
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::InvalidIngredient { .. } | Self::ProcessingError { .. } => ErrorCategory::Data,
            Self::ZipError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::Output
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TomlError(_) => "Check the recipe book for TOML syntax errors",
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the reported field in the recipe book and run again"
            }
            Self::MissingConfigError { .. } => "Add the missing field to the recipe book",
            Self::InvalidIngredient { .. } => {
                "Give every ingredient a name, a unit and a positive quantity"
            }
            Self::ProcessingError { .. } => "Run with --verbose to see which recipe failed",
            Self::ZipError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                "Check the output formats and try again"
            }
            Self::IoError(_) => "Check that the paths exist and are writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("The recipe book is not valid: {}", self),
            ErrorCategory::Data => format!("A recipe could not be processed: {}", self),
            ErrorCategory::Output => format!("The report could not be written: {}", self),
            ErrorCategory::System => format!("A system error occurred: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_errors_are_data_errors() {
        let err = RecipeError::InvalidIngredient {
            recipe: "Pancakes".to_string(),
            ingredient: "Flour".to_string(),
            reason: "quantity must be positive".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("Pancakes"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = RecipeError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
