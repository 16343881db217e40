use crate::domain::model::Recipe;
use crate::utils::error::{RecipeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecipeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RecipeError::MissingConfigError {
        field: field_name.to_string(),
    })
}

impl Validate for Recipe {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("recipes.name", self.name())?;

        for ingredient in self.ingredients() {
            let reason = if ingredient.name().trim().is_empty() {
                Some("name cannot be empty")
            } else if ingredient.unit().trim().is_empty() {
                Some("unit cannot be empty")
            } else if !ingredient.quantity().is_finite() || ingredient.quantity() <= 0.0 {
                Some("quantity must be a positive number")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(RecipeError::InvalidIngredient {
                    recipe: self.name().to_string(),
                    ingredient: ingredient.name().to_string(),
                    reason: reason.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Ingredient;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./output").is_ok());
        assert!(validate_path("output.path", "").is_err());
        assert!(validate_path("output.path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("book.name", "Breakfast").is_ok());
        assert!(validate_non_empty_string("book.name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("x", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("output.compression.filename", &missing),
            Err(RecipeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_recipe_validation() {
        let mut recipe = Recipe::new("Pancakes");
        recipe.add_ingredient(Ingredient::new("Flour", 2.0, "cups"));
        assert!(recipe.validate().is_ok());

        recipe.add_ingredient(Ingredient::new("Milk", 0.0, "cup"));
        let err = recipe.validate().unwrap_err();
        assert!(matches!(
            err,
            RecipeError::InvalidIngredient { ref ingredient, .. } if ingredient == "Milk"
        ));

        let mut blank_unit = Recipe::new("Toast");
        blank_unit.add_ingredient(Ingredient::new("Bread", 1.0, " "));
        assert!(blank_unit.validate().is_err());

        assert!(Recipe::new("").validate().is_err());
    }
}
