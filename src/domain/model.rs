use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::dietary::{GLUTEN, MEAT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.quantity, self.unit, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Removes the first ingredient named exactly `name`.
    pub fn remove_ingredient(&mut self, name: &str) -> Option<Ingredient> {
        let index = self.ingredients.iter().position(|i| i.name == name)?;
        Some(self.ingredients.remove(index))
    }

    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(Ingredient::name).collect()
    }

    /// False as soon as one ingredient name mentions a meat keyword.
    pub fn is_vegetarian(&self) -> bool {
        !MEAT.any_in(self)
    }

    pub fn is_gluten_free(&self) -> bool {
        !GLUTEN.any_in(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub recipe: String,
    pub ingredient_count: usize,
    pub ingredients: String,
    pub vegetarian: bool,
    pub gluten_free: bool,
}

impl ReportRow {
    /// Column order of the delimited reports, matching the field order above.
    pub const HEADERS: [&'static str; 5] = [
        "recipe",
        "ingredient_count",
        "ingredients",
        "vegetarian",
        "gluten_free",
    ];
}

#[derive(Debug, Clone)]
pub struct CatalogReport {
    pub rows: Vec<ReportRow>,
    pub csv_output: String,
    pub tsv_output: String,
    pub json_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour() -> Ingredient {
        Ingredient::new("Flour", 2.0, "cups")
    }

    fn egg() -> Ingredient {
        Ingredient::new("Egg", 1.0, "large")
    }

    fn milk() -> Ingredient {
        Ingredient::new("Milk", 1.0, "cup")
    }

    fn bacon() -> Ingredient {
        Ingredient::new("Bacon", 3.0, "slices")
    }

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes")
    }

    #[test]
    fn test_has_a_name() {
        assert_eq!(pancakes().name(), "Pancakes");
    }

    #[test]
    fn test_starts_with_no_ingredients() {
        assert!(pancakes().ingredients().is_empty());
    }

    #[test]
    fn test_can_add_ingredients() {
        let mut recipe = pancakes();
        recipe.add_ingredient(flour());
        recipe.add_ingredient(egg());
        assert!(recipe.ingredients().contains(&flour()));
        assert!(recipe.ingredients().contains(&egg()));
    }

    #[test]
    fn test_lists_ingredient_names_in_order() {
        let mut recipe = pancakes();
        recipe.add_ingredient(flour());
        recipe.add_ingredient(egg());
        assert_eq!(recipe.ingredient_names(), vec!["Flour", "Egg"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut recipe = pancakes();
        recipe.add_ingredient(egg());
        recipe.add_ingredient(egg());
        assert_eq!(recipe.ingredients().len(), 2);
    }

    #[test]
    fn test_is_vegetarian_without_meat() {
        let mut recipe = pancakes();
        recipe.add_ingredient(flour());
        recipe.add_ingredient(egg());
        assert!(recipe.is_vegetarian());
    }

    #[test]
    fn test_empty_recipe_is_vegetarian_and_gluten_free() {
        assert!(pancakes().is_vegetarian());
        assert!(pancakes().is_gluten_free());
    }

    #[test]
    fn test_is_not_vegetarian_with_bacon() {
        let mut recipe = pancakes();
        recipe.add_ingredient(bacon());
        assert!(!recipe.is_vegetarian());
    }

    #[test]
    fn test_chicken_is_not_vegetarian() {
        let mut recipe = pancakes();
        recipe.add_ingredient(Ingredient::new("Chicken", 1.0, "breast"));
        assert!(!recipe.is_vegetarian());
    }

    #[test]
    fn test_missing_ingredient_is_not_listed() {
        assert!(!pancakes().ingredient_names().contains(&"Milk"));
    }

    #[test]
    fn test_names_keep_their_case() {
        let mut recipe = pancakes();
        recipe.add_ingredient(egg());
        assert!(recipe.ingredient_names().contains(&"Egg"));
        assert!(!recipe.ingredient_names().contains(&"egg"));
    }

    #[test]
    fn test_ingredient_getters() {
        assert_eq!(milk().quantity(), 1.0);
        assert_eq!(bacon().quantity(), 3.0);
        assert_eq!(flour().unit(), "cups");
    }

    #[test]
    fn test_ingredient_equality_compares_every_field() {
        assert_eq!(egg(), Ingredient::new("Egg", 1.0, "large"));
        assert_ne!(egg(), Ingredient::new("egg", 1.0, "large"));
        assert_ne!(egg(), Ingredient::new("Egg", 2.0, "large"));
        assert_ne!(egg(), Ingredient::new("Egg", 1.0, "small"));
    }

    #[test]
    fn test_flour_is_not_gluten_free() {
        let mut recipe = pancakes();
        recipe.add_ingredient(egg());
        assert!(recipe.is_gluten_free());
        recipe.add_ingredient(Ingredient::new("Whole wheat FLOUR", 1.0, "cup"));
        assert!(!recipe.is_gluten_free());
    }

    #[test]
    fn test_remove_ingredient() {
        let mut recipe = pancakes();
        recipe.add_ingredient(flour());
        recipe.add_ingredient(egg());
        recipe.add_ingredient(egg());

        assert_eq!(recipe.remove_ingredient("Egg"), Some(egg()));
        assert_eq!(recipe.ingredient_names(), vec!["Flour", "Egg"]);
        assert_eq!(recipe.remove_ingredient("Butter"), None);
        assert_eq!(recipe.remove_ingredient("flour"), None);
        assert_eq!(recipe.ingredients().len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(flour().to_string(), "2 cups Flour");
        assert_eq!(Ingredient::new("Butter", 0.5, "cup").to_string(), "0.5 cup Butter");
    }
}
