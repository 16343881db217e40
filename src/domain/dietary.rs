use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::domain::model::Recipe;

pub const MEAT_KEYWORDS: &[&str] = &["chicken", "beef", "pork", "fish", "bacon"];
pub const GLUTEN_KEYWORDS: &[&str] = &["flour"];

pub static MEAT: LazyLock<DietaryRule> = LazyLock::new(|| DietaryRule::new(MEAT_KEYWORDS));
pub static GLUTEN: LazyLock<DietaryRule> = LazyLock::new(|| DietaryRule::new(GLUTEN_KEYWORDS));

/// Case-insensitive substring match of an ingredient name against a keyword set.
///
/// Empty keywords are ignored, and a rule without keywords matches nothing.
#[derive(Debug, Clone)]
pub struct DietaryRule {
    pattern: Option<Regex>,
}

impl DietaryRule {
    pub fn new(keywords: &[&str]) -> Self {
        let escaped: Vec<String> = keywords
            .iter()
            .filter(|k| !k.is_empty())
            .map(|k| regex::escape(k))
            .collect();

        if escaped.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&escaped.join("|"))
            .case_insensitive(true)
            .build()
            .expect("escaped keywords always form a valid pattern");
        Self {
            pattern: Some(pattern),
        }
    }

    pub fn matches(&self, ingredient_name: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|p| p.is_match(ingredient_name))
    }

    pub fn any_in(&self, recipe: &Recipe) -> bool {
        recipe.ingredients().iter().any(|i| self.matches(i.name()))
    }
}

/// A dietary label a recipe can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DietFilter {
    Vegetarian,
    GlutenFree,
}

impl DietFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::GlutenFree => "gluten-free",
        }
    }
}

impl fmt::Display for DietFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryProfile {
    pub vegetarian: bool,
    pub gluten_free: bool,
}

impl DietaryProfile {
    pub fn of(recipe: &Recipe) -> Self {
        Self {
            vegetarian: recipe.is_vegetarian(),
            gluten_free: recipe.is_gluten_free(),
        }
    }

    pub fn labels(&self) -> Vec<DietFilter> {
        let mut labels = Vec::new();
        if self.vegetarian {
            labels.push(DietFilter::Vegetarian);
        }
        if self.gluten_free {
            labels.push(DietFilter::GlutenFree);
        }
        labels
    }

    pub fn satisfies(&self, filter: DietFilter) -> bool {
        match filter {
            DietFilter::Vegetarian => self.vegetarian,
            DietFilter::GlutenFree => self.gluten_free,
        }
    }
}

/// Profiles each recipe in order, keeping those that pass `only`.
pub fn classify<'a, I>(recipes: I, only: Option<DietFilter>) -> Vec<(&'a Recipe, DietaryProfile)>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .map(|recipe| (recipe, DietaryProfile::of(recipe)))
        .filter(|(recipe, profile)| match only {
            Some(filter) if !profile.satisfies(filter) => {
                tracing::debug!("Skipping '{}': not {}", recipe.name(), filter);
                false
            }
            _ => true,
        })
        .collect()
}
