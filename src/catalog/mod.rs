pub mod commands;
mod data;

use crate::models::Recipe;

/// The fixed, read-only recipe catalog for the lifetime of the process.
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            recipes: data::seed_recipes(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Category labels across the catalog, de-duplicated, in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for recipe in &self.recipes {
            for category in &recipe.categories {
                if !labels.iter().any(|existing| existing == category) {
                    labels.push(category.clone());
                }
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn recipe_ids_are_unique() {
        let catalog = Catalog::new();
        let mut seen = HashSet::new();
        for recipe in catalog.recipes() {
            assert!(seen.insert(recipe.id.clone()), "duplicate id {}", recipe.id);
        }
    }

    #[test]
    fn get_finds_known_ids_only() {
        let catalog = Catalog::new();
        let first = &catalog.recipes()[0];
        assert_eq!(catalog.get(&first.id).map(|r| r.title.as_str()), Some(first.title.as_str()));
        assert!(catalog.get("no-such-recipe").is_none());
    }

    #[test]
    fn categories_are_deduplicated_in_first_appearance_order() {
        let catalog = Catalog::new();
        let categories = catalog.categories();

        let mut seen = HashSet::new();
        for label in &categories {
            assert!(seen.insert(label.clone()), "duplicate category {label}");
        }

        assert_eq!(categories[0], catalog.recipes()[0].categories[0]);
    }

    #[test]
    fn seed_records_are_well_formed() {
        for recipe in Catalog::new().recipes() {
            assert!(!recipe.categories.is_empty(), "{} has no categories", recipe.id);
            assert!(recipe.time_minutes > 0, "{} has no cook time", recipe.id);
            assert!(
                (0.0..=5.0).contains(&recipe.rating),
                "{} baseline rating out of range",
                recipe.id
            );
        }
    }
}
