//! Catalog filtering: a category predicate ANDed with a free-text predicate,
//! preserving catalog order. Pure substring containment, no ranking.

use crate::models::Recipe;

/// Sentinel category meaning "no category filter". The sidebar passes its
/// selection through unchanged, so the wire value is kept verbatim.
pub const ALL_CATEGORIES: &str = "all";

pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str, category: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_category(recipe, category) && matches_query(recipe, &needle))
        .collect()
}

fn matches_category(recipe: &Recipe, category: &str) -> bool {
    category == ALL_CATEGORIES || recipe.categories.iter().any(|label| label == category)
}

/// `needle` must already be trimmed and lower-cased.
fn matches_query(recipe: &Recipe, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let haystack = std::iter::once(recipe.title.as_str())
        .chain(recipe.categories.iter().map(String::as_str))
        .chain(recipe.ingredients.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    haystack.contains(needle)
}
