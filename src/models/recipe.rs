use serde::{Deserialize, Serialize};

/// A single catalog entry. The baseline `rating` ships with the catalog;
/// personal ratings live in the prefs store and are never merged in here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub categories: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub rating: f64,
    pub time_minutes: u32,
}
