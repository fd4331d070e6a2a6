use tauri::State;

use crate::{models::Recipe, search, AppState};

#[tauri::command]
pub fn list_recipes(state: State<AppState>) -> Vec<Recipe> {
    state.catalog.recipes().to_vec()
}

#[tauri::command]
pub fn get_recipe(state: State<AppState>, recipe_id: String) -> Option<Recipe> {
    state.catalog.get(&recipe_id).cloned()
}

#[tauri::command]
pub fn list_categories(state: State<AppState>) -> Vec<String> {
    state.catalog.categories()
}

#[tauri::command]
pub fn filter_recipes(state: State<AppState>, query: String, category: String) -> Vec<Recipe> {
    search::filter_recipes(state.catalog.recipes(), &query, &category)
        .into_iter()
        .cloned()
        .collect()
}
