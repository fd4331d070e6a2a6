use std::collections::HashMap;

use tauri::{AppHandle, Emitter, State};

use crate::AppState;

#[tauri::command]
pub fn get_favorites(state: State<AppState>) -> Vec<String> {
    state.prefs.favorites()
}

#[tauri::command]
pub fn toggle_favorite(
    recipe_id: String,
    state: State<AppState>,
    app_handle: AppHandle,
) -> Result<bool, String> {
    let now_favorite = state.prefs.toggle_favorite(&recipe_id);

    app_handle
        .emit("favorites-updated", state.prefs.favorites())
        .map_err(|e| e.to_string())?;

    Ok(now_favorite)
}

#[tauri::command]
pub fn get_ratings(state: State<AppState>) -> HashMap<String, u8> {
    state.prefs.ratings()
}

#[tauri::command]
pub fn set_rating(
    recipe_id: String,
    value: u8,
    state: State<AppState>,
    app_handle: AppHandle,
) -> Result<(), String> {
    // The star control only offers 1-5; reject anything else at the boundary.
    if !(1..=5).contains(&value) {
        return Err(format!("rating must be between 1 and 5, got {value}"));
    }

    state.prefs.set_rating(&recipe_id, value);

    app_handle
        .emit("ratings-updated", state.prefs.ratings())
        .map_err(|e| e.to_string())?;

    Ok(())
}
