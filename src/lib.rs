mod catalog;
mod models;
mod prefs;
mod search;

use std::sync::Arc;

use catalog::{
    commands::{filter_recipes, get_recipe, list_categories, list_recipes},
    Catalog,
};
use prefs::{
    commands::{get_favorites, get_ratings, set_rating, toggle_favorite},
    storage::FileStorage,
    PrefsStore,
};
use tauri::Manager;

pub(crate) struct AppState {
    pub(crate) catalog: Catalog,
    pub(crate) prefs: PrefsStore,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Forkful starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let catalog = Catalog::new();
                log::info!("Catalog loaded with {} recipes", catalog.recipes().len());

                let storage = Arc::new(FileStorage::new(app_data_dir));

                app.manage(AppState {
                    catalog,
                    prefs: PrefsStore::new(storage),
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            list_recipes,
            get_recipe,
            list_categories,
            filter_recipes,
            get_favorites,
            toggle_favorite,
            get_ratings,
            set_rating,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
