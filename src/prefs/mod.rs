pub mod commands;
pub mod storage;

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use storage::Storage;

pub const FAVORITES_KEY: &str = "favorites";
pub const RATINGS_KEY: &str = "ratings";

struct PrefsData {
    favorites: HashSet<String>,
    ratings: HashMap<String, u8>,
}

/// Favorites and personal ratings, loaded from storage at startup and written
/// back on every mutation. Storage failures never propagate: the in-memory
/// state stays authoritative for the rest of the session.
pub struct PrefsStore {
    storage: Arc<dyn Storage>,
    data: RwLock<PrefsData>,
}

impl PrefsStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let favorites = load_favorites(storage.as_ref());
        let ratings = load_mapping::<u8>(storage.as_ref(), RATINGS_KEY);

        Self {
            storage,
            data: RwLock::new(PrefsData { favorites, ratings }),
        }
    }

    /// Favorited recipe ids, sorted for a stable frontend ordering.
    pub fn favorites(&self) -> Vec<String> {
        let guard = self.data.read().unwrap();
        let mut ids: Vec<String> = guard.favorites.iter().cloned().collect();
        ids.sort();
        ids
    }

    #[allow(dead_code)]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.data.read().unwrap().favorites.contains(id)
    }

    /// Flip membership (not set-to-true) and persist. Returns the new state.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut guard = self.data.write().unwrap();
        let now_favorite = if guard.favorites.remove(id) {
            false
        } else {
            guard.favorites.insert(id.to_string());
            true
        };

        // Absence denotes "not favorited"; no entry ever stores false.
        let mapping: HashMap<&str, bool> =
            guard.favorites.iter().map(|fav| (fav.as_str(), true)).collect();
        self.persist(FAVORITES_KEY, &mapping);

        now_favorite
    }

    pub fn ratings(&self) -> HashMap<String, u8> {
        self.data.read().unwrap().ratings.clone()
    }

    #[allow(dead_code)]
    pub fn rating(&self, id: &str) -> Option<u8> {
        self.data.read().unwrap().ratings.get(id).copied()
    }

    /// Overwrite the personal rating for `id` and persist. Re-assigning the
    /// same value still triggers a write.
    pub fn set_rating(&self, id: &str, value: u8) {
        let mut guard = self.data.write().unwrap();
        guard.ratings.insert(id.to_string(), value);
        self.persist(RATINGS_KEY, &guard.ratings);
    }

    fn persist<T: Serialize>(&self, key: &str, mapping: &T) {
        let serialized = match serde_json::to_string(mapping) {
            Ok(json) => json,
            Err(err) => {
                warn!("Failed to serialize {key}: {err}");
                return;
            }
        };

        if let Err(err) = self.storage.save(key, &serialized) {
            warn!("Failed to persist {key}: {err}");
        }
    }
}

fn load_favorites(storage: &dyn Storage) -> HashSet<String> {
    load_mapping::<bool>(storage, FAVORITES_KEY)
        .into_iter()
        .filter(|(_, present)| *present)
        .map(|(id, _)| id)
        .collect()
}

/// Absent or malformed slots fall back to an empty mapping.
fn load_mapping<V: DeserializeOwned>(storage: &dyn Storage, key: &str) -> HashMap<String, V> {
    let Some(raw) = storage.load(key) else {
        return HashMap::new();
    };

    match serde_json::from_str(&raw) {
        Ok(mapping) => mapping,
        Err(err) => {
            warn!("Discarding malformed {key} data: {err}");
            HashMap::new()
        }
    }
}
