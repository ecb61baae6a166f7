//! Best-score persistence
//!
//! The loop only sees the `BestScoreStore` capability. Backends never fail
//! loudly: a broken store reads as 0 and a failed save is logged and dropped.

use serde::{Deserialize, Serialize};

/// Key-value capability holding the best score
pub trait BestScoreStore {
    fn load_best_score(&self) -> u32;
    fn save_best_score(&mut self, best: u32);
}

impl<T: BestScoreStore + ?Sized> BestScoreStore for Box<T> {
    fn load_best_score(&self) -> u32 {
        (**self).load_best_score()
    }

    fn save_best_score(&mut self, best: u32) {
        (**self).save_best_score(best)
    }
}

/// In-process store. Records every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub best: u32,
    pub saves: Vec<u32>,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self {
            best,
            saves: Vec::new(),
        }
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&self) -> u32 {
        self.best
    }

    fn save_best_score(&mut self, best: u32) {
        self.best = best;
        self.saves.push(best);
    }
}

/// On-disk document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestScoreDocument {
    high_score: u32,
}

/// JSON file store (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl BestScoreStore for JsonFileStore {
    fn load_best_score(&self) -> u32 {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read best score file {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match serde_json::from_str::<BestScoreDocument>(&json) {
            Ok(doc) => {
                log::info!("Loaded best score {}", doc.high_score);
                doc.high_score
            }
            Err(e) => {
                log::warn!("Ignoring corrupt best score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_best_score(&mut self, best: u32) {
        let doc = BestScoreDocument { high_score: best };
        let result = serde_json::to_string(&doc)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        match result {
            Ok(()) => log::info!("Best score saved ({})", best),
            Err(e) => log::warn!("Failed to save best score to {}: {}", self.path.display(), e),
        }
    }
}

/// Browser LocalStorage store (wasm only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "highScore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl BestScoreStore for LocalStorageStore {
    fn load_best_score(&self) -> u32 {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(doc) = serde_json::from_str::<BestScoreDocument>(&json) {
                    log::info!("Loaded best score {}", doc.high_score);
                    return doc.high_score;
                }
            }
        }

        log::info!("No best score found, starting fresh");
        0
    }

    fn save_best_score(&mut self, best: u32) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(&BestScoreDocument { high_score: best }) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save best score");
                    return;
                }
                log::info!("Best score saved ({})", best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_records_saves() {
        let mut store = MemoryStore::new(5);
        assert_eq!(store.load_best_score(), 5);
        store.save_best_score(6);
        store.save_best_score(7);
        assert_eq!(store.load_best_score(), 7);
        assert_eq!(store.saves, vec![6, 7]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("flappy-sim-{}-{}.json", name, std::process::id()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_json_file_store_round_trip() {
        let path = temp_path("round-trip");
        let mut store = JsonFileStore::new(&path);
        store.save_best_score(42);
        assert_eq!(JsonFileStore::new(&path).load_best_score(), 42);
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_json_file_store_missing_or_corrupt_reads_zero() {
        let path = temp_path("corrupt");
        let _ = std::fs::remove_file(&path);
        assert_eq!(JsonFileStore::new(&path).load_best_score(), 0);

        std::fs::write(&path, "{ nope").unwrap();
        assert_eq!(JsonFileStore::new(&path).load_best_score(), 0);
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_json_file_store_unreadable_path_reads_zero() {
        // A directory exists but cannot be read as a file
        let dir = std::env::temp_dir().join(format!("flappy-sim-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(JsonFileStore::new(&dir).load_best_score(), 0);
        let _ = std::fs::remove_dir(&dir);
    }
}
