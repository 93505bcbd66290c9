use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("save file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("save file encoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable home of the best score.
pub trait ScoreStore {
    /// Stored best, or 0 when there is none or it can't be read.
    fn load_best(&self) -> u32;
    fn save_best(&mut self, value: u32) -> Result<(), StorageError>;
}

// On-disk layout. The best score is a decimal string under its own key;
// unrelated keys already in the file ride along untouched.
#[derive(Serialize, Deserialize, Default)]
struct SaveData {
    #[serde(rename = "snake_best_v1", default, skip_serializing_if = "Option::is_none")]
    best: Option<String>,
    #[serde(flatten)]
    other: Map<String, Value>,
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> SaveData {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best(&self) -> u32 {
        self.read()
            .best
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save_best(&mut self, value: u32) -> Result<(), StorageError> {
        let mut data = self.read();
        data.best = Some(value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&data)?)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> u32 {
        self.best.unwrap_or(0)
    }

    fn save_best(&mut self, value: u32) -> Result<(), StorageError> {
        self.best = Some(value);
        Ok(())
    }
}

/// Best score of the session, kept in step with the store.
pub struct BestScore {
    value: u32,
    store: Box<dyn ScoreStore>,
}

impl BestScore {
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let value = store.load_best();
        log::info!("best score loaded: {value}");
        Self { value, store }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Records a finished run. Returns true if it set a new record. A failed
    /// write keeps the record in memory and is only logged.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Err(err) = self.store.save_best(score) {
            log::warn!("could not persist best score {score}: {err}");
        }
        true
    }
}
