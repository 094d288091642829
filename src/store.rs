//! Key-value persistence
//!
//! The game persists exactly one float (the best survival time), so the
//! store surface is a tiny get/put trait. `MemoryStore` backs tests;
//! `JsonFileStore` keeps a flat JSON map on disk. Store failures are logged
//! and degrade to "nothing saved" - there is no user-visible error surface.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimal key-value store for game records
pub trait KvStore {
    /// Fetch a value, `None` if absent
    fn get_f32(&self, key: &str) -> Option<f32>;
    /// Store a value under `key`, overwriting any previous one
    fn put_f32(&mut self, key: &str, value: f32);
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, f32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_f32(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }

    fn put_f32(&mut self, key: &str, value: f32) {
        let _ = self.values.insert(key.to_string(), value);
    }
}

/// File-backed store: one flat JSON object of string keys to floats.
/// Every put rewrites the file so a crash never loses a committed record.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, f32>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing values if the file parses.
    /// A missing or corrupt file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!("corrupt store at {}: {err}, starting fresh", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize store: {err}");
                return;
            }
        };
        // Write to a sibling temp file and rename over the store so a crash
        // mid-write leaves the previous file intact
        let tmp = self.path.with_extension("json.tmp");
        if let Err(err) = fs::write(&tmp, json) {
            log::warn!("could not write store at {}: {err}", tmp.display());
            return;
        }
        if let Err(err) = fs::rename(&tmp, &self.path) {
            log::warn!("could not commit store at {}: {err}", self.path.display());
        }
    }
}

impl KvStore for JsonFileStore {
    fn get_f32(&self, key: &str) -> Option<f32> {
        self.values.get(key).copied()
    }

    fn put_f32(&mut self, key: &str, value: f32) {
        let _ = self.values.insert(key.to_string(), value);
        self.flush();
    }
}
