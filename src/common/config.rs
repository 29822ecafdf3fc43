use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::collections::HashMap;

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("i3-instant-layout")
}

pub fn counter_file() -> PathBuf { data_dir().join("counter.json") }

pub fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// Usage count plus last-used unix timestamp. Serialized as `[count, ts]` to
/// stay file-compatible with older counter files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry(pub u64, pub f64);

/// Per-layout usage counters backing the smart ordering of `--list`.
///
/// A missing or corrupt counter file reads as "no prior usage", never an
/// error: losing the counters must not break applying layouts.
#[derive(Debug, Default)]
pub struct UsageStore {
    entries: HashMap<String, UsageEntry>,
}

impl UsageStore {
    pub fn load(path: &Path) -> Self {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => return Self::default(),
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => Self { entries },
            Err(err) => {
                warn!("ignoring corrupt usage counter {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec(&self.entries)?)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<UsageEntry> { self.entries.get(key).copied() }

    pub fn record(&mut self, key: &str) {
        let now = unix_now();
        let entry = self.entries.entry(key.to_string()).or_insert(UsageEntry(0, now));
        entry.0 += 1;
        entry.1 = now;
    }
}
