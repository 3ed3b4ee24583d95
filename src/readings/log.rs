use std::sync::{Arc, Mutex};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::readings::dto::ReadingPayload;

/// The deployment has a single sensor node.
pub const DEVICE_NAME: &str = "Device1";

/// One timestamped sensor observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub id: i64,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rain: Option<f64>,
    pub date: String,
    pub time: String,
    pub device: String,
}

/// In-process ordered log of readings. Entries are never mutated or
/// removed, and the whole log is lost on restart.
///
/// Ids are assigned as length + 1 under the log's own lock, so they stay
/// sequential here; callers must not assume uniqueness beyond that (the
/// original system assigned ids with no locking at all).
#[derive(Clone, Default)]
pub struct ReadingLog {
    inner: Arc<Mutex<Vec<Reading>>>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reading stamped with the server's local date and time.
    pub fn append(&self, payload: ReadingPayload) -> Reading {
        let now = Local::now();
        let mut readings = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let reading = Reading {
            id: readings.len() as i64 + 1,
            temperature: payload.temperature,
            humidity: payload.humidity,
            rain: payload.rain,
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            device: DEVICE_NAME.to_string(),
        };
        readings.push(reading.clone());
        reading
    }

    /// Full log in insertion order.
    pub fn list(&self) -> Vec<Reading> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
