//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability,
//! shared between the UI loop and the gateway worker.

use std::sync::{Arc, RwLock};

use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic updates when needed.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config.
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    /// Multiple readers can call this concurrently.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Atomically replace the current config.
    pub fn set(&self, config: Config) {
        let mut guard = self.inner.write().expect("config lock poisoned");
        *guard = config;
    }
}
