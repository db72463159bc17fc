//! Persisted visitor preferences and the context object that owns them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{Error, Result};

const CONSENT_KEY: &str = "cookie_consent";
const ANALYTICS_KEY: &str = "analytics_consent";
const MARKETING_KEY: &str = "marketing_consent";

const ACCEPTED: &str = "accepted";
const DECLINED: &str = "declined";

/// Key/value storage for preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Store that forgets everything on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Flat toml table on disk, rewritten on every change
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| {
                Error::Preferences(format!("{}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = values.len(), "Preferences opened");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string(&self.values).map_err(|e| Error::Preferences(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Cookie consent as answered in the banner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentState {
    pub given: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl ConsentState {
    /// Read consent from a store. Nothing recorded means "not asked yet".
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        if store.get(CONSENT_KEY)?.is_none() {
            return Ok(Self::default());
        }
        Ok(Self {
            given: true,
            analytics: store.get(ANALYTICS_KEY)?.as_deref() == Some(ACCEPTED),
            marketing: store.get(MARKETING_KEY)?.as_deref() == Some(ACCEPTED),
        })
    }
}

fn answer(accepted: bool) -> &'static str {
    if accepted {
        ACCEPTED
    } else {
        DECLINED
    }
}

/// Application-wide state built once at startup and passed to whoever needs
/// it
pub struct AppContext {
    config: AppConfig,
    store: Box<dyn PreferenceStore>,
    consent: ConsentState,
}

impl AppContext {
    pub fn new(config: AppConfig, store: Box<dyn PreferenceStore>) -> Result<Self> {
        let consent = ConsentState::load(store.as_ref())?;
        Ok(Self {
            config,
            store,
            consent,
        })
    }

    /// Context backed by the preferences file in the data directory
    pub fn open(config: AppConfig) -> Result<Self> {
        let store = FilePreferenceStore::open(config.preferences_path())?;
        Self::new(config, Box::new(store))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn consent(&self) -> ConsentState {
        self.consent
    }

    pub fn update_consent(&mut self, analytics: bool, marketing: bool) -> Result<()> {
        self.store.set(CONSENT_KEY, ACCEPTED)?;
        self.store.set(ANALYTICS_KEY, answer(analytics))?;
        self.store.set(MARKETING_KEY, answer(marketing))?;
        self.consent = ConsentState {
            given: true,
            analytics,
            marketing,
        };
        info!(analytics, marketing, "Cookie consent updated");
        Ok(())
    }

    pub fn reset_consent(&mut self) -> Result<()> {
        for key in [CONSENT_KEY, ANALYTICS_KEY, MARKETING_KEY] {
            self.store.remove(key)?;
        }
        self.consent = ConsentState::default();
        info!("Cookie consent reset");
        Ok(())
    }
}
