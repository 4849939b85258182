//! Folding settings.
//!
//! The host owns a [`SharedSettings`] and may change it from any thread.
//! Folding reads it through [`SharedSettings::snapshot`] once per request,
//! so a change made mid-request only applies to the next one.

use std::sync::Arc;

use parking_lot::RwLock;

/// User-facing folding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FoldingSettings {
    /// When false, no folding regions are produced at all.
    pub folding_enabled: bool,
    /// Use descriptive placeholders (`[unique, lang]`) instead of `[...]`.
    pub smart_placeholders: bool,
}

impl Default for FoldingSettings {
    fn default() -> Self {
        Self {
            folding_enabled: true,
            smart_placeholders: true,
        }
    }
}

impl FoldingSettings {
    pub fn disabled() -> Self {
        Self {
            folding_enabled: false,
            ..Self::default()
        }
    }
}

#[cfg(feature = "serde")]
impl FoldingSettings {
    /// Load settings from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &std::path::Path) -> Result<Self, super::FoldingError> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        tracing::debug!("[SETTINGS] Loaded folding settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), super::FoldingError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Settings shared between the host and the folding builder.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<FoldingSettings>>,
}

impl SharedSettings {
    pub fn new(settings: FoldingSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Copy of the current settings.
    pub fn snapshot(&self) -> FoldingSettings {
        *self.inner.read()
    }

    pub fn is_folding_enabled(&self) -> bool {
        self.inner.read().folding_enabled
    }

    pub fn set_folding_enabled(&self, enabled: bool) {
        self.inner.write().folding_enabled = enabled;
    }

    pub fn update(&self, f: impl FnOnce(&mut FoldingSettings)) {
        f(&mut *self.inner.write());
    }
}

impl From<FoldingSettings> for SharedSettings {
    fn from(settings: FoldingSettings) -> Self {
        Self::new(settings)
    }
}
