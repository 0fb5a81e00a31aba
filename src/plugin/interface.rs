//! Plugin interface definition.
//!
//! Defines the hooks a host invokes and the handles it passes to plugins.

use crate::core::{Error, Result};
use crate::monitoring::{Logger, LoggerConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Plugin descriptor, as read by the host before loading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name
    pub name: String,
    /// Version
    pub version: String,
    /// Entry point the host resolves to construct the plugin
    pub main: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Authors
    #[serde(default)]
    pub authors: Vec<String>,
}

impl PluginInfo {
    /// Create new plugin info.
    pub fn new(name: &str, version: &str, main: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            main: main.to_string(),
            description: String::new(),
            authors: Vec::new(),
        }
    }

    /// Set description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Add author.
    pub fn with_author(mut self, author: &str) -> Self {
        self.authors.push(author.to_string());
        self
    }

    /// Check that the fields a host needs are present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("version", &self.version),
            ("main", &self.main),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::InvalidDescriptor(format!("{} is empty", field)));
            }
        }
        Ok(())
    }

    /// Parse and validate a descriptor from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let info: Self = serde_json::from_str(json)?;
        info.validate()?;
        Ok(info)
    }

    /// Serialize the descriptor to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Handle the host gives a plugin when constructing it.
#[derive(Clone)]
pub struct PluginContext {
    /// Logger named after the plugin
    logger: Arc<Logger>,
}

impl PluginContext {
    /// Create a context with a default-configured logger.
    pub fn new(plugin_name: &str) -> Self {
        Self::with_logger_config(plugin_name, LoggerConfig::default())
    }

    /// Create a context whose logger uses `config`.
    pub fn with_logger_config(plugin_name: &str, config: LoggerConfig) -> Self {
        Self {
            logger: Arc::new(Logger::new(plugin_name, config)),
        }
    }

    /// Shared handle to the plugin's logger.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

/// Lifecycle state of a plugin instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginState {
    /// Constructed or disabled
    #[default]
    Inactive,
    /// Enabled by the host
    Active,
}

/// Plugin trait that all plugins must implement.
///
/// The host owns ordering: it calls `on_enable` after loading and
/// `on_disable` before unloading. Neither hook can fail.
pub trait Plugin: Send + Sync {
    /// Get plugin info.
    fn info(&self) -> PluginInfo;

    /// Current lifecycle state.
    fn state(&self) -> PluginState;

    /// Called when the host enables the plugin.
    fn on_enable(&mut self);

    /// Called when the host disables the plugin.
    fn on_disable(&mut self);
}
