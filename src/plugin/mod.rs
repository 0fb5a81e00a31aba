//! Plugin Module
//!
//! Lifecycle hooks exposed to the game-server host:
//! - Plugin interface and descriptor
//! - The test plugin and its native entry point

pub mod interface;
pub mod test_plugin;

pub use interface::{Plugin, PluginContext, PluginInfo, PluginState};
pub use test_plugin::{plugin_entry_point, TestPlugin};
