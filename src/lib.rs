//! # testplugin - Lifecycle test plugin
//!
//! A plugin stub for game-server hosts. It logs one line when the host
//! enables it and one line when the host disables it:
//! - **plugin**: the `Plugin` hooks, descriptor, and `TestPlugin`
//! - **monitoring**: the plugin logger and tracing setup
//!
//! ## Quick Start
//!
//! ```rust
//! use testplugin::plugin::{Plugin, PluginContext, PluginState, TestPlugin};
//!
//! let ctx = PluginContext::new("TestPlugin");
//! let mut plugin = TestPlugin::new(&ctx);
//!
//! plugin.on_enable();
//! assert_eq!(plugin.state(), PluginState::Active);
//!
//! plugin.on_disable();
//! assert_eq!(ctx.logger().len(), 2);
//! ```

pub mod core;
pub mod monitoring;
pub mod plugin;

pub use crate::core::error::{Error, Result};
