//! The lifecycle test plugin.
//!
//! Logs one line when enabled and one when disabled. Nothing else.

use crate::core::InstanceId;
use crate::monitoring::{LogEntry, LogLevel, Logger};
use crate::plugin::interface::{Plugin, PluginContext, PluginInfo, PluginState};
use std::sync::Arc;

/// Plugin name, also used as the logger name.
pub const PLUGIN_NAME: &str = "TestPlugin";

/// Symbol a native host resolves to construct the plugin.
pub const ENTRY_POINT_SYMBOL: &str = "plugin_entry_point";

const ENABLED_MESSAGE: &str = "TestPlugin enabled";
const DISABLED_MESSAGE: &str = "TestPlugin disabled";

/// Plugin that reports its own enable/disable.
pub struct TestPlugin {
    instance: InstanceId,
    state: PluginState,
    logger: Arc<Logger>,
}

impl TestPlugin {
    /// Create the plugin with the logger from `ctx`.
    pub fn new(ctx: &PluginContext) -> Self {
        Self {
            instance: InstanceId::generate(),
            state: PluginState::Inactive,
            logger: Arc::clone(ctx.logger()),
        }
    }

    /// Static descriptor for this plugin.
    pub fn descriptor() -> PluginInfo {
        PluginInfo::new(PLUGIN_NAME, env!("CARGO_PKG_VERSION"), ENTRY_POINT_SYMBOL)
            .with_description(env!("CARGO_PKG_DESCRIPTION"))
            .with_author("BxTeam")
    }

    /// Identity of this loaded instance.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    fn announce(&self, message: &str) {
        self.logger.log(
            LogEntry::new(LogLevel::Info, message).with_field("instance", self.instance),
        );
    }
}

impl Default for TestPlugin {
    fn default() -> Self {
        Self::new(&PluginContext::new(PLUGIN_NAME))
    }
}

impl Plugin for TestPlugin {
    fn info(&self) -> PluginInfo {
        Self::descriptor()
    }

    fn state(&self) -> PluginState {
        self.state
    }

    fn on_enable(&mut self) {
        self.announce(ENABLED_MESSAGE);
        self.state = PluginState::Active;
    }

    fn on_disable(&mut self) {
        self.announce(DISABLED_MESSAGE);
        self.state = PluginState::Inactive;
    }
}

/// Construct the plugin for a native host.
#[no_mangle]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn plugin_entry_point() -> Box<dyn Plugin> {
    Box::new(TestPlugin::default())
}
