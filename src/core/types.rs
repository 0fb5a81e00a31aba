//! Common types shared by the plugin and its log sink.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Identity of one loaded plugin instance.
///
/// A host that unloads and reloads the plugin gets a fresh id, so log
/// records from separate loads can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    /// Generate a new random instance id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying uuid.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_ids_are_unique() {
        let a = InstanceId::generate();
        let b = InstanceId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_instance_id_display() {
        let id = InstanceId::generate();
        let display = format!("{}", id);
        assert_eq!(display.len(), 36); // hyphenated uuid
        assert_eq!(display, id.as_uuid().to_string());
    }
}
