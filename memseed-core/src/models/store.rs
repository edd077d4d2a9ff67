use serde::{Deserialize, Serialize};

/// On-disk memory store document. Entries are opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    pub nodes: Vec<serde_json::Value>,
    pub edges: Vec<serde_json::Value>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Two-space indented JSON, no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
