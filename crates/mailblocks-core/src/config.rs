use serde::{Deserialize, Serialize};

const DEFAULT_ID_PREFIX: &str = "block";

/// Session tuning. An empty `id_prefix` falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Number of undo steps kept before the oldest snapshot is evicted.
    /// `None` keeps every snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_history: Option<usize>,
    pub id_prefix: String,
}

impl BuilderConfig {
    pub fn with_defaults(mut self) -> Self {
        if self.id_prefix.is_empty() {
            self.id_prefix = DEFAULT_ID_PREFIX.to_string();
        }
        self
    }

    pub fn max_history(mut self, max_history: usize) -> Self {
        self.max_history = Some(max_history);
        self
    }

    pub fn id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }
}
