use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::BuilderError;
use crate::list::BlockList;

const DEFAULT_SCHEMA: &str = "mailblocks";
const DEFAULT_VERSION: u32 = 1;

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

fn default_version() -> u32 {
    DEFAULT_VERSION
}

/// Serialized form of a block list, as handed to whatever persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailValue {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl EmailValue {
    pub fn from_blocks(blocks: &BlockList) -> Self {
        Self {
            schema: default_schema(),
            version: default_version(),
            blocks: blocks.as_slice().to_vec(),
        }
    }

    /// Validates id uniqueness on the way in.
    pub fn into_blocks(self) -> Result<BlockList, BuilderError> {
        BlockList::from_blocks(self.blocks)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
