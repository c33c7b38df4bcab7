use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::UnknownBlockKind;

/// Free-form key/value payload carried by a block.
pub type Props = BTreeMap<String, Value>;

/// Opaque block identifier. Unique within a [`crate::BlockList`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Text,
    Image,
    Button,
    Divider,
    Spacer,
    Columns,
    Social,
    Video,
    Html,
}

impl BlockKind {
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::Columns,
        BlockKind::Social,
        BlockKind::Video,
        BlockKind::Html,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::Columns => "columns",
            BlockKind::Social => "social",
            BlockKind::Video => "video",
            BlockKind::Html => "html",
        }
    }

    /// Human-readable name shown in the block palette.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Text => "Text",
            BlockKind::Image => "Image",
            BlockKind::Button => "Button",
            BlockKind::Divider => "Divider",
            BlockKind::Spacer => "Spacer",
            BlockKind::Columns => "Columns",
            BlockKind::Social => "Social Links",
            BlockKind::Video => "Video",
            BlockKind::Html => "Custom HTML",
        }
    }

    pub fn default_content(self) -> Props {
        let value = match self {
            BlockKind::Text => json!({ "text": "Click to edit this text" }),
            BlockKind::Image => json!({ "src": "", "alt": "Image", "href": "" }),
            BlockKind::Button => json!({ "text": "Click here", "url": "#" }),
            BlockKind::Divider => json!({}),
            BlockKind::Spacer => json!({}),
            BlockKind::Columns => json!({ "count": 2, "widths": [0.5, 0.5] }),
            BlockKind::Social => json!({
                "links": [
                    { "platform": "twitter", "url": "#" },
                    { "platform": "facebook", "url": "#" },
                    { "platform": "linkedin", "url": "#" }
                ]
            }),
            BlockKind::Video => json!({ "url": "", "thumbnail": "" }),
            BlockKind::Html => json!({ "html": "<p>Custom HTML</p>" })
        };
        props_from_json(value)
    }

    pub fn default_style(self) -> Props {
        let value = match self {
            BlockKind::Text => json!({
                "fontSize": "16px",
                "color": "#333333",
                "textAlign": "left",
                "padding": "10px"
            }),
            BlockKind::Image => json!({ "width": "100%", "align": "center", "padding": "10px" }),
            BlockKind::Button => json!({
                "backgroundColor": "#007bff",
                "color": "#ffffff",
                "borderRadius": "4px",
                "padding": "12px 24px",
                "align": "center"
            }),
            BlockKind::Divider => json!({
                "borderColor": "#e0e0e0",
                "borderWidth": "1px",
                "margin": "20px 0"
            }),
            BlockKind::Spacer => json!({ "height": "20px" }),
            BlockKind::Columns => json!({ "gap": "20px", "padding": "10px" }),
            BlockKind::Social => json!({ "align": "center", "iconSize": "32px" }),
            BlockKind::Video => json!({ "width": "100%", "align": "center" }),
            BlockKind::Html => json!({ "padding": "0" })
        };
        props_from_json(value)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownBlockKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    #[serde(default)]
    pub content: Props,
    #[serde(default)]
    pub style: Props,
}

impl Block {
    /// A block of `kind` with its default payload.
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            content: kind.default_content(),
            style: kind.default_style(),
        }
    }

    pub fn with_content(mut self, patch: Props) -> Self {
        merge_props(&mut self.content, patch);
        self
    }

    pub fn with_style(mut self, patch: Props) -> Self {
        merge_props(&mut self.style, patch);
        self
    }

    /// Shallow-merges the patches into `content` and `style`.
    ///
    /// Returns `true` if any stored value changed.
    pub fn apply_patch(&mut self, content: Option<Props>, style: Option<Props>) -> bool {
        let mut changed = false;
        if let Some(patch) = content {
            changed |= merge_props(&mut self.content, patch);
        }
        if let Some(patch) = style {
            changed |= merge_props(&mut self.style, patch);
        }
        changed
    }
}

/// Top-level keys in `patch` replace the ones in `props`; nested values are
/// not merged.
pub fn merge_props(props: &mut Props, patch: Props) -> bool {
    let mut changed = false;
    for (key, value) in patch {
        if props.get(&key) != Some(&value) {
            props.insert(key, value);
            changed = true;
        }
    }
    changed
}

/// Converts a JSON object into [`Props`]. Anything else yields empty props.
pub fn props_from_json(value: Value) -> Props {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => Props::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_shallow_and_reports_changes() {
        let mut props = props_from_json(json!({ "a": 1, "nested": { "x": 1, "y": 2 } }));

        assert!(!merge_props(&mut props, props_from_json(json!({ "a": 1 }))));
        assert!(merge_props(
            &mut props,
            props_from_json(json!({ "nested": { "x": 5 }, "b": true }))
        ));

        assert_eq!(props.get("a"), Some(&json!(1)));
        assert_eq!(props.get("b"), Some(&json!(true)));
        assert_eq!(props.get("nested"), Some(&json!({ "x": 5 })));
    }

    #[test]
    fn kinds_parse_from_wire_names() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>(), Ok(kind));
        }
        assert!("paragraph".parse::<BlockKind>().is_err());
    }

    #[test]
    fn non_object_json_gives_empty_props() {
        assert!(props_from_json(json!([1, 2])).is_empty());
    }
}
