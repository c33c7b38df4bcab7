use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::block::{BlockKind, Props, props_from_json};
use crate::error::UnknownTemplate;

/// Built-in starting documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Blank,
    Newsletter,
    Announcement,
    Welcome,
}

/// One block of a template before it is given an id.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBlock {
    pub kind: BlockKind,
    pub content: Props,
    pub style: Props,
}

impl TemplateBlock {
    fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            content: Props::new(),
            style: Props::new(),
        }
    }

    fn content(mut self, value: serde_json::Value) -> Self {
        self.content = props_from_json(value);
        self
    }

    fn style(mut self, value: serde_json::Value) -> Self {
        self.style = props_from_json(value);
        self
    }
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Blank,
        Template::Newsletter,
        Template::Announcement,
        Template::Welcome,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Template::Blank => "blank",
            Template::Newsletter => "newsletter",
            Template::Announcement => "announcement",
            Template::Welcome => "welcome",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Template::Blank => "Start from an empty canvas",
            Template::Newsletter => "Header image, intro, article teaser and footer links",
            Template::Announcement => "Headline, hero image and a single call to action",
            Template::Welcome => "Greeting for new subscribers with a getting-started button",
        }
    }

    /// Template blocks in document order. Payloads are patches over each
    /// kind's defaults.
    pub fn blocks(self) -> Vec<TemplateBlock> {
        match self {
            Template::Blank => Vec::new(),
            Template::Newsletter => vec![
                TemplateBlock::new(BlockKind::Image)
                    .content(json!({ "src": "https://placehold.co/600x200", "alt": "Header" })),
                TemplateBlock::new(BlockKind::Text)
                    .content(json!({ "text": "This week's newsletter" }))
                    .style(json!({ "fontSize": "24px", "textAlign": "center" })),
                TemplateBlock::new(BlockKind::Text)
                    .content(json!({ "text": "Here is what happened since the last issue." })),
                TemplateBlock::new(BlockKind::Divider),
                TemplateBlock::new(BlockKind::Columns),
                TemplateBlock::new(BlockKind::Button)
                    .content(json!({ "text": "Read more", "url": "#" })),
                TemplateBlock::new(BlockKind::Spacer),
                TemplateBlock::new(BlockKind::Social),
            ],
            Template::Announcement => vec![
                TemplateBlock::new(BlockKind::Text)
                    .content(json!({ "text": "Big news" }))
                    .style(json!({ "fontSize": "28px", "textAlign": "center" })),
                TemplateBlock::new(BlockKind::Image)
                    .content(json!({ "src": "https://placehold.co/600x300", "alt": "Hero" })),
                TemplateBlock::new(BlockKind::Text)
                    .content(json!({ "text": "We have something new to share with you." })),
                TemplateBlock::new(BlockKind::Button)
                    .content(json!({ "text": "Learn more", "url": "#" })),
            ],
            Template::Welcome => vec![
                TemplateBlock::new(BlockKind::Text)
                    .content(json!({ "text": "Welcome aboard!" }))
                    .style(json!({ "fontSize": "24px" })),
                TemplateBlock::new(BlockKind::Text)
                    .content(json!({ "text": "Thanks for subscribing. Here is how to get started." })),
                TemplateBlock::new(BlockKind::Button)
                    .content(json!({ "text": "Get started", "url": "#" })),
                TemplateBlock::new(BlockKind::Divider),
                TemplateBlock::new(BlockKind::Social),
            ],
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}
