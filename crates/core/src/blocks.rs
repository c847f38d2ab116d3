//! Request bodies for Notion's "append block children" endpoint.
//!
//! Only the subset needed to append plain paragraphs is modelled. A paragraph is serialised as:
//!
//! ```text
//! {
//!   "object": "block",
//!   "type": "paragraph",
//!   "paragraph": { "rich_text": [ { "type": "text", "text": { "content": "..." } } ] }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Body of `PATCH /blocks/{block_id}/children`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendBlockChildren {
    pub children: Vec<Block>,
}

impl AppendBlockChildren {
    /// A body appending one paragraph holding `content` as a single plain-text run.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            children: vec![Block::paragraph(content)],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub object: String,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            object: "block".into(),
            content: BlockContent::Paragraph {
                paragraph: Paragraph {
                    rich_text: vec![RichText::Text {
                        text: TextContent {
                            content: content.into(),
                        },
                    }],
                },
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph { paragraph: Paragraph },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text { text: TextContent },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}
