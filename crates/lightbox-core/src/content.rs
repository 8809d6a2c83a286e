use serde::{Deserialize, Serialize};

/// One block of rendered article content.
///
/// The content renderer produces this tree; the viewer only reads it.
/// Image `src` values must already be valid, reachable locations; any
/// URL/path normalization is the renderer's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: String,
    },
    Quote {
        text: String,
    },
    Section {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        blocks: Vec<Block>,
    },
}

/// A rendered article: the content view the viewer is embedded in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Article {
    /// Total number of blocks, counting nested section contents.
    pub fn block_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|b| match b {
                    Block::Section { blocks, .. } => 1 + count(blocks),
                    _ => 1,
                })
                .sum()
        }
        count(&self.blocks)
    }

    /// Number of `Section` blocks at any depth.
    pub fn section_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|b| match b {
                    Block::Section { blocks, .. } => 1 + count(blocks),
                    _ => 0,
                })
                .sum()
        }
        count(&self.blocks)
    }
}
