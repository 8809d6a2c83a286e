use crate::collection::{Collection, ImageDescriptor};
use crate::content::{Article, Block};

/// Walk the article's block tree in document order and harvest every image.
///
/// Invoked from the content lifecycle (load / reload), not from a
/// continuous observer: each call rebuilds the collection from scratch so
/// that indices can never drift out of sync with the rendered content.
/// Renderers that walk the same tree in the same order can map the N-th
/// image they draw to index N of the returned collection.
pub fn scan_article(article: &Article) -> Collection {
    let mut images = Vec::new();
    collect(&article.blocks, &mut images);
    tracing::debug!(count = images.len(), "scanned article images");
    Collection::new(images)
}

fn collect(blocks: &[Block], out: &mut Vec<ImageDescriptor>) {
    for block in blocks {
        match block {
            Block::Image { src, alt } => out.push(ImageDescriptor {
                src: src.clone(),
                alt: alt.clone(),
            }),
            Block::Section { blocks, .. } => collect(blocks, out),
            _ => {}
        }
    }
}
