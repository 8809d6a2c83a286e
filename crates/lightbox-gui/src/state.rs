use std::collections::HashMap;
use std::path::PathBuf;

use lightbox_core::content::Article;

/// Inline thumbnail lifecycle for one article image src.
pub enum Thumbnail {
    Pending,
    Ready(egui::TextureHandle),
    Failed,
}

/// The loaded article plus its render caches.
pub struct ArticleState {
    pub path: Option<PathBuf>,
    pub article: Article,
    /// Thumbnail textures keyed by src. Rebuilt whenever the article changes.
    pub thumbnails: HashMap<String, Thumbnail>,
}

/// Transient GUI state for the modal overlay.
#[derive(Default)]
pub struct OverlayState {
    /// Texture for the currently ready image.
    pub texture: Option<egui::TextureHandle>,
    /// Failure text for the inline error indicator.
    pub error: Option<String>,
    /// Article scroll setting saved while the overlay holds the scroll
    /// lock, so nested or repeated opens restore the prior value.
    pub saved_scroll: Option<bool>,
}
