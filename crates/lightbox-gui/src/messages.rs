use std::path::PathBuf;

use lightbox_core::config::ViewerConfig;
use lightbox_core::content::Article;
use lightbox_core::preload::PreloadedImage;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Full-size decode for the overlay. `request` is the surface's load
    /// generation; stale results are dropped on arrival.
    Preload { src: String, request: u64 },

    /// Downscaled decode for an inline article thumbnail.
    Thumbnail { src: String },

    /// Read and parse an article file.
    LoadArticle { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    PreloadReady {
        request: u64,
        image: PreloadedImage,
    },
    PreloadFailed {
        request: u64,
        message: String,
    },

    ThumbnailReady {
        src: String,
        image: PreloadedImage,
    },
    ThumbnailFailed {
        src: String,
        message: String,
    },

    ArticleLoaded {
        path: PathBuf,
        article: Article,
    },

    /// Viewer settings imported from a TOML file.
    ConfigImported {
        config: ViewerConfig,
    },

    Error {
        message: String,
    },
}
