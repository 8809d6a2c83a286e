use std::path::Path;
use std::sync::mpsc;

use lightbox_core::content::Article;
use lightbox_core::preload::{preload_image, preload_scaled};

use crate::messages::{WorkerCommand, WorkerResult};

/// Longest edge for inline article thumbnails. The overlay always decodes
/// at full size.
const THUMBNAIL_MAX_EDGE: u32 = 1024;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("lightbox-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Preload { src, request } => {
                handle_preload(&src, request, &tx, &ctx);
            }
            WorkerCommand::Thumbnail { src } => {
                handle_thumbnail(&src, &tx, &ctx);
            }
            WorkerCommand::LoadArticle { path } => {
                handle_load_article(&path, &tx, &ctx);
            }
        }
    }
}

fn handle_preload(
    src: &str,
    request: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match preload_image(src) {
        Ok(image) => send(tx, ctx, WorkerResult::PreloadReady { request, image }),
        Err(e) => {
            tracing::warn!(src, error = %e, "preload failed");
            send(
                tx,
                ctx,
                WorkerResult::PreloadFailed {
                    request,
                    message: format!("Failed to load image: {e}"),
                },
            );
        }
    }
}

fn handle_thumbnail(src: &str, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match preload_scaled(src, THUMBNAIL_MAX_EDGE) {
        Ok(image) => send(
            tx,
            ctx,
            WorkerResult::ThumbnailReady {
                src: src.to_string(),
                image,
            },
        ),
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::ThumbnailFailed {
                src: src.to_string(),
                message: format!("{e}"),
            },
        ),
    }
}

fn handle_load_article(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match read_article(path) {
        Ok(article) => send(
            tx,
            ctx,
            WorkerResult::ArticleLoaded {
                path: path.to_path_buf(),
                article,
            },
        ),
        Err(e) => send(
            tx,
            ctx,
            WorkerResult::Error {
                message: format!("Failed to load article: {e:#}"),
            },
        ),
    }
}

fn read_article(path: &Path) -> anyhow::Result<Article> {
    let text = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}
