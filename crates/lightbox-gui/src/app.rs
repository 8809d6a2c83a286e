use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;

use lightbox_core::content::{Article, Block};
use lightbox_core::history::SentinelHistory;
use lightbox_core::scan::scan_article;
use lightbox_core::store::ViewerStore;
use lightbox_core::surface::Surface;

use crate::convert::to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{ArticleState, OverlayState, Thumbnail};
use crate::worker;

pub struct LightboxApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub article: ArticleState,
    pub store: ViewerStore,
    pub surface: Surface,
    pub history: SentinelHistory,
    pub overlay: OverlayState,
    /// Whether the article scroll area accepts scrolling. The overlay
    /// saves and restores this around the scroll lock.
    pub scroll_enabled: bool,
    pub show_about: bool,
}

impl LightboxApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            article: ArticleState {
                path: None,
                article: Article {
                    title: String::new(),
                    blocks: Vec::new(),
                },
                thumbnails: HashMap::new(),
            },
            store: ViewerStore::new(),
            surface: Surface::default(),
            history: SentinelHistory::new(),
            overlay: OverlayState::default(),
            scroll_enabled: true,
            show_about: false,
        };
        app.install_article(None, demo_article());
        app
    }

    /// Swap in a new article: rebuild the collection from a fresh scan and
    /// request thumbnails for every discovered image.
    pub fn install_article(&mut self, path: Option<PathBuf>, article: Article) {
        let was_open = self.store.is_open();
        let collection = scan_article(&article);

        self.article.thumbnails.clear();
        for descriptor in collection.iter() {
            if !self.article.thumbnails.contains_key(&descriptor.src) {
                self.article
                    .thumbnails
                    .insert(descriptor.src.clone(), Thumbnail::Pending);
                let _ = self.cmd_tx.send(WorkerCommand::Thumbnail {
                    src: descriptor.src.clone(),
                });
            }
        }

        self.store.set_collection(collection);
        self.article.path = path;
        self.article.article = article;

        // The rebuild closes the viewer when its index vanished.
        if was_open && !self.store.is_open() {
            if self.history.release() {
                tracing::debug!("popped sentinel history entry");
            }
            self.finish_close();
        }
    }

    /// Open the viewer at the given collection index. Out-of-range indices
    /// are ignored by the store, in which case nothing else happens.
    pub fn open_viewer(&mut self, index: usize) {
        self.store.open(index);
        if !self.store.is_open() {
            return;
        }
        if self.history.arm() {
            tracing::debug!("pushed sentinel history entry");
        }
        if self.overlay.saved_scroll.is_none() {
            self.overlay.saved_scroll = Some(self.scroll_enabled);
        }
        self.scroll_enabled = false;
        self.request_current_image();
    }

    /// Close via escape, the close button, or a backdrop click: pops the
    /// sentinel history entry if it is still present.
    pub fn close_viewer(&mut self) {
        if self.history.release() {
            tracing::debug!("popped sentinel history entry");
        }
        self.finish_close();
    }

    /// The host observed a back navigation. Closes only when the sentinel
    /// consumed it; otherwise the navigation belongs to the host.
    pub fn on_back(&mut self) {
        if self.history.on_back() {
            self.finish_close();
        }
    }

    fn finish_close(&mut self) {
        self.store.close();
        self.surface.drag_end();
        self.overlay.texture = None;
        self.overlay.error = None;
        if let Some(prior) = self.overlay.saved_scroll.take() {
            self.scroll_enabled = prior;
        }
    }

    pub fn go_next(&mut self) {
        let before = self.store.current_index();
        self.store.next();
        if self.store.current_index() != before {
            self.request_current_image();
        }
    }

    pub fn go_previous(&mut self) {
        let before = self.store.current_index();
        self.store.previous();
        if self.store.current_index() != before {
            self.request_current_image();
        }
    }

    /// Enter the loading state for the store's current image and ask the
    /// worker for a full-size decode.
    fn request_current_image(&mut self) {
        let Some(src) = self.store.current_image().map(|d| d.src.clone()) else {
            return;
        };
        let request = self.surface.begin_load();
        self.overlay.texture = None;
        self.overlay.error = None;
        let _ = self.cmd_tx.send(WorkerCommand::Preload { src, request });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::PreloadReady { request, image } => {
                    // The surface drops stale generations.
                    if self.surface.load_resolved(request, image.dimensions()) {
                        let texture = ctx.load_texture(
                            "viewer-image",
                            to_color_image(&image),
                            egui::TextureOptions::LINEAR,
                        );
                        self.overlay.texture = Some(texture);
                    }
                }
                WorkerResult::PreloadFailed { request, message } => {
                    if self.surface.load_failed(request) {
                        self.overlay.error = Some(message);
                    }
                }
                WorkerResult::ThumbnailReady { src, image } => {
                    let texture = ctx.load_texture(
                        format!("thumb:{src}"),
                        to_color_image(&image),
                        egui::TextureOptions::LINEAR,
                    );
                    self.article.thumbnails.insert(src, Thumbnail::Ready(texture));
                }
                WorkerResult::ThumbnailFailed { src, message } => {
                    tracing::warn!(src = %src, error = %message, "thumbnail unavailable");
                    self.article.thumbnails.insert(src, Thumbnail::Failed);
                }
                WorkerResult::ArticleLoaded { path, article } => {
                    tracing::info!(path = %path.display(), title = %article.title, "article loaded");
                    self.install_article(Some(path), article);
                }
                WorkerResult::ConfigImported { config } => {
                    self.surface.set_config(config);
                }
                WorkerResult::Error { message } => {
                    tracing::error!(error = %message, "worker error");
                }
            }
        }
    }

    /// Keyboard and back-button bindings, active only while the overlay is
    /// open.
    fn handle_viewer_input(&mut self, ctx: &egui::Context) {
        if !self.store.is_open() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_viewer();
            return;
        }
        // Mouse/gesture back maps onto the sentinel history discipline.
        if ctx.input(|i| i.pointer.button_pressed(egui::PointerButton::Extra1)) {
            self.on_back();
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) && self.store.has_previous() {
            self.go_previous();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) && self.store.has_next() {
            self.go_next();
        }
    }
}

impl eframe::App for LightboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_viewer_input(ctx);

        panels::menu_bar::show(ctx, self);
        panels::article::show(ctx, self);
        if self.store.is_open() {
            panels::overlay::show(ctx, self);
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About Lightbox")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Lightbox");
                        ui.label("Article image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

/// Built-in sample shown before any article is opened.
fn demo_article() -> Article {
    Article {
        title: "Reading the Rings".into(),
        blocks: vec![
            Block::Heading {
                level: 1,
                text: "Reading the Rings".into(),
            },
            Block::Paragraph {
                text: "This is the built-in sample article. Open your own with \
                       File > Open Article. Image paths below resolve relative \
                       to the working directory; click any image to inspect it."
                    .into(),
            },
            Block::Image {
                src: "demos/rings.png".into(),
                alt: "Ring system overview".into(),
            },
            Block::Section {
                title: Some("Observing notes".into()),
                blocks: vec![
                    Block::Paragraph {
                        text: "Seeing was steady for about twenty minutes after \
                               midnight; both captures below are from that window."
                            .into(),
                    },
                    Block::Image {
                        src: "demos/transit.png".into(),
                        alt: "Moon transit".into(),
                    },
                    Block::Quote {
                        text: "The detail you keep is the detail you can navigate to."
                            .into(),
                    },
                ],
            },
            Block::Image {
                src: "demos/closeup.png".into(),
                alt: String::new(),
            },
        ],
    }
}
