use std::collections::HashMap;

use lightbox_core::content::Block;

use crate::app::LightboxApp;
use crate::state::Thumbnail;

/// Maximum display width for inline images.
const INLINE_IMAGE_MAX_WIDTH: f32 = 480.0;

pub fn show(ctx: &egui::Context, app: &mut LightboxApp) {
    let mut clicked = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .enable_scrolling(app.scroll_enabled)
            .show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading(&app.article.article.title);
                ui.add_space(12.0);

                // Walk blocks in document order with a running image
                // counter; the N-th image rendered is index N of the
                // scanned collection, so a click maps straight to open(N).
                let mut image_index = 0usize;
                render_blocks(
                    ui,
                    &app.article.article.blocks,
                    &app.article.thumbnails,
                    &mut image_index,
                    &mut clicked,
                );
                ui.add_space(24.0);
            });
    });

    if let Some(index) = clicked {
        app.open_viewer(index);
    }
}

fn render_blocks(
    ui: &mut egui::Ui,
    blocks: &[Block],
    thumbnails: &HashMap<String, Thumbnail>,
    image_index: &mut usize,
    clicked: &mut Option<usize>,
) {
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let size = match level {
                    1 => 22.0,
                    2 => 18.0,
                    _ => 15.0,
                };
                ui.label(egui::RichText::new(text).size(size).strong());
                ui.add_space(4.0);
            }
            Block::Paragraph { text } => {
                ui.label(text);
                ui.add_space(8.0);
            }
            Block::Quote { text } => {
                ui.label(egui::RichText::new(text).italics().weak());
                ui.add_space(8.0);
            }
            Block::Image { src, alt } => {
                let index = *image_index;
                *image_index += 1;
                if render_inline_image(ui, thumbnails.get(src.as_str()), alt) {
                    *clicked = Some(index);
                }
                ui.add_space(8.0);
            }
            Block::Section { title, blocks } => {
                if let Some(title) = title {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(title).size(18.0).strong());
                    ui.add_space(4.0);
                }
                render_blocks(ui, blocks, thumbnails, image_index, clicked);
            }
        }
    }
}

/// Returns true when the reader clicked the image.
fn render_inline_image(ui: &mut egui::Ui, thumbnail: Option<&Thumbnail>, alt: &str) -> bool {
    let clicked = match thumbnail {
        Some(Thumbnail::Ready(texture)) => {
            let response = ui
                .add(
                    egui::Image::new(texture)
                        .max_width(INLINE_IMAGE_MAX_WIDTH.min(ui.available_width()))
                        .sense(egui::Sense::click()),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            response.clicked()
        }
        Some(Thumbnail::Failed) => placeholder(ui, alt, "image unavailable"),
        _ => placeholder(ui, alt, "loading..."),
    };

    if !alt.is_empty() {
        ui.small(alt);
    }
    clicked
}

/// A framed stand-in while the thumbnail is pending or broken. Still
/// clickable: the overlay owns the full-size load and shows its own
/// loading/error state.
fn placeholder(ui: &mut egui::Ui, alt: &str, status: &str) -> bool {
    let inner = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(INLINE_IMAGE_MAX_WIDTH.min(ui.available_width()));
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(status).weak());
            if !alt.is_empty() {
                ui.small(alt);
            }
            ui.add_space(24.0);
        });
    });
    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}
