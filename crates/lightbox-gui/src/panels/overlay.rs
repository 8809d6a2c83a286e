use lightbox_core::surface::LoadState;
use lightbox_core::zoom::Dimensions;

use crate::app::LightboxApp;

/// Padding between the screen edge and the image container.
const CONTAINER_PADDING: f32 = 16.0;

pub fn show(ctx: &egui::Context, app: &mut LightboxApp) {
    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("lightbox-overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Allocated first: every control drawn afterwards sits on top
            // and wins the pointer, so this only reports clicks landing on
            // the bare backdrop.
            let backdrop = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(235));

            let container = screen.shrink(CONTAINER_PADDING);
            app.surface
                .set_container(Dimensions::new(container.width(), container.height()));

            match app.surface.load_state() {
                LoadState::Ready => draw_image(ui, app, container),
                LoadState::Loading => draw_notice(ui, container, "Loading..."),
                LoadState::Failed => {
                    let message = app
                        .overlay
                        .error
                        .clone()
                        .unwrap_or_else(|| "Failed to load image".into());
                    draw_notice(ui, container, &message);
                }
            }

            // Document-level drag tracking: once a session exists, moves
            // and releases come from the global pointer state, so a drag
            // that leaves the image bounds is not lost mid-gesture. The
            // session ends the instant any button or touch releases.
            if app.surface.is_dragging() {
                let (pos, released) =
                    ctx.input(|i| (i.pointer.latest_pos(), i.pointer.any_released()));
                if let Some(pos) = pos {
                    app.surface.drag_move((pos.x, pos.y));
                }
                if released {
                    app.surface.drag_end();
                }
            }

            draw_indicator(ui, app, screen);
            draw_controls(ui, app, screen);

            if backdrop.clicked() {
                app.close_viewer();
            }
        });
}

fn draw_image(ui: &mut egui::Ui, app: &mut LightboxApp, container: egui::Rect) {
    let Some(texture_id) = app.overlay.texture.as_ref().map(|t| t.id()) else {
        return;
    };
    let Some(display) = app.surface.display_size() else {
        return;
    };

    let zoom = app.surface.zoom();
    let size = egui::vec2(display.width, display.height) * zoom.scale;
    let center = container.center() + egui::vec2(zoom.x, zoom.y);
    let img_rect = egui::Rect::from_center_size(center, size);

    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    let response = ui.allocate_rect(img_rect, egui::Sense::click_and_drag());
    let response = if zoom.is_magnified() {
        let cursor = if app.surface.is_dragging() {
            egui::CursorIcon::Grabbing
        } else {
            egui::CursorIcon::Grab
        };
        response.on_hover_cursor(cursor)
    } else {
        response
    };

    // Mouse and single-finger touch arrive through the same pointer
    // stream; the surface ignores drag-start while unmagnified.
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            app.surface.drag_start((pos.x, pos.y));
        }
    }
    if response.double_clicked() {
        app.surface.reset_zoom();
    }
}

/// Loading/error indicator shown in place of the image.
fn draw_notice(ui: &egui::Ui, container: egui::Rect, text: &str) {
    ui.painter().text(
        container.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(16.0),
        egui::Color32::from_gray(200),
    );
}

fn draw_indicator(ui: &egui::Ui, app: &LightboxApp, screen: egui::Rect) {
    let zoom_pct = app.surface.zoom().scale * 100.0;
    // The position readout only makes sense with something to navigate.
    let text = if app.store.total_images() > 1 {
        format!(
            "{} / {}   Zoom: {:.0}%",
            app.store.current_index() + 1,
            app.store.total_images(),
            zoom_pct
        )
    } else {
        format!("Zoom: {:.0}%", zoom_pct)
    };
    ui.painter().text(
        egui::pos2(screen.center().x, screen.top() + 24.0),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn draw_controls(ui: &mut egui::Ui, app: &mut LightboxApp, screen: egui::Rect) {
    let close_rect = egui::Rect::from_min_size(
        egui::pos2(screen.right() - 84.0, screen.top() + 12.0),
        egui::vec2(72.0, 28.0),
    );
    if ui.put(close_rect, egui::Button::new("Close")).clicked() {
        app.close_viewer();
        return;
    }

    // Navigation, hidden (not just disabled) when unavailable.
    if app.store.has_previous() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(screen.left() + 36.0, screen.center().y),
            egui::vec2(40.0, 40.0),
        );
        if ui
            .put(rect, egui::Button::new(egui::RichText::new("<").size(18.0)))
            .clicked()
        {
            app.go_previous();
        }
    }
    if app.store.has_next() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(screen.right() - 36.0, screen.center().y),
            egui::vec2(40.0, 40.0),
        );
        if ui
            .put(rect, egui::Button::new(egui::RichText::new(">").size(18.0)))
            .clicked()
        {
            app.go_next();
        }
    }

    // Zoom strip. The surface ignores these until the image is ready.
    let strip_y = screen.bottom() - 48.0;
    let center_x = screen.center().x;
    let out_rect = egui::Rect::from_min_size(
        egui::pos2(center_x - 80.0, strip_y),
        egui::vec2(40.0, 28.0),
    );
    let reset_rect = egui::Rect::from_min_size(
        egui::pos2(center_x - 32.0, strip_y),
        egui::vec2(64.0, 28.0),
    );
    let in_rect = egui::Rect::from_min_size(
        egui::pos2(center_x + 40.0, strip_y),
        egui::vec2(40.0, 28.0),
    );

    if ui.put(out_rect, egui::Button::new("-")).clicked() {
        app.surface.zoom_out();
    }
    if ui.put(reset_rect, egui::Button::new("Reset")).clicked() {
        app.surface.reset_zoom();
    }
    if ui.put(in_rect, egui::Button::new("+")).clicked() {
        app.surface.zoom_in();
    }
}
