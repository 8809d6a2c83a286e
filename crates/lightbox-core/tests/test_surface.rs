use lightbox_core::config::ViewerConfig;
use lightbox_core::surface::{LoadState, Surface};
use lightbox_core::zoom::Dimensions;

const CONTAINER: Dimensions = Dimensions {
    width: 400.0,
    height: 400.0,
};
const NATURAL: Dimensions = Dimensions {
    width: 300.0,
    height: 200.0,
};

/// A surface measured at 400x400 showing a 300x200 image, with a 2x zoom
/// step so a single zoom-in lands on exactly scale 2.
fn ready_surface() -> Surface {
    let mut surface = Surface::new(ViewerConfig {
        zoom_step: 2.0,
        ..ViewerConfig::default()
    });
    surface.set_container(CONTAINER);
    let request = surface.begin_load();
    assert!(surface.load_resolved(request, NATURAL));
    surface
}

#[test]
fn test_load_lifecycle() {
    let mut surface = Surface::default();
    surface.set_container(CONTAINER);

    let request = surface.begin_load();
    assert_eq!(surface.load_state(), LoadState::Loading);

    assert!(surface.load_resolved(request, NATURAL));
    assert_eq!(surface.load_state(), LoadState::Ready);
    assert_eq!(surface.natural_size(), Some(NATURAL));
    assert_eq!(surface.zoom().scale, 1.0);
    assert_eq!((surface.zoom().x, surface.zoom().y), (0.0, 0.0));
}

#[test]
fn test_stale_preload_result_is_ignored() {
    let mut surface = Surface::default();
    let first = surface.begin_load();
    // User navigated on before the first preload resolved.
    let second = surface.begin_load();

    assert!(!surface.load_resolved(first, NATURAL));
    assert_eq!(surface.load_state(), LoadState::Loading);

    assert!(!surface.load_failed(first));
    assert_eq!(surface.load_state(), LoadState::Loading);

    assert!(surface.load_resolved(second, NATURAL));
    assert_eq!(surface.load_state(), LoadState::Ready);
}

#[test]
fn test_load_failure_is_terminal_until_next_load() {
    let mut surface = Surface::default();
    surface.set_container(CONTAINER);

    let request = surface.begin_load();
    assert!(surface.load_failed(request));
    assert_eq!(surface.load_state(), LoadState::Failed);

    // Interaction is inert in the failed state.
    surface.zoom_in();
    assert_eq!(surface.zoom().scale, 1.0);
    surface.drag_start((10.0, 10.0));
    assert!(!surface.is_dragging());

    // Navigating to another index starts a fresh attempt.
    let next = surface.begin_load();
    assert_eq!(surface.load_state(), LoadState::Loading);
    assert!(surface.load_resolved(next, NATURAL));
    assert_eq!(surface.load_state(), LoadState::Ready);
}

#[test]
fn test_drag_ignored_when_not_magnified() {
    let mut surface = ready_surface();
    assert_eq!(surface.zoom().scale, 1.0);

    surface.drag_start((100.0, 100.0));
    assert!(!surface.is_dragging());

    surface.drag_move((200.0, 200.0));
    assert_eq!((surface.zoom().x, surface.zoom().y), (0.0, 0.0));
}

#[test]
fn test_drag_applies_constrained_pointer_delta() {
    let mut surface = ready_surface();
    surface.zoom_in();
    assert_eq!(surface.zoom().scale, 2.0);

    // 300x200 at scale 2 in 400x400: x clamps to +-100, y to 0.
    surface.drag_start((100.0, 100.0));
    assert!(surface.is_dragging());

    surface.drag_move((150.0, 130.0));
    assert_eq!(surface.zoom().x, 50.0);
    assert_eq!(surface.zoom().y, 0.0);

    // Far beyond any valid bound: maximally clamped, not the raw delta.
    surface.drag_move((5000.0, 5000.0));
    assert_eq!(surface.zoom().x, 100.0);
    assert_eq!(surface.zoom().y, 0.0);

    // Drag-end returns to ready without snapping.
    surface.drag_end();
    assert!(!surface.is_dragging());
    assert_eq!(surface.zoom().x, 100.0);
}

#[test]
fn test_drag_move_without_session_is_a_noop() {
    let mut surface = ready_surface();
    surface.zoom_in();
    surface.drag_move((500.0, 500.0));
    assert_eq!((surface.zoom().x, surface.zoom().y), (0.0, 0.0));
}

#[test]
fn test_resize_reclamps_pan_immediately() {
    let mut surface = ready_surface();
    surface.zoom_in();
    surface.drag_start((0.0, 0.0));
    surface.drag_move((100.0, 0.0));
    surface.drag_end();
    assert_eq!(surface.zoom().x, 100.0);

    // A wider container shrinks the horizontal overflow to 100 -> 50;
    // the pan must follow without waiting for the next gesture.
    surface.set_container(Dimensions::new(500.0, 500.0));
    assert_eq!(surface.zoom().x, 50.0);
}

#[test]
fn test_zoom_out_to_fitted_resets_pan() {
    let mut surface = ready_surface();
    surface.zoom_in();
    surface.drag_start((0.0, 0.0));
    surface.drag_move((80.0, 0.0));
    surface.drag_end();
    assert_eq!(surface.zoom().x, 80.0);

    surface.zoom_out();
    assert_eq!(surface.zoom().scale, 1.0);
    assert_eq!((surface.zoom().x, surface.zoom().y), (0.0, 0.0));
}

#[test]
fn test_zoom_ops_inert_while_loading() {
    let mut surface = Surface::default();
    surface.set_container(CONTAINER);
    surface.begin_load();

    surface.zoom_in();
    surface.zoom_out();
    surface.reset_zoom();
    assert_eq!(surface.zoom().scale, 1.0);
}

#[test]
fn test_begin_load_discards_previous_image_state() {
    let mut surface = ready_surface();
    surface.zoom_in();
    surface.drag_start((0.0, 0.0));
    surface.drag_move((40.0, 0.0));

    surface.begin_load();
    assert!(!surface.is_dragging());
    assert_eq!(surface.zoom().scale, 1.0);
    assert_eq!(surface.natural_size(), None);
    assert_eq!(surface.load_state(), LoadState::Loading);
}

#[test]
fn test_display_size_is_fitted() {
    let mut surface = Surface::default();
    surface.set_container(Dimensions::new(200.0, 200.0));
    let request = surface.begin_load();
    surface.load_resolved(request, Dimensions::new(400.0, 100.0));

    let display = surface.display_size().unwrap();
    assert_eq!(display.width, 200.0);
    assert_eq!(display.height, 50.0);
}
