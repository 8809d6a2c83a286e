use approx::assert_relative_eq;

use lightbox_core::zoom::{
    constrain_zoom_state, fit_size, pan_bounds, Dimensions, ZoomState, MAX_SCALE, MIN_SCALE,
    ZOOM_STEP,
};

const CONTAINER: Dimensions = Dimensions {
    width: 400.0,
    height: 400.0,
};
const IMAGE: Dimensions = Dimensions {
    width: 300.0,
    height: 200.0,
};

#[test]
fn test_unmagnified_pan_is_forced_to_origin() {
    for scale in [0.5, 0.75, 1.0] {
        let proposed = ZoomState {
            scale,
            x: 120.0,
            y: -85.0,
        };
        let result = constrain_zoom_state(proposed, CONTAINER, IMAGE);
        assert_eq!(result.x, 0.0, "scale={scale}");
        assert_eq!(result.y, 0.0, "scale={scale}");
        assert_eq!(result.scale, scale);
    }
}

#[test]
fn test_pan_clamped_to_overflow_bounds() {
    // 300x200 at scale 2 in a 400x400 container: 600x400 scaled,
    // so x may move +-100 and y not at all.
    let bounds = pan_bounds(2.0, CONTAINER, IMAGE);
    assert_eq!(bounds.max_x, 100.0);
    assert_eq!(bounds.max_y, 0.0);

    let in_range = constrain_zoom_state(
        ZoomState {
            scale: 2.0,
            x: 50.0,
            y: 30.0,
        },
        CONTAINER,
        IMAGE,
    );
    assert_eq!(in_range.x, 50.0);
    assert_eq!(in_range.y, 0.0);

    // Dragging far beyond any valid bound yields the maximally clamped
    // pan, not the raw delta.
    let far = constrain_zoom_state(
        ZoomState {
            scale: 2.0,
            x: 10_000.0,
            y: -10_000.0,
        },
        CONTAINER,
        IMAGE,
    );
    assert_eq!(far.x, 100.0);
    assert_eq!(far.y, 0.0);
}

#[test]
fn test_scale_is_never_altered() {
    let result = constrain_zoom_state(
        ZoomState {
            scale: 3.5,
            x: 0.0,
            y: 0.0,
        },
        CONTAINER,
        IMAGE,
    );
    assert_eq!(result.scale, 3.5);
}

#[test]
fn test_degenerate_dimensions_return_input_unmodified() {
    let proposed = ZoomState {
        scale: 2.0,
        x: 123.0,
        y: -456.0,
    };
    let zero = Dimensions::new(0.0, 0.0);

    assert_eq!(constrain_zoom_state(proposed, zero, IMAGE), proposed);
    assert_eq!(constrain_zoom_state(proposed, CONTAINER, zero), proposed);
}

#[test]
fn test_fit_size_contains_without_upscaling() {
    // Wider than tall: width is the limiting axis.
    let fitted = fit_size(Dimensions::new(800.0, 400.0), CONTAINER);
    assert_eq!(fitted.width, 400.0);
    assert_eq!(fitted.height, 200.0);

    // Smaller than the container: shown at natural size.
    let small = fit_size(Dimensions::new(100.0, 60.0), CONTAINER);
    assert_eq!(small.width, 100.0);
    assert_eq!(small.height, 60.0);

    // Degenerate container: image size unchanged.
    let degenerate = fit_size(IMAGE, Dimensions::new(0.0, 400.0));
    assert_eq!(degenerate, IMAGE);
}

#[test]
fn test_zoom_steps_round_trip() {
    let mut state = ZoomState::identity();
    for _ in 0..3 {
        state = state.zoomed_in(ZOOM_STEP, MAX_SCALE);
    }
    assert!(state.scale < MAX_SCALE, "must not hit the clamp for this test");
    for _ in 0..3 {
        state = state.zoomed_out(ZOOM_STEP, MIN_SCALE);
    }
    assert_relative_eq!(state.scale, 1.0, epsilon = 1e-6);
}

#[test]
fn test_zoom_steps_clamp_at_extremes() {
    let near_max = ZoomState {
        scale: 4.0,
        x: 0.0,
        y: 0.0,
    };
    assert_eq!(near_max.zoomed_in(ZOOM_STEP, MAX_SCALE).scale, MAX_SCALE);

    let near_min = ZoomState {
        scale: 0.6,
        x: 0.0,
        y: 0.0,
    };
    assert_eq!(near_min.zoomed_out(ZOOM_STEP, MIN_SCALE).scale, MIN_SCALE);
}

#[test]
fn test_zooming_out_to_fitted_resets_pan() {
    let state = ZoomState {
        scale: 1.5,
        x: 40.0,
        y: -20.0,
    };
    let out = state.zoomed_out(ZOOM_STEP, MIN_SCALE);
    assert!(out.scale <= 1.0);
    assert_eq!(out.x, 0.0);
    assert_eq!(out.y, 0.0);

    // Still magnified after the step: pan is kept.
    let deep = ZoomState {
        scale: 5.0,
        x: 40.0,
        y: -20.0,
    };
    let still_magnified = deep.zoomed_out(ZOOM_STEP, MIN_SCALE);
    assert!(still_magnified.scale > 1.0);
    assert_eq!(still_magnified.x, 40.0);
    assert_eq!(still_magnified.y, -20.0);
}
