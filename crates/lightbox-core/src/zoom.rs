//! Zoom/pan geometry: pure functions keeping a proposed view state within
//! the bounds where image content stays under the viewport.

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 5.0;
pub const ZOOM_STEP: f32 = 1.5;

/// Transient scale + pan describing how the displayed image is magnified
/// and offset. Reset to identity on every image change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    pub scale: f32,
    /// Pan offset from the container center, in container pixels.
    pub x: f32,
    pub y: f32,
}

impl ZoomState {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Panning is only meaningful once the image is magnified past its
    /// fitted size.
    pub fn is_magnified(&self) -> bool {
        self.scale > 1.0
    }

    /// One discrete zoom-in step: multiply by `step`, clamped to `max_scale`.
    pub fn zoomed_in(&self, step: f32, max_scale: f32) -> Self {
        Self {
            scale: (self.scale * step).min(max_scale),
            ..*self
        }
    }

    /// One discrete zoom-out step: divide by `step`, clamped to `min_scale`.
    /// Dropping to the fitted size or below resets the pan immediately.
    pub fn zoomed_out(&self, step: f32, min_scale: f32) -> Self {
        let scale = (self.scale / step).max(min_scale);
        if scale <= 1.0 {
            Self {
                scale,
                x: 0.0,
                y: 0.0,
            }
        } else {
            Self { scale, ..*self }
        }
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Measured pixel size of a container or image. Not part of any identity;
/// refreshed on resize and on image load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero or negative sizes make constraint computation meaningless.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Size of an image fitted into a container (contain-fit, never upscaled).
/// This is the displayed size at scale 1. Degenerate inputs return the
/// image size unchanged.
pub fn fit_size(image: Dimensions, container: Dimensions) -> Dimensions {
    if image.is_degenerate() || container.is_degenerate() {
        return image;
    }
    let fit = (container.width / image.width)
        .min(container.height / image.height)
        .min(1.0);
    Dimensions::new(image.width * fit, image.height * fit)
}

/// Per-axis symmetric pan clamp range at the given scale: the pan offset
/// that still leaves image content under the viewport is `[-max, max]`.
/// An axis where the scaled image fits inside the container clamps to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    pub max_x: f32,
    pub max_y: f32,
}

pub fn pan_bounds(scale: f32, container: Dimensions, image: Dimensions) -> PanBounds {
    PanBounds {
        max_x: ((image.width * scale - container.width) / 2.0).max(0.0),
        max_y: ((image.height * scale - container.height) / 2.0).max(0.0),
    }
}

/// Clamp a proposed pan to the nearest state that keeps part of the scaled
/// image inside the container. The scale itself is never altered here;
/// zoom clamping is the caller's responsibility.
///
/// At `scale <= 1` the pan is always forced to `(0, 0)`. Degenerate
/// container or image sizes return the proposed state unmodified.
pub fn constrain_zoom_state(
    proposed: ZoomState,
    container: Dimensions,
    image: Dimensions,
) -> ZoomState {
    if proposed.scale <= 1.0 {
        return ZoomState {
            scale: proposed.scale,
            x: 0.0,
            y: 0.0,
        };
    }
    if container.is_degenerate() || image.is_degenerate() {
        return proposed;
    }

    let bounds = pan_bounds(proposed.scale, container, image);
    ZoomState {
        scale: proposed.scale,
        x: proposed.x.clamp(-bounds.max_x, bounds.max_x),
        y: proposed.y.clamp(-bounds.max_y, bounds.max_y),
    }
}
