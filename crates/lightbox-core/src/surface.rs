//! Interaction state for the modal surface: load lifecycle, zoom/pan, and
//! drag tracking for the currently shown image. Pure state machine: the
//! embedding UI translates raw pointer/keyboard events into these calls.

use crate::config::ViewerConfig;
use crate::zoom::{constrain_zoom_state, fit_size, Dimensions, ZoomState};

/// Load lifecycle for the currently shown image.
///
/// `Failed` is terminal for that image: the user navigates away or closes;
/// there is no automatic retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Pointer capture taken at drag-start. While a session exists it is the
/// only owner of document-level move/up tracking in the embedding UI:
/// created on drag-start, destroyed on drag-end, so global listeners can
/// never leak past the gesture.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    pointer_origin: (f32, f32),
    pan_origin: (f32, f32),
}

/// Transient per-image view state. Entered fresh on every index change,
/// including a re-entry on re-open of the same index; discarded on close.
#[derive(Debug)]
pub struct Surface {
    config: ViewerConfig,
    load: LoadState,
    /// Monotonic preload generation. A resolved load is ignored unless its
    /// generation matches, so a slow preload can never flash in after the
    /// user has navigated on (last-write-wins).
    request: u64,
    zoom: ZoomState,
    natural_size: Option<Dimensions>,
    container: Dimensions,
    drag: Option<DragSession>,
}

impl Surface {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            load: LoadState::Loading,
            request: 0,
            zoom: ZoomState::identity(),
            natural_size: None,
            container: Dimensions::new(0.0, 0.0),
            drag: None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ViewerConfig) {
        self.config = config;
    }

    /// Start loading a new image. Resets zoom to identity, discards any
    /// drag session, and returns the new preload generation the caller
    /// must pass back to [`Surface::load_resolved`] / [`Surface::load_failed`].
    pub fn begin_load(&mut self) -> u64 {
        self.request += 1;
        self.load = LoadState::Loading;
        self.zoom = ZoomState::identity();
        self.natural_size = None;
        self.drag = None;
        self.request
    }

    /// A preload finished. Returns false (and changes nothing) when the
    /// result is stale.
    pub fn load_resolved(&mut self, request: u64, natural: Dimensions) -> bool {
        if request != self.request {
            tracing::debug!(request, current = self.request, "ignoring stale preload");
            return false;
        }
        self.natural_size = Some(natural);
        self.zoom = ZoomState::identity();
        self.load = LoadState::Ready;
        true
    }

    /// A preload failed. Returns false when the result is stale.
    pub fn load_failed(&mut self, request: u64) -> bool {
        if request != self.request {
            tracing::debug!(request, current = self.request, "ignoring stale preload failure");
            return false;
        }
        self.load = LoadState::Failed;
        self.drag = None;
        true
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    pub fn natural_size(&self) -> Option<Dimensions> {
        self.natural_size
    }

    pub fn container(&self) -> Dimensions {
        self.container
    }

    /// Displayed image size at scale 1: the natural size contain-fitted
    /// into the container.
    pub fn display_size(&self) -> Option<Dimensions> {
        self.natural_size.map(|n| fit_size(n, self.container))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The container was measured or resized. Applied immediately, and the
    /// current pan is re-clamped right away so a stale offset cannot leave
    /// the image out of view until the next gesture.
    pub fn set_container(&mut self, container: Dimensions) {
        self.container = container;
        self.zoom = self.constrained(self.zoom);
    }

    pub fn zoom_in(&mut self) {
        if self.load != LoadState::Ready {
            return;
        }
        self.zoom = self
            .zoom
            .zoomed_in(self.config.zoom_step, self.config.max_scale);
    }

    pub fn zoom_out(&mut self) {
        if self.load != LoadState::Ready {
            return;
        }
        let out = self
            .zoom
            .zoomed_out(self.config.zoom_step, self.config.min_scale);
        // A smaller scale shrinks the valid pan range.
        self.zoom = self.constrained(out);
    }

    pub fn reset_zoom(&mut self) {
        if self.load != LoadState::Ready {
            return;
        }
        self.zoom = ZoomState::identity();
    }

    /// Begin a drag. Ignored unless the image is ready and magnified;
    /// panning a non-magnified image is meaningless.
    pub fn drag_start(&mut self, pointer: (f32, f32)) {
        if self.load != LoadState::Ready || !self.zoom.is_magnified() || self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession {
            pointer_origin: pointer,
            pan_origin: (self.zoom.x, self.zoom.y),
        });
    }

    /// Pointer moved during a drag: propose `origin pan + pointer delta`,
    /// then apply the constrained result. No-op without a session.
    pub fn drag_move(&mut self, pointer: (f32, f32)) {
        let Some(session) = self.drag else {
            return;
        };
        let proposed = ZoomState {
            scale: self.zoom.scale,
            x: session.pan_origin.0 + (pointer.0 - session.pointer_origin.0),
            y: session.pan_origin.1 + (pointer.1 - session.pointer_origin.1),
        };
        self.zoom = self.constrained(proposed);
    }

    /// End the drag without snapping.
    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    fn constrained(&self, proposed: ZoomState) -> ZoomState {
        match self.display_size() {
            Some(display) => constrain_zoom_state(proposed, self.container, display),
            None => proposed,
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
