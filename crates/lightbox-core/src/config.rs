use serde::{Deserialize, Serialize};

use crate::zoom::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};

/// Interaction tuning for the viewer surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Multiplier applied per discrete zoom step.
    pub zoom_step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }
}
