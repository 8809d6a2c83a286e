use std::path::Path;

use image::ImageReader;

use crate::error::Result;
use crate::zoom::Dimensions;

/// A decoded image ready for display.
#[derive(Clone, Debug)]
pub struct PreloadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub pixels: Vec<u8>,
}

impl PreloadedImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width as f32, self.height as f32)
    }
}

/// Decode the image at `src`, returning its natural dimensions and RGBA
/// pixels. A failure is terminal for that src: callers render a broken-
/// image state and must not retry automatically.
pub fn preload_image(src: impl AsRef<Path>) -> Result<PreloadedImage> {
    let src = src.as_ref();
    let decoded = ImageReader::open(src)?.decode()?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(src = %src.display(), width, height, "preloaded image");
    Ok(PreloadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Decode and downscale so the longest edge is at most `max_edge` pixels.
/// Used for inline article thumbnails; the overlay always uses the full
/// [`preload_image`].
pub fn preload_scaled(src: impl AsRef<Path>, max_edge: u32) -> Result<PreloadedImage> {
    let src = src.as_ref();
    let decoded = ImageReader::open(src)?.decode()?;
    let scaled = if decoded.width() > max_edge || decoded.height() > max_edge {
        decoded.thumbnail(max_edge, max_edge)
    } else {
        decoded
    };
    let rgba = scaled.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PreloadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Header-only dimension probe, much cheaper than a full decode. Used by
/// the CLI verifier.
pub fn probe_image(src: impl AsRef<Path>) -> Result<(u32, u32)> {
    Ok(image::image_dimensions(src)?)
}
