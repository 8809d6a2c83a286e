use lightbox_core::preload::PreloadedImage;

/// Convert decoded RGBA pixels to an egui ColorImage.
pub fn to_color_image(image: &PreloadedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.pixels,
    )
}
