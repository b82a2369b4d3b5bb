use glance_core::pixmap::Pixmap;

/// Convert an RGBA pixmap to an egui ColorImage.
pub fn pixmap_to_color_image(pixmap: &Pixmap) -> egui::ColorImage {
    let pixels = pixmap
        .data
        .chunks_exact(4)
        .map(|px| egui::Color32::from_rgba_unmultiplied(px[0], px[1], px[2], px[3]))
        .collect();

    egui::ColorImage {
        size: [pixmap.width as usize, pixmap.height as usize],
        pixels,
        source_size: Default::default(),
    }
}
