use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Write a small RGBA PNG with a deterministic per-pixel pattern
/// (`r = x`, `g = y`, `b = x + y`, opaque) and return its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, Rgba([x as u8, y as u8, (x + y) as u8, 255]));
        }
    }
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
