use std::path::Path;

use crate::error::Result;
use crate::pixmap::Pixmap;

/// Load an image file into an RGBA pixmap.
///
/// Accepts any format the `image` crate decodes; everything is converted
/// to 8-bit RGBA. A missing or undecodable file surfaces as an error for
/// the caller to report.
pub fn load_pixmap(path: &Path) -> Result<Pixmap> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Pixmap::from_rgba(w, h, rgba.into_raw())
}
