use crate::error::{GlanceError, Result};

/// A decoded image held as tightly packed 8-bit RGBA.
///
/// Dimensions are fixed at load time and never change afterwards; the view
/// transform only ever reads them.
#[derive(Clone, Debug)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    /// Pixel data, row-major, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl Pixmap {
    /// Build a pixmap from raw RGBA bytes, validating the shape.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GlanceError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(GlanceError::PixelBufferMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}
