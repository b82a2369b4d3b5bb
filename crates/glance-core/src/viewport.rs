use tracing::debug;

use crate::consts::{FULL_TURN_DEGREES, INITIAL_SCALE, MAX_SCALE, MIN_SCALE, QUARTER_TURN_DEGREES};

/// Direction of a single quarter-turn rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Signed rotation delta in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Direction::Clockwise => QUARTER_TURN_DEGREES,
            Direction::CounterClockwise => -QUARTER_TURN_DEGREES,
        }
    }
}

/// Rectangle, in pre-rotation image-local space, that the blit targets.
///
/// `x`/`y` shift the rectangle so that rotating it about its own center
/// lands the content on the display bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned bounding box of the rotated projection rectangle; the
/// window inner size that fits the image exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

/// Derived view geometry. Recomputed from the transform on demand, never
/// mutated independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub rect: ProjectionRect,
    pub display: DisplaySize,
}

/// Interactive view state for a single loaded image: a strictly positive
/// scale factor and a rotation constrained to quarter turns.
///
/// The transform is a plain owned value. The event layer mutates it and the
/// render loop queries [`ViewportTransform::projection`] after every
/// mutation; a stale projection must never be rendered.
#[derive(Clone, Debug)]
pub struct ViewportTransform {
    source_width: u32,
    source_height: u32,
    scale: f64,
    rotation: i32,
}

impl ViewportTransform {
    /// Create a transform for an image with the given natural pixel
    /// dimensions. Starts at 100% scale, unrotated.
    pub fn new(source_width: u32, source_height: u32) -> Self {
        Self {
            source_width,
            source_height,
            scale: INITIAL_SCALE,
            rotation: 0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current rotation in degrees, always one of 0, 90, 180, 270.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn source_size(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Whether the current rotation swaps the on-screen roles of width and
    /// height (90 or 270 degrees).
    pub fn is_swapped(&self) -> bool {
        self.rotation == 90 || self.rotation == 270
    }

    /// Set the scale factor. Finite positive input is clamped to the
    /// [`MIN_SCALE`]..[`MAX_SCALE`] range; anything else leaves the state
    /// unchanged.
    pub fn set_scale(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            debug!("ignoring invalid scale factor: {factor}");
            return;
        }
        self.scale = factor.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Multiply the current scale. The zoom keys use 2 and 1/2, the wheel
    /// 1.10 and 1/1.10; any positive multiplier works.
    pub fn scale_by(&mut self, multiplier: f64) {
        self.set_scale(self.scale * multiplier);
    }

    /// Advance the rotation one quarter turn in the given direction.
    pub fn rotate(&mut self, direction: Direction) {
        self.rotation = normalize_rotation(self.rotation + direction.degrees());
    }

    /// Restore the defaults: 100% scale, no rotation.
    pub fn reset(&mut self) {
        self.scale = INITIAL_SCALE;
        self.rotation = 0;
    }

    /// Compute the current projection: the blit rectangle and the window
    /// display size.
    ///
    /// The scaled image is `w x h`. At 90/270 degrees the display bounding
    /// box swaps to `h x w` and the rectangle is offset by half the
    /// width/height delta, so a rotation about the rectangle's center lands
    /// it exactly on the swapped box. At the four permitted angles this
    /// equals the continuous-angle bounding box
    /// `(|cos t|*w + |sin t|*h, |sin t|*w + |cos t|*h)`; the parity test is
    /// the closed form of that formula.
    pub fn projection(&self) -> Projection {
        let w = self.source_width as f64 * self.scale;
        let h = self.source_height as f64 * self.scale;
        let swapped = self.is_swapped();

        let (x, y) = if swapped {
            ((h - w) / 2.0, (w - h) / 2.0)
        } else {
            (0.0, 0.0)
        };

        let display = if swapped {
            DisplaySize {
                width: h,
                height: w,
            }
        } else {
            DisplaySize {
                width: w,
                height: h,
            }
        };

        Projection {
            rect: ProjectionRect {
                x,
                y,
                width: w,
                height: h,
            },
            display,
        }
    }
}

/// Map any rotation in degrees to its representative in {0, 90, 180, 270}.
///
/// Uses Euclidean modulo so negative inputs fold forward (-90 becomes 270).
/// A truncating remainder would leave negative angles and flip the
/// width/height swap parity.
fn normalize_rotation(degrees: i32) -> i32 {
    degrees.rem_euclid(FULL_TURN_DEGREES)
}
