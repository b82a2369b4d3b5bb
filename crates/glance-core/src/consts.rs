/// Scale applied to a freshly loaded image (100%).
pub const INITIAL_SCALE: f64 = 1.0;

/// Multiplier applied per scroll-wheel notch (wheel-up multiplies,
/// wheel-down divides).
pub const SCROLL_SCALE_STEP: f64 = 1.10;

/// Multiplier for the keyboard zoom shortcuts (Ctrl+= multiplies,
/// Ctrl+- divides).
pub const KEY_SCALE_STEP: f64 = 2.0;

/// Scale presets bound to the digit shortcuts 1, 2, 3.
pub const SCALE_PRESETS: [f64; 3] = [0.5, 1.0, 2.0];

/// Smallest accepted scale factor. Keeps the window from collapsing to a
/// degenerate size under repeated zoom-out.
pub const MIN_SCALE: f64 = 0.01;

/// Largest accepted scale factor.
pub const MAX_SCALE: f64 = 100.0;

/// One rotation step, in degrees. The only granularity supported.
pub const QUARTER_TURN_DEGREES: i32 = 90;

/// A full rotation, in degrees. Rotation state is kept in [0, 360).
pub const FULL_TURN_DEGREES: i32 = 360;

/// Window background color (RGB), shown wherever the image does not cover
/// the window.
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];
