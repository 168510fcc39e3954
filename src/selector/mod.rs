//! Circular value selector: pointer geometry to quantized values.
//!
//! Wherever a dial collects a numeric answer, the mapping is the same:
//! a pointer position relative to the dial center becomes an angle with
//! 0 degrees at the visual top, the angle becomes a value on a step
//! grid, and the displayed needle angle is re-derived from the quantized
//! value so the drawing can never disagree with the reported value.
//!
//! All angle math is in degrees, normalized to `[0, 360)`. Clamps
//! saturate at the value bounds; quantization rounds half away from
//! zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod gate;

pub use gate::DragGate;

/// A 2D pointer position in screen coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Errors raised by selector configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The step size must be a non-zero divisor of the maximum value
    #[error("step size {step_size} does not divide max value {max_value}")]
    InvalidStep { max_value: u32, step_size: u32 },
}

/// Angle of the pointer around the dial, 0 degrees at the visual top.
///
/// The raw `atan2` result (0 degrees at the positive x axis) is rotated
/// by +90 and normalized into `[0, 360)`. In screen coordinates:
/// directly above the center is 0, right is 90, below is 180, left
/// is 270.
///
/// # Example
///
/// ```rust
/// use intake::selector::{angle_from_pointer, Point};
///
/// let center = Point::new(100.0, 100.0);
/// assert_eq!(angle_from_pointer(Point::new(100.0, 40.0), center), 0.0);
/// assert_eq!(angle_from_pointer(Point::new(160.0, 100.0), center), 90.0);
/// assert_eq!(angle_from_pointer(Point::new(100.0, 160.0), center), 180.0);
/// assert_eq!(angle_from_pointer(Point::new(40.0, 100.0), center), 270.0);
/// ```
pub fn angle_from_pointer(pointer: Point, center: Point) -> f64 {
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0)
}

/// Quantize an angle onto the selector's value grid.
///
/// Rounds half away from zero to the nearest multiple of `step_size`,
/// then clamps into `[0, max_value]`. The clamp saturates rather than
/// wraps: an angle just under 360 degrees yields `max_value`, and an
/// angle just over 0 yields 0.
///
/// # Example
///
/// ```rust
/// use intake::selector::quantize;
///
/// assert_eq!(quantize(0.0, 60, 5), 0);
/// assert_eq!(quantize(90.0, 60, 5), 15);
/// assert_eq!(quantize(270.0, 60, 5), 45);
/// assert_eq!(quantize(359.9, 60, 5), 60);
/// assert_eq!(quantize(0.05, 60, 5), 0);
/// ```
pub fn quantize(angle_degrees: f64, max_value: u32, step_size: u32) -> u32 {
    let steps = (angle_degrees / 360.0 * max_value as f64 / step_size as f64).round();
    let value = steps as i64 * step_size as i64;
    value.clamp(0, max_value as i64) as u32
}

/// Angle at which a value sits on the dial.
///
/// Inverse of [`quantize`]: `(value / max_value) * 360`. Used to
/// re-synchronize the needle after an external value change so the
/// displayed angle and the stored value never diverge. `value ==
/// max_value` maps to 360.0, a full revolution.
pub fn angle_from_value(value: u32, max_value: u32) -> f64 {
    value as f64 / max_value as f64 * 360.0
}

/// Transient dial state for the step currently on screen.
///
/// Created on step entry (optionally pre-seeded from a persisted
/// answer), mutated by drag events, and read out on "continue". The
/// displayed angle always reflects the quantized value, never the raw
/// pointer: the needle snaps to valid positions.
///
/// # Example
///
/// ```rust
/// use intake::selector::{DialSelector, Point};
///
/// let mut dial = DialSelector::new(60, 5).unwrap();
/// let center = Point::new(100.0, 100.0);
///
/// // Drag to 3 o'clock: 90 degrees, a quarter of the dial.
/// let value = dial.drag_to(Point::new(160.0, 100.0), center);
/// assert_eq!(value, 15);
/// assert_eq!(dial.angle(), 90.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialSelector {
    max_value: u32,
    step_size: u32,
    raw_angle: f64,
    value: u32,
}

impl DialSelector {
    /// Create a dial at value 0.
    ///
    /// `step_size` must be a non-zero divisor of a non-zero `max_value`
    /// so every needle position corresponds to a representable value.
    pub fn new(max_value: u32, step_size: u32) -> Result<Self, SelectorError> {
        if step_size == 0 || max_value == 0 || max_value % step_size != 0 {
            return Err(SelectorError::InvalidStep {
                max_value,
                step_size,
            });
        }
        Ok(Self {
            max_value,
            step_size,
            raw_angle: 0.0,
            value: 0,
        })
    }

    /// Create a dial pre-seeded with a previously persisted value.
    ///
    /// The value is snapped onto the step grid and the needle angle is
    /// derived from it, so the first rendered frame already matches the
    /// stored answer.
    pub fn with_value(max_value: u32, step_size: u32, value: u32) -> Result<Self, SelectorError> {
        let mut dial = Self::new(max_value, step_size)?;
        dial.set_value(value);
        Ok(dial)
    }

    /// Set the value programmatically.
    ///
    /// Saturates at `max_value`, snaps to the nearest step multiple, and
    /// re-derives the needle angle from the snapped value.
    pub fn set_value(&mut self, value: u32) {
        let clamped = value.min(self.max_value);
        let steps = (clamped as f64 / self.step_size as f64).round() as u32;
        self.value = (steps * self.step_size).min(self.max_value);
        self.raw_angle = angle_from_value(self.value, self.max_value);
    }

    /// Continuous drag update.
    ///
    /// Recomputes the angle from the pointer, quantizes it, and snaps
    /// the needle to the quantized value. Returns the new value.
    pub fn drag_to(&mut self, pointer: Point, center: Point) -> u32 {
        let angle = angle_from_pointer(pointer, center);
        self.value = quantize(angle, self.max_value, self.step_size);
        self.raw_angle = angle_from_value(self.value, self.max_value);
        self.value
    }

    /// The current quantized value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The displayed needle angle, always on the step grid.
    pub fn angle(&self) -> f64 {
        self.raw_angle
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn step_size(&self) -> u32 {
        self.step_size
    }
}
