//! Geometrical helper structs.

pub use tiny_skia_path::{Point, Transform};

/// A circle, described by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    /// The x coordinate of the center.
    pub x: f32,
    /// The y coordinate of the center.
    pub y: f32,
    /// The radius of the circle.
    pub radius: f32,
}

impl Circle {
    /// Create a new circle.
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }
}

/// An immutable, finite `f32` in a 0..=1 range.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct NormalizedF32(tiny_skia_path::NormalizedF32);

impl NormalizedF32 {
    /// A `NormalizedF32` value initialized with zero.
    pub const ZERO: Self = NormalizedF32(tiny_skia_path::NormalizedF32::ZERO);
    /// A `NormalizedF32` value initialized with one.
    pub const ONE: Self = NormalizedF32(tiny_skia_path::NormalizedF32::ONE);

    /// Create a new normalized f32.
    ///
    /// Returns `None` if the number is not normalized.
    pub fn new(num: f32) -> Option<Self> {
        tiny_skia_path::NormalizedF32::new(num).map(Self)
    }

    /// Returns the value as a primitive type.
    #[inline]
    pub const fn get(self) -> f32 {
        self.0.get()
    }
}
