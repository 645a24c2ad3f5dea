//! Corner geometry for the logo mark
//!
//! The mark is drawn on a fixed square canvas: four corner points inset
//! from the edges by a fixed padding, connected by a thick stroked path,
//! with accent dots at two of the corners.

/// Canvas width in user units
pub const CANVAS_WIDTH: u32 = 512;

/// Canvas height in user units
pub const CANVAS_HEIGHT: u32 = 512;

/// Thickness of the stroked path
pub const STROKE_WIDTH: u32 = 110;

/// Inset of the corner points from the canvas edges
pub const PADDING: u32 = 80;

/// A 2D point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The four corner points of the inset square, labeled by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub top_left: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub top_right: Point,
}

impl Corners {
    /// Compute the corners of a square inset by `padding` from a
    /// `width` x `height` canvas
    pub fn inset(width: u32, height: u32, padding: u32) -> Self {
        Self {
            top_left: Point::new(padding, padding),
            bottom_left: Point::new(padding, height - padding),
            bottom_right: Point::new(width - padding, height - padding),
            top_right: Point::new(width - padding, padding),
        }
    }
}

/// Radius of the corner dots, derived from the stroke width
pub fn dot_radius() -> f64 {
    f64::from(STROKE_WIDTH) / 3.5
}
