// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Floating point geometry in the host's coordinate space. The origin is the top left
//! corner, `x` grows to the right and `y` grows downwards.
//!
//! The host decides what a unit is: points on a touch screen, pixels in a GUI, or
//! terminal cells (see [`crate::GestureSample::try_from_mouse_event`]).

use std::ops::{Add, Mul, Sub};

/// A location in some coordinate space. Which space is always spelled out by the field
/// or argument holding it (eg: `location_in_view` vs `location_in_superview`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub<Point> for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// Scale both dimensions.
impl Mul<f64> for Size {
    type Output = Size;

    fn mul(self, rhs: f64) -> Self::Output {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

/// An axis aligned rectangle, described by its top left `origin` and its `size`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self { Self { origin, size } }

    #[must_use]
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    #[must_use]
    pub fn min_x(&self) -> f64 { self.origin.x }

    #[must_use]
    pub fn min_y(&self) -> f64 { self.origin.y }

    /// The trailing edge.
    #[must_use]
    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }

    #[must_use]
    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }

    #[must_use]
    pub fn width(&self) -> f64 { self.size.width }

    #[must_use]
    pub fn height(&self) -> f64 { self.size.height }

}
