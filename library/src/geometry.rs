//! Conversions between screen space, scroll offset and zoom scale.
//!
//! Screen coordinates are relative to the top-left of the visible board
//! area. Canvas coordinates are what nodes and edges store: they are
//! independent of the scroll offset and of the current zoom.

use std::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;
    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Convert a screen position into canvas space.
///
/// `x = (screen_x + scroll_left) / scale`, same for `y` with `scroll_top`.
pub fn to_canvas_space(screen: Point, scroll: Point, scale: f32) -> Point {
    (screen + scroll) / scale
}

/// Inverse of [`to_canvas_space`].
pub fn to_screen_space(canvas: Point, scroll: Point, scale: f32) -> Point {
    canvas * scale - scroll
}

/// Multiply both axes by `scale`.
///
/// Used to freeze a stored position at drag start, so that a delta measured
/// in screen pixels can be added before dividing back down by `scale`.
pub fn rescale(point: Point, scale: f32) -> Point {
    point * scale
}

/// Position during a drag: `(frozen + delta) / scale`.
pub fn dragged_position(frozen: Point, delta: Point, scale: f32) -> Point {
    (frozen + delta) / scale
}

/// Margin applied on each axis to keep a zoomed board centred, in the same
/// unit as `extent` (the viewport dimension on that axis).
pub fn centering_margin(scale: f32, percent: f32, extent: f32) -> f32 {
    (scale - 1.0) * percent / 100.0 * extent
}

/// Handle to the scrollable container that hosts the board.
///
/// Scroll offset is in screen pixels; `(0, 0)` means the top-left corner of
/// the board is at the top-left corner of the visible area.
pub trait ViewportState {
    fn scroll_offset(&self) -> Point;
    fn scroll_by(&mut self, dx: f32, dy: f32);
    fn size(&self) -> Size;
}

/// Scroll container whose offset is clamped to the scrollable range, like a
/// browser overflow container.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollViewport {
    offset: Point,
    size: Size,
    content: Size,
}

impl ScrollViewport {
    pub fn new(size: Size, content: Size) -> Self {
        Self {
            offset: Point::ZERO,
            size,
            content,
        }
    }

    /// Update the visible and content extents, re-clamping the offset.
    pub fn resize(&mut self, size: Size, content: Size) {
        self.size = size;
        self.content = content;
        self.offset = self.clamp(self.offset);
    }

    pub fn max_offset(&self) -> Point {
        Point::new(
            (self.content.width - self.size.width).max(0.0),
            (self.content.height - self.size.height).max(0.0),
        )
    }

    fn clamp(&self, offset: Point) -> Point {
        let max = self.max_offset();
        Point::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y))
    }
}

impl ViewportState for ScrollViewport {
    fn scroll_offset(&self) -> Point {
        self.offset
    }

    fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.offset = self.clamp(self.offset + Point::new(dx, dy));
    }

    fn size(&self) -> Size {
        self.size
    }
}
