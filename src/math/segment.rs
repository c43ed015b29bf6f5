use super::Point;

/// An ordered pair of points. Direction fixes output traversal order only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }
}
