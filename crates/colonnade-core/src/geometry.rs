// ABOUTME: Geometry primitives for column layout.
// ABOUTME: Points, sizes, and rectangles in container coordinates.

/// A point in the container's coordinate space (pixels, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, dx: f32, dy: f32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Rectangle in container coordinates (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    /// Half-open containment: includes the min edges, excludes the max
    /// edges, so adjacent rectangles never both claim their shared edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    pub fn offset_by(self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn with_origin(self, origin: Point) -> Rect {
        Rect {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_offset() {
        let p = Point::new(10.0, 5.0).offset_by(-4.0, 2.0);
        assert_eq!(p, Point::new(6.0, 7.0));
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(80.0, 0.0, 320.0, 700.0);
        assert_eq!(r.min_x(), 80.0);
        assert_eq!(r.max_x(), 400.0);
        assert_eq!(r.top_right(), Point::new(400.0, 0.0));
    }

    #[test]
    fn contains_is_half_open() {
        let left = Rect::new(0.0, 0.0, 100.0, 50.0);
        let right = Rect::new(100.0, 0.0, 100.0, 50.0);
        let shared = Point::new(100.0, 10.0);
        assert!(!left.contains(shared));
        assert!(right.contains(shared));
        assert!(left.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn offset_preserves_size() {
        let r = Rect::new(5.0, 5.0, 30.0, 40.0).offset_by(10.0, -5.0);
        assert_eq!(r, Rect::new(15.0, 0.0, 30.0, 40.0));
    }
}
