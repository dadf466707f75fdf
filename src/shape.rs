//! Filled rectangles, filled circles, and the shape enum

use crate::buffer::PixelBuffer;
use crate::math::Point;
use crate::polygon::Polygon;
use crate::transform::Transform;
use crate::Color;

/// Axis-aligned rectangle between two unordered corners
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle {
    pub p1: Point,
    pub p2: Point,
}

impl Rectangle {
    /// Create a new Rectangle; the corners may be in any order
    pub fn new(p1: Point, p2: Point) -> Self {
        Rectangle { p1, p2 }
    }
    /// Corner-ordered bounds as (left, top, right, bottom)
    fn ordered(&self) -> (f64, f64, f64, f64) {
        (
            self.p1.x.min(self.p2.x),
            self.p1.y.min(self.p2.y),
            self.p1.x.max(self.p2.x),
            self.p1.y.max(self.p2.y),
        )
    }
    /// Fill the half-open pixel area `[left,right) x [top,bottom)`
    ///
    /// Bounds are truncated to integers and clipped to the view
    /// before filling span by span.
    pub fn draw(&self, buf: &mut PixelBuffer, c: Color) {
        let (l, t, r, b) = self.ordered();
        let x1 = (l as i32).max(0);
        let x2 = (r as i32).min(buf.width());
        let y1 = (t as i32).max(0);
        let y2 = (b as i32).min(buf.height());
        for y in y1..y2 {
            buf.fill_span(y, x1, x2, c);
        }
    }
    /// Half-open point test against the ordered corners
    pub fn contains(&self, p: Point) -> bool {
        let (l, t, r, b) = self.ordered();
        p.x >= l && p.x < r && p.y >= t && p.y < b
    }
    /// Map both corners through `t`
    pub fn transform(&mut self, t: &Transform) {
        self.p1 = t.apply(self.p1);
        self.p2 = t.apply(self.p2);
    }
}

/// Circle at a continuous center
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Create a new Circle
    pub fn new(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }
    /// Fill the circle scanline by scanline
    ///
    /// Each scanline's span reaches the half-chord
    /// `sqrt(r^2 - (c.y - y)^2)` either side of the center, half-open
    /// on the right. Scanlines whose chord misses the circle are
    /// skipped, and a circle whose bounding box misses the view draws
    /// nothing at all.
    pub fn draw(&self, buf: &mut PixelBuffer, c: Color) {
        let r = self.radius;
        if r <= 0.0 {
            return;
        }
        if self.center.x + r < 0.0
            || self.center.y + r < 0.0
            || self.center.x - r >= buf.width() as f64
            || self.center.y - r >= buf.height() as f64
        {
            return;
        }
        let y1 = ((self.center.y - r) as i32).max(0);
        let y2 = ((self.center.y + r) as i32).saturating_add(1).min(buf.height());
        for y in y1..y2 {
            let dy = self.center.y - y as f64;
            let h2 = r * r - dy * dy;
            if h2 < 0.0 {
                continue;
            }
            let dx = h2.sqrt();
            buf.fill_span(y, (self.center.x - dx) as i32, (self.center.x + dx) as i32, c);
        }
    }
    /// Closed-disc point test
    pub fn contains(&self, p: Point) -> bool {
        p.distance_to(self.center) <= self.radius
    }
    /// Map the center through `t` and scale the radius
    pub fn transform(&mut self, t: &Transform) {
        self.center = t.apply(self.center);
        self.radius *= t.scale;
    }
}

/// Closed set of drawable shapes
///
/// A plain enum with exhaustive dispatch; adding a variant makes
/// every match below a compile error until it is handled.
#[derive(Debug,Clone)]
pub enum Shape {
    Polygon(Polygon),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    /// Rasterize the shape into `buf`
    pub fn draw(&self, buf: &mut PixelBuffer, c: Color) {
        match self {
            Shape::Polygon(poly) => poly.draw(buf, c),
            Shape::Rectangle(rect) => rect.draw(buf, c),
            Shape::Circle(circle) => circle.draw(buf, c),
        }
    }
    /// Transform the shape in place
    pub fn transform(&mut self, t: &Transform) {
        match self {
            Shape::Polygon(poly) => poly.transform(t),
            Shape::Rectangle(rect) => rect.transform(t),
            Shape::Circle(circle) => circle.transform(t),
        }
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Shape {
        Shape::Polygon(p)
    }
}
impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Shape {
        Shape::Rectangle(r)
    }
}
impl From<Circle> for Shape {
    fn from(c: Circle) -> Shape {
        Shape::Circle(c)
    }
}
