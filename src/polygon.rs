//! Closed vertex rings drawn as outlines

use crate::buffer::PixelBuffer;
use crate::line::draw_line;
use crate::math::Point;
use crate::shape::Rectangle;
use crate::transform::Transform;
use crate::{Color, Error};

/// Single vertex of a polygon ring
#[derive(Debug,Copy,Clone)]
pub struct Vertex {
    /// Vertex location
    pub point: Point,
    /// Ear status for a future triangulation pass
    pub ear: bool,
}

/// Closed polygon as a ring of vertices
///
/// Vertices sit in insertion order in a `Vec`; ring neighbours are
/// reached by modular indexing instead of node links. Drawing renders
/// the outline only, closing edge included.
#[derive(Debug,Default,Clone)]
pub struct Polygon {
    verts: Vec<Vertex>,
}

impl Polygon {
    /// Create a new empty Polygon
    pub fn new() -> Self {
        Polygon { verts: vec![] }
    }
    /// Build a polygon from a slice of points
    pub fn from_points(points: &[Point]) -> Result<Self, Error> {
        let mut poly = Polygon::new();
        for &p in points {
            poly.add_vertex(p)?;
        }
        Ok(poly)
    }
    /// Append a vertex to the ring
    ///
    /// Fails only when the vertex storage cannot grow.
    pub fn add_vertex(&mut self, p: Point) -> Result<(), Error> {
        self.verts.try_reserve(1)?;
        self.verts.push(Vertex { point: p, ear: false });
        Ok(())
    }
    /// Number of vertices in the ring
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    /// True when the ring has no vertices
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    /// The vertices in ring order
    pub fn vertices(&self) -> &[Vertex] {
        &self.verts
    }
    /// Ring successor of vertex `i`
    pub fn next(&self, i: usize) -> usize {
        if self.verts.is_empty() {
            0
        } else {
            (i + 1) % self.verts.len()
        }
    }
    /// Ring predecessor of vertex `i`
    pub fn prev(&self, i: usize) -> usize {
        let n = self.verts.len();
        if n == 0 {
            0
        } else {
            (i + n - 1) % n
        }
    }
    /// Iterate the ring's edges, closing edge included
    ///
    /// A single vertex yields one degenerate self-edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..self.verts.len()).map(move |i| (self.verts[i].point, self.verts[self.next(i)].point))
    }
    /// Twice the signed area of the ring
    ///
    /// Fan sum anchored at vertex 0. With y growing downward the sign
    /// is positive for rings wound clockwise on screen. Rings with
    /// fewer than three vertices have zero area.
    pub fn area2(&self) -> f64 {
        if self.verts.len() < 3 {
            return 0.0;
        }
        let p0 = self.verts[0].point;
        let mut sum = 0.0;
        for i in 1..self.verts.len() - 1 {
            let a = self.verts[i].point - p0;
            let b = self.verts[i + 1].point - p0;
            sum += a.cross(b);
        }
        sum
    }
    /// Draw the ring's outline into `buf`
    pub fn draw(&self, buf: &mut PixelBuffer, c: Color) {
        for (a, b) in self.edges() {
            draw_line(buf, a, b, c);
        }
    }
    /// Apply `t` to every vertex
    pub fn transform(&mut self, t: &Transform) {
        for v in self.verts.iter_mut() {
            v.point = t.apply(v.point);
        }
    }
    /// Even-odd test of `p` against the ring
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
    /// Axis-aligned bounding box, `None` for an empty ring
    pub fn bounds(&self) -> Option<Rectangle> {
        let first = self.verts.first()?.point;
        let (mut min, mut max) = (first, first);
        for v in &self.verts[1..] {
            min.x = min.x.min(v.point.x);
            min.y = min.y.min(v.point.y);
            max.x = max.x.max(v.point.x);
            max.y = max.y.max(v.point.y);
        }
        Some(Rectangle::new(min, max))
    }
}
