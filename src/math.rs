//! Points and displacement vectors in continuous space

use std::ops::{Add, Mul, Neg, Sub};

/// Location in continuous 2D space
///
/// Pixel centers sit at integer coordinates; y grows downward.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    /// Scale both coordinates by `s`
    pub fn scale(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
    /// Displace the point by `v`
    pub fn translate(self, v: Vec2) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
    /// Euclidean distance to `other`
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }
}

impl Sub for Point {
    type Output = Vec2;
    /// Difference of two locations is a displacement
    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Add<Vec2> for Point {
    type Output = Point;
    fn add(self, rhs: Vec2) -> Point {
        self.translate(rhs)
    }
}
impl Sub<Vec2> for Point {
    type Output = Point;
    fn sub(self, rhs: Vec2) -> Point {
        self.translate(-rhs)
    }
}

/// Displacement in continuous 2D space
///
/// Distinct from [`Point`] so two locations cannot be added by
/// accident; subtracting points yields a `Vec2`.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new Vec2
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }
    /// Dot product
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }
    /// z component of the cross product
    pub fn cross(self, rhs: Vec2) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }
    /// Euclidean length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
    /// Scale both components by `s`
    pub fn scale(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
    /// Unit vector in the same direction, `ZERO` for the zero vector
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            self.scale(1.0 / len)
        }
    }
    /// Angle from the +x axis in radians, measured toward +y
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f64) -> Vec2 {
        self.scale(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_algebra() {
        let p = Point::new(3.0, 4.0);
        let q = Point::new(1.0, 1.0);
        let d = p - q;
        assert_eq!(d, Vec2::new(2.0, 3.0));
        assert_eq!(q + d, p);
        assert_eq!(p - d, q);
        assert_eq!(p.translate(Vec2::new(-3.0, -4.0)), Point::new(0.0, 0.0));
        assert_eq!(p.scale(2.0), Point::new(6.0, 8.0));
    }

    #[test]
    fn distances_and_lengths() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(p.distance_to(q), 5.0);
        assert_eq!((q - p).length(), 5.0);
        assert_eq!(Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn dot_and_cross() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(0.0, 3.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.dot(a), 4.0);
        assert_eq!(a.cross(b), 6.0);
        assert_eq!(b.cross(a), -6.0);
    }

    #[test]
    fn normalize_handles_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        let v = Vec2::new(3.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn angle_quadrants() {
        use std::f64::consts::FRAC_PI_2;
        assert_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
        assert_eq!(Vec2::new(0.0, 1.0).angle(), FRAC_PI_2);
        assert!((Vec2::new(-1.0, 0.0).angle().abs() - 2.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn scalar_ops() {
        let v = Vec2::new(1.5, -2.0);
        assert_eq!(v * 2.0, Vec2::new(3.0, -4.0));
        assert_eq!(-v, Vec2::new(-1.5, 2.0));
        assert_eq!(v + v, v.scale(2.0));
        assert_eq!(v - v, Vec2::ZERO);
    }
}
