//! Uniform scale and translation between coordinate spaces

use std::ops::Mul;

use crate::math::{Point, Vec2};

/// Invertible map between coordinate spaces
///
/// Applies a uniform scale followed by a translation. Rotation and
/// shear are not representable, which keeps the inverse exact.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    /// Translation applied after scaling
    pub translation: Vec2,
    /// Uniform scale factor
    pub scale: f64,
}

impl Transform {
    /// Creates the identity Transform
    pub fn new() -> Self {
        Transform { translation: Vec2::ZERO, scale: 1.0 }
    }
    /// Pure translation by `(dx, dy)`
    pub fn new_translate(dx: f64, dy: f64) -> Transform {
        let mut t = Self::new();
        t.translate(dx, dy);
        t
    }
    /// Pure scale by `s`
    pub fn new_scale(s: f64) -> Transform {
        let mut t = Self::new();
        t.scale(s);
        t
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translation = self.translation + Vec2::new(dx, dy);
    }
    /// Add a scaling to the transform
    pub fn scale(&mut self, s: f64) {
        self.scale *= s;
        self.translation = self.translation.scale(s);
    }
    /// Map `p` forward: scale, then translate
    pub fn apply(&self, p: Point) -> Point {
        p.scale(self.scale).translate(self.translation)
    }
    /// Map `p` backward, exactly undoing [`apply`]
    ///
    /// A zero scale has no inverse; the result is then non-finite and
    /// falls outside any visible rect downstream.
    ///
    /// [`apply`]: Transform::apply
    pub fn reverse(&self, p: Point) -> Point {
        p.translate(-self.translation).scale(1.0 / self.scale)
    }
    /// The inverse map as a value
    pub fn inverse(&self) -> Transform {
        let s = 1.0 / self.scale;
        Transform { translation: (-self.translation).scale(s), scale: s }
    }
    /// Compose with `m`: this transform first, then `m`
    pub fn mul_transform(&self, m: &Transform) -> Transform {
        Transform {
            translation: self.translation.scale(m.scale) + m.translation,
            scale: self.scale * m.scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::new()
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        self.mul_transform(&rhs)
    }
}
