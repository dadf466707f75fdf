//! Cameras pair a world transform with a window onto the screen

use log::debug;

use crate::buffer::PixelBuffer;
use crate::math::{Point, Vec2};
use crate::shape::Shape;
use crate::transform::Transform;
use crate::Color;

/// Where a camera puts the world origin inside its view
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum CameraMode {
    /// Origin at the view's top-left corner
    TopLeft,
    /// Origin at the view's center
    Centered,
}

impl Default for CameraMode {
    fn default() -> CameraMode {
        CameraMode::TopLeft
    }
}

/// Cached screen rectangle a camera rasterizes through
#[derive(Debug,Copy,Clone)]
struct Viewport {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// A movable window onto a screen buffer with its own world transform
///
/// Drawing goes through a cached view rectangle snapshotted from
/// `position`/`width`/`height`. Editing those fields changes nothing
/// until [`update_view`] re-snapshots; hit-testing, by contrast,
/// always follows the live fields.
///
/// [`update_view`]: Camera::update_view
#[derive(Debug,Clone)]
pub struct Camera {
    /// View origin on the screen
    pub position: (i32, i32),
    /// View width in pixels
    pub width: i32,
    /// View height in pixels
    pub height: i32,
    /// World-to-view transform
    pub transform: Transform,
    /// Origin convention inside the view
    pub mode: CameraMode,
    view: Viewport,
}

impl Camera {
    /// Create a camera with an identity transform at `position`
    pub fn new(position: (i32, i32), width: i32, height: i32) -> Self {
        let mut cam = Camera {
            position,
            width,
            height,
            transform: Transform::new(),
            mode: CameraMode::TopLeft,
            view: Viewport { x: 0, y: 0, width: 0, height: 0 },
        };
        cam.update_view();
        cam
    }
    /// Replace the transform, builder style
    pub fn with_transform(mut self, t: Transform) -> Self {
        self.transform = t;
        self
    }
    /// Replace the origin mode, builder style
    pub fn with_mode(mut self, mode: CameraMode) -> Self {
        self.mode = mode;
        self
    }

    /// Re-snapshot the view rectangle from the current fields
    ///
    /// Nothing else refreshes the cache; field edits stay invisible
    /// to [`draw`] until this runs.
    ///
    /// [`draw`]: Camera::draw
    pub fn update_view(&mut self) {
        let view = Viewport {
            x: self.position.0,
            y: self.position.1,
            width: self.width.max(0),
            height: self.height.max(0),
        };
        debug!("camera view {:?} -> {:?}", self.view, view);
        self.view = view;
    }

    /// Draw `shape` through the camera onto `screen`
    ///
    /// The shape is cloned, mapped by the camera transform (plus the
    /// half-view recentering in `Centered` mode) and rasterized into
    /// the cached view rectangle of `screen`. A view rectangle that
    /// misses the screen draws nothing.
    pub fn draw(&self, screen: &mut PixelBuffer, shape: &Shape, c: Color) {
        let mut t = self.transform;
        if self.mode == CameraMode::Centered {
            t = t * Transform::new_translate(
                f64::from(self.view.width) / 2.0,
                f64::from(self.view.height) / 2.0,
            );
        }
        let mut shape = shape.clone();
        shape.transform(&t);
        let mut view = screen.sub_buffer((self.view.x, self.view.y), self.view.width, self.view.height);
        shape.draw(&mut view, c);
    }

    /// Half-open hit test against the camera's current screen rectangle
    pub fn contains(&self, p: (i32, i32)) -> bool {
        p.0 >= self.position.0
            && p.0 < self.position.0.saturating_add(self.width)
            && p.1 >= self.position.1
            && p.1 < self.position.1.saturating_add(self.height)
    }

    /// Map a screen pixel into world space
    ///
    /// Uses the live fields, like [`contains`]; both route input by
    /// where the camera logically is now.
    ///
    /// [`contains`]: Camera::contains
    pub fn screen_to_world(&self, p: (i32, i32)) -> Point {
        let mut local = Point::new(
            f64::from(p.0) - f64::from(self.position.0),
            f64::from(p.1) - f64::from(self.position.1),
        );
        if self.mode == CameraMode::Centered {
            local = local - Vec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0);
        }
        self.transform.reverse(local)
    }

    /// Map a world point onto the screen
    pub fn world_to_screen(&self, p: Point) -> Point {
        let mut local = self.transform.apply(p);
        if self.mode == CameraMode::Centered {
            local = local + Vec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0);
        }
        local + Vec2::new(f64::from(self.position.0), f64::from(self.position.1))
    }
}
