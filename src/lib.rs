//! Windowed 2D software rasterization
//!
//! Pixels live in caller-owned flat memory wrapped by a [`PixelBuffer`]
//! view; views nest and every operation clips to the running
//! intersection of its ancestors. Shapes rasterize themselves into a
//! view, and a [`Camera`] maps world space through a [`Transform`]
//! into its own sub-view of a screen.
//!
//! How a frame comes together:
//!
//! ```text
//!    storage -> PixelBuffer -> sub_buffer() -> Shape::draw()
//!                                  ^
//!                 Camera = Transform + view rectangle
//! ```
//!
//! Pixels are opaque packed values; nothing here interprets channel
//! layout. The [`snapshot`] module fixes a byte order for file I/O
//! only.

pub mod buffer;
pub mod camera;
pub mod line;
pub mod math;
pub mod polygon;
pub mod shape;
pub mod snapshot;
pub mod transform;

pub use buffer::*;
pub use camera::*;
pub use line::*;
pub use math::*;
pub use polygon::*;
pub use shape::*;
pub use transform::*;

use thiserror::Error as ThisError;

/// Packed pixel value, uninterpreted by the core
pub type Color = u32;

/// Errors surfaced by buffer construction and vertex storage
///
/// Drawing never errors: out-of-view writes are skipped and
/// degenerate view requests produce empty views.
#[derive(Debug,ThisError)]
pub enum Error {
    /// Storage length does not match the requested dimensions
    #[error("invalid buffer: {len} pixels for {width}x{height}")]
    InvalidBuffer { len: usize, width: i32, height: i32 },
    /// Polygon vertex storage could not grow
    #[error("polygon vertex allocation failed: {0}")]
    VertexAlloc(#[from] std::collections::TryReserveError),
}
