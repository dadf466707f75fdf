//! Pixel storage views with nested clipping

use log::trace;

use crate::{Color, Error};

/// Axis-aligned clip rectangle, half-open on both axes
///
/// Covers `[x1,x2) x [y1,y2)`; any rectangle with `x2 <= x1` or
/// `y2 <= y1` is empty.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct ViewRect {
    /// Minimum x value
    pub x1: i32,
    /// Minimum y value
    pub y1: i32,
    /// One past the maximum x value
    pub x2: i32,
    /// One past the maximum y value
    pub y2: i32,
}

impl ViewRect {
    /// Create a new ViewRect
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        ViewRect { x1, y1, x2, y2 }
    }
    /// The empty rectangle at the origin
    pub fn empty() -> Self {
        ViewRect::new(0, 0, 0, 0)
    }
    /// Width in pixels, never negative
    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).max(0)
    }
    /// Height in pixels, never negative
    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).max(0)
    }
    /// True when the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }
    /// True when `(x, y)` lies inside
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
    /// Intersection of two rectangles, possibly empty
    pub fn intersect(&self, other: &ViewRect) -> ViewRect {
        ViewRect::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        )
    }
}

/// Row-major pixel view over caller-owned storage
///
/// A root view covers a whole pixel array; [`sub_buffer`] carves
/// nested windows out of it. Every view carries the root's row stride
/// and a `visible` rectangle in its own coordinates, the running
/// intersection of every enclosing view. Reads and writes outside
/// `visible` are skipped, so drawing code never clips for itself.
///
/// [`sub_buffer`]: PixelBuffer::sub_buffer
///
/// # Example
/// ```
/// use casement::PixelBuffer;
///
/// let mut pixels = vec![0u32; 8 * 8];
/// let mut root = PixelBuffer::new(&mut pixels, 8, 8).unwrap();
/// let mut view = root.sub_buffer((2, 2), 4, 4);
/// view.set((0, 0), 0xFF00_00FF); // lands at (2,2) of the root
/// assert_eq!(root.get((2, 2)), Some(0xFF00_00FF));
/// assert_eq!(root.get((0, 0)), Some(0));
/// ```
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    pixels: &'a mut [Color],
    width: i32,
    height: i32,
    stride: i32,
    origin: (i32, i32),
    visible: ViewRect,
}

impl<'a> PixelBuffer<'a> {
    /// Create a root view over `pixels`
    ///
    /// Fails when the slice length does not equal `width * height`.
    /// A zero-sized view over an empty slice is valid; every
    /// operation on it is a no-op.
    pub fn new(pixels: &'a mut [Color], width: i32, height: i32) -> Result<PixelBuffer<'a>, Error> {
        if width < 0 || height < 0 || pixels.len() as i64 != width as i64 * height as i64 {
            return Err(Error::InvalidBuffer { len: pixels.len(), width, height });
        }
        Ok(PixelBuffer {
            pixels,
            width,
            height,
            stride: width,
            origin: (0, 0),
            visible: ViewRect::new(0, 0, width, height),
        })
    }

    /// Carve a nested view out of this one
    ///
    /// `origin` is the child's top-left in this view's coordinates;
    /// the child addresses its own pixels from (0,0). The requested
    /// rectangle is clipped against this view's `visible`, so the
    /// child can never reach pixels its ancestors cannot. A request
    /// with nothing visible, or with a non-positive size, yields an
    /// empty view on which every operation is a safe no-op.
    ///
    /// The child mutably borrows this view for its lifetime;
    /// overlapping sibling views cannot coexist.
    pub fn sub_buffer(&mut self, origin: (i32, i32), width: i32, height: i32) -> PixelBuffer<'_> {
        let (ox, oy) = origin;
        let w = width.max(0);
        let h = height.max(0);
        let request = ViewRect::new(ox, oy, ox.saturating_add(w), oy.saturating_add(h));
        let isect = request.intersect(&self.visible);
        if isect.is_empty() {
            trace!("empty sub-buffer: {:?} at {:?} {}x{}", self.visible, origin, width, height);
            return PixelBuffer {
                pixels: &mut self.pixels[..0],
                width: w,
                height: h,
                stride: self.stride,
                origin,
                visible: ViewRect::empty(),
            };
        }
        // Re-base the child slice at the first visible pixel; any
        // interior offset lives in the child's visible rect.
        let start = (isect.y1 - self.visible.y1) as usize * self.stride as usize
            + (isect.x1 - self.visible.x1) as usize;
        PixelBuffer {
            pixels: &mut self.pixels[start..],
            width: w,
            height: h,
            stride: self.stride,
            origin,
            visible: ViewRect::new(isect.x1 - ox, isect.y1 - oy, isect.x2 - ox, isect.y2 - oy),
        }
    }

    /// Nominal width of the view in pixels
    pub fn width(&self) -> i32 {
        self.width
    }
    /// Nominal height of the view in pixels
    pub fn height(&self) -> i32 {
        self.height
    }
    /// Row pitch in pixels, shared by the whole view tree
    pub fn stride(&self) -> i32 {
        self.stride
    }
    /// This view's top-left in its parent's coordinates
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }
    /// Visible rectangle in this view's coordinates
    pub fn visible(&self) -> ViewRect {
        self.visible
    }
    /// True when no pixel of this view is visible
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Index of `p` into this view's slice, `None` outside `visible`
    ///
    /// Every read and write goes through this check; there is no
    /// other path to the pixels.
    pub fn pixel_idx(&self, p: (i32, i32)) -> Option<usize> {
        if !self.visible.contains(p.0, p.1) {
            return None;
        }
        Some((p.1 - self.visible.y1) as usize * self.stride as usize
            + (p.0 - self.visible.x1) as usize)
    }

    /// Pixel value at `p`, `None` outside `visible`
    pub fn get(&self, p: (i32, i32)) -> Option<Color> {
        self.pixel_idx(p).map(|i| self.pixels[i])
    }

    /// Set the pixel at `p` to `c`, skipping silently outside `visible`
    pub fn set(&mut self, p: (i32, i32), c: Color) {
        if let Some(i) = self.pixel_idx(p) {
            self.pixels[i] = c;
        }
    }

    /// Fill the half-open run `[x1,x2)` on scanline `y`, clipped
    pub fn fill_span(&mut self, y: i32, x1: i32, x2: i32, c: Color) {
        let x1 = x1.max(self.visible.x1);
        let x2 = x2.min(self.visible.x2);
        if x2 <= x1 {
            return;
        }
        let start = match self.pixel_idx((x1, y)) {
            Some(i) => i,
            None => return,
        };
        let len = (x2 - x1) as usize;
        self.pixels[start..start + len].fill(c);
    }

    /// Fill every visible pixel with `c`
    pub fn clear(&mut self, c: Color) {
        for y in self.visible.y1..self.visible.y2 {
            self.fill_span(y, self.visible.x1, self.visible.x2, c);
        }
    }

    /// Copy the source view's visible pixels into this view
    ///
    /// The source's visible top-left lands at `at`; pixels falling
    /// outside this view's `visible` are skipped.
    pub fn blit(&mut self, src: &PixelBuffer, at: (i32, i32)) {
        let sv = src.visible;
        for y in sv.y1..sv.y2 {
            for x in sv.x1..sv.x2 {
                if let Some(c) = src.get((x, y)) {
                    self.set((at.0 + x - sv.x1, at.1 + y - sv.y1), c);
                }
            }
        }
    }
}
