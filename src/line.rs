//! Line rasterization by parametric stepping

use crate::buffer::PixelBuffer;
use crate::math::Point;
use crate::Color;

/// Draw a line from `p1` to `p2` of color `c`
///
/// Steps the segment parametrically rather than walking an error
/// term: `floor(length) + 1` evenly spaced samples are plotted, both
/// endpoints included, each snapped to its nearest pixel. A segment
/// shorter than one pixel plots the pixel nearest `p1`, and a segment
/// with a non-finite endpoint plots nothing. Samples landing outside
/// the view's visible rect are skipped by the buffer itself, so no
/// pre-clipping happens here.
pub fn draw_line(buf: &mut PixelBuffer, p1: Point, p2: Point, c: Color) {
    let d = p2 - p1;
    let len = d.length();
    if !len.is_finite() {
        return;
    }
    let steps = len.floor();
    if steps < 1.0 {
        buf.set((p1.x.round() as i32, p1.y.round() as i32), c);
        return;
    }
    for i in 0..=steps as i64 {
        let p = p1 + d.scale(i as f64 / steps);
        buf.set((p.x.round() as i32, p.y.round() as i32), c);
    }
}
