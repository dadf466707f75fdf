//! Snapshot I/O for pixel buffers
//!
//! The core treats pixels as opaque `u32`s; only this module fixes a
//! byte order for files, big-endian RGBA (`0xRRGGBBAA`).

use std::path::Path;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::Color;

/// Write a view's visible pixels to `filename` as an RGBA PNG
pub fn write_file<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<(), image::ImageError> {
    let vis = buf.visible();
    let (w, h) = (vis.width(), vis.height());
    let mut bytes = Vec::with_capacity(w as usize * h as usize * 4);
    for y in vis.y1..vis.y2 {
        for x in vis.x1..vis.x2 {
            if let Some(c) = buf.get((x, y)) {
                bytes.extend_from_slice(&c.to_be_bytes());
            }
        }
    }
    debug!("writing {}x{} snapshot to {:?}", w, h, filename.as_ref());
    image::save_buffer(filename, &bytes, w as u32, h as u32, image::ExtendedColorType::Rgba8)
}

/// Read an RGBA PNG back into packed pixels and its dimensions
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<Color>, i32, i32), image::ImageError> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let pixels = img
        .into_raw()
        .chunks_exact(4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Ok((pixels, w as i32, h as i32))
}

/// Compare two image files pixel by pixel
///
/// Mismatches are reported on stdout; returns whether the files hold
/// identical pixels.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let (a, wa, ha) = read_file(f1)?;
    let (b, wb, hb) = read_file(f2)?;
    if (wa, ha) != (wb, hb) {
        println!("image sizes differ: {}x{} vs {}x{}", wa, ha, wb, hb);
        return Ok(false);
    }
    let mut equal = true;
    for (i, (pa, pb)) in a.iter().zip(b.iter()).enumerate() {
        if pa != pb {
            println!(
                "pixel ({},{}) differs: {:08x} vs {:08x}",
                i as i32 % wa,
                i as i32 / wa,
                pa,
                pb
            );
            equal = false;
        }
    }
    Ok(equal)
}
