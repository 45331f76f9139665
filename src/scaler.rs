use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::PixelSurface;

/// Precomputed mapping from window pixels to render-surface neighbors +
/// weights. The source side is always the fixed-size render surface.
pub struct ScaleLut {
    x0: Vec<usize>,
    x1: Vec<usize>,
    wx: Vec<u16>,
    y0: Vec<usize>,
    y1: Vec<usize>,
    wy: Vec<u16>,
}

impl ScaleLut {
    pub fn empty() -> Self {
        Self {
            x0: Vec::new(),
            x1: Vec::new(),
            wx: Vec::new(),
            y0: Vec::new(),
            y1: Vec::new(),
            wy: Vec::new(),
        }
    }
}

pub fn build_scale_lut(dst_w: usize, dst_h: usize) -> ScaleLut {
    let mut x0 = vec![0; dst_w];
    let mut x1 = vec![0; dst_w];
    let mut wx = vec![0; dst_w];
    let mut y0 = vec![0; dst_h];
    let mut y1 = vec![0; dst_h];
    let mut wy = vec![0; dst_h];

    let sx = SCREEN_WIDTH as f32 / dst_w as f32;
    let sy = SCREEN_HEIGHT as f32 / dst_h as f32;

    for x in 0..dst_w {
        let fx = x as f32 * sx;
        let x0_val = fx.floor() as isize;
        let x1_val = (x0_val + 1).clamp(0, SCREEN_WIDTH as isize - 1);
        x0[x] = x0_val as usize;
        x1[x] = x1_val as usize;
        wx[x] = ((fx - x0_val as f32) * 256.0).round() as u16; // fixed-point 8.8
    }

    for y in 0..dst_h {
        let fy = y as f32 * sy;
        let y0_val = fy.floor() as isize;
        let y1_val = (y0_val + 1).clamp(0, SCREEN_HEIGHT as isize - 1);
        y0[y] = y0_val as usize;
        y1[y] = y1_val as usize;
        wy[y] = ((fy - y0_val as f32) * 256.0).round() as u16; // fixed-point 8.8
    }

    ScaleLut {
        x0,
        x1,
        wx,
        y0,
        y1,
        wy,
    }
}

#[inline]
fn lerp_color_u32(a: u32, b: u32, w256: u32) -> u32 {
    // w256 in [0, 256]; inv = 256 - w256
    let inv = 256 - w256;
    // Interpolate R and B together (00RR00BB), with mask 0x00FF00FF,
    let rb = ((a & 0x00FF00FF) * inv + (b & 0x00FF00FF) * w256) >> 8 & 0x00FF00FF;
    // Interpolate G separately (0000GG00), with mask 0x0000FF00
    let g = ((a & 0x0000FF00) * inv + (b & 0x0000FF00) * w256) >> 8 & 0x0000FF00;
    rb | g // alpha stays 0
}

/// Parallel bilinear stretch of the render surface onto the window buffer.
/// Rows are processed in parallel for cache friendly writes.
pub fn blit_bilinear_stretch(dst: &mut [u32], dst_w: usize, src: &PixelSurface, lut: &ScaleLut) {
    let sw = src.width();
    let pixels = src.as_slice();

    dst.par_chunks_mut(dst_w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let y0 = lut.y0[y];
            let y1 = lut.y1[y];
            let wy = lut.wy[y] as u32;
            let row0 = y0 * sw;
            let row1 = y1 * sw;

            for x in 0..dst_w {
                let x0 = lut.x0[x];
                let x1 = lut.x1[x];
                let wx = lut.wx[x] as u32;

                // read 4 neighbors
                let c00 = pixels[row0 + x0];
                let c10 = pixels[row0 + x1];
                let c01 = pixels[row1 + x0];
                let c11 = pixels[row1 + x1];

                // horizontal lerp
                let top = lerp_color_u32(c00, c10, wx);
                let bot = lerp_color_u32(c01, c11, wx);
                // vertical lerp
                dst_row[x] = lerp_color_u32(top, bot, wy);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_blit_copies_the_surface() {
        let mut surface = PixelSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        surface.set_pixel(0, 0, 0x00ff0000);
        surface.set_pixel(17, 31, 0x0000ff00);
        surface.set_pixel((SCREEN_WIDTH - 1) as i32, (SCREEN_HEIGHT - 1) as i32, 0x000000ff);

        let lut = build_scale_lut(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut dst = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
        blit_bilinear_stretch(&mut dst, SCREEN_WIDTH, &surface, &lut);

        assert_eq!(&dst[..], surface.as_slice());
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = 0x00102030;
        let b = 0x00405060;
        assert_eq!(lerp_color_u32(a, b, 0), a);
        assert_eq!(lerp_color_u32(a, b, 256), b);
    }
}
