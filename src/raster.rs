use crate::surface::PixelSurface;

/// Single-pixel-wide line between two buffer coordinates, clipped by
/// `set_pixel`.
///
/// Steep lines swap x/y so the walk always steps along the dominant axis;
/// the error term is kept doubled to stay in integer arithmetic.
pub fn draw_line(surface: &mut PixelSurface, mut p0: [i32; 2], mut p1: [i32; 2], color: u32) {
    let steep = (p0[0] - p1[0]).abs() < (p0[1] - p1[1]).abs();
    if steep {
        p0.swap(0, 1);
        p1.swap(0, 1);
    }
    if p0[0] > p1[0] {
        std::mem::swap(&mut p0, &mut p1);
    }

    let dx = p1[0] - p0[0];
    let dy = p1[1] - p0[1];
    let derror2 = dy.abs() * 2;
    let mut error2 = 0;
    let mut y = p0[1];
    let y_step = if p1[1] > p0[1] { 1 } else { -1 };

    for x in p0[0]..=p1[0] {
        if steep {
            surface.set_pixel(y, x, color);
        } else {
            surface.set_pixel(x, y, color);
        }

        error2 += derror2;
        if error2 > dx {
            y += y_step;
            error2 -= dx * 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::BACKGROUND;
    use std::collections::HashSet;

    const WHITE: u32 = 0x00ffffff;

    fn painted(surface: &PixelSurface) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if surface.pixel(x, y) != BACKGROUND {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// Endpoints plotted, one pixel per dominant-axis step, and the whole
    /// line reachable from p0 over 8-connected neighbors.
    fn assert_connected_path(p0: [i32; 2], p1: [i32; 2]) {
        let mut surface = PixelSurface::new(32, 32);
        draw_line(&mut surface, p0, p1, WHITE);
        let pixels = painted(&surface);

        assert!(pixels.contains(&(p0[0], p0[1])), "p0 missing for {p0:?}->{p1:?}");
        assert!(pixels.contains(&(p1[0], p1[1])), "p1 missing for {p0:?}->{p1:?}");

        let expected = (p1[0] - p0[0]).abs().max((p1[1] - p0[1]).abs()) + 1;
        assert_eq!(pixels.len() as i32, expected, "gap or overdraw for {p0:?}->{p1:?}");

        let set: HashSet<_> = pixels.iter().copied().collect();
        let mut seen = HashSet::new();
        let mut stack = vec![(p0[0], p0[1])];
        while let Some((x, y)) = stack.pop() {
            if !seen.insert((x, y)) {
                continue;
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let n = (x + dx, y + dy);
                    if set.contains(&n) {
                        stack.push(n);
                    }
                }
            }
        }
        assert_eq!(seen.len(), set.len(), "disconnected line for {p0:?}->{p1:?}");
    }

    #[test]
    fn every_octant_is_gap_free() {
        let center = [16, 16];
        let ends = [
            [26, 16],
            [26, 20],
            [26, 26],
            [20, 26],
            [16, 26],
            [12, 26],
            [6, 26],
            [6, 20],
            [6, 16],
            [6, 12],
            [6, 6],
            [12, 6],
            [16, 6],
            [20, 6],
            [26, 6],
            [26, 12],
        ];
        for end in ends {
            assert_connected_path(center, end);
            assert_connected_path(end, center);
        }
    }

    #[test]
    fn degenerate_line_plots_one_point() {
        let mut surface = PixelSurface::new(32, 32);
        draw_line(&mut surface, [7, 9], [7, 9], WHITE);
        assert_eq!(painted(&surface), vec![(7, 9)]);
    }

    #[test]
    fn offscreen_portion_is_clipped() {
        let mut surface = PixelSurface::new(16, 16);
        draw_line(&mut surface, [-10, -10], [5, 5], WHITE);
        let pixels = painted(&surface);
        assert!(pixels.contains(&(5, 5)));
        assert!(pixels.iter().all(|&(x, y)| x >= 0 && y >= 0));
    }
}
