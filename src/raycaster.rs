use std::ops::Range;

use crate::constants::{
    FIRST_PERSON_OFFSET, MAP_SCALE, MIN_WALL_DIST, RAY_MAX_DIST, RAY_STEP, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};
use crate::map::{RAY_COLOR, TileMap};
use crate::player::Player;
use crate::raster::draw_line;
use crate::surface::PixelSurface;

/// Which screen columns to cast this frame.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Full,
    /// Narrow band around the view center, for watching one ray at a time.
    SingleRay,
}

impl RenderMode {
    pub fn columns(self) -> Range<usize> {
        match self {
            RenderMode::Full => 0..VIEWPORT_WIDTH,
            RenderMode::SingleRay => {
                let half = MAP_SCALE / 20;
                VIEWPORT_WIDTH / 2 - half..VIEWPORT_WIDTH / 2 + half
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Full => RenderMode::SingleRay,
            RenderMode::SingleRay => RenderMode::Full,
        }
    }
}

/// Result of marching one ray. `tile` is 0 when nothing solid was reached.
pub struct RayHit {
    pub distance: f32,
    pub tile: u8,
}

/// Rays are spread evenly across the fov, one per screen column.
#[inline]
pub fn column_angle(player: &Player, col: usize) -> f32 {
    player.angle - player.fov / 2.0 + col as f32 * (player.fov / VIEWPORT_WIDTH as f32)
}

/// Fixed-step march from `origin` (pixel units) along `dir` until a solid
/// tile, the map's pixel-space bounds, or the distance cap stops it.
pub fn cast_ray(map: &TileMap, origin: [f32; 2], dir: [f32; 2]) -> RayHit {
    let bound_x = (map.width() * MAP_SCALE) as f32;
    let bound_y = (map.height() * MAP_SCALE) as f32;

    let mut dist = 0.0;
    let mut tile = 0;
    while dist < RAY_MAX_DIST {
        let x = origin[0] + dir[0] * dist;
        let y = origin[1] + dir[1] * dist;

        if x < 0.0 || x >= bound_x || y < 0.0 || y >= bound_y {
            tile = 0;
            break;
        }

        tile = map.tile_at(
            (x / MAP_SCALE as f32) as usize,
            (y / MAP_SCALE as f32) as usize,
        );
        if tile != 0 {
            break;
        }

        dist += RAY_STEP;
    }

    RayHit { distance: dist, tile }
}

/// Projected wall span for a fisheye-corrected distance.
#[inline]
fn wall_height(corrected_dist: f32) -> i32 {
    ((VIEWPORT_HEIGHT * MAP_SCALE) as f32 / corrected_dist.max(MIN_WALL_DIST)) as i32
}

/// Cast one ray per column in `cols`: wall slices go into the first-person
/// half, traced ray paths into the top-down half. The wall projection uses
/// the fisheye-corrected distance; the top-down trace keeps the raw marched
/// distance.
pub fn raycast(surface: &mut PixelSurface, map: &TileMap, player: &Player, cols: Range<usize>) {
    let origin = [
        player.pos[0] * MAP_SCALE as f32,
        player.pos[1] * MAP_SCALE as f32,
    ];

    for col in cols {
        let ray_angle = column_angle(player, col);
        let dir = [ray_angle.cos(), ray_angle.sin()];
        let hit = cast_ray(map, origin, dir);

        if hit.tile != 0 {
            // project onto the view plane instead of the view sphere
            let corrected = hit.distance * (player.angle - ray_angle).cos();
            let height = wall_height(corrected);

            let x = (FIRST_PERSON_OFFSET + col) as i32;
            let mid = VIEWPORT_HEIGHT as i32 / 2;
            draw_line(
                surface,
                [x, mid - height / 2],
                [x, mid + height / 2],
                TileMap::color_of(hit.tile),
            );
        }

        let p0 = [origin[0] as i32, origin[1] as i32];
        let p1 = [
            (origin[0] + dir[0] * hit.distance) as i32,
            (origin[1] + dir[1] * hit.distance) as i32,
        ];
        draw_line(surface, p0, p1, RAY_COLOR);
    }
}
