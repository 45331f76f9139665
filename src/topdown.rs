use crate::constants::{MAP_SCALE, PLAYER_SIZE};
use crate::map::{PLAYER_COLOR, TileMap};
use crate::player::Player;
use crate::surface::PixelSurface;

/// Overhead view: every cell as a filled square in its tile color (empty
/// cells included), then the player marker on top.
pub fn render_top_down(surface: &mut PixelSurface, map: &TileMap, player: &Player) {
    let scale = MAP_SCALE as i32;

    for y in 0..map.height() {
        for x in 0..map.width() {
            let color = TileMap::color_of(map.tile_at(x, y));
            let x0 = (x * MAP_SCALE) as i32;
            let y0 = (y * MAP_SCALE) as i32;
            for j in 0..scale {
                for i in 0..scale {
                    surface.set_pixel(x0 + i, y0 + j, color);
                }
            }
        }
    }

    let px = (player.pos[0] * MAP_SCALE as f32) as i32;
    let py = (player.pos[1] * MAP_SCALE as f32) as i32;
    let half = PLAYER_SIZE as i32 / 2;
    for j in -half..half {
        for i in -half..half {
            surface.set_pixel(px + i, py + j, PLAYER_COLOR);
        }
    }
}
