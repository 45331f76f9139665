use crate::constants::{MAP_HEIGHT, MAP_WIDTH};
use crate::surface::pack_rgb;

/// Tile code -> display color. Code 0 is open floor and is never drawn as a
/// wall.
pub const TILE_COLORS: [u32; 6] = [
    pack_rgb(0x00, 0x00, 0x00),
    pack_rgb(0xff, 0xff, 0xff),
    pack_rgb(0xff, 0x00, 0x00),
    pack_rgb(0x00, 0xff, 0x00),
    pack_rgb(0x00, 0x00, 0xff),
    pack_rgb(0xff, 0xff, 0x00),
];

pub const PLAYER_COLOR: u32 = pack_rgb(0xff, 0x00, 0xff);
pub const RAY_COLOR: u32 = pack_rgb(0xd4, 0xd4, 0xd4);

#[rustfmt::skip]
const LEVEL: [u8; MAP_WIDTH * MAP_HEIGHT] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 1,
    1, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 1,
    1, 0, 2, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 3, 3, 3, 5, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
];

/// Row-major tile grid, immutable once built.
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl TileMap {
    pub fn new(width: usize, height: usize, tiles: Vec<u8>) -> Self {
        assert_eq!(tiles.len(), width * height, "tile data does not match grid size");
        Self {
            width,
            height,
            tiles,
        }
    }

    /// The built-in level: a walled 14x8 room with a few colored pillars.
    pub fn level() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT, LEVEL.to_vec())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Callers bounds-check (x, y) before sampling.
    #[inline]
    pub fn tile_at(&self, x: usize, y: usize) -> u8 {
        self.tiles[y * self.width + x]
    }

    #[inline]
    pub fn color_of(tile: u8) -> u32 {
        TILE_COLORS[tile as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_fully_walled() {
        let map = TileMap::level();
        assert_eq!(map.width(), MAP_WIDTH);
        assert_eq!(map.height(), MAP_HEIGHT);
        for x in 0..map.width() {
            assert_ne!(map.tile_at(x, 0), 0);
            assert_ne!(map.tile_at(x, map.height() - 1), 0);
        }
        for y in 0..map.height() {
            assert_ne!(map.tile_at(0, y), 0);
            assert_ne!(map.tile_at(map.width() - 1, y), 0);
        }
    }

    #[test]
    fn every_level_tile_has_a_color() {
        let map = TileMap::level();
        for y in 0..map.height() {
            for x in 0..map.width() {
                assert!((map.tile_at(x, y) as usize) < TILE_COLORS.len());
            }
        }
    }

    #[test]
    fn mismatched_tile_data_is_rejected() {
        let result = std::panic::catch_unwind(|| TileMap::new(4, 4, vec![0; 15]));
        assert!(result.is_err());
    }
}
