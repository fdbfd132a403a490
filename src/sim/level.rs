//! ASCII level grid
//!
//! A level is a fixed grid of tile characters. Every 'W' becomes a static
//! wall, registered into the collision index during construction; walls
//! never move and are never removed.

use super::collision::CollisionIndex;
use super::rect::Aabb;
use crate::consts::{TILE_H, TILE_W};

/// The 16x20 sample arena: a solid border with one interior pillar
pub const SAMPLE_LEVEL: [&str; 16] = [
    "WWWWWWWWWWWWWWWWWWWW",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W         W        W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "W                  W",
    "WWWWWWWWWWWWWWWWWWWW",
];

/// A static wall tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub rect: Aabb,
}

/// A parsed level: tile size plus the derived wall set
#[derive(Debug)]
pub struct Level {
    pub tile_w: f32,
    pub tile_h: f32,
    pub walls: Vec<Wall>,
}

impl Level {
    /// Parse `rows` and register every wall into `index`.
    ///
    /// A 'W' at row `i`, column `j` produces a wall at
    /// `(i * tile_w, j * tile_h)` of size `(tile_w, tile_h)`. Any other
    /// character is empty space; rows of differing length are tolerated.
    pub fn load(rows: &[&str], tile_w: f32, tile_h: f32, index: &mut CollisionIndex) -> Self {
        let mut walls = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            for (j, tile) in row.chars().enumerate() {
                if tile == 'W' {
                    let rect = Aabb::new(i as f32 * tile_w, j as f32 * tile_h, tile_w, tile_h);
                    index.register(rect);
                    walls.push(Wall { rect });
                }
            }
        }
        log::debug!("Level loaded with {} walls", walls.len());
        Self {
            tile_w,
            tile_h,
            walls,
        }
    }

    /// Load the built-in sample arena at the default tile size
    pub fn sample(index: &mut CollisionIndex) -> Self {
        Self::load(&SAMPLE_LEVEL, TILE_W, TILE_H, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_grid_wall_count_matches_grid() {
        let expected: usize = SAMPLE_LEVEL
            .iter()
            .map(|row| row.chars().filter(|c| *c == 'W').count())
            .sum();

        let mut index = CollisionIndex::new();
        let level = Level::sample(&mut index);
        assert_eq!(level.walls.len(), expected);
        assert_eq!(index.len(), expected);
    }

    #[test]
    fn test_walls_appear_exactly_at_marked_cells() {
        let mut index = CollisionIndex::new();
        let level = Level::sample(&mut index);

        for (i, row) in SAMPLE_LEVEL.iter().enumerate() {
            for (j, tile) in row.chars().enumerate() {
                let pos = (i as f32 * TILE_W, j as f32 * TILE_H);
                let found = level
                    .walls
                    .iter()
                    .any(|w| (w.rect.x, w.rect.y) == pos);
                assert_eq!(found, tile == 'W', "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_row_index_maps_to_x() {
        // Single mark in row 0, column 2 lands at x = 0, y = 2 * tile_h
        let mut index = CollisionIndex::new();
        let level = Level::load(&["  W"], 64.0, 64.0, &mut index);
        assert_eq!(level.walls.len(), 1);
        assert_eq!(level.walls[0].rect, Aabb::new(0.0, 128.0, 64.0, 64.0));
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let mut index = CollisionIndex::new();
        let level = Level::load(&["W", "WWW", ""], 64.0, 64.0, &mut index);
        assert_eq!(level.walls.len(), 4);
    }

    #[test]
    fn test_non_wall_characters_produce_no_walls() {
        let mut index = CollisionIndex::new();
        let level = Level::load(&["a.xW#w"], 64.0, 64.0, &mut index);
        assert_eq!(level.walls.len(), 1);
        assert_eq!(level.walls[0].rect.y, 3.0 * 64.0);
    }
}
