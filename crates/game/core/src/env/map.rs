use crate::config::GameConfig;
use crate::state::Position;

/// Width and height of the tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Number of steps from `position` to the nearest map edge.
    pub fn edge_distance(&self, position: Position) -> u32 {
        let right = self.width as i32 - 1 - position.x;
        let bottom = self.height as i32 - 1 - position.y;
        position.x.min(position.y).min(right).min(bottom).max(0) as u32
    }
}

/// Canonical terrain classes for map tiles.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TileKind {
    Grass,
    Wall,
}

impl TileKind {
    pub fn is_passable(self) -> bool {
        matches!(self, TileKind::Grass)
    }
}

/// Immutable descriptor for one cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub kind: TileKind,
}

impl Tile {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Static rectangular tile grid. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    dimensions: MapDimensions,
    /// Row-major: index = y * width + x.
    tiles: Vec<Tile>,
}

impl GameMap {
    /// Builds the standard arena: walled border plus a regular grid of pillars.
    pub fn standard() -> Self {
        Self::generate(MapDimensions::new(
            GameConfig::MAP_WIDTH,
            GameConfig::MAP_HEIGHT,
        ))
    }

    pub fn generate(dimensions: MapDimensions) -> Self {
        let mut tiles = Vec::with_capacity((dimensions.width * dimensions.height) as usize);
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                let border = x == 0
                    || y == 0
                    || x == dimensions.width as i32 - 1
                    || y == dimensions.height as i32 - 1;
                let pillar = x % GameConfig::PILLAR_X == 0 && y % GameConfig::PILLAR_Y == 0;
                let kind = if border || pillar {
                    TileKind::Wall
                } else {
                    TileKind::Grass
                };
                tiles.push(Tile { x, y, kind });
            }
        }
        Self { dimensions, tiles }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        if !self.contains(position) {
            return None;
        }
        let index = position.y as usize * self.dimensions.width as usize + position.x as usize;
        self.tiles.get(index).copied()
    }

    /// True only for in-bounds grass tiles.
    pub fn is_passable(&self, position: Position) -> bool {
        self.tile(position)
            .map(|tile| tile.kind.is_passable())
            .unwrap_or(false)
    }

    /// All tiles in row-major scan order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Grass tile positions in row-major scan order.
    pub fn grass_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.tiles
            .iter()
            .filter(|tile| tile.kind.is_passable())
            .map(Tile::position)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::standard()
    }
}
