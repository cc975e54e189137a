//! Static environment the simulation runs in.
//!
//! The map is built once per session and only ever read afterwards, so every
//! snapshot can carry it without coordinating mutation.
mod map;

pub use map::{GameMap, MapDimensions, Tile, TileKind};
