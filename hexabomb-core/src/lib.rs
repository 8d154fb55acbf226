//! hexabomb core - game state model and map conversion
//!
//! This crate provides the data side of hexabomb bots and tools:
//! - Hex coordinate systems (odd-r offset, cube, axial) and conversions
//! - Game state model rebuilt from each turn's server snapshot
//! - Tiled map to hexabomb map conversion, with starting positions
//! - Turn loop driver over an abstract game server client

pub mod client;
pub mod config;
pub mod coords;
pub mod error;
pub mod game;
pub mod map;
pub mod snapshot;
pub mod tiled;

// Re-exports for convenient access
pub use client::{run_session, GameClient, GameStarts, Role, Turn};
pub use config::{ConvertConfig, RowStride};
pub use coords::{
    axial_to_cube, axial_to_oddr, cube_to_axial, cube_to_oddr, oddr_to_axial, oddr_to_cube,
    Coordinate, Cube, Offset, DIRECTIONS,
};
pub use error::{Error, Result};
pub use game::{Bomb, Cell, Character, GameState, Tally};
pub use map::HexabombMap;
pub use snapshot::SnapshotRecord;
pub use tiled::{TiledLayer, TiledMap};
