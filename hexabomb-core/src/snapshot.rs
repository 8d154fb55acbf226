//! Wire-format records of a hexabomb game state snapshot
//!
//! These mirror the JSON object delivered by the game server every turn.
//! Every field is required: serde rejects a record with a missing or
//! mistyped field instead of defaulting it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full snapshot of one turn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub score: TallyRecord,
    pub cell_count: TallyRecord,
    pub cells: Vec<CellRecord>,
    pub characters: Vec<CharacterRecord>,
    pub bombs: Vec<BombRecord>,
}

/// Score or cell count, either global or keyed by player id
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TallyRecord {
    Total(i64),
    PerPlayer(BTreeMap<String, i64>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    pub q: i32,
    pub r: i32,
    pub color: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: i32,
    pub q: i32,
    pub r: i32,
    pub color: i32,
    pub alive: bool,
    pub revive_delay: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BombRecord {
    pub q: i32,
    pub r: i32,
    pub color: i32,
    pub range: i32,
    pub delay: i32,
}
