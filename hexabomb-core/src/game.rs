//! Game state model built from one turn's snapshot
//!
//! A `GameState` is rebuilt from scratch every turn: the server snapshot is
//! authoritative and nothing carries over between turns.

use crate::coords::Coordinate;
use crate::error::{Error, Result};
use crate::snapshot::{BombRecord, CellRecord, CharacterRecord, SnapshotRecord, TallyRecord};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coordinate,
    /// Owner color, 0 when neutral
    pub color: i32,
}

/// A character on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: i32,
    pub coord: Coordinate,
    pub color: i32,
    pub is_alive: bool,
    /// Turns until the character can be revived, -1 while alive
    pub revive_delay: i32,
}

/// A bomb waiting to explode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bomb {
    /// Center of the explosion area
    pub coord: Coordinate,
    pub color: i32,
    /// Blast radius in cells
    pub range: i32,
    /// Turns until detonation
    pub delay: i32,
}

/// Score or cell count as reported by the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tally {
    Total(i64),
    PerPlayer(BTreeMap<u32, i64>),
}

impl Tally {
    /// Value for one player, if the tally is broken down per player
    pub fn get(&self, player_id: u32) -> Option<i64> {
        match self {
            Tally::Total(_) => None,
            Tally::PerPlayer(map) => map.get(&player_id).copied(),
        }
    }

    /// Global value (sum over players for per-player tallies), `None` if
    /// the sum overflows
    pub fn total(&self) -> Option<i64> {
        match self {
            Tally::Total(value) => Some(*value),
            Tally::PerPlayer(map) => map
                .values()
                .try_fold(0i64, |sum, &value| sum.checked_add(value)),
        }
    }
}

impl From<CellRecord> for Cell {
    fn from(raw: CellRecord) -> Self {
        Self {
            coord: Coordinate::new(raw.q, raw.r),
            color: raw.color,
        }
    }
}

impl From<CharacterRecord> for Character {
    fn from(raw: CharacterRecord) -> Self {
        Self {
            id: raw.id,
            coord: Coordinate::new(raw.q, raw.r),
            color: raw.color,
            is_alive: raw.alive,
            revive_delay: raw.revive_delay,
        }
    }
}

impl From<BombRecord> for Bomb {
    fn from(raw: BombRecord) -> Self {
        Self {
            coord: Coordinate::new(raw.q, raw.r),
            color: raw.color,
            range: raw.range,
            delay: raw.delay,
        }
    }
}

impl TryFrom<TallyRecord> for Tally {
    type Error = Error;

    fn try_from(raw: TallyRecord) -> Result<Self> {
        match raw {
            TallyRecord::Total(value) => Ok(Tally::Total(value)),
            TallyRecord::PerPlayer(map) => map
                .into_iter()
                .map(|(key, value)| {
                    key.parse::<u32>()
                        .map(|player_id| (player_id, value))
                        .map_err(|_| Error::malformed(format!("invalid player id key {key:?}")))
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Tally::PerPlayer),
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable snapshot of the game for one turn
#[derive(Clone, Debug)]
pub struct GameState {
    score: Tally,

    /// Server-reported, independent from the number of parsed cells
    cell_count: Tally,

    /// Board: coordinate -> cell
    cells: FxHashMap<Coordinate, Cell>,

    characters: Vec<Character>,
    bombs: Vec<Bomb>,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Build the model from a typed snapshot record.
    ///
    /// Cells are inserted in input order; a later cell at an already seen
    /// coordinate replaces the earlier one.
    pub fn from_record(record: SnapshotRecord) -> Result<Self> {
        let score = Tally::try_from(record.score)?;
        let cell_count = Tally::try_from(record.cell_count)?;

        let mut cells = FxHashMap::default();
        cells.reserve(record.cells.len());
        let mut overwritten = 0usize;
        for raw in record.cells {
            let cell = Cell::from(raw);
            if cells.insert(cell.coord, cell).is_some() {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            tracing::warn!(
                "Snapshot holds {} duplicate cell coordinates, last write kept",
                overwritten
            );
        }

        if let Tally::Total(reported) = &cell_count {
            if *reported != cells.len() as i64 {
                tracing::warn!(
                    "Snapshot cell_count={} differs from {} parsed cells",
                    reported,
                    cells.len()
                );
            }
        }

        let characters: Vec<Character> =
            record.characters.into_iter().map(Character::from).collect();
        let bombs: Vec<Bomb> = record.bombs.into_iter().map(Bomb::from).collect();

        tracing::debug!(
            "Parsed snapshot: {} cells, {} characters, {} bombs",
            cells.len(),
            characters.len(),
            bombs.len()
        );

        Ok(Self {
            score,
            cell_count,
            cells,
            characters,
            bombs,
        })
    }

    /// Build the model from an untyped JSON snapshot
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let record: SnapshotRecord = serde_json::from_value(value).map_err(Error::malformed)?;
        Self::from_record(record)
    }

    /// Build the model from snapshot JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let record: SnapshotRecord = serde_json::from_str(text).map_err(Error::malformed)?;
        Self::from_record(record)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn score(&self) -> &Tally {
        &self.score
    }

    /// Cell count as reported by the server
    pub fn cell_count(&self) -> &Tally {
        &self.cell_count
    }

    /// Number of distinct cells actually parsed
    pub fn distinct_cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    pub fn cells(&self) -> &FxHashMap<Coordinate, Cell> {
        &self.cells
    }

    /// Characters in snapshot order
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Bombs in snapshot order
    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    /// Characters of one color, in snapshot order
    pub fn characters_of(&self, color: i32) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(move |c| c.color == color)
    }

    /// First bomb placed at `coord`
    pub fn bomb_at(&self, coord: Coordinate) -> Option<&Bomb> {
        self.bombs.iter().find(|b| b.coord == coord)
    }
}
