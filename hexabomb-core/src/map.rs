//! Native hexabomb maps and their conversion from Tiled maps
//!
//! Tile values of the single Tiled layer are read as:
//! - `0`: no cell at this position
//! - `1`: a cell
//! - `n >= 2`: a cell that is a starting position of player `n - 2`

use crate::config::{ConvertConfig, RowStride};
use crate::coords::{oddr_to_axial, Coordinate};
use crate::error::{Error, Result};
use crate::tiled::TiledMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// A hexabomb map: existing cells and per-player starting positions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexabombMap {
    /// Cells in row-major scan order
    pub cells: Vec<Coordinate>,
    /// Player id -> starting cells, in scan order. Written with numeric key
    /// order ("2" before "10").
    pub initial_positions: BTreeMap<u32, Vec<Coordinate>>,
}

impl HexabombMap {
    /// Convert a Tiled map.
    ///
    /// Fails before producing anything if the map does not have exactly one
    /// layer of `width * height` tiles.
    pub fn from_tiled(tiled: &TiledMap, config: &ConvertConfig) -> Result<Self> {
        let data = tiled.single_layer()?;
        let stride = match config.row_stride {
            RowStride::Height => tiled.height,
            RowStride::Width => tiled.width,
        };

        let mut map = HexabombMap::default();
        for (i, &value) in data.iter().enumerate() {
            if value == 0 {
                continue;
            }

            let col = (i % tiled.width) as i32;
            let row = (i / stride) as i32;
            let (q, r) = oddr_to_axial(col, row);
            let coord = Coordinate::new(q, r);

            map.cells.push(coord);
            if value >= 2 {
                map.initial_positions
                    .entry(value - 2)
                    .or_default()
                    .push(coord);
            }
        }

        tracing::debug!(
            "Converted {}x{} Tiled map: {} cells, {} players",
            tiled.width,
            tiled.height,
            map.cells.len(),
            map.player_count()
        );

        Ok(map)
    }

    /// Number of players with at least one starting position
    pub fn player_count(&self) -> usize {
        self.initial_positions.len()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the JSON document, keys sorted, indented by `indent` spaces
    pub fn write_json<W: Write>(&self, writer: W, indent: usize) -> Result<()> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    /// JSON document without trailing newline
    pub fn to_json(&self, indent: usize) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf, indent)?;
        String::from_utf8(buf).map_err(|e| Error::Json(serde::ser::Error::custom(e)))
    }

    /// Save to JSON file, with a trailing newline
    pub fn write_to(&self, path: &Path, indent: usize) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_json(&mut writer, indent)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
