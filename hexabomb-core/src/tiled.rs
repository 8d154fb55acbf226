//! Tiled map editor documents
//!
//! Only the fields the converter reads are modeled; everything else Tiled
//! writes (tilesets, orientation, properties...) is ignored.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A Tiled map. Layer data is stored row-major in odd-r offset layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TiledMap {
    pub width: usize,
    pub height: usize,
    pub layers: Vec<TiledLayer>,
}

/// One tile layer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TiledLayer {
    /// Object layers carry no tile data
    #[serde(default)]
    pub data: Vec<u32>,
}

impl TiledMap {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Data of the single tile layer, after checking the converter
    /// preconditions: exactly one layer holding `width * height` tiles.
    pub fn single_layer(&self) -> Result<&[u32]> {
        let [layer] = self.layers.as_slice() else {
            return Err(Error::UnsupportedLayerCount(self.layers.len()));
        };

        let expected = self.width.checked_mul(self.height);
        if expected != Some(layer.data.len()) {
            return Err(Error::DimensionMismatch {
                width: self.width,
                height: self.height,
                len: layer.data.len(),
            });
        }

        Ok(&layer.data)
    }
}
