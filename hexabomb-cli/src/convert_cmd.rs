//! Convert command - turn a Tiled map into a hexabomb map
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_tiled(), convert(), emit()

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use hexabomb_core::{ConvertConfig, HexabombMap, RowStride, TiledMap};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct ConvertArgs {
    /// Tiled JSON map to convert
    #[arg(value_name = "TILED_MAP")]
    pub input: PathBuf,

    /// Write the map to a file instead of stdout
    #[arg(short, long, value_name = "HEXABOMB_MAP")]
    pub output: Option<PathBuf>,

    /// Output indentation width
    #[arg(short, long, default_value = "2")]
    pub indent: usize,

    /// Grid dimension the tile index is divided by to get its row
    #[arg(long, value_enum, default_value = "height")]
    pub row_stride: StrideArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrideArg {
    Height,
    Width,
}

impl From<StrideArg> for RowStride {
    fn from(arg: StrideArg) -> Self {
        match arg {
            StrideArg::Height => RowStride::Height,
            StrideArg::Width => RowStride::Width,
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run convert command
///
/// 1. Load the Tiled map
/// 2. Convert it (fails before any output on bad input)
/// 3. Write the result to the output file or stdout
pub fn run(args: ConvertArgs) -> Result<()> {
    let config = ConvertConfig::default()
        .with_indent(args.indent)
        .with_row_stride(args.row_stride.into());

    let tiled = load_tiled(&args)?;
    let map = convert(&tiled, &args, &config)?;

    emit(&map, &args, &config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_tiled(args: &ConvertArgs) -> Result<TiledMap> {
    let tiled = TiledMap::load(&args.input)
        .with_context(|| format!("Failed to load Tiled map: {}", args.input.display()))?;

    tracing::info!(
        "Loaded {} ({}x{}, {} layers)",
        args.input.display(),
        tiled.width,
        tiled.height,
        tiled.layers.len()
    );

    Ok(tiled)
}

fn convert(tiled: &TiledMap, args: &ConvertArgs, config: &ConvertConfig) -> Result<HexabombMap> {
    HexabombMap::from_tiled(tiled, config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))
}

fn emit(map: &HexabombMap, args: &ConvertArgs, config: &ConvertConfig) -> Result<()> {
    match &args.output {
        Some(path) => {
            map.write_to(path, config.indent)
                .with_context(|| format!("Failed to write hexabomb map: {}", path.display()))?;
            tracing::info!(
                "Wrote {} cells, {} players to {}",
                map.cells.len(),
                map.player_count(),
                path.display()
            );
        }
        None => {
            let json = map.to_json(config.indent).context("Failed to serialize hexabomb map")?;
            println!("{}", json);
        }
    }
    Ok(())
}
