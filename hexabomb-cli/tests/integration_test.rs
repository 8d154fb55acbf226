//! Integration tests for the hexabomb tools
//!
//! Tests the full stack: Tiled parsing, map conversion and output, snapshot
//! parsing, and the `hexabomb` binary itself

use hexabomb_core::{
    axial_to_cube, oddr_to_axial, oddr_to_cube, ConvertConfig, Coordinate, Error, GameState,
    HexabombMap, RowStride, TiledMap,
};
use serde_json::json;
use std::path::PathBuf;
use std::process::Command;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const SMALL_TILED: &str = r#"{
    "width": 3,
    "height": 3,
    "orientation": "hexagonal",
    "layers": [{"data": [2, 1, 0, 1, 1, 1, 0, 1, 3], "name": "cells"}]
}"#;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("hexabomb-it");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn hexabomb() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hexabomb"))
}

// ============================================================================
// COORDINATE TESTS
// ============================================================================

#[test]
fn test_axial_back_to_cube_matches_direct_cube() {
    for row in -20..=20 {
        for col in -20..=20 {
            let (q, r) = oddr_to_axial(col, row);
            assert_eq!(axial_to_cube(q, r), oddr_to_cube(col, row), "odd-r ({col}, {row})");
        }
    }
}

// ============================================================================
// CONVERSION TESTS
// ============================================================================

#[test]
fn test_two_by_one_scenario() {
    let tiled = TiledMap::from_json(
        r#"{"width": 2, "height": 1, "layers": [{"data": [2, 1]}]}"#,
    )
    .unwrap();

    // Plain row-major reading of the grid
    let config = ConvertConfig::default().with_row_stride(RowStride::Width);
    let map = HexabombMap::from_tiled(&tiled, &config).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&map.to_json(2).unwrap()).unwrap();
    assert_eq!(
        doc,
        json!({
            "cells": [{"q": 0, "r": 0}, {"q": 1, "r": 0}],
            "initial_positions": {"0": [{"q": 0, "r": 0}]}
        })
    );

    // Default reading divides the index by the height, so index 1 lands on row 1
    let map = HexabombMap::from_tiled(&tiled, &ConvertConfig::default()).unwrap();
    assert_eq!(map.cells, vec![Coordinate::new(0, 0), Coordinate::new(1, 1)]);
    assert_eq!(map.initial_positions[&0], vec![Coordinate::new(0, 0)]);
}

#[test]
fn test_conversion_is_deterministic() {
    let tiled = TiledMap::from_json(SMALL_TILED).unwrap();
    let config = ConvertConfig::default().with_indent(3);

    let first = HexabombMap::from_tiled(&tiled, &config).unwrap().to_json(3).unwrap();
    let second = HexabombMap::from_tiled(&tiled, &config).unwrap().to_json(3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dimension_mismatch_writes_nothing() {
    let input = scratch_file(
        "mismatch.json",
        r#"{"width": 3, "height": 3, "layers": [{"data": [1, 1, 1, 1, 1, 1, 1, 1]}]}"#,
    );
    let output = input.with_file_name("mismatch-out.json");
    let _ = std::fs::remove_file(&output);

    let tiled = TiledMap::load(&input).unwrap();
    assert!(matches!(
        HexabombMap::from_tiled(&tiled, &ConvertConfig::default()),
        Err(Error::DimensionMismatch { width: 3, height: 3, len: 8 })
    ));

    let status = hexabomb()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!output.exists(), "no output on failed conversion");
}

// ============================================================================
// SNAPSHOT TESTS
// ============================================================================

#[test]
fn test_snapshot_duplicates_and_missing_fields() {
    let snapshot = json!({
        "score": 0,
        "cell_count": 2,
        "cells": [
            {"q": 1, "r": 1, "color": 1},
            {"q": 1, "r": 1, "color": 2}
        ],
        "characters": [],
        "bombs": []
    });
    let state = GameState::from_value(snapshot.clone()).unwrap();
    assert_eq!(state.cells().len(), 1);
    assert_eq!(state.cell(Coordinate::new(1, 1)).unwrap().color, 2);

    let mut broken = snapshot;
    broken["cells"][1].as_object_mut().unwrap().remove("color");
    assert!(matches!(
        GameState::from_value(broken),
        Err(Error::MalformedSnapshot { .. })
    ));
}

// ============================================================================
// BINARY TESTS
// ============================================================================

#[test]
fn test_cli_convert_to_file_has_trailing_newline() {
    let input = scratch_file("small.json", SMALL_TILED);
    let output = input.with_file_name("small-out.json");

    let status = hexabomb()
        .args(["convert", "--indent", "4", "-o"])
        .arg(&output)
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());

    let written = std::fs::read_to_string(&output).unwrap();
    let tiled = TiledMap::from_json(SMALL_TILED).unwrap();
    let expected = HexabombMap::from_tiled(&tiled, &ConvertConfig::default())
        .unwrap()
        .to_json(4)
        .unwrap();
    assert_eq!(written, format!("{}\n", expected));
}

#[test]
fn test_cli_convert_to_stdout() {
    let input = scratch_file("stdout.json", SMALL_TILED);

    let out = hexabomb().arg("convert").arg(&input).output().unwrap();
    assert!(out.status.success());

    let map = HexabombMap::from_json(&String::from_utf8(out.stdout).unwrap()).unwrap();
    assert_eq!(map.cells.len(), 7);
    assert_eq!(map.player_count(), 2);
    assert_eq!(map.initial_positions[&1].len(), 1);
}

#[test]
fn test_cli_rejects_two_layers() {
    let input = scratch_file(
        "layers.json",
        r#"{"width": 1, "height": 1, "layers": [{"data": [1]}, {"data": [1]}]}"#,
    );

    let out = hexabomb().arg("convert").arg(&input).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("layer"));
}

#[test]
fn test_cli_inspect_json_summary() {
    let input = scratch_file(
        "snapshot.json",
        &json!({
            "score": {"0": 3, "1": 4},
            "cell_count": {"0": 1, "1": 0},
            "cells": [{"q": 0, "r": 0, "color": 1}, {"q": 1, "r": 0, "color": 0}],
            "characters": [
                {"id": 0, "q": 0, "r": 0, "color": 1, "alive": true, "revive_delay": -1},
                {"id": 1, "q": 1, "r": 0, "color": 2, "alive": false, "revive_delay": 3}
            ],
            "bombs": [{"q": 1, "r": 0, "color": 2, "range": 2, "delay": 1}]
        })
        .to_string(),
    );

    let out = hexabomb().args(["inspect", "--json"]).arg(&input).output().unwrap();
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["score"], 7);
    assert_eq!(summary["distinct_cells"], 2);
    assert_eq!(summary["alive_characters"], 1);
    assert_eq!(summary["bombs"], 1);
}

#[test]
fn test_cli_inspect_reports_overflowing_total_as_null() {
    let input = scratch_file(
        "overflow.json",
        &json!({
            "score": {"0": i64::MAX, "1": 1},
            "cell_count": 0,
            "cells": [],
            "characters": [],
            "bombs": []
        })
        .to_string(),
    );

    let out = hexabomb().args(["inspect", "--json"]).arg(&input).output().unwrap();
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(summary["score"].is_null());
    assert_eq!(summary["cell_count"], 0);
}

// ============================================================================
// I/O FAILURE TESTS
// ============================================================================

#[test]
fn test_cli_missing_input_fails_with_path() {
    let input = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("no-such-tiled-map.json");

    let out = hexabomb().arg("convert").arg(&input).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no-such-tiled-map.json"));
}

#[test]
fn test_cli_unwritable_output_fails_with_path() {
    let input = scratch_file("unwritable.json", SMALL_TILED);
    let output = input
        .with_file_name("no-such-dir")
        .join("unwritable-out.json");

    let out = hexabomb()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(!output.exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unwritable-out.json"));
}
