//! Inspect command - parse a snapshot file and summarize the game state

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexabomb_core::{GameState, Tally};

#[derive(Args)]
pub struct InspectArgs {
    /// Game state snapshot JSON file
    #[arg(value_name = "SNAPSHOT")]
    pub input: PathBuf,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run inspect command
pub fn run(args: InspectArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read snapshot: {}", args.input.display()))?;
    let state = GameState::from_json(&text)
        .with_context(|| format!("Failed to parse snapshot: {}", args.input.display()))?;

    if args.json {
        print_json_summary(&state)
    } else {
        print_text_summary(&state);
        Ok(())
    }
}

fn alive_count(state: &GameState) -> usize {
    state.characters().iter().filter(|c| c.is_alive).count()
}

fn format_tally(tally: &Tally) -> String {
    match tally {
        Tally::Total(value) => value.to_string(),
        Tally::PerPlayer(map) => map
            .iter()
            .map(|(player, value)| format!("p{}={}", player, value))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn print_text_summary(state: &GameState) {
    println!("Score:      {}", format_tally(state.score()));
    println!(
        "Cells:      {} parsed (server reports {})",
        state.distinct_cell_count(),
        format_tally(state.cell_count())
    );
    println!(
        "Characters: {} ({} alive)",
        state.characters().len(),
        alive_count(state)
    );
    for c in state.characters() {
        println!(
            "  #{:<3} color={} at {} {}",
            c.id,
            c.color,
            c.coord,
            if c.is_alive {
                "alive".to_string()
            } else {
                format!("dead, revive in {}", c.revive_delay)
            }
        );
    }
    println!("Bombs:      {}", state.bombs().len());
    for b in state.bombs() {
        println!(
            "  color={} at {} range={} delay={}",
            b.color, b.coord, b.range, b.delay
        );
    }
}

fn print_json_summary(state: &GameState) -> Result<()> {
    let summary = serde_json::json!({
        "score": state.score().total(),
        "cell_count": state.cell_count().total(),
        "distinct_cells": state.distinct_cell_count(),
        "characters": state.characters().len(),
        "alive_characters": alive_count(state),
        "bombs": state.bombs().len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
