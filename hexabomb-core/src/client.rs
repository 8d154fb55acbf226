//! Boundary with the game server client
//!
//! The transport, login handshake and turn exchange live behind
//! [`GameClient`]. This crate only turns each received snapshot into a
//! fresh [`GameState`] and hands it to a caller-provided decision function.

use crate::error::{Error, Result};
use crate::game::GameState;
use serde::{Deserialize, Serialize};

/// Role announced at login
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Visualization,
}

/// Game start notification
#[derive(Clone, Debug)]
pub struct GameStarts {
    pub initial_state: serde_json::Value,
    pub nb_turns_max: u32,
    pub player_id: u32,
}

/// One turn notification
#[derive(Clone, Debug)]
pub struct Turn {
    pub state: serde_json::Value,
    pub turn_number: u32,
}

/// Connection to the game server
pub trait GameClient {
    type Error: std::error::Error + Send + Sync + 'static;

    fn connect(&mut self) -> std::result::Result<(), Self::Error>;
    fn login(&mut self, identity: &str, role: Role) -> std::result::Result<(), Self::Error>;
    fn await_game_start(&mut self) -> std::result::Result<GameStarts, Self::Error>;
    fn await_turn(&mut self) -> std::result::Result<Turn, Self::Error>;
    fn submit_actions(
        &mut self,
        turn_number: u32,
        actions: Vec<serde_json::Value>,
    ) -> std::result::Result<(), Self::Error>;
}

/// Color of the characters controlled by `player_id`
pub fn player_color(player_id: u32) -> i32 {
    player_id as i32 + 1
}

/// Play a whole game as a player.
///
/// Every turn the snapshot is parsed into a new `GameState` and `decide`
/// is asked for the actions to submit. Any client or snapshot error ends
/// the session.
pub fn run_session<C, F>(client: &mut C, identity: &str, mut decide: F) -> Result<()>
where
    C: GameClient,
    F: FnMut(&GameState, i32) -> Vec<serde_json::Value>,
{
    client.connect().map_err(client_error)?;
    client.login(identity, Role::Player).map_err(client_error)?;
    tracing::info!("Logged in as {}", identity);

    let starts = client.await_game_start().map_err(client_error)?;
    let initial = GameState::from_value(starts.initial_state)?;
    let my_color = player_color(starts.player_id);
    tracing::info!(
        "Game started: player_id={}, color={}, turns={}, cells={}",
        starts.player_id,
        my_color,
        starts.nb_turns_max,
        initial.distinct_cell_count()
    );

    for _ in 0..starts.nb_turns_max {
        let turn = client.await_turn().map_err(client_error)?;
        let state = GameState::from_value(turn.state)?;

        let actions = decide(&state, my_color);
        tracing::debug!("Turn {}: submitting {} actions", turn.turn_number, actions.len());
        client
            .submit_actions(turn.turn_number, actions)
            .map_err(client_error)?;
    }

    Ok(())
}

fn client_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> Error {
    Error::Client(Box::new(err))
}
