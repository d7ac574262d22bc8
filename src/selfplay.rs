#![cfg(feature = "std")]

//! Playing whole games between two [`Player`]s and recording them as
//! training trajectories.

use rand::rngs::SmallRng;

use crate::core::{GameSession, GameStatus, PlayerId, NUM_PLAYERS};
use crate::player::Player;

/// One move as seen by a learner: the state before it and the action taken.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Player number (1 or 2) who moved.
    pub player: u8,
    /// State vector before the move.
    pub state: Vec<u8>,
    /// Action index of the move within the state vector.
    pub action: usize,
    /// Boxes the move closed, as `(br, bc)`.
    pub completed: Vec<(usize, usize)>,
}

/// A finished (or abandoned) game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Trajectory {
    pub rows: usize,
    pub cols: usize,
    pub steps: Vec<Step>,
    pub final_state: Vec<u8>,
    pub scores: [u32; NUM_PLAYERS],
    /// Winning player number; `None` for a draw or an unfinished game.
    pub winner: Option<u8>,
    pub finished: bool,
}

/// Play `session` until the board is full or a player stops.
///
/// `players[0]` moves for player one, `players[1]` for player two.
pub fn play_game(
    session: &mut GameSession,
    players: &mut [Box<dyn Player>; NUM_PLAYERS],
    rng: &mut SmallRng,
) -> anyhow::Result<Trajectory> {
    let mut steps = Vec::new();
    while !session.is_game_over() {
        let mover = session.current_player();
        let player = &mut players[mover.number() as usize - 1];
        player.observe_session(session);
        let Some(mv) = player.select_move(rng, session.board()) else {
            log::info!("player {} stopped playing", mover.number());
            break;
        };
        let state = session.board().state_vector();
        let action = session
            .board()
            .move_index(mv)
            .ok_or_else(|| anyhow::anyhow!("player {} chose off-board move {}", mover.number(), mv))?;
        let completed = session.submit(mv).map_err(|e| anyhow::anyhow!(e))?;
        player.handle_move_result(mv, &completed);
        steps.push(Step {
            player: mover.number(),
            state,
            action,
            completed: completed.into_iter().map(Into::into).collect(),
        });
    }

    let winner = match session.status() {
        GameStatus::Won(p) => Some(p.number()),
        GameStatus::Draw | GameStatus::InProgress => None,
    };
    Ok(Trajectory {
        rows: session.board().rows(),
        cols: session.board().cols(),
        steps,
        final_state: session.board().state_vector(),
        scores: [session.score(PlayerId::One), session.score(PlayerId::Two)],
        winner,
        finished: session.is_game_over(),
    })
}
