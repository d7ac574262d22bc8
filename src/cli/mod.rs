//! Command-line interface utilities and display functions
//!
//! - Text rendering for boards and game views
//! - The networked play loop used by the `play` subcommand

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use crate::player::cli::{prompt_command, Command, HELP};
use crate::protocol::domain::ApiError;
use crate::protocol::GameApi;

/// Interactive loop against any [`GameApi`]: show the game, read a
/// command, submit it. Rejected moves are reported and play continues.
pub async fn run_cli(api: &dyn GameApi, game_id: &str) -> anyhow::Result<()> {
    println!("{}", HELP);
    loop {
        let view = api.get_state(game_id).await?;
        println!();
        print_game_view(&view);
        let prompt = if view.game_over {
            "game over (reset/quit)> ".to_string()
        } else {
            format!("player {}> ", view.current_player)
        };
        let Some(cmd) = prompt_command(&prompt)? else {
            return Ok(());
        };
        match cmd {
            Command::Quit => return Ok(()),
            Command::Help => println!("{}", HELP),
            Command::Reset => api.reset(game_id).await?,
            Command::Move(mv) => match api.submit_move(game_id, mv.into()).await {
                Ok(outcome) => {
                    for (br, bc) in outcome.completed_boxes {
                        println!("Closed box {},{} - player {} goes again", br, bc, outcome.state.current_player);
                    }
                }
                Err(e) => match e.downcast_ref::<ApiError>() {
                    Some(api_err) => println!("{}: {}", api_err.message, mv),
                    None => return Err(e),
                },
            },
        }
    }
}
