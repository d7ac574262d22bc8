use std::sync::Arc;

use clap::{Parser, Subcommand};
use dots_and_boxes::{
    init_logging, play_game, print_game_view, run_cli, server, CliPlayer, GameService, GameSession,
    GameView, Player, RandomPlayer, SessionConfig, Stub, TcpTransport,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Dots and Boxes game server and client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Host games for networked clients.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, default_value_t = dots_and_boxes::DEFAULT_ROWS, help = "Rows of boxes for new games")]
        rows: usize,
        #[arg(long, default_value_t = dots_and_boxes::DEFAULT_COLS, help = "Columns of boxes for new games")]
        cols: usize,
        #[arg(long, default_value_t = server::DEFAULT_IDLE_TIMEOUT.as_secs(), help = "Drop clients silent for this many seconds")]
        idle_timeout: u64,
    },
    /// Join a game on a server. Both players may share one client or use two.
    Play {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, default_value = "default", help = "Game identifier shared by both players")]
        game: String,
    },
    /// Play on this machine without a server.
    Local {
        #[arg(long, default_value_t = dots_and_boxes::DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = dots_and_boxes::DEFAULT_COLS)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Play as player 1 against a random mover")]
        human: bool,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            rows,
            cols,
            idle_timeout,
        } => {
            let config = SessionConfig::new(rows, cols)?;
            let service = Arc::new(GameService::new(config));
            let listener = TcpListener::bind(&bind).await?;
            println!("Serving {}x{} games on {}", rows, cols, listener.local_addr()?);
            server::serve(listener, service, Duration::from_secs(idle_timeout)).await?;
        }
        Commands::Play { connect, game } => {
            println!("Connecting to {}...", connect);
            let transport = TcpTransport::connect(&connect).await?;
            let stub = Stub::new(transport);
            println!("Connected. Playing game {:?}.", game);
            run_cli(&stub, &game).await?;
        }
        Commands::Local {
            rows,
            cols,
            seed,
            human,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut session = GameSession::with_dimensions(rows, cols)?;
            let first: Box<dyn Player> = if human {
                Box::new(CliPlayer::new())
            } else {
                Box::new(RandomPlayer::new())
            };
            let mut players = [first, Box::new(RandomPlayer::new()) as Box<dyn Player>];
            let trajectory = play_game(&mut session, &mut players, &mut rng)?;
            println!("Game ended after {} moves.", trajectory.steps.len());
            print_game_view(&GameView::from(&session));
        }
    }
    Ok(())
}
