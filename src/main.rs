//! Quoridor self-play demo
//!
//! Plays one engine-vs-engine game on the terminal, logging every ply.
//! Difficulty of each side can be set via `QUORIDOR_P1` / `QUORIDOR_P2`
//! (`easy`, `medium`, `hard`).

use std::env;

use log::info;

use quoridor::{AiEngine, Difficulty, GameState, PlayerId};

fn difficulty_from_env(var: &str, default: Difficulty) -> Difficulty {
    match env::var(var).as_deref() {
        Ok("easy") => Difficulty::Easy,
        Ok("medium") => Difficulty::Medium,
        Ok("hard") => Difficulty::Hard,
        _ => default,
    }
}

fn main() {
    // Default to 'info' level logging unless RUST_LOG is already set.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let p1 = difficulty_from_env("QUORIDOR_P1", Difficulty::Hard);
    let p2 = difficulty_from_env("QUORIDOR_P2", Difficulty::Medium);
    info!("self-play: player one {p1:?} vs player two {p2:?}");

    let mut state = GameState::new(9);
    let mut engines = (AiEngine::new(), AiEngine::new());
    let mut to_move = PlayerId::One;

    for ply in 1..=200 {
        let (engine, difficulty) = match to_move {
            PlayerId::One => (&mut engines.0, p1),
            PlayerId::Two => (&mut engines.1, p2),
        };

        let Some(mv) = engine.choose_move(&state, to_move, difficulty) else {
            println!("ply {ply}: {to_move:?} cannot act, game abandoned");
            return;
        };
        state = state.apply_move(to_move, mv);

        if let Some(winner) = state.winner() {
            println!("ply {ply}: {winner:?} wins");
            return;
        }
        to_move = to_move.opponent();
    }

    println!("no winner after 200 plies");
}
