use std::time::Duration;

use anyhow::Result;
use tracing::info;

use hnefi_core::{Board, Side};
use hnefi_engine::{AiConfig, AiController, Personality};

/// Per-move thinking budget for the demo game.
const MOVE_BUDGET: Duration = Duration::from_millis(300);

/// Safety cap so a drawn-out demo game always terminates.
const MAX_PLIES: u32 = 300;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut board = Board::starting_position();
    let mut attacker_ai = AiController::new(AiConfig {
        personality: Personality::aggressive(),
        ..AiConfig::default()
    });
    let mut defender_ai = AiController::new(AiConfig {
        personality: Personality::defensive(),
        ..AiConfig::default()
    });

    info!("starting AI-vs-AI demo game");
    println!("{}", board.pretty());

    for ply in 1..=MAX_PLIES {
        if let Some(outcome) = board.outcome() {
            info!(winner = %outcome.winner, condition = ?outcome.condition, ply, "game over");
            println!("{}", board.pretty());
            return Ok(());
        }

        let ai = match board.side_to_move() {
            Side::Attackers => &mut attacker_ai,
            Side::Defenders => &mut defender_ai,
        };
        let Some(mv) = ai.best_move(&board, MOVE_BUDGET) else {
            info!(side = %board.side_to_move(), ply, "no legal moves, stopping");
            return Ok(());
        };

        let (next, record) = board.try_move(mv.source(), mv.dest())?;
        info!(
            ply,
            side = %record.piece.owner(),
            %mv,
            captures = record.captured.len(),
            "played"
        );
        board = next;
    }

    info!(plies = MAX_PLIES, "demo cap reached without a result");
    println!("{}", board.pretty());
    Ok(())
}
