//! Console driver: a minimal host shim around the engine.
//!
//! Reads the human's moves in coordinate form from stdin and answers each
//! with the engine's reply. The real front-end lives elsewhere; this binary
//! exists to exercise the engine end to end.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use matto_book::BookSet;
use matto_core::{Board, Move, legal_moves_for};
use matto_engine::{Engine, Ledger, apply_engine_move};

/// Snapshot log persisted beside the binary, one position per line.
const LEDGER_FILE: &str = "game.txt";

/// Persist the ledger; a write failure only costs the draw-rule history.
fn persist(ledger: &Ledger) {
    if let Err(err) = ledger.save(Path::new(LEDGER_FILE)) {
        warn!(error = %err, "could not persist the game ledger");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let books = match BookSet::load_dir(Path::new("books")) {
        Ok(books) => books,
        Err(err) => {
            warn!(error = %err, "opening books disabled");
            BookSet::default()
        }
    };
    info!(books = books.len(), "matto ready");

    let mut engine = Engine::new(books);
    let mut board = Board::starting_position();
    let mut ledger = Ledger::new();
    ledger.record(&board);
    persist(&ledger);

    println!("{board}");
    println!("your move in coordinate form (e2e4, e7e8q); 'quit' exits");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            break;
        }

        let Some(mv) = Move::parse_coordinate(input) else {
            println!("unrecognized move: {input}");
            continue;
        };
        let own_piece = board
            .piece_on(mv.from)
            .is_some_and(|piece| piece.color() == board.side_to_move());
        if !own_piece || !legal_moves_for(&board, mv.from).contains(&mv.to) {
            println!("illegal move: {input}");
            continue;
        }

        apply_engine_move(&mut board, mv);
        ledger.record(&board);
        persist(&ledger);
        let status = engine.status(&board, &ledger);
        println!("{board}");
        println!("status: {status}");
        if status.is_terminal() {
            break;
        }

        let Some((chosen, status)) = engine.play(&mut board, &mut ledger) else {
            break;
        };
        persist(&ledger);
        println!("matto plays {}", chosen.chess_move());
        println!("{board}");
        println!("status: {status}");
        if status.is_terminal() {
            break;
        }
    }

    Ok(())
}
