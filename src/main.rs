//! Sente: a tactical Go engine.
//!
//! ## Usage
//!
//! - `sente` - Show a demo
//! - `sente gtp` - Start GTP server for GUI integration
//! - `sente demo` - Run the tactics demo

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sente::board::{parse_coord, Board, Color};
use sente::gtp::GtpEngine;
use sente::tactics::policy_reply;

/// Sente: a tactical Go engine
#[derive(Parser)]
#[command(name = "sente")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Run a simple demo of the tactical layer
    Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new();
            engine.run()?;
        }
        Some(Commands::Demo) | None => {
            run_demo()?;
        }
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Sente: tactical Go engine\n");

    let mut board = Board::new();
    for (mv, color) in [
        ("D4", Color::Black),
        ("F4", Color::Black),
        ("E3", Color::Black),
        ("E4", Color::White),
    ] {
        let pt = parse_coord(mv).with_context(|| format!("bad demo coordinate {mv}"))?;
        board.play(pt, color)?;
    }

    println!("{board}");
    println!("White just played E4 and is left with one liberty.");
    println!("Tactical reply for Black: {}", policy_reply(&board));
    Ok(())
}
