//! Text-mode maze demo: generate a maze, print it with its longest path
//! labelled, and optionally walk it from the terminal.
//!
//! Run: cargo run --bin mazer -- --rows 12 --cols 20 --seed 7 --play

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use mazer_demos::{Session, key_direction};
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mazer", about = "Generate, solve and walk a random maze")]
struct Args {
    /// Maze height in cells.
    #[arg(long, default_value_t = 10)]
    rows: usize,
    /// Maze width in cells.
    #[arg(long, default_value_t = 10)]
    cols: usize,
    /// Seed for a reproducible maze; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Title printed above the maze, with or without labels.
    #[arg(long)]
    name: Option<String>,
    /// Print the maze without the solution labels.
    #[arg(long)]
    no_labels: bool,
    /// Also print the distance map of the solution.
    #[arg(long)]
    distances: bool,
    /// Walk the maze, reading moves from standard input.
    #[arg(long)]
    play: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating {}x{} maze with seed {seed}", args.rows, args.cols);

    let mut session = Session::new(args.rows, args.cols, StdRng::seed_from_u64(seed))?;
    if let Some(name) = &args.name {
        session.grid.set_label(name)?;
    }
    let show_labels = !args.no_labels;
    if show_labels {
        session.solution.name_path(&mut session.grid, "STA", "END")?;
    }

    print!("{}", session.board(show_labels));
    println!(
        "longest path: {} steps from cell {} to cell {} (seed {seed})",
        session.solution.farthest_distance(),
        session.solution.source(),
        session.solution.farthest_id()
    );
    if args.distances {
        print!("{}", session.solution.render_ascii(&session.grid));
    }

    if args.play {
        play(&mut session)?;
    }
    Ok(())
}

fn play(session: &mut Session) -> io::Result<()> {
    let started = Instant::now();
    let mut out = io::stdout().lock();
    write!(out, "{}", session.render())?;
    writeln!(out, "move with h/j/k/l or n/s/e/w, q to quit")?;

    for line in io::stdin().lock().lines() {
        for key in line?.chars() {
            if key == 'q' {
                writeln!(out, "gave up after {} moves", session.moves())?;
                return Ok(());
            }
            match key_direction(key) {
                Some(d) => {
                    if !session.try_move(d) {
                        writeln!(out, "blocked going {d}")?;
                    }
                }
                None if key.is_whitespace() => {}
                None => writeln!(out, "unknown key {key:?}")?,
            }
            if session.is_won() {
                write!(out, "{}", session.render())?;
                writeln!(
                    out,
                    "solved in {} moves, {} seconds",
                    session.moves(),
                    started.elapsed().as_secs()
                )?;
                return Ok(());
            }
        }
        write!(out, "{}", session.render())?;
    }
    Ok(())
}
