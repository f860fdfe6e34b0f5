use std::process::ExitCode;

use clap::Parser;
use lights_on::render::render_solution;
use lights_on::solver::DEFAULT_MAX_CELLS;
use lights_on::{BoardState, LightsOnError, Solver, SolverConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Prints the shortest click sequence that turns every light of a board on.
///
/// Cells are drawn as `[ ]` (off), `[o]` (on), `[+]` (off, click next) and
/// `[-]` (on, click next).
#[derive(Parser, Debug)]
#[command(name = "lights-on", version)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value = "3")]
    width: u8,

    /// Board height in cells.
    #[arg(long, default_value = "3")]
    height: u8,

    /// Lit cells as a row-major bit pattern, bit 0 = top-left.
    /// Accepts decimal, `0b` binary or `0x` hex.
    #[arg(long, default_value = "0b001101010", value_parser = parse_bits)]
    bits: u64,

    /// Refuse boards with more cells than this.
    #[arg(long, default_value_t = DEFAULT_MAX_CELLS)]
    max_cells: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(LightsOnError::NoSolution) => {
            eprintln!("No solution");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, LightsOnError> {
    let board = BoardState::from_bits(args.width, args.height, args.bits)?;
    let mut solver = Solver::with_config(SolverConfig {
        max_cells: args.max_cells,
    });

    let solution = solver.solve(&board)?;
    info!(clicks = solution.click_count(), "solved board");
    Ok(render_solution(&solution))
}

fn parse_bits(s: &str) -> Result<u64, String> {
    let s = s.replace('_', "");
    let parsed = if let Some(bin) = s.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else if let Some(hex) = s.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid bit pattern {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_patterns_accept_binary_hex_and_decimal() {
        assert_eq!(parse_bits("0b001_101_010"), Ok(106));
        assert_eq!(parse_bits("0x6a"), Ok(106));
        assert_eq!(parse_bits("106"), Ok(106));
        assert!(parse_bits("0b102").is_err());
    }

    #[test]
    fn default_arguments_solve_the_example_board() {
        let args = Args::parse_from(["lights-on"]);

        let text = run(&args).unwrap();
        let boards: Vec<&str> = text.split("\n\n").collect();

        assert!(boards.len() >= 2);
        assert!(boards[0].contains('+') || boards[0].contains('-'));
        assert_eq!(boards.last(), Some(&"[o] [o] [o]\n[o] [o] [o]\n[o] [o] [o]"));
    }

    #[test]
    fn unsolvable_board_is_reported() {
        let args = Args::parse_from([
            "lights-on", "--width", "2", "--height", "1", "--bits", "1",
        ]);

        assert_eq!(run(&args), Err(LightsOnError::NoSolution));
    }
}
