use wasm_bindgen::prelude::*;

pub mod board;
pub mod click;
pub mod error;
pub mod render;
pub mod solver;
pub mod types;
pub mod wasm;

pub use board::{BoardKey, BoardState};
pub use error::LightsOnError;
pub use solver::{SearchPhase, Solution, Solver, SolverConfig};
pub use types::Position;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
