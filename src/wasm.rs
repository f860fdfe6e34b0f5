use wasm_bindgen::prelude::*;

use crate::board::BoardState;
use crate::render::render_solution;
use crate::solver::{Solver, SolverConfig};

/// Browser handle around one [`Solver`], so its search cache survives
/// between calls.
#[wasm_bindgen]
pub struct WasmSolver {
    inner: Solver,
}

#[wasm_bindgen]
impl WasmSolver {
    #[wasm_bindgen(constructor)]
    pub fn new(max_cells: Option<usize>) -> Self {
        let config = max_cells.map_or_else(SolverConfig::default, |max_cells| SolverConfig {
            max_cells,
        });
        Self {
            inner: Solver::with_config(config),
        }
    }

    /// Returns the solution as an array of `SolutionStep` objects.
    pub fn solve(&mut self, width: u8, height: u8, bits: u64) -> Result<JsValue, JsValue> {
        let board = BoardState::from_bits(width, height, bits).map_err(to_js_error)?;
        let solution = self.inner.solve(&board).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&solution.to_steps()).map_err(JsValue::from)
    }

    /// Returns the solution rendered as text.
    pub fn render(&mut self, width: u8, height: u8, bits: u64) -> Result<String, JsValue> {
        let board = BoardState::from_bits(width, height, bits).map_err(to_js_error)?;
        let solution = self.inner.solve(&board).map_err(to_js_error)?;
        Ok(render_solution(&solution))
    }

    pub fn discovered_count(&self, width: u8, height: u8) -> usize {
        self.inner.discovered_count(width, height)
    }
}

fn to_js_error(err: crate::error::LightsOnError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
