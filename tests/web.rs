#![cfg(target_arch = "wasm32")]

use lights_on::wasm::WasmSolver;
use lights_on::wasm_ready;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn single_cell_board_renders_one_click() {
    let mut solver = WasmSolver::new(None);

    assert_eq!(solver.render(1, 1, 0).unwrap(), "[+]\n\n[o]");
    assert_eq!(solver.discovered_count(1, 1), 2);
}

#[wasm_bindgen_test]
fn unsolvable_board_is_a_js_error() {
    let mut solver = WasmSolver::new(None);

    let err = solver.solve(2, 1, 0b01).unwrap_err();

    assert_eq!(err.as_string().as_deref(), Some("no solution"));
}

#[wasm_bindgen_test]
fn oversized_board_is_refused() {
    let mut solver = WasmSolver::new(Some(4));

    assert!(solver.solve(3, 3, 0).is_err());
}
