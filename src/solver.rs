//! Breadth-first solver for Lights On boards.
//!
//! The search runs backwards from the solved board. Clicking a cell twice is a
//! no-op, so every edge of the click graph can be walked in both directions and
//! the backward search uses the same click rule as a player would.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};
use web_time::Instant;

use crate::board::{BoardKey, BoardState};
use crate::click::ClickTable;
use crate::error::LightsOnError;
use crate::types::{Position, SolutionStep};

/// Largest board searched by default. The search holds up to `2^cells` boards
/// in memory.
pub const DEFAULT_MAX_CELLS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Boards with more cells than this are refused instead of searched.
    pub max_cells: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Progress of the search for one board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query for this size has been made yet.
    Uninitialized,
    /// The frontier still holds boards to expand.
    Expanding,
    /// Every board reachable from the solved board has been discovered.
    Exhausted,
}

/// Search metadata recorded for one discovered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionNode {
    /// Clicks needed to reach the solved board.
    pub distance: u32,
    /// Cell to click to move one step closer. `None` on the solved board.
    pub click: Option<Position>,
    /// Board reached by that click, at `distance - 1`.
    pub predecessor: Option<BoardKey>,
}

/// One board on a solution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub board: BoardState,
    pub click: Option<Position>,
    pub distance: u32,
}

/// Boards from the query to the solved board, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<PathStep>,
}

impl Solution {
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn boards(&self) -> impl Iterator<Item = BoardState> + '_ {
        self.steps.iter().map(|step| step.board)
    }

    /// Cells to click, in order.
    pub fn clicks(&self) -> Vec<Position> {
        self.steps.iter().filter_map(|step| step.click).collect()
    }

    pub fn click_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn to_steps(&self) -> Vec<SolutionStep> {
        self.steps
            .iter()
            .map(|step| SolutionStep {
                width: step.board.width(),
                height: step.board.height(),
                bits: step.board.bits(),
                cells: step.board.cells(),
                click: step.click,
                distance: step.distance,
            })
            .collect()
    }
}

/// Discovered boards and BFS frontier for one board size.
struct SearchSpace {
    clicks: ClickTable,
    nodes: HashMap<BoardKey, SolutionNode>,
    queue: VecDeque<(BoardState, u32)>,
    start_time: Instant,
}

impl SearchSpace {
    fn new(width: u8, height: u8) -> Result<Self, LightsOnError> {
        let root = BoardState::solved(width, height)?;
        let clicks = ClickTable::new(width, height)?;

        let mut nodes = HashMap::new();
        nodes.insert(
            root.key(),
            SolutionNode {
                distance: 0,
                click: None,
                predecessor: None,
            },
        );
        let mut queue = VecDeque::new();
        queue.push_back((root, 0));

        debug!(width, height, "starting search space");
        Ok(Self {
            clicks,
            nodes,
            queue,
            start_time: Instant::now(),
        })
    }

    fn phase(&self) -> SearchPhase {
        if self.queue.is_empty() {
            SearchPhase::Exhausted
        } else {
            SearchPhase::Expanding
        }
    }

    /// Expands one frontier board. Returns `false` once the frontier is empty.
    fn expand_next(&mut self) -> bool {
        let Some((current, distance)) = self.queue.pop_front() else {
            return false;
        };

        let next_distance = distance + 1;
        for (pos, mask) in self.clicks.iter() {
            let next = current.toggle_mask(mask);
            let node = SolutionNode {
                distance: next_distance,
                click: Some(pos),
                predecessor: Some(current.key()),
            };

            match self.nodes.entry(next.key()) {
                Entry::Vacant(entry) => {
                    entry.insert(node);
                    self.queue.push_back((next, next_distance));
                }
                // BFS discovers every board at its minimal distance first, so
                // this branch never fires from a single root.
                Entry::Occupied(mut entry) if entry.get().distance > next_distance => {
                    entry.insert(node);
                }
                Entry::Occupied(_) => {}
            }
        }

        if self.queue.is_empty() {
            debug!(
                discovered = self.nodes.len(),
                elapsed_ms = self.start_time.elapsed().as_millis() as u64,
                "search space exhausted"
            );
        }
        true
    }

    /// Expands whole frontier boards until `target` is discovered or nothing
    /// is left to expand.
    fn search_until(&mut self, target: BoardKey) {
        while !self.nodes.contains_key(&target) && self.expand_next() {}
    }

    fn exhaust(&mut self) {
        while self.expand_next() {}
    }

    fn path_from(&self, key: BoardKey) -> Option<Solution> {
        let mut steps = Vec::new();
        let mut current = Some(key);

        while let Some(key) = current {
            let node = self.nodes.get(&key)?;
            steps.push(PathStep {
                board: BoardState::from(key),
                click: node.click,
                distance: node.distance,
            });
            current = node.predecessor;
        }

        Some(Solution { steps })
    }
}

/// Finds minimal click sequences, caching the search per board size.
pub struct Solver {
    config: SolverConfig,
    spaces: HashMap<(u8, u8), SearchSpace>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            spaces: HashMap::new(),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds a shortest click sequence turning every light of `query` on.
    ///
    /// Returns `Ok(None)` when `query` cannot be solved. The search for a board
    /// size is shared by every query of that size and resumes where the previous
    /// query stopped.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn find_solution(
        &mut self,
        query: &BoardState,
    ) -> Result<Option<Solution>, LightsOnError> {
        let space = self.space_mut(query.width(), query.height())?;
        let key = query.key();

        if !space.nodes.contains_key(&key) {
            if space.phase() == SearchPhase::Exhausted {
                trace!("board is unreachable from the solved board");
                return Ok(None);
            }
            space.search_until(key);
        }

        Ok(space.path_from(key))
    }

    /// Like [`Solver::find_solution`], reporting an unsolvable board as
    /// [`LightsOnError::NoSolution`].
    pub fn solve(&mut self, query: &BoardState) -> Result<Solution, LightsOnError> {
        self.find_solution(query)?.ok_or(LightsOnError::NoSolution)
    }

    /// Runs the search for one board size to completion and returns the number
    /// of solvable boards of that size.
    pub fn exhaust(&mut self, width: u8, height: u8) -> Result<usize, LightsOnError> {
        let space = self.space_mut(width, height)?;
        space.exhaust();
        Ok(space.nodes.len())
    }

    pub fn phase(&self, width: u8, height: u8) -> SearchPhase {
        self.spaces
            .get(&(width, height))
            .map_or(SearchPhase::Uninitialized, SearchSpace::phase)
    }

    /// Number of boards discovered so far for one board size.
    pub fn discovered_count(&self, width: u8, height: u8) -> usize {
        self.spaces
            .get(&(width, height))
            .map_or(0, |space| space.nodes.len())
    }

    pub fn node(&self, board: &BoardState) -> Option<&SolutionNode> {
        self.spaces
            .get(&(board.width(), board.height()))?
            .nodes
            .get(&board.key())
    }

    fn space_mut(&mut self, width: u8, height: u8) -> Result<&mut SearchSpace, LightsOnError> {
        let cells = width as usize * height as usize;
        if cells > self.config.max_cells {
            return Err(LightsOnError::BoardTooLarge {
                width,
                height,
                cells,
                max_cells: self.config.max_cells,
            });
        }

        match self.spaces.entry((width, height)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(SearchSpace::new(width, height)?)),
        }
    }
}
