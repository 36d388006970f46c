//! Random-walk spanning-tree maze generation (Aldous-Broder).
//!
//! The walk starts on a random cell and repeatedly steps to a uniformly
//! chosen in-grid neighbour. The first time it enters a cell it carves a
//! two-way passage from where it came. Every spanning tree of the grid is
//! equally likely, so the mazes carry no directional bias.

use std::fmt;

use mazer_core::{CellId, Connection, Direction, Grid};
use rand::{Rng, RngExt};

/// Chooses the next cell of a walk.
pub trait RandomWalker {
    /// A random neighbour of `from`, or `None` if it has none.
    fn neighbor<T>(&self, grid: &Grid<T>, from: CellId, rng: &mut impl Rng) -> Option<CellId>;
}

/// Uniform choice among the in-grid cardinal neighbours. Off-grid
/// directions are left out of the draw rather than retried.
pub struct CardinalWalker;

impl RandomWalker for CardinalWalker {
    fn neighbor<T>(&self, grid: &Grid<T>, from: CellId, rng: &mut impl Rng) -> Option<CellId> {
        let mut options = [0; 4];
        let mut n = 0;
        for d in Direction::CARDINAL {
            if let Some(id) = grid.neighbor_id(from, d, Connection::Any) {
                options[n] = id;
                n += 1;
            }
        }
        (n > 0).then(|| options[rng.random_range(0..n)])
    }
}

/// Tuning for [`MazeGen`].
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Abort after this many steps. `None` picks a bound from the grid size
    /// that a walk on an intact grid will not reach in practice.
    pub max_steps: Option<usize>,
}

impl WalkConfig {
    fn step_limit(&self, cells: usize) -> usize {
        self.max_steps.unwrap_or_else(|| {
            cells
                .saturating_mul(cells)
                .saturating_mul(16)
                .max(100_000)
        })
    }
}

/// Outcome of a completed walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Cell the walk started on.
    pub start: CellId,
    /// Steps taken, including steps into already visited cells.
    pub steps: usize,
    /// Passages carved; `len() - 1` for a completed maze.
    pub carved: usize,
}

/// Errors from maze generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// The walk hit its step bound before visiting every cell.
    StepLimit {
        steps: usize,
        visited: usize,
        total: usize,
    },
    /// The walker found no neighbour to move to.
    Stuck { at: CellId },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepLimit {
                steps,
                visited,
                total,
            } => write!(
                f,
                "maze walk gave up after {steps} steps with {visited}/{total} cells visited"
            ),
            Self::Stuck { at } => write!(f, "maze walk stuck at cell {at}"),
        }
    }
}

impl std::error::Error for GenError {}

/// Maze generator driving a random walk with `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: WalkConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, WalkConfig::default())
    }

    pub fn with_config(rng: R, config: WalkConfig) -> Self {
        Self { rng, config }
    }

    /// Carve a spanning tree into `grid` with the [`CardinalWalker`].
    ///
    /// `grid` should be freshly created: existing links are left in place
    /// and only passages into unvisited cells are added.
    pub fn aldous_broder<T>(&mut self, grid: &mut Grid<T>) -> Result<WalkStats, GenError> {
        self.aldous_broder_with(grid, &CardinalWalker)
    }

    /// [`aldous_broder`](Self::aldous_broder) with a custom walker.
    pub fn aldous_broder_with<T>(
        &mut self,
        grid: &mut Grid<T>,
        walker: &impl RandomWalker,
    ) -> Result<WalkStats, GenError> {
        let total = grid.len();
        let limit = self.config.step_limit(total);
        let mut visited = vec![false; total];

        let start = grid.random_cell(&mut self.rng).id();
        visited[start] = true;
        let mut seen = 1;
        let mut current = start;
        let mut steps = 0;
        let mut carved = 0;

        while seen < total {
            if steps >= limit {
                log::warn!("maze walk hit its bound of {limit} steps ({seen}/{total} visited)");
                return Err(GenError::StepLimit {
                    steps,
                    visited: seen,
                    total,
                });
            }
            let next = walker
                .neighbor(grid, current, &mut self.rng)
                .ok_or(GenError::Stuck { at: current })?;
            steps += 1;

            if !visited[next] {
                if let Some(d) = direction_between(grid, current, next) {
                    grid.carve(current, d);
                    carved += 1;
                }
                visited[next] = true;
                seen += 1;
                log::trace!("walk step {steps}: carved {current} -> {next}");
            }
            current = next;
        }

        log::debug!(
            "carved {carved} passages over {total} cells in {steps} steps from cell {start}"
        );
        Ok(WalkStats {
            start,
            steps,
            carved,
        })
    }
}

/// The cardinal direction leading from `a` to its neighbour `b`.
fn direction_between<T>(grid: &Grid<T>, a: CellId, b: CellId) -> Option<Direction> {
    Direction::CARDINAL
        .into_iter()
        .find(|&d| grid.neighbor_id(a, d, Connection::Any) == Some(b))
}
