//! Shared model for the text-mode maze demo.
//!
//! A [`Session`] owns a generated maze, the player's position and the goal,
//! and gates every move through [`Grid::can_move`], the same query a
//! graphical front end would use.

use std::fmt;

use mazer_core::ascii::{CELL_WIDTH, clip, render_with};
use mazer_core::{CellId, Direction, Grid, GridError};
use mazer_gen::{GenError, MazeGen};
use mazer_paths::{DistanceMap, PathError, find_longest_path};
use rand::Rng;

/// Marker drawn on the player's cell.
pub const PLAYER: &str = " @ ";
/// Marker drawn on the goal cell.
pub const GOAL: &str = " > ";

/// Errors from setting up a session.
#[derive(Debug)]
pub enum DemoError {
    Grid(GridError),
    Gen(GenError),
    Path(PathError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Gen(e) => write!(f, "generator: {e}"),
            Self::Path(e) => write!(f, "solver: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Gen(e) => Some(e),
            Self::Path(e) => Some(e),
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<GenError> for DemoError {
    fn from(e: GenError) -> Self {
        Self::Gen(e)
    }
}

impl From<PathError> for DemoError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

/// Map a movement key to a direction: arrows-as-letters (`hjkl`) or
/// compass initials (`nsew`).
pub fn key_direction(key: char) -> Option<Direction> {
    match key.to_ascii_lowercase() {
        'k' | 'n' => Some(Direction::North),
        'j' | 's' => Some(Direction::South),
        'l' | 'e' => Some(Direction::East),
        'h' | 'w' => Some(Direction::West),
        _ => None,
    }
}

/// One play-through of a generated maze.
pub struct Session {
    pub grid: Grid,
    /// Longest path of the maze; the player starts at its source.
    pub solution: DistanceMap,
    player: (usize, usize),
    goal: CellId,
    moves: usize,
}

impl Session {
    /// Generate a `rows` x `cols` maze with `rng` and place the player and
    /// goal at the two ends of its longest path.
    pub fn new(rows: usize, cols: usize, rng: impl Rng) -> Result<Self, DemoError> {
        let mut grid = Grid::new(rows, cols, 0)?;
        MazeGen::new(rng).aldous_broder(&mut grid)?;
        let solution = find_longest_path(&grid)?;
        Ok(Self::with_solution(grid, solution))
    }

    /// Start a session on an existing grid and solved map.
    pub fn with_solution(grid: Grid, solution: DistanceMap) -> Self {
        let start = grid
            .cell_by_id(solution.source())
            .map_or((0, 0), |c| (c.row(), c.col()));
        let goal = solution.farthest_id();
        Self {
            grid,
            solution,
            player: start,
            goal,
            moves: 0,
        }
    }

    /// Player position as `(row, col)`.
    #[inline]
    pub fn player(&self) -> (usize, usize) {
        self.player
    }

    #[inline]
    pub fn goal(&self) -> CellId {
        self.goal
    }

    /// Successful moves so far.
    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Step the player one cell if the maze allows it.
    pub fn try_move(&mut self, d: Direction) -> bool {
        let (row, col) = self.player;
        if !self.grid.can_move(row, col, d) {
            return false;
        }
        let Some(next) = self
            .grid
            .id_at(row, col)
            .and_then(|id| self.grid.cell_by_id(id)?.link(d))
            .and_then(|id| self.grid.cell_by_id(id))
        else {
            return false;
        };
        self.player = (next.row(), next.col());
        self.moves += 1;
        log::trace!("player moved {d} to {:?}", self.player);
        true
    }

    /// Whether the player stands on the goal.
    pub fn is_won(&self) -> bool {
        self.grid.id_at(self.player.0, self.player.1) == Some(self.goal)
    }

    /// The maze as the demo prints it. The grid label is always the title;
    /// cell labels appear only with `show_labels`.
    pub fn board(&self, show_labels: bool) -> String {
        let mut out = String::new();
        if !show_labels {
            if let Some(title) = self.grid.label() {
                out.push_str(title);
                out.push('\n');
            }
        }
        out.push_str(&self.grid.render_ascii(show_labels));
        out
    }

    /// The maze with the player and goal marked.
    pub fn render(&self) -> String {
        let player = self.grid.id_at(self.player.0, self.player.1);
        render_with(&self.grid, None, |cell| {
            if Some(cell.id()) == player {
                clip(PLAYER)
            } else if cell.id() == self.goal {
                clip(GOAL)
            } else {
                [' '; CELL_WIDTH]
            }
        })
    }
}
