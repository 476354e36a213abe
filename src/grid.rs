use crate::utils::Config;
use crate::{GridError, GridResult};
use log::debug;

/// Number of neighbors of every cell on the torus.
pub const NEIGHBORS: usize = 8;

/// Cell value: 1 for live, 0 for dead.
pub type Cell = u8;

/// Flat indices of the neighbors of one cell, ordered N, S, E, W, NE, NW, SE, SW.
pub type Neighbors = [usize; NEIGHBORS];

/// Conway's Game of Life field on a `height x width` torus.
///
/// Cells are stored row-major, cell `(row, col)` lives at `row * width + col`.
/// The neighbor indices of every cell are computed once on construction.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) state: Vec<Cell>,
    neighbors: Vec<Neighbors>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Builds a grid from configuration rows.
    ///
    /// `'1'` marks a live cell, every other character is dead. All rows must
    /// have the same number of characters.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> GridResult<Self> {
        let first = lines.first().ok_or(GridError::EmptyConfiguration)?;
        let (height, width) = (lines.len(), first.as_ref().chars().count());
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }

        let mut state = Vec::with_capacity(height * width);
        for (row, line) in lines.iter().enumerate() {
            let before = state.len();
            state.extend(
                line.as_ref()
                    .chars()
                    .map(|c| (c == Config::LIVE_MARKER) as Cell),
            );
            let found = state.len() - before;
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let neighbors = (0..height * width)
            .map(|i| Self::torus_neighbors(i / width, i % width, height, width))
            .collect();
        debug!("Built {height}x{width} grid");
        Ok(Self {
            state,
            neighbors,
            height,
            width,
        })
    }

    fn torus_neighbors(row: usize, col: usize, height: usize, width: usize) -> Neighbors {
        let up = if row == 0 { height - 1 } else { row - 1 };
        let down = if row + 1 == height { 0 } else { row + 1 };
        let left = if col == 0 { width - 1 } else { col - 1 };
        let right = if col + 1 == width { 0 } else { col + 1 };
        let at = |r: usize, c: usize| r * width + c;
        [
            at(up, col),
            at(down, col),
            at(row, right),
            at(row, left),
            at(up, right),
            at(up, left),
            at(down, right),
            at(down, left),
        ]
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Always `false`: construction rejects empty configurations.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn neighbors(&self, index: usize) -> &Neighbors {
        &self.neighbors[index]
    }

    /// Number of live cells among the 8 neighbors of `index`.
    #[inline]
    pub fn count_live_neighbors(&self, index: usize) -> u8 {
        self.neighbors[index]
            .iter()
            .map(|&n| self.state[n])
            .sum()
    }

    /// Whether the cell at `index` is live in the next generation, given
    /// `live_neighbors` live cells around it (B3/S23).
    #[inline]
    pub fn apply_rule(&self, index: usize, live_neighbors: u8) -> bool {
        if self.state[index] == 1 {
            live_neighbors == 2 || live_neighbors == 3
        } else {
            live_neighbors == 3
        }
    }

    #[inline]
    pub fn next_cell_state(&self, index: usize) -> bool {
        self.apply_rule(index, self.count_live_neighbors(index))
    }

    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        self.state[row * self.width + col] == 1
    }

    /// Total number of live cells.
    pub fn population(&self) -> usize {
        self.state.iter().map(|&c| c as usize).sum()
    }

    /// Row-major copy of the current state.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.state
            .chunks_exact(self.width)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    /// Current state in the configuration format.
    pub fn to_lines(&self) -> Vec<String> {
        self.state
            .chunks_exact(self.width)
            .map(|row| {
                row.iter()
                    .map(|&c| {
                        if c == 1 {
                            Config::LIVE_MARKER
                        } else {
                            Config::DEAD_MARKER
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.state.chunks_exact(self.width) {
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
