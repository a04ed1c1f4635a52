//! Selection cursor over the card grid.

use crate::types::Direction;

/// Row/column cursor on a square grid. Movement wraps at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    dimension: u8,
    row: u8,
    col: u8,
}

impl GridCursor {
    pub fn new(dimension: u8) -> Self {
        Self {
            dimension: dimension.max(1),
            row: 0,
            col: 0,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Deck index under the cursor (row-major).
    pub fn index(&self) -> usize {
        self.row as usize * self.dimension as usize + self.col as usize
    }

    /// Move the cursor onto deck `index`, if it lies on the grid.
    pub fn select(&mut self, index: usize) -> bool {
        let d = self.dimension as usize;
        if index >= d * d {
            return false;
        }
        self.row = (index / d) as u8;
        self.col = (index % d) as u8;
        true
    }

    /// Re-fit the cursor to a grid of a different size.
    pub fn resize(&mut self, dimension: u8) {
        self.dimension = dimension.max(1);
        self.row = self.row.min(self.dimension - 1);
        self.col = self.col.min(self.dimension - 1);
    }

    pub fn step(&mut self, direction: Direction) {
        let last = self.dimension - 1;
        match direction {
            Direction::Up => self.row = if self.row == 0 { last } else { self.row - 1 },
            Direction::Down => self.row = if self.row == last { 0 } else { self.row + 1 },
            Direction::Left => self.col = if self.col == 0 { last } else { self.col - 1 },
            Direction::Right => self.col = if self.col == last { 0 } else { self.col + 1 },
        }
    }
}
