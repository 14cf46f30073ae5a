use std::ops::Range;

use array2d::Array2D;
use itertools::{iproduct, Product};

use crate::core::shapes::{Offset, Rgb};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Rgb),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Filled(color) => Some(*color),
            Cell::Empty => None,
        }
    }
}

/// Fixed-size playfield, row 0 at the top.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Array2D<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Array2D::filled_with(Cell::Empty, height, width),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// `None` outside the grid.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Out-of-bounds coordinates count as occupied.
    pub fn is_occupied(&self, row: isize, col: isize) -> bool {
        self.get(row, col).map_or(true, |cell| cell.is_filled())
    }

    pub fn can_place<'a>(&self, cells: impl IntoIterator<Item = &'a Offset>) -> bool {
        cells
            .into_iter()
            .all(|&(row, col)| !self.is_occupied(row, col))
    }

    /// Commits cells without re-checking them; callers check `can_place` first.
    pub fn lock_cells<'a>(&mut self, cells: impl IntoIterator<Item = &'a Offset>, color: Rgb) {
        for &(row, col) in cells {
            if let Some(idx) = self.index(row, col) {
                self.cells[idx] = Cell::Filled(color);
            }
        }
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && (0..self.width).all(|col| self.cells[(row, col)].is_filled())
    }

    /// Full rows, top to bottom.
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Drops the given rows and pads the top with empty rows.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let mut collapsed = Array2D::filled_with(Cell::Empty, self.height, self.width);
        let kept: Vec<usize> = (0..self.height).filter(|row| !rows.contains(row)).collect();
        let padding = self.height - kept.len();

        for (target, &source) in kept.iter().enumerate() {
            for col in 0..self.width {
                collapsed[(target + padding, col)] = self.cells[(source, col)];
            }
        }

        self.cells = collapsed;
    }

    /// Every (row, col) on the board.
    pub fn coords(&self) -> Product<Range<isize>, Range<isize>> {
        iproduct!(0..self.height as isize, 0..self.width as isize)
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = (Offset, Rgb)> + '_ {
        self.coords()
            .filter_map(|(row, col)| self.get(row, col)?.color().map(|color| ((row, col), color)))
    }
}
