use crate::{GameError, Position};
use itertools::iproduct;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Covered,
    Uncovered,
    Flagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub is_mine: bool,
    pub state: CellState,
}

/// Row-major grid of cells.
///
/// A board created as `width x height` has `width` rows of `height` cells, so
/// `Position::x` ranges over `0..height` and `Position::y` over `0..width`.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    rows: u32,
    columns: u32,
}

impl Board {
    pub fn new<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        mines_count: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut board = Self::empty(width, height)?;
        if u64::from(mines_count) > board.cells.len() as u64 {
            return Err(GameError::TooManyMines {
                width,
                height,
                mines: mines_count,
            });
        }
        board.place_mines(mines_count, rng);
        Ok(board)
    }

    /// Builds a board with mines at exactly the given positions.
    pub fn with_mines(width: u32, height: u32, mines: &[Position]) -> Result<Self, GameError> {
        let mut board = Self::empty(width, height)?;
        for &pos in mines {
            let cell = board.get_mut(pos).ok_or(GameError::OutOfBounds(pos))?;
            cell.is_mine = true;
        }
        Ok(board)
    }

    fn empty(width: u32, height: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard { width, height });
        }
        Ok(Board {
            cells: vec![Cell::default(); width as usize * height as usize],
            rows: width,
            columns: height,
        })
    }

    fn place_mines<R: Rng + ?Sized>(&mut self, mines_count: u32, rng: &mut R) {
        let mut mines_placed = 0;

        while mines_placed < mines_count {
            let pos = self.random_position(rng);

            if let Some(cell) = self.get_mut(pos).filter(|cell| !cell.is_mine) {
                cell.is_mine = true;
                mines_placed += 1;
            }
        }
    }

    fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let x = rng.gen_range(0..self.columns) as i32;
        let y = rng.gen_range(0..self.rows) as i32;
        Position::new(x, y)
    }

    /// Moves the mine at `from` to a random mine-free cell and returns where it
    /// went. Returns `None` when `from` holds no mine or every cell is a mine.
    pub fn relocate_mine<R: Rng + ?Sized>(
        &mut self,
        from: Position,
        rng: &mut R,
    ) -> Option<Position> {
        if !self.get(from)?.is_mine || self.cells.iter().all(|cell| cell.is_mine) {
            return None;
        }

        let to = loop {
            let candidate = self.random_position(rng);
            if self.get(candidate).is_some_and(|cell| !cell.is_mine) {
                break candidate;
            }
        };

        self.get_mut(from)?.is_mine = false;
        self.get_mut(to)?.is_mine = true;
        Some(to)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_within_bounds(pos)
            .then(|| self.columns as usize * pos.y as usize + pos.x as usize)
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.columns as i32 && pos.y >= 0 && pos.y < self.rows as i32
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// In-bounds members of the Moore neighbourhood of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(move |p| self.is_within_bounds(*p))
    }

    pub fn count_adjacent_mines(&self, pos: Position) -> u8 {
        self.neighbors(pos)
            .filter(|p| self.get(*p).is_some_and(|cell| cell.is_mine))
            .count() as u8
    }

    /// Every position, row by row.
    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows as i32, 0..self.columns as i32).map(|(y, x)| Position::new(x, y))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn total_cells(&self) -> u32 {
        self.rows * self.columns
    }

    pub fn mines_count(&self) -> u32 {
        self.cells.iter().filter(|cell| cell.is_mine).count() as u32
    }
}
