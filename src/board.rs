use crate::{GameConfig, GameError, Position, Result};
use itertools::iproduct;
use ndarray::Array2;
use std::fmt;
use std::ops::Index;

/// What a cell holds: a mine, or the number of mines around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineAdjacency {
    Mine,
    Count(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
    Flagged,
}

/// One grid position. The value is fixed once the board is built; only the
/// visibility and the loss highlight change during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: MineAdjacency,
    visibility: Visibility,
    highlighted: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            value: MineAdjacency::Count(0),
            visibility: Visibility::Closed,
            highlighted: false,
        }
    }
}

impl Cell {
    pub fn value(&self) -> MineAdjacency {
        self.value
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Set on the mine whose opening lost the game.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_mine(&self) -> bool {
        self.value == MineAdjacency::Mine
    }

    pub fn adjacent_mines(&self) -> Option<u8> {
        match self.value {
            MineAdjacency::Mine => None,
            MineAdjacency::Count(n) => Some(n),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn is_closed(&self) -> bool {
        self.visibility == Visibility::Closed
    }

    pub fn is_flagged(&self) -> bool {
        self.visibility == Visibility::Flagged
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub(crate) fn highlight(&mut self) {
        self.highlighted = true;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.visibility, self.value) {
            (Visibility::Closed, _) => f.pad("□"),
            (Visibility::Flagged, _) => f.pad("⚑"),
            (Visibility::Open, MineAdjacency::Mine) if self.highlighted => f.pad("✹"),
            (Visibility::Open, MineAdjacency::Mine) => f.pad("*"),
            (Visibility::Open, MineAdjacency::Count(0)) => f.pad(" "),
            (Visibility::Open, MineAdjacency::Count(n)) => f.pad(&n.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: usize,
}

impl Board {
    /// All cells closed, no mines yet.
    pub(crate) fn empty(config: &GameConfig) -> Self {
        Self {
            cells: Array2::from_elem((config.rows, config.cols), Cell::default()),
            mine_count: 0,
        }
    }

    /// Builds a board from an explicit mine layout. The layout must satisfy
    /// the same `0 < mines < rows * cols` rule as a generated board.
    pub fn from_mines(rows: usize, cols: usize, mines: &[Position]) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines.len())?;
        let mut board = Self::empty(&config);

        for &pos in mines {
            board.validate(pos)?;
            if !board.place_mine(pos) {
                return Err(GameError::DuplicateMine(pos));
            }
        }

        board.compute_adjacency();
        Ok(board)
    }

    /// Returns false if the cell already holds a mine.
    pub(crate) fn place_mine(&mut self, pos: Position) -> bool {
        let cell = &mut self.cells[[pos.row, pos.col]];
        if cell.is_mine() {
            return false;
        }
        cell.value = MineAdjacency::Mine;
        self.mine_count += 1;
        true
    }

    pub(crate) fn compute_adjacency(&mut self) {
        for pos in self.positions() {
            if self[pos].is_mine() {
                continue;
            }
            let count = self.neighbors(pos).filter(|&p| self[p].is_mine()).count();
            self.cells[[pos.row, pos.col]].value = MineAdjacency::Count(count as u8);
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows(),
            cols: self.cols(),
            mine_count: self.mine_count,
        }
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn validate(&self, pos: Position) -> Result<Position> {
        if self.is_within_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds(pos))
        }
    }

    pub fn get(&self, pos: Position) -> Result<&Cell> {
        self.cells
            .get((pos.row, pos.col))
            .ok_or(GameError::OutOfBounds(pos))
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        self.cells
            .get_mut((pos.row, pos.col))
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// In-bounds neighbours of `pos`, between 3 and 8 of them.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let (rows, cols) = (self.rows(), self.cols());
        pos.neighbors().filter(move |p| p.row < rows && p.col < cols)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows(), 0..self.cols()).map(|(row, col)| Position::new(row, col))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Position::new(row, col), cell))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    pub fn flagged_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_flagged()).count()
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    pub fn triggered_mine(&self) -> Option<Position> {
        self.cells()
            .find(|(_, cell)| cell.is_highlighted())
            .map(|(pos, _)| pos)
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[[pos.row, pos.col]]
    }
}
