/// A grid coordinate, addressed row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Up to 8 surrounding positions. Only the lower edges are clamped here;
    /// the board filters anything past its last row or column.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            Some(Position::new(
                self.row.checked_add_signed(dr)?,
                self.col.checked_add_signed(dc)?,
            ))
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
