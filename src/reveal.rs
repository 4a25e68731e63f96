use crate::{Board, Position, Result, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was already open or flagged.
    NoChange,
    /// This many safe cells were opened.
    Opened(usize),
    /// Target was a mine; it is now open and highlighted.
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Opens the cell at `pos`, flooding outward through zero-count cells.
///
/// The flood never opens a mine or a flagged cell, and stops at numbered
/// cells after opening them. The board is mutated in place; it is consistent
/// again by the time this returns.
pub fn reveal(board: &mut Board, pos: Position) -> Result<RevealOutcome> {
    let target = board.get_mut(pos)?;

    if !target.is_closed() {
        log::trace!("Reveal at {:?} ignored, cell is {:?}", pos, target.visibility());
        return Ok(RevealOutcome::NoChange);
    }

    if target.is_mine() {
        target.set_visibility(Visibility::Open);
        target.highlight();
        log::debug!("Mine opened at {:?}", pos);
        return Ok(RevealOutcome::HitMine);
    }

    let opened = flood_open(board, pos);
    log::debug!("Reveal at {:?} opened {} cells", pos, opened);
    Ok(RevealOutcome::Opened(opened))
}

/// Worklist flood fill from a closed, safe `start`. Returns the number of
/// cells opened.
fn flood_open(board: &mut Board, start: Position) -> usize {
    let mut stack = vec![start];
    let mut opened = 0;

    while let Some(pos) = stack.pop() {
        // The Closed check doubles as the visited set.
        let cell = &board[pos];
        if !cell.is_closed() || cell.is_mine() {
            continue;
        }
        let expand = cell.adjacent_mines() == Some(0);

        if let Ok(cell) = board.get_mut(pos) {
            cell.set_visibility(Visibility::Open);
            opened += 1;
        }

        if expand {
            stack.extend(
                board
                    .neighbors(pos)
                    .filter(|&n| board[n].is_closed() && !board[n].is_mine()),
            );
        }
    }

    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: usize, cols: usize, mines: &[(usize, usize)]) -> Board {
        let mines: Vec<Position> = mines.iter().map(|&p| p.into()).collect();
        Board::from_mines(rows, cols, &mines).unwrap()
    }

    #[test]
    fn test_numbered_cell_opens_alone() {
        let mut board = board(3, 3, &[(0, 0)]);

        let outcome = reveal(&mut board, Position::new(1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Opened(1));
        assert!(board[Position::new(1, 1)].is_open());
        assert_eq!(board.open_count(), 1);
    }

    #[test]
    fn test_mine_opens_and_highlights_only_itself() {
        let mut board = board(3, 3, &[(0, 0), (2, 2)]);

        let outcome = reveal(&mut board, Position::new(0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert!(board[Position::new(0, 0)].is_open());
        assert!(board[Position::new(0, 0)].is_highlighted());
        assert!(board[Position::new(2, 2)].is_closed());
        assert_eq!(board.open_count(), 1);
        assert_eq!(board.triggered_mine(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_zero_cell_floods_but_never_opens_mines() {
        let mut board = board(4, 4, &[(0, 0)]);

        let outcome = reveal(&mut board, Position::new(3, 3)).unwrap();

        assert_eq!(outcome, RevealOutcome::Opened(15));
        assert!(board[Position::new(0, 0)].is_closed());
        assert!(board[Position::new(1, 1)].is_open());
        assert!(board.triggered_mine().is_none());
    }

    #[test]
    fn test_flood_stops_at_numbered_border() {
        // Column of mines splits the board; the left side is unreachable.
        let mut board = board(3, 5, &[(0, 2), (1, 2), (2, 2)]);

        reveal(&mut board, Position::new(1, 4)).unwrap();

        for pos in board.positions() {
            assert_eq!(board[pos].is_open(), pos.col >= 3, "{:?}", pos);
        }
    }

    #[test]
    fn test_flood_skips_flagged_cells() {
        let mut board = board(3, 3, &[(0, 0)]);
        board
            .get_mut(Position::new(2, 0))
            .unwrap()
            .set_visibility(Visibility::Flagged);

        reveal(&mut board, Position::new(2, 2)).unwrap();

        assert!(board[Position::new(2, 0)].is_flagged());
        assert_eq!(board.open_count(), 7);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut once = board(5, 5, &[(0, 4), (4, 0)]);
        reveal(&mut once, Position::new(2, 2)).unwrap();

        let mut twice = once.clone();
        let outcome = reveal(&mut twice, Position::new(2, 2)).unwrap();

        assert_eq!(outcome, RevealOutcome::NoChange);
        assert!(!outcome.has_update());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_flagged_target_is_noop() {
        let mut board = board(3, 3, &[(0, 0)]);
        board
            .get_mut(Position::new(0, 0))
            .unwrap()
            .set_visibility(Visibility::Flagged);
        let before = board.clone();

        let outcome = reveal(&mut board, Position::new(0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut board = board(2, 2, &[(0, 0)]);
        let before = board.clone();

        assert_eq!(
            reveal(&mut board, Position::new(0, 2)),
            Err(crate::GameError::OutOfBounds(Position::new(0, 2)))
        );
        assert_eq!(board, before);
    }
}
