use crate::{Board, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Classifies the board after a reveal.
///
/// An open mine means a loss, and every mine is opened for display. If instead
/// every safe cell is open the game is won and every mine gets flagged. Loss
/// is checked first.
pub fn evaluate(board: &mut Board) -> Outcome {
    let mine_opened = board
        .cells()
        .any(|(_, cell)| cell.is_mine() && cell.is_open());

    if mine_opened {
        for cell in board.cells_mut().filter(|cell| cell.is_mine()) {
            cell.set_visibility(Visibility::Open);
        }
        log::info!("Game lost, mine opened at {:?}", board.triggered_mine());
        return Outcome::Lost;
    }

    let safe_cells_left = board
        .cells()
        .any(|(_, cell)| !cell.is_mine() && !cell.is_open());

    if safe_cells_left {
        return Outcome::InProgress;
    }

    for cell in board.cells_mut().filter(|cell| cell.is_mine()) {
        cell.set_visibility(Visibility::Flagged);
    }
    log::info!("Game won, {} mines flagged", board.mine_count());
    Outcome::Won
}
