use crate::{Board, Position, Result, Visibility};

/// Toggles the flag at `pos` and returns the updated flag budget.
///
/// Placing a flag needs budget; removing one always works and returns a unit.
/// Open cells cannot be flagged. Whether the session allows flagging at all
/// (started, not finished) is the caller's check.
pub fn toggle_flag(board: &mut Board, remaining_flags: usize, pos: Position) -> Result<usize> {
    let board_mines = board.mine_count();
    let cell = board.get_mut(pos)?;

    let remaining = match cell.visibility() {
        Visibility::Open => remaining_flags,
        Visibility::Flagged => {
            cell.set_visibility(Visibility::Closed);
            (remaining_flags + 1).min(board_mines)
        }
        Visibility::Closed if remaining_flags == 0 => {
            log::trace!("No flags left for {:?}", pos);
            remaining_flags
        }
        Visibility::Closed => {
            cell.set_visibility(Visibility::Flagged);
            remaining_flags - 1
        }
    };

    Ok(remaining)
}
