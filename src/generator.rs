use crate::{Board, GameConfig, Position, Result};
use rand::Rng;

/// Source of candidate mine positions.
///
/// Any [`rand::Rng`] works; tests pass a seeded `StdRng` or a scripted
/// sequence to get reproducible layouts.
pub trait CellPicker {
    /// Returns a position with `row < rows` and `col < cols`.
    fn pick(&mut self, rows: usize, cols: usize) -> Position;
}

impl<R: Rng + ?Sized> CellPicker for R {
    fn pick(&mut self, rows: usize, cols: usize) -> Position {
        Position::new(self.gen_range(0..rows), self.gen_range(0..cols))
    }
}

/// Generates a board using the thread-local RNG.
pub fn generate(config: &GameConfig) -> Result<Board> {
    generate_with(config, &mut rand::thread_rng())
}

/// Places `config.mine_count` mines by rejection sampling, then derives every
/// cell's adjacency count.
pub fn generate_with<P>(config: &GameConfig, picker: &mut P) -> Result<Board>
where
    P: CellPicker + ?Sized,
{
    config.validate()?;

    let mut board = Board::empty(config);
    let mut rejected = 0usize;

    while board.mine_count() < config.mine_count {
        let pos = picker.pick(config.rows, config.cols);
        if !board.is_within_bounds(pos) {
            log::warn!("Picker returned {:?} outside {}x{}", pos, config.rows, config.cols);
            rejected += 1;
            continue;
        }
        if !board.place_mine(pos) {
            rejected += 1;
        }
    }

    board.compute_adjacency();

    log::debug!(
        "Generated {}x{} board with {} mines ({} picks rejected)",
        config.rows,
        config.cols,
        board.mine_count(),
        rejected
    );
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    struct ScriptedPicker(VecDeque<Position>);

    impl ScriptedPicker {
        fn new(script: &[(usize, usize)]) -> Self {
            Self(script.iter().map(|&p| Position::from(p)).collect())
        }
    }

    impl CellPicker for ScriptedPicker {
        fn pick(&mut self, _rows: usize, _cols: usize) -> Position {
            self.0.pop_front().expect("script exhausted")
        }
    }

    #[test]
    fn test_scripted_layout_skips_repeats() {
        let mut picker = ScriptedPicker::new(&[(0, 0), (0, 0), (9, 9), (2, 1), (0, 0), (3, 3)]);
        let config = GameConfig::new(4, 4, 3).unwrap();

        let board = generate_with(&config, &mut picker).unwrap();

        assert!(picker.0.is_empty());
        let expected: [Position; 3] = [(0, 0).into(), (2, 1).into(), (3, 3).into()];
        assert_eq!(board, Board::from_mines(4, 4, &expected).unwrap());
    }

    #[test]
    fn test_seeded_board_has_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(12345);
        let config = GameConfig::default();

        let board = generate_with(&config, &mut rng).unwrap();

        assert_eq!(board.mine_count(), 30);
        assert_eq!(board.cells().filter(|(_, cell)| cell.is_mine()).count(), 30);
        assert!(board.cells().all(|(_, cell)| cell.is_closed() && !cell.is_highlighted()));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let a = generate_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_refuses_invalid_config() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            mine_count: 9,
        };

        assert_eq!(
            generate(&config),
            Err(GameError::InvalidMineCount {
                rows: 3,
                cols: 3,
                mines: 9
            })
        );
    }

    #[test]
    fn test_densest_board_fills_all_but_one() {
        let config = GameConfig::new(3, 3, 8).unwrap();
        let board = generate(&config).unwrap();

        let safe: Vec<_> = board.cells().filter(|(_, cell)| !cell.is_mine()).collect();
        assert_eq!(safe.len(), 1);
        assert_eq!(
            safe[0].1.adjacent_mines(),
            Some(board.neighbors(safe[0].0).count() as u8)
        );
    }
}
