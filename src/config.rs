use crate::{GameError, Result};

pub const DEFAULT_ROWS: usize = 16;
pub const DEFAULT_COLS: usize = 16;
pub const DEFAULT_MINES: usize = 30;

/// Board dimensions and mine count for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mine_count: usize,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, mine_count: usize) -> Result<Self> {
        let config = Self {
            rows,
            cols,
            mine_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks `0 < mine_count < rows * cols`. Zero-sized boards fail too.
    pub fn validate(&self) -> Result<()> {
        if self.mine_count == 0 || self.mine_count >= self.total_cells() {
            return Err(GameError::InvalidMineCount {
                rows: self.rows,
                cols: self.cols,
                mines: self.mine_count,
            });
        }
        Ok(())
    }

    pub fn total_cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn safe_cells(&self) -> usize {
        self.total_cells().saturating_sub(self.mine_count)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mine_count: DEFAULT_MINES,
        }
    }
}
