use crate::{
    evaluate, generate, generate_with, reveal, toggle_flag, Board, CellPicker, GameConfig,
    Outcome, Position, Result, RevealOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Reveal,
    Flag,
}

/// One game session: the board plus the bookkeeping the engine functions
/// leave to their caller.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    remaining_flags: usize,
    outcome: Outcome,
    started: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::from_board(generate(&config)?))
    }

    pub fn with_picker<P: CellPicker + ?Sized>(config: GameConfig, picker: &mut P) -> Result<Self> {
        Ok(Self::from_board(generate_with(&config, picker)?))
    }

    /// Starts a session on an existing, untouched board.
    pub fn from_board(board: Board) -> Self {
        Self {
            remaining_flags: board.mine_count(),
            board,
            outcome: Outcome::InProgress,
            started: false,
        }
    }

    /// Replaces the board with a fresh one of the same size.
    pub fn reset(&mut self) -> Result<()> {
        *self = Self::new(self.board.config())?;
        Ok(())
    }

    pub fn reset_with<P: CellPicker + ?Sized>(&mut self, picker: &mut P) -> Result<()> {
        *self = Self::with_picker(self.board.config(), picker)?;
        Ok(())
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> Result<Outcome> {
        match action {
            Action::Reveal => self.reveal(pos),
            Action::Flag => self.toggle_flag(pos),
        }
    }

    /// Reveals `pos` and re-evaluates the game. Does nothing once the game
    /// is over.
    pub fn reveal(&mut self, pos: Position) -> Result<Outcome> {
        self.board.validate(pos)?;
        if self.outcome.is_finished() {
            return Ok(self.outcome);
        }
        self.started = true;

        if reveal(&mut self.board, pos)? == RevealOutcome::NoChange {
            return Ok(self.outcome);
        }

        self.outcome = evaluate(&mut self.board);
        if self.outcome == Outcome::Won {
            self.remaining_flags = 0;
        }
        Ok(self.outcome)
    }

    /// Toggles a flag, but only after the first reveal and before the game
    /// ends.
    pub fn toggle_flag(&mut self, pos: Position) -> Result<Outcome> {
        self.board.validate(pos)?;
        if !self.started || self.outcome.is_finished() {
            log::trace!("Flag at {:?} ignored, session not active", pos);
            return Ok(self.outcome);
        }

        self.remaining_flags = toggle_flag(&mut self.board, self.remaining_flags, pos)?;
        Ok(self.outcome)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn remaining_flags(&self) -> usize {
        self.remaining_flags
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.board.rows(), self.board.cols())
    }
}
