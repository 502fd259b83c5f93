//! Turn-by-turn game controller
//!
//! Owns the board and the chance budget and mediates between the guesser
//! and the referee. Each turn is strictly guess, check, respond, update.

use crate::core::{Board, Letter};
use crate::error::{HangmanError, Result};
use crate::player::{Guesser, Referee};

/// Wrong guesses allowed before the guesser loses
pub const CHANCES: usize = 10;

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Setup,
    Playing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What happened in one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: usize,
    pub letter: Letter,
    pub indices: Vec<usize>,
    pub board: Board,
    pub remaining_chances: usize,
    pub state: GameState,
}

impl TurnReport {
    #[must_use]
    pub fn matched(&self) -> bool {
        !self.indices.is_empty()
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every position revealed; `board` spells the secret
    Won {
        board: String,
        remaining_chances: usize,
        turns: usize,
    },
    /// Chances ran out; `secret` as revealed by the referee
    Lost {
        secret: Option<String>,
        board: String,
        turns: usize,
    },
}

impl GameOutcome {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Won { .. })
    }

    #[must_use]
    pub const fn turns(&self) -> usize {
        match self {
            Self::Won { turns, .. } | Self::Lost { turns, .. } => *turns,
        }
    }

    /// The secret word, when known
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        match self {
            Self::Won { board, .. } => Some(board),
            Self::Lost { secret, .. } => secret.as_deref(),
        }
    }
}

/// A single game of Hangman between a guesser and a referee
pub struct Game<G: Guesser, R: Referee> {
    guesser: G,
    referee: R,
    board: Board,
    remaining_chances: usize,
    turns: usize,
    state: GameState,
}

impl<G: Guesser, R: Referee> Game<G, R> {
    #[must_use]
    pub fn new(guesser: G, referee: R) -> Self {
        Self {
            guesser,
            referee,
            board: Board::new(0),
            remaining_chances: CHANCES,
            turns: 0,
            state: GameState::Setup,
        }
    }

    /// Have the referee pick a secret and tell the guesser its length
    ///
    /// Can be called again after a game ends to start a fresh one with the
    /// same players.
    ///
    /// # Errors
    /// Propagates role errors. `HangmanError::NotPlaying` if a game is
    /// already running.
    pub fn setup(&mut self) -> Result<()> {
        if self.state == GameState::Playing {
            return Err(HangmanError::NotPlaying);
        }

        let len = self.referee.pick_secret_word()?;
        if len == 0 {
            return Err(HangmanError::InvalidLength(len));
        }
        self.guesser.register_secret_length(len)?;

        self.board = Board::new(len);
        self.remaining_chances = CHANCES;
        self.turns = 0;
        self.state = GameState::Playing;
        log::info!("game started with a {len}-letter secret");
        Ok(())
    }

    /// Play one turn
    ///
    /// A chance is spent only when the guess reveals nothing.
    ///
    /// # Errors
    /// `HangmanError::NotPlaying` outside the playing state; otherwise any
    /// role error, which ends the usefulness of this game.
    pub fn take_turn(&mut self) -> Result<TurnReport> {
        if self.state != GameState::Playing {
            return Err(HangmanError::NotPlaying);
        }

        let letter = self.guesser.guess(&self.board)?;
        let indices = self.referee.check_guess(letter)?;
        self.guesser.handle_response(letter, &indices)?;
        self.update_board(letter, &indices)?;

        self.turns += 1;
        if indices.is_empty() {
            self.remaining_chances = self.remaining_chances.saturating_sub(1);
        }

        if self.board.is_complete() {
            self.state = GameState::Won;
            log::info!("guesser won in {} turns", self.turns);
        } else if self.remaining_chances == 0 {
            self.state = GameState::Lost;
            log::info!("guesser lost after {} turns", self.turns);
        }

        Ok(TurnReport {
            turn: self.turns,
            letter,
            indices,
            board: self.board.clone(),
            remaining_chances: self.remaining_chances,
            state: self.state,
        })
    }

    /// Reveal `letter` at `indices` on the board
    ///
    /// Applying the same update twice has the same effect as once.
    ///
    /// # Errors
    /// `HangmanError::IndexOutOfRange` for a position past the end.
    pub fn update_board(&mut self, letter: Letter, indices: &[usize]) -> Result<()> {
        self.board.reveal(letter, indices)
    }

    /// Run to completion, calling `on_turn` after every turn
    ///
    /// Sets the game up first if needed.
    ///
    /// # Errors
    /// Any setup or turn error; the game is abandoned at that point.
    pub fn play<F>(&mut self, mut on_turn: F) -> Result<GameOutcome>
    where
        F: FnMut(&TurnReport),
    {
        if self.state != GameState::Playing {
            self.setup()?;
        }

        while self.state == GameState::Playing {
            let report = self.take_turn()?;
            on_turn(&report);
        }

        self.outcome().ok_or(HangmanError::NotPlaying)
    }

    /// The result once the game has ended
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::Won => Some(GameOutcome::Won {
                board: self.board.to_string(),
                remaining_chances: self.remaining_chances,
                turns: self.turns,
            }),
            GameState::Lost => Some(GameOutcome::Lost {
                secret: self.referee.reveal_secret().map(str::to_string),
                board: self.board.to_string(),
                turns: self.turns,
            }),
            GameState::Setup | GameState::Playing => None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn remaining_chances(&self) -> usize {
        self.remaining_chances
    }

    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    #[must_use]
    pub const fn guesser(&self) -> &G {
        &self.guesser
    }

    #[must_use]
    pub const fn referee(&self) -> &R {
        &self.referee
    }
}
