//! Turn state machine.
//!
//! [`GameState`] is the single owner of the board. The only mutations are
//! [`GameState::place_mark`] and [`GameState::reset`]; everything else is a
//! query, so a presentation layer can hold one `GameState` and render from
//! it after each call.

use crate::rules;
use crate::{Board, Cell, Coord, Line, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// A player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark went.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord.label())
    }
}

/// Why a placement was ignored.
///
/// These are not errors: clicking a taken cell or clicking after the game
/// ended is a normal no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The game already ended.
    #[display("Game is already over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", coord)]
    CellOccupied {
        /// The occupied cell.
        coord: Coord,
    },
}

/// Outcome of [`GameState::place_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed.
    Placed {
        /// Who placed it.
        player: Player,
        /// Where it went.
        coord: Coord,
        /// Status after the move.
        status: GameStatus,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// A replayed move was ignored by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} at {} was ignored: {}", turn, coord, reason)]
pub struct ReplayError {
    /// Zero-based position of the move in the replayed sequence.
    pub turn: usize,
    /// The coordinate that was played.
    pub coord: Coord,
    /// Why it was ignored.
    pub reason: Rejection,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds a state by playing `coords` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first move that [`place_mark`](Self::place_mark) ignored.
    #[instrument(skip(coords))]
    pub fn replay(coords: impl IntoIterator<Item = Coord>) -> Result<Self, ReplayError> {
        let mut state = Self::new();
        for (turn, coord) in coords.into_iter().enumerate() {
            if let Placement::Ignored(reason) = state.place_mark(coord) {
                return Err(ReplayError {
                    turn,
                    coord,
                    reason,
                });
            }
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    ///
    /// After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true while marks are accepted.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Empty cells, row-major. Empty once the game has ended.
    pub fn available_moves(&self) -> Vec<Coord> {
        if self.is_active() {
            self.board.empty_cells()
        } else {
            Vec::new()
        }
    }

    /// Places the current player's mark at `coord`.
    ///
    /// Ignored if the game is over or the cell is taken. Otherwise the mark
    /// is placed, then a win is checked, then a draw; if neither, the turn
    /// passes to the opponent.
    #[instrument(skip(self, coord), fields(coord = %coord, player = %self.current_player))]
    pub fn place_mark(&mut self, coord: Coord) -> Placement {
        if self.status.is_terminal() {
            debug!("Game is over, ignoring placement");
            return Placement::Ignored(Rejection::GameOver);
        }
        if !self.board.is_empty(coord) {
            debug!("Cell occupied, ignoring placement");
            return Placement::Ignored(Rejection::CellOccupied { coord });
        }

        let player = self.current_player;
        self.board.set(coord, Cell::Marked(player));
        self.history.push(Move::new(player, coord));

        if let Some(line) = self.check_winner(player) {
            info!(%player, %line, "Player wins");
            self.status = GameStatus::Won { player, line };
        } else if self.check_draw() {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }

        Placement::Placed {
            player,
            coord,
            status: self.status,
        }
    }

    /// Returns the first line fully held by `player`, if any.
    pub fn check_winner(&self, player: Player) -> Option<Line> {
        rules::check_winner(&self.board, player)
    }

    /// True iff every cell is marked and neither player holds a line.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Starts over: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Status text for display.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won { player, .. } => format!("Player {} wins!", player),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
