//! Game state module - manages the complete game session
//!
//! This module ties together the board, the piece queue, the geometry checks and
//! scoring. It owns every piece of mutable game state; input handlers and the
//! tick driver call into it and renderers read [`GameSnapshot`]s out of it.
//!
//! A session has two states: playing and game over. Game over is terminal: every
//! operation becomes a no-op once it is reached.

use crate::board::{Board, CommitResult};
use crate::geometry::{is_valid_placement, Matrix};
use crate::high_score::{HighScoreStore, MemoryHighScore};
use crate::rng::PieceQueue;
use crate::scoring::line_clear_score;
use crate::shapes::shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current rotation
    pub matrix: Matrix,
    /// Board row of the matrix's top edge (negative while entering)
    pub row: i8,
    /// Board column of the matrix's left edge
    pub col: i8,
}

impl Tetromino {
    /// Create a tetromino at its spawn position.
    ///
    /// Horizontally, pieces start at `width / 2 - ceil(size / 2)`: I and O are
    /// centered, the 3-wide pieces sit left of center. Vertically, I starts at
    /// row -1 and everything else at -2, which puts each piece's top filled row
    /// at the same height above the board.
    pub fn new(kind: PieceKind) -> Self {
        let matrix = shape(kind);
        let size = matrix.size() as i8;
        let col = BOARD_WIDTH as i8 / 2 - (size + 1) / 2;
        let row = if kind == PieceKind::I { -1 } else { -2 };

        Self {
            kind,
            matrix,
            row,
            col,
        }
    }

    /// Check if all cells are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid_placement(&self.matrix, self.row, self.col, board)
    }

    pub fn shifted(&self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotate_cw(),
            ..*self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = MemoryHighScore> {
    board: Board,
    active: Option<Tetromino>,
    piece_queue: PieceQueue,
    store: S,
    score: u32,
    high_score: u32,
    /// Ticks the piece waits before gravity pulls it down one row.
    gravity_ticks: u32,
    gravity_counter: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<CoreLastEvent>,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed and an in-memory high score
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, MemoryHighScore::default())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: HighScoreStore> GameState<S> {
    /// Create a new game backed by `store`; the high score is loaded here, once.
    pub fn with_store(seed: u32, mut store: S) -> Self {
        let high_score = store.load_high_score();

        Self {
            board: Board::new(),
            active: None,
            piece_queue: PieceQueue::new(seed),
            store,
            score: 0,
            high_score,
            gravity_ticks: GRAVITY_TICKS,
            gravity_counter: 0,
            last_event: None,
            game_over: false,
            started: false,
        }
    }

    pub fn with_gravity_ticks(mut self, ticks: u32) -> Self {
        self.gravity_ticks = ticks;
        self
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.high_score = self.high_score;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with the next one from the queue.
    ///
    /// The spawn position is not checked. A blocked piece spawning in the
    /// hidden rows ends the game when its first drop fails. The I piece is the
    /// exception: its cells spawn on visible row 0, so if that row is filled
    /// it locks over the existing cells and play continues.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let kind = self.piece_queue.draw();
        self.active = Some(Tetromino::new(kind));
        true
    }

    /// Move the active piece to `candidate` if it fits.
    fn try_place(&mut self, candidate: Tetromino) -> bool {
        if self.game_over || !candidate.is_valid(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    pub fn move_left(&mut self) -> bool {
        match self.active {
            Some(active) => self.try_place(active.shifted(0, -1)),
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.active {
            Some(active) => self.try_place(active.shifted(0, 1)),
            None => false,
        }
    }

    /// Rotate clockwise in place; no kicks are attempted.
    pub fn rotate(&mut self) -> bool {
        match self.active {
            Some(active) => self.try_place(active.rotated()),
            None => false,
        }
    }

    /// Move the piece down one row, or lock it where it is if it cannot move.
    ///
    /// Returns true only when the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.try_place(active.shifted(1, 0)) {
            return true;
        }

        self.lock_piece();
        false
    }

    /// Clock-driven drop; identical to [`GameState::soft_drop`].
    pub fn gravity_step(&mut self) -> bool {
        self.soft_drop()
    }

    /// Advance one fixed tick. Returns true when gravity fired on this tick.
    pub fn tick(&mut self) -> bool {
        if self.game_over || !self.started {
            return false;
        }

        self.gravity_counter += 1;
        if self.gravity_counter <= self.gravity_ticks {
            return false;
        }

        self.gravity_counter = 0;
        self.gravity_step();
        true
    }

    /// Commit the active piece, score its lines and spawn the next one.
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let CommitResult {
            game_over,
            lines_cleared,
        } = self.board.commit(&active);

        if game_over {
            // The piece stays in `active` so renderers can show where it stuck.
            self.game_over = true;
            self.last_event = Some(CoreLastEvent {
                kind: active.kind,
                lines_cleared: 0,
                line_clear_score: 0,
                score: self.score,
                new_high_score: false,
                high_score_saved: true,
                game_over: true,
            });
            return;
        }

        let line_score = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(line_score);

        let new_high_score = self.score > self.high_score;
        let mut high_score_saved = true;
        if new_high_score {
            self.high_score = self.score;
            high_score_saved = self.store.save_high_score(self.high_score).is_ok();
        }

        self.last_event = Some(CoreLastEvent {
            kind: active.kind,
            lines_cleared,
            line_clear_score: line_score,
            score: self.score,
            new_high_score,
            high_score_saved,
            game_over: false,
        });

        self.active = None;
        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn vertical_i(row: i8, col: i8) -> Tetromino {
        // After one clockwise turn the I occupies matrix column 2.
        Tetromino {
            kind: PieceKind::I,
            matrix: shape(PieceKind::I).rotate_cw(),
            row,
            col,
        }
    }

    fn fill_row_except(board: &mut Board, row: i8, gap: i8) {
        for col in 0..BOARD_WIDTH as i8 {
            if col != gap {
                board.set(row, col, Some(PieceKind::L));
            }
        }
    }

    struct FailingStore;

    impl HighScoreStore for FailingStore {
        fn load_high_score(&mut self) -> u32 {
            0
        }

        fn save_high_score(&mut self, _score: u32) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut state = GameState::new(12345);
        state.start();
        let first = state.active;
        assert!(first.is_some());

        state.start();
        assert_eq!(state.active, first);
    }

    #[test]
    fn test_spawn_positions() {
        let i = Tetromino::new(PieceKind::I);
        assert_eq!((i.row, i.col), (-1, 3));

        let o = Tetromino::new(PieceKind::O);
        assert_eq!((o.row, o.col), (-2, 4));

        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            let piece = Tetromino::new(kind);
            assert_eq!((piece.row, piece.col), (-2, 3), "{kind:?}");
        }
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let mut state = GameState::new(1);
        state.start();
        state.active = Some(Tetromino {
            kind: PieceKind::O,
            matrix: shape(PieceKind::O),
            row: 5,
            col: 0,
        });

        for _ in 0..5 {
            assert!(!state.move_left());
            assert_eq!(state.active.unwrap().col, 0);
        }

        assert!(state.move_right());
        assert_eq!(state.active.unwrap().col, 1);
    }

    #[test]
    fn test_move_blocked_by_locked_cell() {
        let mut state = GameState::new(1);
        state.start();
        state.active = Some(Tetromino {
            kind: PieceKind::O,
            matrix: shape(PieceKind::O),
            row: 10,
            col: 4,
        });
        state.board_mut().set(11, 6, Some(PieceKind::Z));

        assert!(!state.move_right());
        assert_eq!(state.active.unwrap().col, 4);
    }

    #[test]
    fn test_rotate_without_kick_is_rejected_at_wall() {
        let mut state = GameState::new(1);
        state.start();
        // Vertical I hugging the left wall: its cells are in board column 0.
        let piece = vertical_i(5, -2);
        state.active = Some(piece);
        assert!(piece.is_valid(state.board()));

        assert!(!state.rotate());
        assert_eq!(state.active, Some(piece));
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut state = GameState::new(1);
        state.start();
        let piece = Tetromino {
            row: 5,
            ..Tetromino::new(PieceKind::T)
        };
        state.active = Some(piece);

        assert!(state.rotate());
        assert_eq!(state.active.unwrap().matrix, piece.matrix.rotate_cw());
        assert_eq!(state.active.unwrap().row, 5);
    }

    #[test]
    fn test_single_line_clear_scenario() {
        let mut state = GameState::new(1);
        state.start();
        fill_row_except(state.board_mut(), 19, 5);
        state.board_mut().set(18, 0, Some(PieceKind::J));

        // Fills column 5 on rows 16..=19.
        state.active = Some(vertical_i(16, 3));
        assert!(!state.soft_drop());

        let mut expected = [None; BOARD_WIDTH as usize];
        expected[0] = Some(PieceKind::J);
        expected[5] = Some(PieceKind::I);

        assert_eq!(state.score(), 40);
        assert_eq!(state.board().row(19).unwrap(), &expected[..]);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.line_clear_score, 40);
        assert!(!event.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_tetris_awards_1200() {
        let mut state = GameState::new(1);
        state.start();
        for row in 16..20 {
            fill_row_except(state.board_mut(), row, 9);
        }

        state.active = Some(vertical_i(16, 7));
        state.soft_drop();

        assert_eq!(state.score(), 1200);
        assert_eq!(state.high_score(), 1200);
        assert_eq!(state.store().saves(), 1);
        assert_eq!(state.board().filled_count(), 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_lock_without_lines_spawns_next_piece() {
        let mut state = GameState::new(1);
        state.start();
        state.active = Some(Tetromino {
            kind: PieceKind::O,
            matrix: shape(PieceKind::O),
            row: 18,
            col: 0,
        });

        assert!(!state.soft_drop());
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().filled_count(), 4);
        let next = state.active.unwrap();
        assert_eq!(next, Tetromino::new(next.kind));
    }

    #[test]
    fn test_lock_above_board_is_game_over() {
        let mut state = GameState::new(1);
        state.start();
        for col in 3..6 {
            state.board_mut().set(0, col, Some(PieceKind::S));
        }
        let piece = Tetromino::new(PieceKind::T);
        state.active = Some(piece);
        let board_before = state.board().clone();

        assert!(!state.soft_drop());
        assert!(state.game_over());
        assert_eq!(state.board(), &board_before);
        assert_eq!(state.active, Some(piece));
        assert!(state.take_last_event().unwrap().game_over);

        // Terminal: nothing moves any more.
        assert!(!state.move_left());
        assert!(!state.move_right());
        assert!(!state.rotate());
        assert!(!state.soft_drop());
        for _ in 0..100 {
            assert!(!state.tick());
        }
        assert_eq!(state.active, Some(piece));
        assert!(!state.spawn_piece());
    }

    #[test]
    fn test_i_spawn_over_filled_row_zero_locks_in_place() {
        let mut state = GameState::new(1);
        state.start();
        for row in 0..BOARD_HEIGHT as i8 {
            for col in 3..5 {
                state.board_mut().set(row, col, Some(PieceKind::Z));
            }
        }
        let filled = state.board().filled_count();

        // I cells sit on row 0, columns 3..=6; the drop is blocked at once.
        state.active = Some(Tetromino::new(PieceKind::I));
        assert!(!state.soft_drop());
        assert!(!state.game_over());
        assert_eq!(state.board().filled_count(), filled + 2);
        for col in 3..7 {
            assert_eq!(state.board().get(0, col), Some(Some(PieceKind::I)));
        }
        let event = state.take_last_event().unwrap();
        assert!(!event.game_over);
        assert_eq!(event.lines_cleared, 0);

        // A piece spawning in the hidden rows cannot drop onto row 0 and tops out.
        state.active = Some(Tetromino::new(PieceKind::T));
        assert!(!state.soft_drop());
        assert!(state.game_over());
    }

    #[test]
    fn test_high_score_loaded_once_and_saved_when_beaten() {
        let mut state = GameState::with_store(1, MemoryHighScore::new(50));
        state.start();
        assert_eq!(state.high_score(), 50);

        fill_row_except(state.board_mut(), 19, 5);
        state.active = Some(vertical_i(16, 3));
        state.soft_drop();
        assert_eq!(state.score(), 40);
        assert_eq!(state.store().saves(), 0);

        fill_row_except(state.board_mut(), 19, 4);
        state.active = Some(vertical_i(16, 2));
        state.soft_drop();
        assert_eq!(state.score(), 80);
        assert_eq!(state.high_score(), 80);
        assert_eq!(state.store().value(), 80);
        assert!(state.take_last_event().unwrap().new_high_score);
    }

    #[test]
    fn test_failed_save_is_reported_not_fatal() {
        let mut state = GameState::with_store(1, FailingStore);
        state.start();
        fill_row_except(state.board_mut(), 19, 5);
        state.active = Some(vertical_i(16, 3));
        state.soft_drop();

        let event = state.take_last_event().unwrap();
        assert!(event.new_high_score);
        assert!(!event.high_score_saved);
        assert_eq!(state.high_score(), 40);
        assert!(!state.game_over());
    }

    #[test]
    fn test_gravity_fires_after_configured_ticks() {
        let mut state = GameState::new(7);
        state.start();
        let row = state.active.unwrap().row;

        for _ in 0..GRAVITY_TICKS {
            assert!(!state.tick());
        }
        assert_eq!(state.active.unwrap().row, row);

        assert!(state.tick());
        assert_eq!(state.active.unwrap().row, row + 1);
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut state = GameState::new(7).with_gravity_ticks(0);
        assert!(!state.tick());
        assert!(state.active.is_none());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::with_store(3, MemoryHighScore::new(900));
        state.start();
        state.board_mut().set(19, 0, Some(PieceKind::Z));

        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], PieceKind::Z.code());
        assert_eq!(snap.high_score, 900);
        assert_eq!(snap.active.map(|a| a.kind), state.active.map(|a| a.kind));
        assert!(snap.playable());
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = GameState::new(12345);
        state.start();
        let start = state.active.unwrap();

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.unwrap().col, start.col + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active.unwrap().col, start.col);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.unwrap().row, start.row + 1);
    }
}
