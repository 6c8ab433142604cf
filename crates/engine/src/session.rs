//! Game session - the controller side of the board engine
//!
//! Ties a stabilized [`Board`] to the state a game front-end needs: the current
//! selection, the refill that is waiting after a clear, and the game-over flag.
//! There are no timers here; a front-end decides how often to call [`GameSession::tick`]
//! and redraws from [`GameSession::snapshot`] afterwards.

use log::{debug, info, warn};

use crate::core::{Board, BoardConfig, BoardError, BoardSnapshot, MatchSet, SimpleRng, TileSource};
use crate::types::Position;

/// Result of a click on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click outside the board, on an empty cell, or after game over
    Ignored,
    /// First click: the position is now selected
    Selected(Position),
    /// Second click with no resulting match; the selection is dropped
    Rejected { from: Position, to: Position },
    /// Second click that matched; the swap is committed and the matched cells collapsed
    Matched {
        from: Position,
        to: Position,
        cleared: usize,
        points: u32,
    },
}

/// Result of one idle tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A queued refill was applied
    Refilled(usize),
    /// Matches were found, scored and collapsed; their refill is queued
    Cleared { cleared: usize, points: u32 },
    /// No matches on the board
    Settled { game_over: bool },
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    board: Board<R>,
    selection: Option<Position>,
    pending_refill: Vec<Position>,
    game_over: bool,
}

impl GameSession<SimpleRng> {
    /// Create a session on a freshly seeded, stabilized board
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        Self::from_board(Board::new(config)?)
    }
}

impl<R: TileSource> GameSession<R> {
    /// Wrap an existing board, stabilizing it first
    pub fn from_board(mut board: Board<R>) -> Result<Self, BoardError> {
        let passes = board.stabilize()?;
        let mut session = Self {
            board,
            selection: None,
            pending_refill: Vec::new(),
            game_over: false,
        };
        session.game_over = !session.board.has_possible_moves();
        info!(
            "session started: {}x{} board, stabilized in {} passes",
            session.board.rows(),
            session.board.cols(),
            passes
        );
        Ok(session)
    }

    pub fn board(&self) -> &Board<R> {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Cells emptied by the last clear that are still waiting for new tiles
    pub fn pending_refill(&self) -> &[Position] {
        &self.pending_refill
    }

    /// A swap that would match right now, if any
    pub fn hint(&mut self) -> Option<(Position, Position)> {
        self.board.find_possible_move()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Handle a click on `pos`
    ///
    /// A refill still waiting from the last clear is applied first, so the click
    /// always lands on a full board.
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.game_over {
            return ClickOutcome::Ignored;
        }
        if !self.pending_refill.is_empty() {
            self.apply_pending_refill();
        }
        let Ok(Some(_)) = self.board.get_tile(pos) else {
            debug!("ignoring click on {}", pos);
            return ClickOutcome::Ignored;
        };

        let Some(from) = self.selection.take() else {
            self.selection = Some(pos);
            return ClickOutcome::Selected(pos);
        };

        let matches = match self.board.evaluate_swap(from, pos) {
            Ok(matches) => matches,
            Err(err) => {
                warn!("swap {} <-> {} failed: {}", from, pos, err);
                return ClickOutcome::Rejected { from, to: pos };
            }
        };
        if matches.is_empty() {
            return ClickOutcome::Rejected { from, to: pos };
        }

        // Positions were validated by evaluate_swap; the commit cannot fail.
        if let Err(err) = self.board.swap(from, pos) {
            warn!("commit {} <-> {} failed: {}", from, pos, err);
            return ClickOutcome::Rejected { from, to: pos };
        }
        let (cleared, points) = self.clear(&matches);
        debug!("swap {} <-> {} cleared {} tiles", from, pos, cleared);
        ClickOutcome::Matched {
            from,
            to: pos,
            cleared,
            points,
        }
    }

    /// One step of the idle loop
    pub fn tick(&mut self) -> TickOutcome {
        if !self.pending_refill.is_empty() {
            return TickOutcome::Refilled(self.apply_pending_refill());
        }

        let matches = self.board.find_all_matches();
        if matches.is_empty() {
            self.game_over = !self.board.has_possible_moves();
            if self.game_over {
                info!("game over with score {}", self.board.score());
            }
            return TickOutcome::Settled {
                game_over: self.game_over,
            };
        }

        let (cleared, points) = self.clear(&matches);
        TickOutcome::Cleared { cleared, points }
    }

    /// Give every pending cell a new tile, returning how many were filled
    ///
    /// On failure nothing is filled and the queue is kept.
    pub fn apply_pending_refill(&mut self) -> usize {
        if let Err(err) = self.board.fill_positions(&self.pending_refill) {
            warn!("refill of {} cells failed: {}", self.pending_refill.len(), err);
            return 0;
        }
        let filled = self.pending_refill.len();
        self.pending_refill.clear();
        filled
    }

    /// Tick until the board has no matches and nothing is waiting to refill
    ///
    /// Returns the number of ticks taken, capped at `max_ticks`.
    pub fn settle(&mut self, max_ticks: usize) -> usize {
        for ticks in 1..=max_ticks {
            if let TickOutcome::Settled { .. } = self.tick() {
                return ticks;
            }
        }
        max_ticks
    }

    /// Start over on a reseeded, stabilized board
    pub fn restart(&mut self) -> Result<(), BoardError> {
        self.board.reset_score();
        self.board.fill_board();
        self.board.stabilize()?;
        self.selection = None;
        self.pending_refill.clear();
        self.game_over = !self.board.has_possible_moves();
        info!("session restarted");
        Ok(())
    }

    fn clear(&mut self, matches: &MatchSet) -> (usize, u32) {
        let points = self.board.update_score(matches.len());
        match self.board.collapse_columns(matches) {
            Ok(refill) => self.pending_refill.extend(refill),
            Err(err) => warn!("collapse failed: {}", err),
        }
        (matches.len(), points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedTiles;
    use crate::types::TileKind;

    /// Board with one obvious move at (0, 2) <-> (0, 3); refills cycle 1, 2, 3, 0
    fn scripted_session() -> GameSession<ScriptedTiles> {
        let board = Board::from_rows_with_source(
            &[&[0, 0, 1, 0], &[1, 2, 3, 2], &[2, 3, 0, 1], &[3, 1, 2, 3]],
            BoardConfig::default(),
            ScriptedTiles::new(vec![1, 2, 3, 0]).unwrap(),
        )
        .unwrap();
        GameSession::from_board(board).unwrap()
    }

    #[test]
    fn test_new_session_is_stable() {
        let mut session = GameSession::new(BoardConfig::default().with_seed(9)).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.selection(), None);
        assert!(session.board().find_all_matches().is_empty());
        let outcome = session.tick();
        assert_eq!(
            outcome,
            TickOutcome::Settled {
                game_over: session.game_over()
            }
        );
    }

    #[test]
    fn test_first_click_selects() {
        let mut session = scripted_session();
        let p = Position::new(1, 1);
        assert_eq!(session.click(p), ClickOutcome::Selected(p));
        assert_eq!(session.selection(), Some(p));
    }

    #[test]
    fn test_out_of_bounds_click_ignored() {
        let mut session = scripted_session();
        assert_eq!(session.click(Position::new(9, 9)), ClickOutcome::Ignored);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn test_non_matching_swap_rejected() {
        let mut session = scripted_session();
        let before = session.snapshot();
        session.click(Position::new(0, 0));
        assert_eq!(
            session.click(Position::new(3, 3)),
            ClickOutcome::Rejected {
                from: Position::new(0, 0),
                to: Position::new(3, 3)
            }
        );
        assert_eq!(session.selection(), None);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_matching_swap_commits_and_queues_refill() {
        let mut session = scripted_session();
        session.click(Position::new(0, 2));
        let outcome = session.click(Position::new(0, 3));
        assert_eq!(
            outcome,
            ClickOutcome::Matched {
                from: Position::new(0, 2),
                to: Position::new(0, 3),
                cleared: 3,
                points: 300,
            }
        );
        assert_eq!(session.score(), 300);
        assert_eq!(session.selection(), None);
        assert_eq!(
            session.pending_refill(),
            &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );

        // The swapped tile survives in the top row; matched cells are empty until refill
        let snap = session.snapshot();
        assert_eq!(snap.to_rows()[0], vec![-1, -1, -1, 1]);

        assert_eq!(session.tick(), TickOutcome::Refilled(3));
        assert!(session.pending_refill().is_empty());
        assert_eq!(session.snapshot().to_rows()[0], vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_click_during_pending_refill_leaves_no_holes() {
        let mut session = scripted_session();
        session.click(Position::new(0, 2));
        session.click(Position::new(0, 3));
        assert_eq!(session.pending_refill().len(), 3);

        // The queued refill lands before the click is handled
        let p = Position::new(2, 0);
        assert_eq!(session.click(p), ClickOutcome::Selected(p));
        assert!(session.pending_refill().is_empty());
        assert_eq!(session.board().empty_count(), 0);
        assert_eq!(session.snapshot().to_rows()[0], vec![1, 2, 3, 1]);

        // Column 1 becomes 2 2 2 1
        assert!(matches!(
            session.click(Position::new(2, 1)),
            ClickOutcome::Matched { cleared: 3, .. }
        ));
        assert_eq!(
            session.pending_refill(),
            &[Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)]
        );

        session.settle(100);
        assert_eq!(session.board().empty_count(), 0);
        assert!(session.pending_refill().is_empty());
        assert!(session.board().find_all_matches().is_empty());
    }

    #[test]
    fn test_failed_refill_keeps_queue() {
        let mut session = scripted_session();
        session.pending_refill.push(Position::new(9, 9));
        assert_eq!(session.apply_pending_refill(), 0);
        assert_eq!(session.pending_refill(), &[Position::new(9, 9)]);
        assert_eq!(session.tick(), TickOutcome::Refilled(0));
        assert_eq!(session.pending_refill().len(), 1);
    }

    #[test]
    fn test_tick_clears_board_matches() {
        let mut session = scripted_session();
        let two = Some(TileKind::new(2));
        session.board.set_tile(Position::new(3, 0), two).unwrap();
        session.board.set_tile(Position::new(3, 1), two).unwrap();
        // Row 3 is now 2 2 2 3

        assert_eq!(
            session.tick(),
            TickOutcome::Cleared {
                cleared: 3,
                points: 300
            }
        );
        assert_eq!(session.pending_refill().len(), 3);
        assert_eq!(session.tick(), TickOutcome::Refilled(3));
    }

    #[test]
    fn test_game_over_blocks_clicks() {
        let board = Board::from_rows(
            &[
                &[0, 1, 2, 3, 0],
                &[2, 3, 0, 1, 2],
                &[0, 1, 2, 3, 0],
                &[2, 3, 0, 1, 2],
            ],
            BoardConfig::default(),
        )
        .unwrap();
        let mut session = GameSession::from_board(board).unwrap();
        assert!(session.game_over());
        assert_eq!(session.tick(), TickOutcome::Settled { game_over: true });
        assert_eq!(session.click(Position::new(0, 0)), ClickOutcome::Ignored);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = GameSession::new(BoardConfig::default().with_seed(21)).unwrap();
        let (a, b) = session.hint().expect("fresh 8x8 board has a move");
        session.click(a);
        assert!(matches!(session.click(b), ClickOutcome::Matched { .. }));
        assert!(session.score() > 0);

        session.restart().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.selection(), None);
        assert!(session.pending_refill().is_empty());
        assert!(session.board().find_all_matches().is_empty());
        assert_eq!(session.board().empty_count(), 0);
    }

    #[test]
    fn test_settle_reaches_quiet_board() {
        let mut session = scripted_session();
        session.click(Position::new(0, 2));
        session.click(Position::new(0, 3));
        let ticks = session.settle(100);
        assert!(ticks < 100);
        assert!(session.pending_refill().is_empty());
        assert!(session.board().find_all_matches().is_empty());
    }
}
