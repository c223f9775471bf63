//! Session module - the complete game state and move orchestration
//!
//! This module ties together all core components: grid, queue, keep slot,
//! progress tracking, history, and hints. Every move follows the same
//! sequence: snapshot, attempt the component operation, then on success
//! award points, consume the active tile, draw the next one from the queue,
//! and evaluate the terminal condition.
//!
//! A session is a plain value owned by the caller; there is no process-wide
//! state, so multiple independent sessions can coexist (and tests construct
//! them freely).

use std::fmt;

use crate::grid::Grid;
use crate::hints::{self, HintList};
use crate::history::{History, Snapshot};
use crate::progress;
use crate::queue::TileQueue;
use just_divide_types::{
    Difficulty, GameStatus, KeepResult, PlaceResult, Tile, TrashResult, INITIAL_TRASH,
    TRASH_PER_LEVEL_UP,
};

/// Injected callback invoked whenever a new best score is achieved.
///
/// The concrete storage mechanism lives entirely outside the core.
pub type BestSaver = Box<dyn FnMut(u32)>;

/// One complete game: grid, tile supply, keep slot, progress and history.
pub struct GameSession {
    grid: Grid,
    queue: TileQueue,
    /// The single tile currently available for placement. `None` only
    /// once the game has ended.
    active: Option<Tile>,
    keep: Option<Tile>,
    score: u32,
    level: u32,
    best: u32,
    trash_count: u32,
    timer_sec: u32,
    difficulty: Difficulty,
    hints_enabled: bool,
    paused: bool,
    game_over: bool,
    last_status: GameStatus,
    history: History,
    best_saver: Option<BestSaver>,
}

impl GameSession {
    /// Create a new game with the given RNG seed at the easiest difficulty.
    pub fn new(seed: u32) -> Self {
        Self::with_difficulty(seed, Difficulty::Easy)
    }

    /// Create a new game with the given RNG seed and difficulty.
    pub fn with_difficulty(seed: u32, difficulty: Difficulty) -> Self {
        let grid = Grid::new();
        let mut queue = TileQueue::new(seed, difficulty);
        let active = Some(queue.draw(difficulty));
        let initial = Snapshot::capture(
            &grid,
            queue.tiles(),
            active,
            None,
            0,
            1,
            INITIAL_TRASH,
            0,
        );

        Self {
            grid,
            queue,
            active,
            keep: None,
            score: 0,
            level: 1,
            best: 0,
            trash_count: INITIAL_TRASH,
            timer_sec: 0,
            difficulty,
            hints_enabled: true,
            paused: false,
            game_over: false,
            last_status: GameStatus::Continue,
            history: History::new(initial),
            best_saver: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn trash_count(&self) -> u32 {
        self.trash_count
    }

    pub fn timer_sec(&self) -> u32 {
        self.timer_sec
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The tile currently available for placement.
    pub fn active(&self) -> Option<Tile> {
        self.active
    }

    /// The tile held in the keep slot.
    pub fn keep(&self) -> Option<Tile> {
        self.keep
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for tests and tooling; gameplay goes through
    /// [`GameSession::try_place`].
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The queued tiles in consumption order.
    pub fn queue_tiles(&self) -> &[Tile] {
        self.queue.tiles()
    }

    /// Number of retained undo snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Status reported by the most recent orchestrated move.
    pub fn status(&self) -> GameStatus {
        self.last_status
    }

    /// Deep copy of the current mutable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.grid,
            self.queue.tiles(),
            self.active,
            self.keep,
            self.score,
            self.level,
            self.trash_count,
            self.timer_sec,
        )
    }

    /// Install the callback invoked whenever a new best score is achieved.
    pub fn set_best_saver(&mut self, saver: BestSaver) {
        self.best_saver = Some(saver);
    }

    /// Seed the best score (loaded by the caller from wherever it persists).
    pub fn set_best(&mut self, best: u32) {
        self.best = best;
    }

    pub fn set_hints_enabled(&mut self, enabled: bool) {
        self.hints_enabled = enabled;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Select the pool future tiles are drawn from. Tiles already queued
    /// are unaffected.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Advance the elapsed-time counter by one second unless paused.
    ///
    /// Driven by the caller's event loop; the core owns no timers.
    pub fn tick(&mut self) {
        if !self.paused {
            self.timer_sec += 1;
        }
    }

    /// Try to place the active tile at (row, col).
    ///
    /// Out-of-bounds and non-combinable targets leave all state unchanged
    /// and report why; the caller restores the tile's visual position. On
    /// success the combination award is applied, the active tile is
    /// consumed and the queue supplies the next one.
    pub fn try_place(&mut self, row: usize, col: usize) -> PlaceResult {
        let Some(active) = self.active else {
            return PlaceResult::Rejected;
        };
        self.record_snapshot();

        let result = self.grid.place(active.value, row, col);
        if result.is_success() {
            self.active = None;
            self.commit_move(result.award());
        }
        // A retained snapshot of a rejected move is harmless: undoing it
        // restores an identical state, and the cap evicts it eventually.
        result
    }

    /// Move the active tile into the keep slot.
    ///
    /// If the slot was occupied, the previous occupant re-enters the queue
    /// at the front and becomes the very next active tile, so keep-swapped
    /// tiles are never lost. Returns `None` once the game has ended.
    pub fn try_keep(&mut self) -> Option<KeepResult> {
        let active = self.active?;
        self.record_snapshot();
        self.active = None;

        let result = match self.keep.replace(active) {
            None => KeepResult::Stored,
            Some(previous) => {
                self.queue.push_front(previous);
                KeepResult::Swapped(previous.value)
            }
        };
        self.commit_move(0);
        Some(result)
    }

    /// Discard the active tile, spending one trash use.
    pub fn try_trash(&mut self) -> TrashResult {
        if self.active.is_none() {
            return TrashResult::Denied;
        }
        self.record_snapshot();
        if self.trash_count == 0 {
            return TrashResult::Denied;
        }

        self.trash_count -= 1;
        self.active = None;
        self.commit_move(0);
        TrashResult::Accepted
    }

    /// Restore the state immediately prior to the last committed move.
    ///
    /// Returns the restored snapshot, or `None` when only the initial
    /// sentinel remains or the game has ended (the terminal state has no
    /// transitions out except restart).
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.game_over {
            return None;
        }
        let snapshot = self.history.undo()?.clone();

        self.grid = snapshot.grid.clone();
        self.queue.restore(&snapshot.queue);
        self.active = snapshot.active;
        self.keep = snapshot.keep;
        self.score = snapshot.score;
        self.level = snapshot.level;
        self.trash_count = snapshot.trash_count;
        self.timer_sec = snapshot.timer_sec;
        self.last_status = GameStatus::Continue;

        Some(snapshot)
    }

    /// Start a fresh game, keeping best score, difficulty and hint toggle.
    ///
    /// The tile sequence continues from the generator's current state, so
    /// a restarted game is a new random game, reproducible from the
    /// original seed.
    pub fn restart(&mut self) {
        let seed = self.queue.rng_state();
        self.grid = Grid::new();
        self.queue = TileQueue::new(seed, self.difficulty);
        self.active = Some(self.queue.draw(self.difficulty));
        self.keep = None;
        self.score = 0;
        self.level = 1;
        self.trash_count = INITIAL_TRASH;
        self.timer_sec = 0;
        self.paused = false;
        self.game_over = false;
        self.last_status = GameStatus::Continue;

        let initial = self.snapshot();
        self.history.reset(initial);
    }

    /// Candidate cells where the queue's next tile could combine.
    ///
    /// Empty (with no scan performed) while hints are disabled.
    pub fn hints(&self) -> HintList {
        if !self.hints_enabled {
            return HintList::new();
        }
        match self.queue.front() {
            Some(front) => hints::compute(&self.grid, front.value),
            None => HintList::new(),
        }
    }

    fn record_snapshot(&mut self) {
        let snapshot = self.snapshot();
        self.history.record(snapshot);
    }

    /// Shared tail of every successful move: progress bookkeeping, next
    /// active tile, terminal evaluation.
    fn commit_move(&mut self, award: u32) {
        let leveled = if award > 0 {
            self.apply_award(award)
        } else {
            None
        };

        self.active = Some(self.queue.draw(self.difficulty));

        self.last_status = if self.grid.is_terminal() {
            self.game_over = true;
            self.active = None;
            self.push_best();
            GameStatus::GameOver(self.score)
        } else if let Some(level) = leveled {
            GameStatus::LevelUp(level)
        } else {
            GameStatus::Continue
        };
    }

    /// Add points, update the best score, and apply any level-up (which is
    /// the sole source of trash replenishment besides the initial
    /// endowment). Returns the new level if one was crossed.
    fn apply_award(&mut self, award: u32) -> Option<u32> {
        self.score = self.score.saturating_add(award);
        self.push_best();

        let derived = progress::derive_level(self.score);
        if derived > self.level {
            self.level = derived;
            self.trash_count += TRASH_PER_LEVEL_UP;
            return Some(derived);
        }
        None
    }

    fn push_best(&mut self) {
        if let Some(best) = progress::updated_best(self.score, self.best) {
            self.best = best;
            if let Some(saver) = self.best_saver.as_mut() {
                saver(best);
            }
        }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("grid", &self.grid)
            .field("queue", &self.queue)
            .field("active", &self.active)
            .field("keep", &self.keep)
            .field("score", &self.score)
            .field("level", &self.level)
            .field("best", &self.best)
            .field("trash_count", &self.trash_count)
            .field("timer_sec", &self.timer_sec)
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use just_divide_types::{GRID_SIZE, QUEUE_LEN};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_session_has_active_tile_and_full_queue() {
        let session = GameSession::new(12345);
        assert!(session.active().is_some());
        assert_eq!(session.queue_tiles().len(), QUEUE_LEN);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.trash_count(), INITIAL_TRASH);
        assert_eq!(session.history_len(), 1);
        assert!(!session.game_over());
    }

    #[test]
    fn test_place_on_empty_cell_scores_nothing() {
        let mut session = GameSession::new(12345);
        let before = session.score();
        assert_eq!(session.try_place(0, 0), PlaceResult::Placed);
        assert_eq!(session.score(), before);
        assert_eq!(session.queue_tiles().len(), QUEUE_LEN);
        assert!(session.active().is_some());
    }

    #[test]
    fn test_place_consumes_the_queue_front() {
        let mut session = GameSession::new(12345);
        let upcoming = session.queue_tiles()[0];
        session.try_place(0, 0);
        assert_eq!(session.active(), Some(upcoming));
    }

    #[test]
    fn test_doubling_awards_twice_the_value() {
        let mut session = GameSession::new(12345);
        let value = session.active().unwrap().value;
        session.grid_mut().set(1, 1, Some(Tile::new(value)));

        assert_eq!(
            session.try_place(1, 1),
            PlaceResult::Doubled { award: value * 2 }
        );
        assert_eq!(session.score(), value * 2);
        assert_eq!(session.grid().tile(1, 1), None);
    }

    #[test]
    fn test_division_awards_the_larger_value() {
        let mut session = GameSession::new(12345);
        let value = session.active().unwrap().value;
        session.grid_mut().set(1, 1, Some(Tile::new(value * 2)));

        assert_eq!(
            session.try_place(1, 1),
            PlaceResult::Divided {
                quotient: 2,
                award: value * 2
            }
        );
        assert_eq!(session.score(), value * 2);
        assert_eq!(session.grid().tile(1, 1), Some(Tile::new(2)));
    }

    #[test]
    fn test_rejected_place_is_a_no_op() {
        let mut session = GameSession::new(12345);
        // 13 is coprime with every easy-pool value and outside the pool, so
        // any active tile is rejected.
        session.grid_mut().set(0, 0, Some(Tile::new(13)));
        let before = session.snapshot();

        assert_eq!(session.try_place(0, 0), PlaceResult::Rejected);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_out_of_bounds_is_a_no_op() {
        let mut session = GameSession::new(12345);
        let before = session.snapshot();
        assert_eq!(session.try_place(4, 0), PlaceResult::OutOfBounds);
        assert_eq!(session.try_place(0, 4), PlaceResult::OutOfBounds);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_keep_stores_then_swaps() {
        let mut session = GameSession::new(12345);
        let first = session.active().unwrap();

        assert_eq!(session.try_keep(), Some(KeepResult::Stored));
        assert_eq!(session.keep(), Some(first));
        assert_eq!(session.queue_tiles().len(), QUEUE_LEN);

        let second = session.active().unwrap();
        assert_eq!(session.try_keep(), Some(KeepResult::Swapped(first.value)));
        assert_eq!(session.keep(), Some(second));
        // The displaced tile became the very next active tile.
        assert_eq!(session.active(), Some(first));
        assert_eq!(session.queue_tiles().len(), QUEUE_LEN);
    }

    #[test]
    fn test_trash_decrements_until_denied() {
        let mut session = GameSession::new(12345);
        for remaining in (1..=INITIAL_TRASH).rev() {
            assert_eq!(session.try_trash(), TrashResult::Accepted);
            assert_eq!(session.trash_count(), remaining - 1);
        }

        let before = session.snapshot();
        assert_eq!(session.try_trash(), TrashResult::Denied);
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_level_up_grants_trash() {
        let mut session = GameSession::new(12345);
        // Repeatedly double a planted tile until the score crosses 10.
        while session.score() < 10 {
            let value = session.active().unwrap().value;
            session.grid_mut().set(0, 0, Some(Tile::new(value)));
            session.try_place(0, 0);
        }
        assert_eq!(session.level(), progress::derive_level(session.score()));
        assert!(session.level() >= 2);
        assert!(session.trash_count() >= INITIAL_TRASH + TRASH_PER_LEVEL_UP);
        assert!(matches!(session.status(), GameStatus::LevelUp(_)));
    }

    #[test]
    fn test_undo_restores_the_pre_move_state() {
        let mut session = GameSession::new(12345);
        session.try_place(0, 0);
        let before = session.snapshot();

        session.try_place(1, 1);
        assert_ne!(session.snapshot(), before);

        session.undo().unwrap();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_undo_bottoms_out_at_the_sentinel() {
        let mut session = GameSession::new(12345);
        let initial = session.snapshot();
        session.try_place(0, 0);

        assert!(session.undo().is_some());
        assert_eq!(session.snapshot(), initial);
        assert!(session.undo().is_none());
    }

    #[test]
    fn test_timer_ticks_unless_paused() {
        let mut session = GameSession::new(12345);
        session.tick();
        session.tick();
        assert_eq!(session.timer_sec(), 2);

        session.set_paused(true);
        session.tick();
        assert_eq!(session.timer_sec(), 2);

        session.set_paused(false);
        session.tick();
        assert_eq!(session.timer_sec(), 3);
    }

    #[test]
    fn test_hints_respect_the_toggle() {
        let mut session = GameSession::new(12345);
        let front = session.queue_tiles()[0];
        session.grid_mut().set(0, 0, Some(Tile::new(front.value)));
        session.grid_mut().set(0, 1, Some(Tile::new(front.value)));
        assert!(!session.hints().is_empty());

        session.set_hints_enabled(false);
        assert!(session.hints().is_empty());
    }

    #[test]
    fn test_best_saver_fires_on_new_best() {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saved);

        let mut session = GameSession::new(12345);
        session.set_best_saver(Box::new(move |best| sink.borrow_mut().push(best)));

        let value = session.active().unwrap().value;
        session.grid_mut().set(0, 0, Some(Tile::new(value)));
        session.try_place(0, 0);

        assert_eq!(saved.borrow().as_slice(), &[value * 2]);
        assert_eq!(session.best(), value * 2);
    }

    #[test]
    fn test_best_is_not_rewritten_for_lower_scores() {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&saved);

        let mut session = GameSession::new(12345);
        session.set_best(1000);
        session.set_best_saver(Box::new(move |best| sink.borrow_mut().push(best)));

        let value = session.active().unwrap().value;
        session.grid_mut().set(0, 0, Some(Tile::new(value)));
        session.try_place(0, 0);

        assert!(saved.borrow().is_empty());
        assert_eq!(session.best(), 1000);
    }

    #[test]
    fn test_game_over_on_terminal_grid() {
        let mut session = GameSession::new(12345);
        // Fill everything except (3,3) with an uncombinable checkerboard of
        // values no easy-pool tile can touch (11 and 13 are coprime with
        // the whole pool).
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if (row, col) == (3, 3) {
                    continue;
                }
                let value = if (row + col) % 2 == 0 { 11 } else { 13 };
                session.grid_mut().set(row, col, Some(Tile::new(value)));
            }
        }

        assert_eq!(session.try_place(3, 3), PlaceResult::Placed);
        assert!(session.game_over());
        assert_eq!(session.status(), GameStatus::GameOver(session.score()));
        assert!(session.active().is_none());

        // Terminal state has no transitions out except restart.
        assert_eq!(session.try_place(0, 0), PlaceResult::Rejected);
        assert_eq!(session.try_keep(), None);
        assert_eq!(session.try_trash(), TrashResult::Denied);
        assert!(session.undo().is_none());

        session.restart();
        assert!(!session.game_over());
        assert!(session.active().is_some());
        assert_eq!(session.score(), 0);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_restart_keeps_best_and_settings() {
        let mut session = GameSession::new(12345);
        session.set_best(77);
        session.set_hints_enabled(false);
        session.set_difficulty(Difficulty::Hard);

        session.try_place(0, 0);
        session.restart();

        assert_eq!(session.best(), 77);
        assert!(!session.hints_enabled());
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.trash_count(), INITIAL_TRASH);
        assert_eq!(session.timer_sec(), 0);
        assert!(session.grid().cells().iter().all(|c| c.is_none()));
    }
}
