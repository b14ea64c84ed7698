//! Sticky auto-repeat (DAS/ARR) over terminal key events.
//!
//! Raw-mode terminals report key repeats as a stream of press events with
//! no release, so holds are inferred: an axis counts as held while presses
//! keep arriving within the keepalive window. Each axis carries a signed
//! repeat budget in milliseconds; a fresh press arms it below zero by the
//! DAS delay, elapsed time pays it back, and every `arr` worth of positive
//! budget fires one repeat.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::types::{
    GameAction, ARR_MS, DAS_MOMENTUM_GRACE_MS, DAS_MS, KEY_KEEPALIVE_MS, SOFT_DROP_ARR_MS,
};

/// Most actions a single tick can emit.
pub const MAX_ACTIONS_PER_TICK: usize = 32;

const KEEPALIVE: Duration = Duration::from_millis(KEY_KEEPALIVE_MS);
const MOMENTUM_GRACE: Duration = Duration::from_millis(DAS_MOMENTUM_GRACE_MS);

// The repeat budget is signed (DAS arms it below zero), so the budget-side
// constants live here as i64.
const DAS: i64 = DAS_MS as i64;
const ARR: i64 = ARR_MS as i64;
const SOFT_DROP_ARR: i64 = SOFT_DROP_ARR_MS as i64;

/// One repeatable input axis.
#[derive(Debug, Clone, Copy, Default)]
struct AxisState {
    last_press: Option<Instant>,
    budget_ms: i64,
}

impl AxisState {
    fn held(&self, now: Instant) -> bool {
        match self.last_press {
            Some(at) => now.duration_since(at) < KEEPALIVE,
            None => false,
        }
    }

    /// Register a press. Returns true when the press is fresh (the axis was
    /// not already held) and should emit an immediate action.
    ///
    /// A fresh press normally re-arms the DAS delay, but when it lands
    /// within the momentum grace window of the previous press while the
    /// budget is still positive, the running repeat continues instead. This
    /// keeps terminal repeat-rate stutter from resetting a long slide.
    fn press(&mut self, now: Instant, das_ms: i64) -> bool {
        let fresh = !self.held(now);
        if fresh {
            let resumed = match self.last_press {
                Some(at) => now.duration_since(at) < MOMENTUM_GRACE && self.budget_ms > 0,
                None => false,
            };
            if !resumed {
                self.budget_ms = -das_ms;
            }
        }
        self.last_press = Some(now);
        fresh
    }

    /// Pay elapsed time into the budget and count the repeats it affords.
    /// A released axis (keepalive expired) accrues nothing.
    fn drain(&mut self, now: Instant, elapsed_ms: i64, arr_ms: i64) -> u32 {
        if !self.held(now) {
            return 0;
        }
        self.budget_ms += elapsed_ms;
        let mut fires = 0;
        while self.budget_ms >= arr_ms {
            self.budget_ms -= arr_ms;
            fires += 1;
        }
        fires
    }

    fn reset(&mut self) {
        self.last_press = None;
        self.budget_ms = 0;
    }
}

/// Turns raw key actions into paced game actions.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    left: AxisState,
    right: AxisState,
    down: AxisState,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one decoded key action. Repeatable actions go through the
    /// sticky model and are emitted only on a fresh press (repeats come
    /// from [`InputHandler::update`]); everything else passes through.
    pub fn handle_action(&mut self, action: GameAction, now: Instant) -> Option<GameAction> {
        match action {
            GameAction::MoveLeft => self.left.press(now, DAS).then_some(action),
            GameAction::MoveRight => self.right.press(now, DAS).then_some(action),
            // Soft drop repeats without an initial delay.
            GameAction::SoftDrop => self.down.press(now, 0).then_some(action),
            _ => Some(action),
        }
    }

    /// Advance the repeat clocks by one tick and collect the due repeats.
    pub fn update(&mut self, now: Instant, elapsed_ms: u64) -> ArrayVec<GameAction, MAX_ACTIONS_PER_TICK> {
        let elapsed = elapsed_ms as i64;
        let mut actions = ArrayVec::new();

        for _ in 0..self.left.drain(now, elapsed, ARR) {
            if actions.try_push(GameAction::MoveLeft).is_err() {
                return actions;
            }
        }
        for _ in 0..self.right.drain(now, elapsed, ARR) {
            if actions.try_push(GameAction::MoveRight).is_err() {
                return actions;
            }
        }
        for _ in 0..self.down.drain(now, elapsed, SOFT_DROP_ARR) {
            if actions.try_push(GameAction::SoftDrop).is_err() {
                return actions;
            }
        }
        actions
    }

    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
        self.down.reset();
    }
}
