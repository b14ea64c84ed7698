//! The piece state machine: spawn, movement, rotation with kicks, gravity,
//! lock delay, hold and line clears.
//!
//! Timing is injected: the frontend samples the clock once per tick and
//! threads that instant through [`GameState::apply_action`] and
//! [`GameState::tick`]. Nothing in here reads the clock, so tests drive the
//! machine with synthetic instants.

use std::time::{Duration, Instant};

use crate::core::bag::SevenBag;
use crate::core::board::Board;
use crate::core::pieces;
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, DROP_INTERVAL_FLOOR_MS,
    DROP_INTERVAL_START_MS, DROP_INTERVAL_STEP_MS, HARD_DROP_SCORE_PER_CELL, LINE_SCORES,
    LOCK_DELAY_MS,
};

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Spawn pose: rotation 0, horizontally centered, top row of the box at
    /// the top of the board.
    fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: pieces::spawn_x(kind),
            y: 0,
        }
    }
}

/// One complete game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    hold: Option<PieceKind>,
    can_hold: bool,
    next: PieceKind,
    bag: SevenBag,
    score: u32,
    lines: u32,
    drop_interval: Duration,
    last_drop: Option<Instant>,
    lock_started: Option<Instant>,
    game_over: bool,
}

impl GameState {
    pub fn new(seed: u32) -> Self {
        let mut bag = SevenBag::new(seed);
        let next = bag.draw();
        Self {
            board: Board::new(),
            active: None,
            hold: None,
            can_hold: true,
            next,
            bag,
            score: 0,
            lines: 0,
            drop_interval: Duration::from_millis(DROP_INTERVAL_START_MS),
            last_drop: None,
            lock_started: None,
            game_over: false,
        }
    }

    /// Put the first piece into play and start the gravity clock.
    pub fn start(&mut self, now: Instant) {
        self.last_drop = Some(now);
        self.spawn_next();
    }

    /// Place a piece of `kind` at its spawn pose. A blocked spawn ends the
    /// game; the board is left as-is so the final stack stays visible.
    fn spawn(&mut self, kind: PieceKind) {
        let piece = ActivePiece::spawn(kind);
        if self.board.collides(piece.kind, piece.rotation, piece.x, piece.y) {
            self.active = None;
            self.game_over = true;
            return;
        }
        self.active = Some(piece);
        self.lock_started = None;
    }

    /// Spawn the queued piece and advance the queue. Re-arms hold.
    fn spawn_next(&mut self) {
        let kind = self.next;
        self.next = self.bag.draw();
        self.can_hold = true;
        self.spawn(kind);
    }

    /// Attempt a relative move. On success while grounded the lock timer
    /// restarts, but only for lateral movement.
    fn try_move(&mut self, dx: i8, dy: i8, now: Instant) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if self.board.collides(piece.kind, piece.rotation, nx, ny) {
            return false;
        }
        self.active = Some(ActivePiece { x: nx, y: ny, ..piece });
        if dx != 0 && self.lock_started.is_some() && self.is_grounded() {
            self.lock_started = Some(now);
        }
        true
    }

    /// Attempt a rotation, trying each kick offset in table order. The
    /// first non-colliding candidate wins; a successful rotation while
    /// grounded restarts the lock timer.
    fn try_rotate(&mut self, clockwise: bool, now: Instant) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let to = if clockwise {
            piece.rotation.rotate_cw()
        } else {
            piece.rotation.rotate_ccw()
        };
        for &(dx, dy) in pieces::kick_offsets(piece.kind, piece.rotation, to) {
            let (nx, ny) = (piece.x + dx, piece.y + dy);
            if !self.board.collides(piece.kind, to, nx, ny) {
                self.active = Some(ActivePiece {
                    rotation: to,
                    x: nx,
                    y: ny,
                    ..piece
                });
                if self.lock_started.is_some() && self.is_grounded() {
                    self.lock_started = Some(now);
                }
                return true;
            }
        }
        false
    }

    /// Drop straight to the resting row and lock immediately, scoring per
    /// cell of travel.
    fn hard_drop(&mut self, now: Instant) {
        let Some(piece) = self.active else {
            return;
        };
        let target = self.ghost_y();
        let travel = (target - piece.y) as u32;
        self.score += travel * HARD_DROP_SCORE_PER_CELL;
        self.active = Some(ActivePiece { y: target, ..piece });
        self.lock(now);
    }

    /// Swap the active piece with the hold slot. Once per spawn.
    fn hold(&mut self) {
        if !self.can_hold {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };
        match self.hold.replace(piece.kind) {
            Some(stored) => self.spawn(stored),
            None => {
                let kind = self.next;
                self.next = self.bag.draw();
                self.spawn(kind);
            }
        }
        self.can_hold = false;
    }

    /// Merge the active piece into the board, clear lines, score, speed up
    /// gravity on clearing locks and bring in the next piece.
    fn lock(&mut self, now: Instant) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.merge(piece.kind, piece.rotation, piece.x, piece.y);
        self.lock_started = None;

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score += LINE_SCORES[cleared.min(4)];
            self.lines += cleared as u32;
            let floor = Duration::from_millis(DROP_INTERVAL_FLOOR_MS);
            if self.drop_interval > floor {
                self.drop_interval = (self.drop_interval
                    - Duration::from_millis(DROP_INTERVAL_STEP_MS))
                .max(floor);
            }
        }

        self.last_drop = Some(now);
        self.spawn_next();
    }

    /// Whether the active piece is resting on the floor or the stack.
    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(p) => self.board.collides(p.kind, p.rotation, p.x, p.y + 1),
            None => false,
        }
    }

    /// Row the active piece would come to rest on if dropped now.
    pub fn ghost_y(&self) -> i8 {
        let Some(piece) = self.active else {
            return 0;
        };
        let mut y = piece.y;
        while !self.board.collides(piece.kind, piece.rotation, piece.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Advance gravity and the lock timer to `now`.
    ///
    /// A grounded piece starts (or continues) its lock countdown and locks
    /// once the delay elapses; gravity is suppressed while grounded but its
    /// timestamp keeps refreshing so the piece does not instantly fall when
    /// it slides off a ledge.
    pub fn tick(&mut self, now: Instant) {
        if self.game_over || self.active.is_none() {
            return;
        }

        if self.is_grounded() {
            let started = *self.lock_started.get_or_insert(now);
            if now.duration_since(started) >= Duration::from_millis(LOCK_DELAY_MS) {
                self.lock(now);
                return;
            }
            self.last_drop = Some(now);
            return;
        }

        self.lock_started = None;
        if let Some(last) = self.last_drop {
            if now.duration_since(last) >= self.drop_interval {
                self.try_move(0, 1, now);
                self.last_drop = Some(now);
            }
        }
    }

    /// Apply one player action. After game over only `Restart` is honored.
    pub fn apply_action(&mut self, action: GameAction, now: Instant) {
        if self.game_over {
            if action == GameAction::Restart {
                self.restart(now);
            }
            return;
        }
        match action {
            GameAction::MoveLeft => {
                self.try_move(-1, 0, now);
            }
            GameAction::MoveRight => {
                self.try_move(1, 0, now);
            }
            GameAction::SoftDrop => {
                if self.try_move(0, 1, now) {
                    self.last_drop = Some(now);
                }
            }
            GameAction::HardDrop => self.hard_drop(now),
            GameAction::RotateCw => {
                self.try_rotate(true, now);
            }
            GameAction::RotateCcw => {
                self.try_rotate(false, now);
            }
            GameAction::Hold => self.hold(),
            GameAction::Restart => self.restart(now),
        }
    }

    /// Fresh game reseeded from the current RNG state, started immediately.
    pub fn restart(&mut self, now: Instant) {
        *self = GameState::new(self.bag.seed_state());
        self.start(now);
    }

    /// Fill a reusable snapshot buffer for the view layer.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                snap.board[y as usize][x as usize] = self.board.kind_at(x, y);
            }
        }
        snap.active = self.active.map(|p| ActiveSnapshot {
            kind: p.kind,
            rotation: p.rotation,
            x: p.x,
            y: p.y,
        });
        snap.ghost_y = self.ghost_y();
        snap.hold = self.hold;
        snap.next = self.next;
        snap.can_hold = self.can_hold;
        snap.score = self.score;
        snap.lines = self.lines;
        snap.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup in tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the falling piece with a fresh spawn of `kind`, bypassing
    /// the queue. Scenario setup for tests.
    pub fn spawn_piece(&mut self, kind: PieceKind) {
        self.spawn(kind);
    }

    pub fn drop_interval(&self) -> Duration {
        self.drop_interval
    }
}
