//! Stacker: a wall of blocks creeps down from the top while the player shoots
//! single blocks upward to plug the gaps.
//!
//! # Rules
//!
//! - The field is a [`BitGrid`]; every `shift_interval` ticks it moves down one
//!   row and a new top row appears with `gaps_per_row` random holes. If the
//!   bottom row holds anything when a shift is due, the run is over.
//! - The player walks right along the bottom row, wrapping at the edge.
//! - A press fires a projectile from just above the player. It rises until it
//!   hits a filled cell or leaves the top, then settles in the cell below.
//! - Settling a block that completes a row scores a point and freezes the
//!   game for a short hold; when the hold ends that row and everything under
//!   it is cleared.

use tracing::{debug, info};

use super::banner::GameOverScreen;
use super::Game;
use crate::bitgrid::BitGrid;
use crate::config::StackerTuning;
use crate::context::TickContext;
use crate::difficulty::DifficultyLadder;
use crate::frame::FrameBuffer;
use crate::rng::SimpleRng;
use crate::text::TitleScroller;
use crate::types::{Color, LINE_CLEAR_HOLD_TICKS, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TITLE: &str = "STACK";

pub const PLAYER_ROW: i32 = SCREEN_HEIGHT - 1;
pub const PLAYER_START_X: i32 = SCREEN_WIDTH / 2;
/// Row a new projectile starts on
pub const FIRE_ROW: i32 = PLAYER_ROW - 1;
pub const PROJECTILE_POOL: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackerPhase {
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

/// A completed row waiting out its hold before being cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub row: i32,
    pub ticks_left: u32,
}

#[derive(Debug, Clone)]
pub struct Stacker {
    tuning: StackerTuning,
    phase: StackerPhase,
    grid: BitGrid,
    player_x: i32,
    player_timer: u32,
    shift_timer: u32,
    projectiles: [Projectile; PROJECTILE_POOL],
    pending_clear: Option<PendingClear>,
    ladder: DifficultyLadder,
    game_over: GameOverScreen,
    title: TitleScroller,
}

impl Stacker {
    pub fn new(tuning: StackerTuning) -> Self {
        Self {
            tuning,
            phase: StackerPhase::Playing,
            grid: BitGrid::new(),
            player_x: PLAYER_START_X,
            player_timer: 0,
            shift_timer: 0,
            projectiles: [Projectile::default(); PROJECTILE_POOL],
            pending_clear: None,
            ladder: DifficultyLadder::new(tuning.thresholds),
            game_over: GameOverScreen::new(),
            title: TitleScroller::new(),
        }
    }

    pub fn phase(&self) -> StackerPhase {
        self.phase
    }

    pub fn grid(&self) -> &BitGrid {
        &self.grid
    }

    /// Test hook: edit the field directly.
    pub fn grid_mut(&mut self) -> &mut BitGrid {
        &mut self.grid
    }

    pub fn player_x(&self) -> i32 {
        self.player_x
    }

    pub fn projectiles(&self) -> &[Projectile; PROJECTILE_POOL] {
        &self.projectiles
    }

    pub fn active_projectiles(&self) -> usize {
        self.projectiles.iter().filter(|p| p.active).count()
    }

    pub fn pending_clear(&self) -> Option<PendingClear> {
        self.pending_clear
    }

    pub fn level(&self) -> usize {
        self.ladder.level()
    }

    /// Returns false when the field has reached the floor.
    fn shift_field(&mut self, rng: &mut SimpleRng) -> bool {
        if !self.grid.is_row_empty(SCREEN_HEIGHT - 1) {
            return false;
        }
        self.grid.shift_down();

        let gaps = self.ladder.pick(&self.tuning.gaps_per_row) as usize;
        let gaps = gaps.min(SCREEN_WIDTH as usize);
        let mut columns: [u8; SCREEN_WIDTH as usize] = std::array::from_fn(|i| i as u8);
        rng.partial_shuffle(&mut columns, gaps);
        self.grid.fill_row_with_gaps(0, &columns[..gaps]);
        true
    }

    fn fire(&mut self) {
        let x = self.player_x;
        match self.projectiles.iter_mut().find(|p| !p.active) {
            Some(slot) => {
                *slot = Projectile {
                    x,
                    y: FIRE_ROW,
                    active: true,
                }
            }
            None => debug!("projectile pool full"),
        }
    }

    fn step_projectiles(&mut self, ctx: &mut TickContext) {
        for i in 0..PROJECTILE_POOL {
            let p = self.projectiles[i];
            if !p.active {
                continue;
            }
            if p.y >= 0 && !self.grid.get(p.x, p.y) {
                self.projectiles[i].y -= 1;
                continue;
            }

            self.projectiles[i].active = false;
            let rest = p.y + 1;
            if rest < SCREEN_HEIGHT {
                self.grid.set(p.x, rest, true);
                if self.grid.is_row_full(rest) {
                    self.complete_row(rest, ctx);
                }
            }
        }
    }

    fn complete_row(&mut self, row: i32, ctx: &mut TickContext) {
        let score = ctx.score.increment();
        if self.ladder.update(score) {
            debug!(score, level = self.ladder.level(), "stacker level up");
        }
        // Rows completed together clear together from the topmost one down.
        let row = match self.pending_clear {
            Some(pending) => pending.row.min(row),
            None => row,
        };
        self.pending_clear = Some(PendingClear {
            row,
            ticks_left: LINE_CLEAR_HOLD_TICKS,
        });
    }

    /// Returns false when the run has ended.
    fn step(&mut self, ctx: &mut TickContext) -> bool {
        if let Some(pending) = self.pending_clear.as_mut() {
            pending.ticks_left = pending.ticks_left.saturating_sub(1);
            if pending.ticks_left == 0 {
                self.grid.clear_from(pending.row);
                self.pending_clear = None;
            }
            return true;
        }

        self.player_timer += 1;
        if self.player_timer >= self.ladder.pick(&self.tuning.player_interval) {
            self.player_timer = 0;
            self.player_x = (self.player_x + 1) % SCREEN_WIDTH;
        }

        self.shift_timer += 1;
        if self.shift_timer >= self.ladder.pick(&self.tuning.shift_interval) {
            self.shift_timer = 0;
            if !self.shift_field(&mut ctx.rng) {
                return false;
            }
        }

        if ctx.rising_edge() {
            self.fire();
        }
        self.step_projectiles(ctx);
        true
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        let held_row = self.pending_clear.map(|p| p.row);
        for y in 0..SCREEN_HEIGHT {
            let color = if held_row == Some(y) {
                Color::Yellow
            } else {
                Color::White
            };
            for x in 0..SCREEN_WIDTH {
                if self.grid.get(x, y) {
                    frame.set(x, y, color);
                }
            }
        }
        for p in self.projectiles.iter().filter(|p| p.active) {
            frame.set(p.x, p.y, Color::Blue);
        }
        frame.set(self.player_x, PLAYER_ROW, Color::Green);
    }
}

impl Game for Stacker {
    fn advance(&mut self, ctx: &mut TickContext) -> bool {
        match self.phase {
            StackerPhase::Playing => {
                if !self.step(ctx) {
                    info!(score = ctx.score.value(), "stacker over");
                    ctx.score.publish();
                    self.phase = StackerPhase::GameOver;
                    self.game_over.enter();
                    return false;
                }
                self.draw(&mut ctx.frame);
                false
            }
            StackerPhase::GameOver => self.game_over.tick(ctx),
        }
    }

    fn render_title(&mut self, frame: &mut FrameBuffer) {
        self.title.draw(frame, TITLE, 5, Color::Blue);
    }
}
