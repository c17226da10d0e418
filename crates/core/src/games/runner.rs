//! Runner: jump over walls scrolling in from the right.
//!
//! The player sits in a fixed column and only moves vertically under gravity.
//! Holding the button while on the ground starts a jump. Walls are two columns
//! wide and stand on the bottom edge; each one passed scores a point.

use tracing::{debug, info};

use super::banner::{Countdown, GameOverScreen};
use super::Game;
use crate::config::RunnerTuning;
use crate::context::TickContext;
use crate::difficulty::DifficultyLadder;
use crate::frame::FrameBuffer;
use crate::rng::SimpleRng;
use crate::text::TitleScroller;
use crate::types::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TITLE: &str = "JUMP";

pub const PLAYER_X: i32 = 3;
pub const PLAYER_START_Y: f32 = 8.0;
pub const GRAVITY: f32 = 0.15;
pub const JUMP_VELOCITY: f32 = -1.5;
/// Lowest y at which the player counts as standing on the ground.
pub const GROUND_Y: f32 = (SCREEN_HEIGHT - 2) as f32;
pub const WALL_COUNT: usize = 2;
pub const WALL_WIDTH: i32 = 2;
pub const MIN_WALL_HEIGHT: i32 = 2;

const MAX_Y: f32 = (SCREEN_HEIGHT - 1) as f32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerPhase {
    Countdown,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    /// Left edge; fractional while scrolling.
    pub x: f32,
    pub height: i32,
    pub scored: bool,
}

impl Wall {
    fn left(&self) -> i32 {
        self.x as i32
    }

    /// Whether column `col` is covered by this wall at row `row`.
    pub fn covers(&self, col: i32, row: i32) -> bool {
        let left = self.left();
        (left..left + WALL_WIDTH).contains(&col) && row >= SCREEN_HEIGHT - self.height
    }
}

#[derive(Debug, Clone)]
pub struct Runner {
    tuning: RunnerTuning,
    phase: RunnerPhase,
    player_y: f32,
    velocity: f32,
    walls: [Wall; WALL_COUNT],
    ladder: DifficultyLadder,
    countdown: Countdown,
    game_over: GameOverScreen,
    title: TitleScroller,
}

impl Runner {
    pub fn new(tuning: RunnerTuning, rng: &mut SimpleRng) -> Self {
        let first_gap = tuning.min_spacing[0] + WALL_WIDTH;
        let max_height = tuning.max_wall_height[0];
        let walls = std::array::from_fn(|i| Wall {
            x: (SCREEN_WIDTH + i as i32 * first_gap) as f32,
            height: rng.range_inclusive(MIN_WALL_HEIGHT, max_height),
            scored: false,
        });

        Self {
            tuning,
            phase: RunnerPhase::Countdown,
            player_y: PLAYER_START_Y,
            velocity: 0.0,
            walls,
            ladder: DifficultyLadder::new(tuning.thresholds),
            countdown: Countdown::new(),
            game_over: GameOverScreen::new(),
            title: TitleScroller::new(),
        }
    }

    pub fn phase(&self) -> RunnerPhase {
        self.phase
    }

    pub fn player_y(&self) -> f32 {
        self.player_y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn walls(&self) -> &[Wall; WALL_COUNT] {
        &self.walls
    }

    pub fn level(&self) -> usize {
        self.ladder.level()
    }

    /// Test hook: place the walls directly.
    pub fn set_walls(&mut self, walls: [Wall; WALL_COUNT]) {
        self.walls = walls;
    }

    /// Test hook: skip the countdown.
    pub fn start_playing(&mut self) {
        self.phase = RunnerPhase::Playing;
    }

    fn step_player(&mut self, pressed: bool) {
        if pressed && self.player_y >= GROUND_Y {
            self.velocity = JUMP_VELOCITY;
        }
        self.velocity += GRAVITY;
        self.player_y += self.velocity;

        if self.player_y < 0.0 {
            self.player_y = 0.0;
            self.velocity = 0.0;
        }
        if self.player_y > MAX_Y {
            self.player_y = MAX_Y;
            self.velocity = 0.0;
        }
    }

    fn step_walls(&mut self, rng: &mut SimpleRng) {
        let speed = self.ladder.pick(&self.tuning.speed);
        for i in 0..WALL_COUNT {
            self.walls[i].x -= speed;
            if self.walls[i].x + WALL_WIDTH as f32 >= 0.0 {
                continue;
            }

            // Respawn behind the rightmost wall.
            let rightmost = self
                .walls
                .iter()
                .map(|w| w.x)
                .fold(0.0f32, f32::max);
            let spacing = rng.range_inclusive(
                self.ladder.pick(&self.tuning.min_spacing),
                self.ladder.pick(&self.tuning.max_spacing),
            );
            let height = rng.range_inclusive(
                MIN_WALL_HEIGHT,
                self.ladder.pick(&self.tuning.max_wall_height),
            );
            self.walls[i] = Wall {
                x: rightmost + spacing as f32,
                height,
                scored: false,
            };
        }
    }

    fn award_points(&mut self, ctx: &mut TickContext) {
        for wall in &mut self.walls {
            if !wall.scored && wall.x + (WALL_WIDTH as f32) < PLAYER_X as f32 {
                wall.scored = true;
                let score = ctx.score.increment();
                if self.ladder.update(score) {
                    debug!(score, level = self.ladder.level(), "runner level up");
                }
            }
        }
    }

    /// Whether the player is touching a wall or has left the field.
    pub fn collides(&self) -> bool {
        let row = self.player_y as i32;
        if !(0..SCREEN_HEIGHT).contains(&row) {
            return true;
        }
        self.walls.iter().any(|w| w.covers(PLAYER_X, row))
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        for wall in &self.walls {
            let left = wall.left();
            for x in left..left + WALL_WIDTH {
                for y in SCREEN_HEIGHT - wall.height..SCREEN_HEIGHT {
                    frame.set(x, y, Color::Red);
                }
            }
        }
        draw_player(frame, self.player_y);
    }
}

impl Game for Runner {
    fn advance(&mut self, ctx: &mut TickContext) -> bool {
        match self.phase {
            RunnerPhase::Countdown => {
                draw_player(&mut ctx.frame, self.player_y);
                if self.countdown.tick(&mut ctx.frame) {
                    self.phase = RunnerPhase::Playing;
                }
            }
            RunnerPhase::Playing => {
                self.step_player(ctx.pressed());
                self.step_walls(&mut ctx.rng);
                self.award_points(ctx);

                if self.collides() {
                    info!(score = ctx.score.value(), "runner over");
                    ctx.score.publish();
                    self.phase = RunnerPhase::GameOver;
                    self.game_over.enter();
                    return false;
                }
                self.draw(&mut ctx.frame);
            }
            RunnerPhase::GameOver => return self.game_over.tick(ctx),
        }
        false
    }

    fn render_title(&mut self, frame: &mut FrameBuffer) {
        self.title.draw(frame, TITLE, 5, Color::Yellow);
    }
}

fn draw_player(frame: &mut FrameBuffer, y: f32) {
    frame.set(PLAYER_X, y as i32, Color::Yellow);
}
