//! Dodger: full-width walls fall toward the player, who cycles between three
//! lanes and must be in the gap when a wall reaches the player row.

use tracing::{debug, info};

use super::banner::{Countdown, GameOverScreen};
use super::Game;
use crate::config::DodgerTuning;
use crate::context::TickContext;
use crate::difficulty::DifficultyLadder;
use crate::frame::FrameBuffer;
use crate::rng::SimpleRng;
use crate::text::TitleScroller;
use crate::types::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TITLE: &str = "DODGE";

/// Column of each lane
pub const LANES: [i32; 3] = [4, 7, 10];
pub const PLAYER_ROW: i32 = 14;
pub const START_LANE: usize = 1;
pub const WALL_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgerPhase {
    Countdown,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingWall {
    /// Top of the wall; negative while still above the screen.
    pub y: f32,
    pub gap_lane: usize,
    pub scored: bool,
}

impl FallingWall {
    fn spawn(y: f32, rng: &mut SimpleRng) -> Self {
        Self {
            y,
            gap_lane: rng.next_range(LANES.len() as u32) as usize,
            scored: false,
        }
    }

    pub fn row(&self) -> i32 {
        self.y as i32
    }
}

#[derive(Debug, Clone)]
pub struct Dodger {
    tuning: DodgerTuning,
    phase: DodgerPhase,
    lane: usize,
    walls: [FallingWall; WALL_COUNT],
    ladder: DifficultyLadder,
    countdown: Countdown,
    game_over: GameOverScreen,
    title: TitleScroller,
}

impl Dodger {
    pub fn new(tuning: DodgerTuning, rng: &mut SimpleRng) -> Self {
        let spacing = tuning.spacing[0];
        let walls = std::array::from_fn(|i| FallingWall::spawn(-(i as f32) * spacing, rng));
        Self {
            tuning,
            phase: DodgerPhase::Countdown,
            lane: START_LANE,
            walls,
            ladder: DifficultyLadder::new(tuning.thresholds),
            countdown: Countdown::new(),
            game_over: GameOverScreen::new(),
            title: TitleScroller::new(),
        }
    }

    pub fn phase(&self) -> DodgerPhase {
        self.phase
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn walls(&self) -> &[FallingWall; WALL_COUNT] {
        &self.walls
    }

    pub fn level(&self) -> usize {
        self.ladder.level()
    }

    /// Test hook: place the walls directly.
    pub fn set_walls(&mut self, walls: [FallingWall; WALL_COUNT]) {
        self.walls = walls;
    }

    /// Test hook: skip the countdown.
    pub fn start_playing(&mut self) {
        self.phase = DodgerPhase::Playing;
    }

    /// Returns true if a wall hit the player this tick.
    fn step(&mut self, ctx: &mut TickContext) -> bool {
        if ctx.rising_edge() {
            self.lane = (self.lane + 1) % LANES.len();
        }

        let speed = self.ladder.pick(&self.tuning.speed);
        for wall in &mut self.walls {
            wall.y += speed;
        }

        if self
            .walls
            .iter()
            .any(|w| w.row() == PLAYER_ROW && w.gap_lane != self.lane)
        {
            return true;
        }

        for wall in &mut self.walls {
            if !wall.scored && wall.y > PLAYER_ROW as f32 {
                wall.scored = true;
                let score = ctx.score.increment();
                if self.ladder.update(score) {
                    debug!(score, level = self.ladder.level(), "dodger level up");
                }
            }
        }

        let spacing = self.ladder.pick(&self.tuning.spacing);
        for i in 0..WALL_COUNT {
            if self.walls[i].y < SCREEN_HEIGHT as f32 {
                continue;
            }
            let highest = self
                .walls
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, w)| w.y - spacing)
                .fold(0.0f32, f32::min);
            self.walls[i] = FallingWall::spawn(highest, &mut ctx.rng);
        }
        false
    }

    fn draw(&self, frame: &mut FrameBuffer) {
        for wall in &self.walls {
            let row = wall.row();
            if !(0..SCREEN_HEIGHT).contains(&row) || wall.y < 0.0 {
                continue;
            }
            let gap_x = LANES[wall.gap_lane];
            for x in (0..SCREEN_WIDTH).filter(|&x| x != gap_x) {
                frame.set(x, row, Color::Blue);
            }
        }
        frame.set(LANES[self.lane], PLAYER_ROW, Color::Green);
    }
}

impl Game for Dodger {
    fn advance(&mut self, ctx: &mut TickContext) -> bool {
        match self.phase {
            DodgerPhase::Countdown => {
                ctx.frame.set(LANES[self.lane], PLAYER_ROW, Color::Green);
                if self.countdown.tick(&mut ctx.frame) {
                    self.phase = DodgerPhase::Playing;
                }
            }
            DodgerPhase::Playing => {
                if self.step(ctx) {
                    info!(score = ctx.score.value(), "dodger over");
                    ctx.score.publish();
                    self.phase = DodgerPhase::GameOver;
                    self.game_over.enter();
                    return false;
                }
                self.draw(&mut ctx.frame);
            }
            DodgerPhase::GameOver => return self.game_over.tick(ctx),
        }
        false
    }

    fn render_title(&mut self, frame: &mut FrameBuffer) {
        self.title.draw(frame, TITLE, 5, Color::Green);
    }
}
