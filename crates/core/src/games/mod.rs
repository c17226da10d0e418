//! The mini-games and the contract they share.
//!
//! Each game is a plain struct implementing [`Game`]. The active one lives in
//! a [`GameSlot`], a sum type that is overwritten in place whenever a fresh
//! instance is needed, so switching games never touches the heap.
//!
//! Construction goes through [`REGISTRY`], a table of constructor function
//! pointers indexed by [`VariantKind`].

pub mod banner;
pub mod calibrator;
pub mod dodger;
pub mod runner;
pub mod stacker;

use crate::config::ArcadeConfig;
use crate::context::TickContext;
use crate::frame::FrameBuffer;
use crate::types::{VariantKind, VARIANT_COUNT};

pub use calibrator::Calibrator;
pub use dodger::Dodger;
pub use runner::Runner;
pub use stacker::Stacker;

/// What every mini-game provides to the selection screen.
pub trait Game {
    /// Run one tick of gameplay, drawing into `ctx.frame`.
    ///
    /// Returns true once the game is finished and control should go back to
    /// the title screen.
    fn advance(&mut self, ctx: &mut TickContext) -> bool;

    /// Draw the scrolling title card. Each call advances the scroll.
    fn render_title(&mut self, frame: &mut FrameBuffer);
}

/// Storage for the one live game instance.
#[derive(Debug, Clone)]
pub enum GameSlot {
    Runner(Runner),
    Dodger(Dodger),
    Stacker(Stacker),
    Calibrator(Calibrator),
}

impl GameSlot {
    /// Build a fresh instance of `kind` with no state carried over.
    pub fn create(kind: VariantKind, config: &ArcadeConfig, ctx: &mut TickContext) -> Self {
        (REGISTRY[kind.index()].create)(config, ctx)
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            GameSlot::Runner(_) => VariantKind::Runner,
            GameSlot::Dodger(_) => VariantKind::Dodger,
            GameSlot::Stacker(_) => VariantKind::Stacker,
            GameSlot::Calibrator(_) => VariantKind::Calibrator,
        }
    }

    pub fn as_runner(&self) -> Option<&Runner> {
        match self {
            GameSlot::Runner(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_dodger(&self) -> Option<&Dodger> {
        match self {
            GameSlot::Dodger(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_stacker(&self) -> Option<&Stacker> {
        match self {
            GameSlot::Stacker(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_calibrator(&self) -> Option<&Calibrator> {
        match self {
            GameSlot::Calibrator(g) => Some(g),
            _ => None,
        }
    }
}

impl Game for GameSlot {
    fn advance(&mut self, ctx: &mut TickContext) -> bool {
        match self {
            GameSlot::Runner(g) => g.advance(ctx),
            GameSlot::Dodger(g) => g.advance(ctx),
            GameSlot::Stacker(g) => g.advance(ctx),
            GameSlot::Calibrator(g) => g.advance(ctx),
        }
    }

    fn render_title(&mut self, frame: &mut FrameBuffer) {
        match self {
            GameSlot::Runner(g) => g.render_title(frame),
            GameSlot::Dodger(g) => g.render_title(frame),
            GameSlot::Stacker(g) => g.render_title(frame),
            GameSlot::Calibrator(g) => g.render_title(frame),
        }
    }
}

/// Registry entry for one selectable game.
pub struct VariantEntry {
    pub kind: VariantKind,
    pub create: fn(&ArcadeConfig, &mut TickContext) -> GameSlot,
}

/// All games in menu order; `REGISTRY[kind.index()].kind == kind`.
pub const REGISTRY: [VariantEntry; VARIANT_COUNT] = [
    VariantEntry {
        kind: VariantKind::Runner,
        create: create_runner,
    },
    VariantEntry {
        kind: VariantKind::Dodger,
        create: create_dodger,
    },
    VariantEntry {
        kind: VariantKind::Stacker,
        create: create_stacker,
    },
    VariantEntry {
        kind: VariantKind::Calibrator,
        create: create_calibrator,
    },
];

fn create_runner(config: &ArcadeConfig, ctx: &mut TickContext) -> GameSlot {
    GameSlot::Runner(Runner::new(config.runner, &mut ctx.rng))
}

fn create_dodger(config: &ArcadeConfig, ctx: &mut TickContext) -> GameSlot {
    GameSlot::Dodger(Dodger::new(config.dodger, &mut ctx.rng))
}

fn create_stacker(config: &ArcadeConfig, _ctx: &mut TickContext) -> GameSlot {
    GameSlot::Stacker(Stacker::new(config.stacker))
}

fn create_calibrator(config: &ArcadeConfig, ctx: &mut TickContext) -> GameSlot {
    GameSlot::Calibrator(Calibrator::new(config.calibrator, ctx.brightness))
}
