//! Top-level driver: one call per display frame.

use crate::config::ArcadeConfig;
use crate::context::TickContext;
use crate::error::ConfigResult;
use crate::frame::FrameBuffer;
use crate::games::GameSlot;
use crate::score::ScoreSink;
use crate::selection::{Screen, Selector};
use crate::types::VariantKind;

/// The whole arcade: shared tick state plus the title/game lifecycle.
///
/// The host samples the button, calls [`Console::tick`], and pushes the
/// returned frame to the display. After construction a tick never allocates.
///
/// ```
/// use pixel_arcade_core::{ArcadeConfig, Console, Screen};
///
/// let mut console = Console::new(ArcadeConfig::default(), 42);
/// console.tick(true);
/// console.tick(false);
/// assert_eq!(console.screen(), Screen::Playing);
/// ```
#[derive(Debug)]
pub struct Console {
    config: ArcadeConfig,
    ctx: TickContext,
    selector: Selector,
}

impl Console {
    /// Build a console from a config that has already passed
    /// [`ArcadeConfig::validate`]. Use [`Console::try_new`] for anything
    /// assembled by hand.
    pub fn new(config: ArcadeConfig, seed: u32) -> Self {
        debug_assert!(config.validate().is_ok(), "Console::new given an invalid config");
        let mut ctx = TickContext::new(seed);
        ctx.brightness = config.calibrator.initial_brightness;
        let selector = Selector::new(VariantKind::Runner, &config, &mut ctx);
        Self {
            config,
            ctx,
            selector,
        }
    }

    /// Validate `config`, then build the console.
    pub fn try_new(config: ArcadeConfig, seed: u32) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::new(config, seed))
    }

    /// Mirror every score change to `sink`.
    pub fn with_score_sink(mut self, sink: Box<dyn ScoreSink>) -> Self {
        self.ctx.score.set_sink(sink);
        self
    }

    /// Start on `kind`'s title card instead of the first game.
    pub fn with_selection(mut self, kind: VariantKind) -> Self {
        self.selector.select(kind, &self.config, &mut self.ctx);
        self
    }

    /// Advance one frame with the current button level.
    pub fn tick(&mut self, pressed: bool) -> &FrameBuffer {
        self.ctx.button.sample(pressed);
        self.ctx.frame.clear();
        self.selector.tick(&self.config, &mut self.ctx);
        &self.ctx.frame
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.ctx.frame
    }

    pub fn score(&self) -> u32 {
        self.ctx.score.value()
    }

    pub fn selection(&self) -> VariantKind {
        self.selector.selection()
    }

    pub fn screen(&self) -> Screen {
        self.selector.screen()
    }

    /// Display brightness requested by the Calibrator
    pub fn brightness(&self) -> u8 {
        self.ctx.brightness
    }

    pub fn game(&self) -> &GameSlot {
        self.selector.game()
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    pub fn context(&self) -> &TickContext {
        &self.ctx
    }
}
