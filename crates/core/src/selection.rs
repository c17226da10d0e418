//! Title screen and game lifecycle.
//!
//! On the title screen a long press (held for [`LONG_PRESS_TICKS`]) moves to
//! the next game and a short press starts the one shown. While playing, every
//! tick goes to the game until it asks to come back.
//!
//! [`LONG_PRESS_TICKS`]: crate::types::LONG_PRESS_TICKS

use tracing::{debug, info};

use crate::config::ArcadeConfig;
use crate::context::TickContext;
use crate::games::{Game, GameSlot};
use crate::input::{PressEvent, PressTracker};
use crate::types::VariantKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Playing,
}

/// Which game is selected, whether it is running, and its live instance.
#[derive(Debug, Clone)]
pub struct Selector {
    selection: VariantKind,
    screen: Screen,
    game: GameSlot,
}

impl Selector {
    pub fn new(selection: VariantKind, config: &ArcadeConfig, ctx: &mut TickContext) -> Self {
        let mut selector = Self {
            selection,
            screen: Screen::Title,
            game: GameSlot::create(selection, config, ctx),
        };
        selector.enter_title(config, ctx);
        selector
    }

    pub fn selection(&self) -> VariantKind {
        self.selection
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameSlot {
        &self.game
    }

    /// Jump straight to `kind` on the title screen.
    pub fn select(&mut self, kind: VariantKind, config: &ArcadeConfig, ctx: &mut TickContext) {
        self.selection = kind;
        self.enter_title(config, ctx);
    }

    /// Run one tick. Input must already be sampled and the frame cleared.
    pub fn tick(&mut self, config: &ArcadeConfig, ctx: &mut TickContext) {
        match self.screen {
            Screen::Title => self.title_tick(config, ctx),
            Screen::Playing => {
                if self.game.advance(ctx) {
                    info!(variant = self.selection.as_str(), "back to title");
                    self.enter_title(config, ctx);
                }
            }
        }
    }

    fn title_tick(&mut self, config: &ArcadeConfig, ctx: &mut TickContext) {
        let event = ctx.press.update(ctx.pressed());
        if event == PressEvent::LongPress {
            self.selection = self.selection.next();
            self.game = GameSlot::create(self.selection, config, ctx);
            debug!(variant = self.selection.as_str(), "selection changed");
        }

        self.game.render_title(&mut ctx.frame);

        if event == PressEvent::ShortPress {
            ctx.score.reset();
            self.screen = Screen::Playing;
            info!(variant = self.selection.as_str(), "game started");
        }
    }

    /// Fresh instance of the selected game, with a held button ignored until release.
    fn enter_title(&mut self, config: &ArcadeConfig, ctx: &mut TickContext) {
        ctx.press = PressTracker::new();
        if ctx.pressed() {
            ctx.press.ignore_until_release();
        }
        self.game = GameSlot::create(self.selection, config, ctx);
        self.screen = Screen::Title;
    }
}
