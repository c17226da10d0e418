use std::cell::Cell;
use std::rc::Rc;

use pixel_arcade::core::games::dodger::DodgerPhase;
use pixel_arcade::core::games::runner::RunnerPhase;
use pixel_arcade::core::games::stacker::StackerPhase;
use pixel_arcade::core::{ArcadeConfig, Console, ScoreSink, Screen};
use pixel_arcade::types::{VariantKind, GAME_OVER_INPUT_DELAY_TICKS, LONG_PRESS_TICKS};

fn console() -> Console {
    Console::new(ArcadeConfig::default(), 7)
}

fn tap(console: &mut Console) {
    console.tick(true);
    console.tick(false);
}

fn hold(console: &mut Console, ticks: u32) {
    for _ in 0..ticks {
        console.tick(true);
    }
    console.tick(false);
}

/// Idle until `done` holds, failing after `limit` ticks.
fn idle_until(console: &mut Console, limit: u32, done: impl Fn(&Console) -> bool) {
    for _ in 0..limit {
        if done(console) {
            return;
        }
        console.tick(false);
    }
    panic!("condition not reached within {} ticks", limit);
}

struct Recorder(Rc<Cell<Option<u32>>>);

impl ScoreSink for Recorder {
    fn publish(&mut self, score: u32) {
        self.0.set(Some(score));
    }
}

#[test]
fn boots_on_runner_title() {
    let c = console();
    assert_eq!(c.screen(), Screen::Title);
    assert_eq!(c.selection(), VariantKind::Runner);
    assert_eq!(c.brightness(), 16);
}

#[test]
fn title_text_scrolls_into_view() {
    let mut c = console();
    for _ in 0..10 {
        c.tick(false);
    }
    assert!(c.frame().lit_count() > 0);
}

#[test]
fn short_press_starts_selected_game() {
    let mut c = console();
    c.tick(true);
    assert_eq!(c.screen(), Screen::Title);
    c.tick(false);
    assert_eq!(c.screen(), Screen::Playing);
    let runner = c.game().as_runner().expect("runner");
    assert_eq!(runner.phase(), RunnerPhase::Countdown);
}

#[test]
fn long_press_cycles_on_threshold_tick() {
    let mut c = console();
    for _ in 0..LONG_PRESS_TICKS - 1 {
        c.tick(true);
    }
    assert_eq!(c.selection(), VariantKind::Runner);
    c.tick(true);
    assert_eq!(c.selection(), VariantKind::Dodger);

    // Holding longer does not cycle again, and releasing does not start.
    for _ in 0..3 * LONG_PRESS_TICKS {
        c.tick(true);
    }
    c.tick(false);
    assert_eq!(c.selection(), VariantKind::Dodger);
    assert_eq!(c.screen(), Screen::Title);
}

#[test]
fn four_long_presses_return_to_first_variant() {
    let mut c = console();
    let mut seen = Vec::new();
    for _ in 0..4 {
        hold(&mut c, LONG_PRESS_TICKS);
        seen.push(c.selection());
    }
    assert_eq!(
        seen,
        vec![
            VariantKind::Dodger,
            VariantKind::Stacker,
            VariantKind::Calibrator,
            VariantKind::Runner
        ]
    );
    assert_eq!(c.screen(), Screen::Title);
}

#[test]
fn runner_without_jumping_crashes_into_first_wall() {
    let published = Rc::new(Cell::new(None));
    let mut c = console().with_score_sink(Box::new(Recorder(Rc::clone(&published))));
    tap(&mut c);
    assert_eq!(published.get(), Some(0));

    idle_until(&mut c, 1_000, |c| {
        c.game().as_runner().map(|r| r.phase()) == Some(RunnerPhase::GameOver)
    });
    assert_eq!(c.score(), 0);
    assert_eq!(published.get(), Some(0));
    assert_eq!(c.screen(), Screen::Playing);
}

#[test]
fn game_over_ignores_early_presses() {
    let mut c = console();
    tap(&mut c);
    idle_until(&mut c, 1_000, |c| {
        c.game().as_runner().map(|r| r.phase()) == Some(RunnerPhase::GameOver)
    });

    tap(&mut c);
    assert_eq!(c.screen(), Screen::Playing);

    for _ in 0..GAME_OVER_INPUT_DELAY_TICKS {
        c.tick(false);
    }
    c.tick(true);
    assert_eq!(c.screen(), Screen::Title);
    assert_eq!(c.selection(), VariantKind::Runner);

    // The press that left game over must not also start a new run.
    c.tick(false);
    assert_eq!(c.screen(), Screen::Title);
}

#[test]
fn dodger_idle_in_middle_lane_eventually_dies() {
    let mut c = console().with_selection(VariantKind::Dodger);
    tap(&mut c);
    assert_eq!(c.game().as_dodger().map(|d| d.lane()), Some(1));
    idle_until(&mut c, 20_000, |c| {
        c.game().as_dodger().map(|d| d.phase()) == Some(DodgerPhase::GameOver)
    });
    assert_eq!(c.screen(), Screen::Playing);
}

#[test]
fn dodger_press_switches_lane() {
    let mut c = console().with_selection(VariantKind::Dodger);
    tap(&mut c);
    idle_until(&mut c, 500, |c| {
        c.game().as_dodger().map(|d| d.phase()) == Some(DodgerPhase::Playing)
    });
    tap(&mut c);
    assert_eq!(c.game().as_dodger().map(|d| d.lane()), Some(2));
    tap(&mut c);
    assert_eq!(c.game().as_dodger().map(|d| d.lane()), Some(0));
}

#[test]
fn stacker_overflows_when_left_alone() {
    let mut c = console().with_selection(VariantKind::Stacker);
    tap(&mut c);
    idle_until(&mut c, 20_000, |c| {
        c.game().as_stacker().map(|s| s.phase()) == Some(StackerPhase::GameOver)
    });
    assert_eq!(c.score(), 0);
}

#[test]
fn stacker_press_fires_projectile() {
    let mut c = console().with_selection(VariantKind::Stacker);
    tap(&mut c);
    c.tick(true);
    let stacker = c.game().as_stacker().expect("stacker");
    assert_eq!(stacker.active_projectiles(), 1);
}

#[test]
fn calibrator_cycles_brightness_and_exits_on_long_press() {
    let mut c = console().with_selection(VariantKind::Calibrator);
    tap(&mut c);
    assert_eq!(c.screen(), Screen::Playing);

    let mut levels = Vec::new();
    for _ in 0..5 {
        tap(&mut c);
        levels.push(c.brightness());
    }
    assert_eq!(levels, vec![32, 64, 128, 255, 0]);

    // The start of the long press is also a rising edge.
    for _ in 0..LONG_PRESS_TICKS {
        c.tick(true);
    }
    assert_eq!(c.screen(), Screen::Title);
    assert_eq!(c.selection(), VariantKind::Calibrator);
    assert_eq!(c.brightness(), 4);

    // The still-held button neither cycles nor starts anything.
    for _ in 0..2 * LONG_PRESS_TICKS {
        c.tick(true);
    }
    c.tick(false);
    assert_eq!(c.selection(), VariantKind::Calibrator);
    assert_eq!(c.screen(), Screen::Title);
}

#[test]
fn brightness_survives_switching_games() {
    let mut c = console().with_selection(VariantKind::Calibrator);
    tap(&mut c);
    tap(&mut c);
    assert_eq!(c.brightness(), 32);
    hold(&mut c, LONG_PRESS_TICKS);
    assert_eq!(c.screen(), Screen::Title);
    assert_eq!(c.brightness(), 64);

    hold(&mut c, LONG_PRESS_TICKS);
    assert_eq!(c.selection(), VariantKind::Runner);
    tap(&mut c);
    assert_eq!(c.screen(), Screen::Playing);
    assert_eq!(c.brightness(), 64);
}

#[test]
fn same_seed_and_input_give_same_frames() {
    let script = |c: &mut Console| {
        let mut frames = Vec::new();
        for i in 0..600u32 {
            let pressed = i % 37 < 3 || (i > 300 && i % 11 == 0);
            frames.push(c.tick(pressed).clone());
        }
        frames
    };
    let mut a = console().with_selection(VariantKind::Dodger);
    let mut b = console().with_selection(VariantKind::Dodger);
    assert_eq!(script(&mut a), script(&mut b));
}
