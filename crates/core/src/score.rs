//! Score ownership and the optional external score display.

/// One-way score notification target (e.g. a segment display or a status line).
///
/// Calls are fire-and-forget: the core never learns whether the sink succeeded.
pub trait ScoreSink {
    fn publish(&mut self, score: u32);
}

/// Sink that drops every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn publish(&mut self, _score: u32) {}
}

/// The current run's score plus its sink.
pub struct Scoreboard {
    value: u32,
    sink: Box<dyn ScoreSink>,
}

impl Scoreboard {
    pub fn new(sink: Box<dyn ScoreSink>) -> Self {
        Self { value: 0, sink }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Zero the score at the start of a run.
    pub fn reset(&mut self) {
        self.value = 0;
        self.sink.publish(self.value);
    }

    /// Add one point and return the new total.
    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.sink.publish(self.value);
        self.value
    }

    /// Push the current value to the sink without changing it.
    pub fn publish(&mut self) {
        self.sink.publish(self.value);
    }

    pub fn set_sink(&mut self, sink: Box<dyn ScoreSink>) {
        self.sink = sink;
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(Box::new(NullSink))
    }
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoreboard").field("value", &self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<u32>>>);

    impl ScoreSink for Recorder {
        fn publish(&mut self, score: u32) {
            self.0.borrow_mut().push(score);
        }
    }

    #[test]
    fn increments_and_publishes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut board = Scoreboard::new(Box::new(Recorder(log.clone())));
        board.reset();
        assert_eq!(board.increment(), 1);
        assert_eq!(board.increment(), 2);
        board.publish();
        assert_eq!(*log.borrow(), vec![0, 1, 2, 2]);
    }

    #[test]
    fn reset_zeroes() {
        let mut board = Scoreboard::default();
        board.increment();
        board.reset();
        assert_eq!(board.value(), 0);
    }
}
