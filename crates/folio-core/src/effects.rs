//! Tick-driven presentation effects.
//!
//! Both effects are pure state machines; the web crate drives them from
//! timers and drops the timer when the owning component unmounts.

/// Reveals a string one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    full: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(full: &'static str) -> Self {
        Self { full, shown: 0 }
    }

    /// Reveal the next character; returns `false` once everything is shown.
    pub fn tick(&mut self) -> bool {
        match self.full[self.byte_offset()..].chars().next() {
            Some(_) => {
                self.shown += 1;
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &'static str {
        &self.full[..self.byte_offset()]
    }

    pub fn is_done(&self) -> bool {
        self.byte_offset() == self.full.len()
    }

    fn byte_offset(&self) -> usize {
        self.full
            .char_indices()
            .nth(self.shown)
            .map_or(self.full.len(), |(i, _)| i)
    }
}

/// Counts from zero up to a target, one step per tick, after a start delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    value: u32,
    started: bool,
}

impl CounterAnimation {
    pub const START_DELAY_MS: u32 = 300;
    pub const STEP_MS: u32 = 100;

    pub fn new(target: u32) -> Self {
        Self {
            target,
            value: 0,
            started: false,
        }
    }

    /// Mark the trigger; only the first call counts.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Advance one step; returns `false` before `start` and once the
    /// target is reached.
    pub fn tick(&mut self) -> bool {
        if self.started && self.value < self.target {
            self.value += 1;
            true
        } else {
            false
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }
}
