//! Browser timers keyed by [`Timer`].
//!
//! Each schedule gets a generation number. Cancelling or re-scheduling a
//! timer bumps it, so a timeout that was already queued by the browser sees
//! a stale generation and does nothing when it fires.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;

use crate::effect::Timer;

#[derive(Debug, Default)]
pub struct TimerTable {
    live: HashMap<Timer, u64>,
    next_generation: u64,
}

impl TimerTable {
    /// Start `timer`, replacing any pending run of the same timer.
    pub fn schedule(&mut self, timer: Timer, delay_ms: u32, fire: impl FnOnce(Timer, u64) + 'static) {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.live.insert(timer, generation);
        Timeout::new(delay_ms, move || fire(timer, generation)).forget();
    }

    pub fn cancel(&mut self, timer: Timer) {
        self.live.remove(&timer);
    }

    /// Claim a fired timeout. Returns `false` for a stale generation.
    pub fn claim(&mut self, timer: Timer, generation: u64) -> bool {
        if self.live.get(&timer) == Some(&generation) {
            self.live.remove(&timer);
            true
        } else {
            false
        }
    }
}
