//! Deterministic timer harness for controller tests.

use crate::effect::{Effect, Timer};

/// Virtual clock that executes `Schedule`/`Cancel` effects.
///
/// Mirrors the browser host: one pending timeout per [`Timer`] value, and a
/// re-schedule replaces the pending one.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now_ms: u64,
    seq: u64,
    pending: Vec<(u64, u64, Timer)>,
    /// Every non-timer effect applied so far, with the time it was applied.
    pub log: Vec<(u64, Effect)>,
}

impl VirtualClock {
    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.iter().any(|(_, _, t)| *t == timer)
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { timer, delay_ms } => {
                    self.pending.retain(|(_, _, t)| *t != timer);
                    self.seq += 1;
                    self.pending.push((self.now_ms + u64::from(delay_ms), self.seq, timer));
                }
                Effect::Cancel(timer) => self.pending.retain(|(_, _, t)| *t != timer),
                other => self.log.push((self.now_ms, other)),
            }
        }
    }

    /// Fire the earliest pending timer, advancing the clock to its due time.
    pub fn fire_next(&mut self, mut handler: impl FnMut(Timer) -> Vec<Effect>) -> Option<Timer> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(pos, _)| pos)?;
        let (due, _, timer) = self.pending.remove(pos);
        self.now_ms = due;
        let effects = handler(timer);
        self.apply(effects);
        Some(timer)
    }

    /// Fire every timer due at or before `until_ms`, then move the clock there.
    pub fn run_until(&mut self, until_ms: u64, mut handler: impl FnMut(Timer) -> Vec<Effect>) {
        while self.pending.iter().any(|(due, _, _)| *due <= until_ms) {
            self.fire_next(&mut handler);
        }
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Non-timer effects applied at or after `since_ms`.
    pub fn effects_since(&self, since_ms: u64) -> Vec<&Effect> {
        self.log.iter().filter(|(at, _)| *at >= since_ms).map(|(_, e)| e).collect()
    }
}
