//! Hero subtitle typing loop.
//!
//! Types each skill label one character at a time, holds it, erases it,
//! pauses, then moves on to the next label and wraps at the end of the list.
//! Every step is one `TypingTick` timer; the loop never stops on its own.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::consts::{
    ERASING_CHAR_MS, MOBILE_BREAKPOINT_PX, TYPING_CHAR_MS, TYPING_HOLD_MS, TYPING_PAUSE_MS, TYPING_START_DELAY_MS,
};
use crate::effect::{Effect, Timer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    /// Not running: not started, narrow viewport, or nothing to type.
    Disabled,
    /// Waiting before typing the current label.
    Pausing,
    Typing,
    /// Full label shown.
    Holding,
    Erasing,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    skills: Vec<String>,
    prefix: String,
    index: usize,
    shown: usize,
    phase: TypingPhase,
}

impl TypingEffect {
    #[must_use]
    pub fn new(skills: Vec<String>, prefix: impl Into<String>) -> Self {
        Self { skills, prefix: prefix.into(), index: 0, shown: 0, phase: TypingPhase::Disabled }
    }

    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[must_use]
    pub fn current_skill(&self) -> Option<&str> {
        self.skills.get(self.index).map(String::as_str)
    }

    /// Text currently visible in the typing span.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.current_skill()
            .map(|skill| skill.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    /// Start the loop after the initial delay.
    ///
    /// Does nothing on viewports at or below the mobile breakpoint, when
    /// the hero subtitle is missing, or when there are no labels.
    pub fn start(&mut self, viewport_width: f64, has_target: bool) -> Vec<Effect> {
        if viewport_width <= MOBILE_BREAKPOINT_PX || !has_target || self.skills.is_empty() {
            return Vec::new();
        }
        if self.phase != TypingPhase::Disabled {
            return Vec::new();
        }
        self.index = 0;
        self.shown = 0;
        self.phase = TypingPhase::Pausing;
        vec![
            Effect::MountTypingTarget { prefix: self.prefix.clone() },
            Effect::schedule(Timer::TypingTick, TYPING_START_DELAY_MS),
        ]
    }

    pub fn tick(&mut self) -> Vec<Effect> {
        let Some(len) = self.current_skill().map(|skill| skill.chars().count()) else {
            return Vec::new();
        };

        match self.phase {
            TypingPhase::Disabled => Vec::new(),
            TypingPhase::Pausing => {
                self.phase = TypingPhase::Typing;
                vec![Effect::schedule(Timer::TypingTick, TYPING_CHAR_MS)]
            }
            TypingPhase::Typing => {
                self.shown = (self.shown + 1).min(len);
                let delay = if self.shown == len {
                    self.phase = TypingPhase::Holding;
                    TYPING_HOLD_MS
                } else {
                    TYPING_CHAR_MS
                };
                vec![Effect::SetTypingText(self.visible_text()), Effect::schedule(Timer::TypingTick, delay)]
            }
            TypingPhase::Holding => {
                self.phase = TypingPhase::Erasing;
                vec![Effect::schedule(Timer::TypingTick, ERASING_CHAR_MS)]
            }
            TypingPhase::Erasing => {
                self.shown = self.shown.saturating_sub(1);
                let text = self.visible_text();
                let delay = if self.shown == 0 {
                    self.index = (self.index + 1) % self.skills.len();
                    self.phase = TypingPhase::Pausing;
                    TYPING_PAUSE_MS
                } else {
                    ERASING_CHAR_MS
                };
                vec![Effect::SetTypingText(text), Effect::schedule(Timer::TypingTick, delay)]
            }
        }
    }
}
