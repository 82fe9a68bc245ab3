//! Page animation controller: entrance reveals, the scroll-to-top button and
//! the hero typing loop.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::consts::{REVEAL_OFFSET_PX, REVEAL_TRANSITION, SCROLL_TOP_THRESHOLD_PX};
use crate::effect::{Effect, Target, Timer};
use crate::typing::TypingEffect;

#[must_use]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// Cards that fade in the first time they enter the viewport.
///
/// Reveals are one-way: leaving the viewport never hides a card again.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    /// Put `count` cards into their hidden, offset start state.
    pub fn prepare(&mut self, count: usize) -> Vec<Effect> {
        self.revealed = vec![false; count];
        (0..count)
            .flat_map(|index| {
                [
                    Effect::style(Target::Reveal(index), "opacity", "0"),
                    Effect::style(Target::Reveal(index), "transform", format!("translateY({REVEAL_OFFSET_PX}px)")),
                    Effect::style(Target::Reveal(index), "transition", REVEAL_TRANSITION),
                ]
            })
            .collect()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Intersection callback for one card.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        if !is_intersecting {
            return Vec::new();
        }
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                vec![
                    Effect::style(Target::Reveal(index), "opacity", "1"),
                    Effect::style(Target::Reveal(index), "transform", "translateY(0)"),
                ]
            }
            _ => Vec::new(),
        }
    }
}

/// Visibility of the floating scroll-to-top button.
#[derive(Clone, Debug, Default)]
pub struct ScrollTopButton {
    visible: Option<bool>,
}

impl ScrollTopButton {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(false)
    }

    /// Button starts hidden.
    pub fn create(&mut self) -> Vec<Effect> {
        self.visible = Some(false);
        Self::visibility_effects(false)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<Effect> {
        let visible = scroll_top_visible(scroll_y);
        if self.visible == Some(visible) {
            return Vec::new();
        }
        self.visible = Some(visible);
        Self::visibility_effects(visible)
    }

    #[must_use]
    pub fn on_click() -> Vec<Effect> {
        vec![Effect::ScrollTo { top: 0.0, smooth: true }]
    }

    fn visibility_effects(visible: bool) -> Vec<Effect> {
        let (opacity, visibility) = if visible { ("1", "visible") } else { ("0", "hidden") };
        vec![
            Effect::style(Target::ScrollTopButton, "opacity", opacity),
            Effect::style(Target::ScrollTopButton, "visibility", visibility),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct AnimationController {
    reveal: RevealSet,
    scroll_top: ScrollTopButton,
    typing: TypingEffect,
}

impl AnimationController {
    #[must_use]
    pub fn new(typing: TypingEffect) -> Self {
        Self { reveal: RevealSet::default(), scroll_top: ScrollTopButton::default(), typing }
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    #[must_use]
    pub fn scroll_top(&self) -> &ScrollTopButton {
        &self.scroll_top
    }

    #[must_use]
    pub fn typing(&self) -> &TypingEffect {
        &self.typing
    }

    /// Startup: hide cards, create the button, kick off the typing loop.
    pub fn on_load(&mut self, reveal_count: usize, viewport_width: f64, has_typing_target: bool) -> Vec<Effect> {
        let mut effects = self.reveal.prepare(reveal_count);
        effects.extend(self.scroll_top.create());
        effects.extend(self.typing.start(viewport_width, has_typing_target));
        effects
    }

    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        self.reveal.on_intersect(index, is_intersecting)
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<Effect> {
        self.scroll_top.on_scroll(scroll_y)
    }

    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::TypingTick => self.typing.tick(),
            _ => Vec::new(),
        }
    }
}
