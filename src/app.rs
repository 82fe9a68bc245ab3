//! Page core: owns the three controllers and routes page events to them.
//!
//! Separated from the `dom` host so it can be tested without WASM/browser
//! dependencies. Inputs that come from the live page (scroll offset,
//! viewport width, section geometry, field values) are passed in by the
//! host; outputs are [`Effect`]s.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::animation::{AnimationController, ScrollTopButton};
use crate::config::PortfolioConfig;
use crate::effect::{Effect, Timer};
use crate::form::{ContactDraft, FormController};
use crate::keys::{ControlKind, enter_key_action, press_link, restore_link, wants_press_feedback};
use crate::nav::{NavController, Section};
use crate::typing::TypingEffect;

/// Coalesces scroll events to at most one frame callback per rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGuard {
    ticking: bool,
}

impl FrameGuard {
    /// Returns `true` when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn release(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub fn is_ticking(self) -> bool {
        self.ticking
    }
}

/// Measurements the host reads from the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub scroll_y: f64,
}

#[derive(Clone, Debug)]
pub struct App {
    config: PortfolioConfig,
    nav: NavController,
    form: FormController,
    animation: AnimationController,
    frame: FrameGuard,
}

impl App {
    #[must_use]
    pub fn new(config: PortfolioConfig) -> Self {
        let nav = NavController::new(config.navbar_solid.clone(), config.navbar_translucent.clone());
        let form = FormController::new(config.recipient.clone());
        let typing = TypingEffect::new(config.skills.clone(), config.typing_prefix.clone());
        Self { nav, form, animation: AnimationController::new(typing), frame: FrameGuard::default(), config }
    }

    #[must_use]
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    #[must_use]
    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    #[must_use]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    #[must_use]
    pub fn frame(&self) -> FrameGuard {
        self.frame
    }

    /// `DOMContentLoaded`: initial state for every controller.
    ///
    /// The navbar keeps its stylesheet background until the first scroll
    /// frame.
    pub fn on_load(
        &mut self,
        viewport: Viewport,
        sections: &[Section],
        reveal_count: usize,
        has_typing_target: bool,
    ) -> Vec<Effect> {
        let mut effects = self.animation.on_load(reveal_count, viewport.width, has_typing_target);
        effects.extend(self.nav.update_active_nav_link(viewport.scroll_y, sections));
        effects
    }

    /// Raw scroll event. Button visibility is immediate; link and navbar
    /// work waits for the next frame.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<Effect> {
        let mut effects = self.animation.on_scroll(scroll_y);
        if self.frame.request() {
            effects.push(Effect::RequestFrame);
        }
        effects
    }

    /// Animation-frame callback requested by [`App::on_scroll`].
    pub fn on_frame(&mut self, scroll_y: f64, sections: &[Section]) -> Vec<Effect> {
        let mut effects = self.nav.update_active_nav_link(scroll_y, sections);
        effects.extend(self.nav.handle_navbar_scroll(scroll_y));
        self.frame.release();
        effects
    }

    pub fn on_nav_toggle(&mut self) -> Vec<Effect> {
        self.nav.toggle_mobile_menu()
    }

    /// Click on an in-page anchor; `section_top` is the target's offset if
    /// the target exists.
    pub fn on_anchor_click(&mut self, section_top: Option<f64>) -> Vec<Effect> {
        self.nav.smooth_scroll(section_top)
    }

    pub fn on_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> Vec<Effect> {
        self.nav.handle_document_click(inside_menu, inside_toggle)
    }

    pub fn on_resize(&mut self, width: f64) -> Vec<Effect> {
        self.nav.handle_resize(width)
    }

    pub fn on_submit(&mut self, draft: ContactDraft) -> Vec<Effect> {
        self.form.submit(draft)
    }

    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        self.animation.on_intersect(index, is_intersecting)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn on_scroll_top_click(&self) -> Vec<Effect> {
        ScrollTopButton::on_click()
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn on_enter_key(&self, controls: &[ControlKind], index: usize) -> Vec<Effect> {
        enter_key_action(controls, index).into_iter().collect()
    }

    /// Click on external link `index`; `clicked_tag` is the tag name of the
    /// event target, which may be a child of the link.
    #[must_use]
    pub fn on_link_click(&self, index: usize, clicked_tag: &str, href: &str, has_target: bool) -> Vec<Effect> {
        if wants_press_feedback(clicked_tag, href, has_target, &self.config.pressed_link_hosts) {
            press_link(index)
        } else {
            Vec::new()
        }
    }

    /// A scheduled timer fired.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        match timer {
            Timer::SubmitComplete | Timer::OpenMailto | Timer::BannerExpire(_) | Timer::BannerRemove(_) => {
                self.form.on_timer(timer)
            }
            Timer::TypingTick => self.animation.on_timer(timer),
            Timer::LinkRestore(index) => restore_link(index),
        }
    }
}
