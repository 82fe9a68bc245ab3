//! Navigation controller: mobile menu, anchor scrolling, active-link tracking
//! and the navbar background switch.
//!
//! Scroll offset, viewport width and section geometry are passed in by the
//! host, so each decision is a plain function of its inputs.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ACTIVE_LINK_LOOKAHEAD_PX, HEADER_OFFSET_PX, MOBILE_BREAKPOINT_PX, NAVBAR_SOLID_THRESHOLD_PX};
use crate::effect::{Effect, Target};

/// Class toggled on the menu panel and its toggle control.
pub const ACTIVE_CLASS: &str = "active";

/// Vertical span of a page section carrying an `id`.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// Whether `position` falls inside the section's half-open span.
#[must_use]
pub fn is_section_active(position: f64, section: &Section) -> bool {
    position >= section.top && position < section.top + section.height
}

/// Section the reader is looking at for a given scroll offset.
///
/// The offset is pushed forward by [`ACTIVE_LINK_LOOKAHEAD_PX`]. When spans
/// overlap, the last matching section in document order wins.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    let position = scroll_y + ACTIVE_LINK_LOOKAHEAD_PX;
    sections
        .iter()
        .rev()
        .find(|section| is_section_active(position, section))
        .map(|section| section.id.as_str())
}

/// Fragment selector of an in-page link, or `None` for any other href.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.starts_with('#').then_some(href)
}

/// Scroll position that puts a section just below the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET_PX
}

#[must_use]
pub fn navbar_is_solid(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SOLID_THRESHOLD_PX
}

#[must_use]
pub fn is_desktop_width(width: f64) -> bool {
    width > MOBILE_BREAKPOINT_PX
}

#[derive(Clone, Debug)]
pub struct NavController {
    menu_open: bool,
    active_link: Option<String>,
    navbar_solid: Option<bool>,
    solid_background: String,
    translucent_background: String,
}

impl NavController {
    #[must_use]
    pub fn new(solid_background: impl Into<String>, translucent_background: impl Into<String>) -> Self {
        Self {
            menu_open: false,
            active_link: None,
            navbar_solid: None,
            solid_background: solid_background.into(),
            translucent_background: translucent_background.into(),
        }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<Effect> {
        self.menu_open = !self.menu_open;
        self.menu_effects()
    }

    /// Force the menu closed. Safe to call when it already is.
    pub fn close_mobile_menu(&mut self) -> Vec<Effect> {
        self.menu_open = false;
        self.menu_effects()
    }

    /// Handle a click on an in-page link.
    ///
    /// `section_top` is the offset of the link's target, or `None` when the
    /// href is not a fragment or nothing matches it. The menu is closed
    /// either way.
    pub fn smooth_scroll(&mut self, section_top: Option<f64>) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(top) = section_top {
            effects.push(Effect::ScrollTo { top: scroll_target(top), smooth: true });
        }
        effects.extend(self.close_mobile_menu());
        effects
    }

    /// Re-evaluate which navigation link is active.
    ///
    /// When no section contains the offset the previous link stays marked.
    pub fn update_active_nav_link(&mut self, scroll_y: f64, sections: &[Section]) -> Vec<Effect> {
        let Some(id) = active_section(scroll_y, sections) else {
            return Vec::new();
        };
        if self.active_link.as_deref() == Some(id) {
            return Vec::new();
        }
        log::debug!("active section -> {id}");
        self.active_link = Some(id.to_owned());
        vec![Effect::SetActiveLink { section: id.to_owned() }]
    }

    /// Two-state navbar background switch, evaluated on every call.
    pub fn handle_navbar_scroll(&mut self, scroll_y: f64) -> Vec<Effect> {
        let solid = navbar_is_solid(scroll_y);
        if self.navbar_solid == Some(solid) {
            return Vec::new();
        }
        self.navbar_solid = Some(solid);
        let background = if solid { &self.solid_background } else { &self.translucent_background };
        vec![Effect::style(Target::Navbar, "background", background.clone())]
    }

    /// Close the menu when a click lands outside both the menu and its toggle.
    pub fn handle_document_click(&mut self, inside_menu: bool, inside_toggle: bool) -> Vec<Effect> {
        if inside_menu || inside_toggle {
            return Vec::new();
        }
        self.close_mobile_menu()
    }

    pub fn handle_resize(&mut self, width: f64) -> Vec<Effect> {
        if is_desktop_width(width) {
            self.close_mobile_menu()
        } else {
            Vec::new()
        }
    }

    fn menu_effects(&self) -> Vec<Effect> {
        [Target::NavMenu, Target::NavToggle]
            .into_iter()
            .map(|target| Effect::SetClass { target, class: ACTIVE_CLASS, enabled: self.menu_open })
            .collect()
    }
}
