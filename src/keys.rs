//! Small input conveniences: Enter-to-advance in form inputs and press
//! feedback on external links.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use crate::consts::{LINK_PRESS_MS, LINK_PRESS_OPACITY};
use crate::effect::{Effect, Target, Timer};

/// Kind of a form control, as far as Enter handling cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line `<input>`.
    Input,
    /// `<textarea>`, `<select>` and other non-submit controls.
    Other,
    Submit,
}

/// What Enter inside a form control should do.
///
/// `controls` lists the form's controls in document order and `index` is
/// the one that received the key. Only single-line inputs are handled; the
/// default submit is replaced by focusing the next control, or by clicking
/// the submit control when it comes next.
#[must_use]
pub fn enter_key_action(controls: &[ControlKind], index: usize) -> Option<Effect> {
    if controls.get(index) != Some(&ControlKind::Input) {
        return None;
    }
    match controls.get(index + 1)? {
        ControlKind::Submit => Some(Effect::ClickSubmit),
        ControlKind::Input | ControlKind::Other => Some(Effect::FocusField(index + 1)),
    }
}

/// Whether a click should get press feedback.
///
/// Only a click whose target is the anchor itself counts, not one on a
/// child icon or label. `href` is the link's resolved URL at click time.
#[must_use]
pub fn wants_press_feedback(clicked_tag: &str, href: &str, has_target: bool, hosts: &[String]) -> bool {
    clicked_tag.eq_ignore_ascii_case("a") && has_target && hosts.iter().any(|host| href.contains(host.as_str()))
}

/// Dim the link now and restore it after a short delay.
#[must_use]
pub fn press_link(index: usize) -> Vec<Effect> {
    vec![
        Effect::style(Target::ExternalLink(index), "opacity", LINK_PRESS_OPACITY),
        Effect::schedule(Timer::LinkRestore(index), LINK_PRESS_MS),
    ]
}

#[must_use]
pub fn restore_link(index: usize) -> Vec<Effect> {
    vec![Effect::style(Target::ExternalLink(index), "opacity", "1")]
}
