//! Transient feedback banner shown under the contact form.
//!
//! At most one banner is live. Showing a new one removes the previous node
//! and cancels its pending timers before the new node is attached.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::consts::{BANNER_DISPLAY_MS, BANNER_EXIT_MS};
use crate::effect::{Effect, Timer};

/// Identifies one banner instance so stale timers can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// Modifier class added next to `form-feedback`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Font Awesome icon shown before the message.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: BannerId,
    pub message: String,
    pub kind: BannerKind,
    pub leaving: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackSlot {
    current: Option<Banner>,
    next_id: u32,
}

impl FeedbackSlot {
    #[must_use]
    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }

    /// Replace whatever banner is showing with a new one.
    pub fn show(&mut self, message: impl Into<String>, kind: BannerKind) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(previous) = self.current.take() {
            effects.push(Effect::Cancel(Timer::BannerExpire(previous.id)));
            effects.push(Effect::Cancel(Timer::BannerRemove(previous.id)));
            effects.push(Effect::RemoveBanner(previous.id));
        }

        let id = BannerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let banner = Banner { id, message: message.into(), kind, leaving: false };
        log::debug!("banner {:?} ({}): {}", id, kind.class(), banner.message);

        effects.push(Effect::ShowBanner { id, message: banner.message.clone(), kind });
        effects.push(Effect::schedule(Timer::BannerExpire(id), BANNER_DISPLAY_MS));
        self.current = Some(banner);
        effects
    }

    /// Display time elapsed: play the exit animation, then detach.
    pub fn expire(&mut self, id: BannerId) -> Vec<Effect> {
        match self.current.as_mut() {
            Some(banner) if banner.id == id && !banner.leaving => {
                banner.leaving = true;
                vec![Effect::DismissBanner(id), Effect::schedule(Timer::BannerRemove(id), BANNER_EXIT_MS)]
            }
            _ => Vec::new(),
        }
    }

    pub fn remove(&mut self, id: BannerId) -> Vec<Effect> {
        if self.current.as_ref().is_some_and(|banner| banner.id == id) {
            self.current = None;
            vec![Effect::RemoveBanner(id)]
        } else {
            Vec::new()
        }
    }
}
