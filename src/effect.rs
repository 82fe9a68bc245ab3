//! Commands emitted by the page controllers.
//!
//! Controllers never touch the DOM. Every input handler returns a list of
//! [`Effect`]s that the host applies in order, the same way the canvas
//! engine hands `Action`s back to its host. Timers are effects too, which
//! lets tests advance them on a virtual clock.

use crate::feedback::{BannerId, BannerKind};

/// A page node the host knows how to address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// The collapsible navigation menu panel.
    NavMenu,
    /// The hamburger control that opens the menu.
    NavToggle,
    /// The fixed navigation bar.
    Navbar,
    /// The floating scroll-to-top button.
    ScrollTopButton,
    /// The n-th element registered for entrance animation.
    Reveal(usize),
    /// The n-th anchor carrying a `target` attribute.
    ExternalLink(usize),
}

/// Every timer the page can run.
///
/// A timer value doubles as its cancellation token: the host keeps at most
/// one pending timeout per value and [`Effect::Cancel`] drops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Simulated send latency elapsed.
    SubmitComplete,
    /// Hand the draft over to the mail client.
    OpenMailto,
    /// Banner display time elapsed; start the exit animation.
    BannerExpire(BannerId),
    /// Exit animation finished; detach the banner.
    BannerRemove(BannerId),
    /// Next step of the typing loop.
    TypingTick,
    /// Restore a dimmed external link.
    LinkRestore(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SetClass {
        target: Target,
        class: &'static str,
        enabled: bool,
    },
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    /// Mark the link pointing at `#section` active and clear every other link.
    SetActiveLink { section: String },
    ScrollTo { top: f64, smooth: bool },
    /// Ask the host for one animation-frame callback.
    RequestFrame,
    ShowBanner {
        id: BannerId,
        message: String,
        kind: BannerKind,
    },
    /// Start the exit animation on a live banner.
    DismissBanner(BannerId),
    RemoveBanner(BannerId),
    /// Disable the submit control and show the sending indicator.
    SetSubmitSending,
    /// Re-enable the submit control with its original label.
    RestoreSubmit,
    ResetForm,
    Navigate(String),
    /// Replace the hero subtitle with `prefix` followed by an empty typing span.
    MountTypingTarget { prefix: String },
    SetTypingText(String),
    /// Move focus to the form control at this index.
    FocusField(usize),
    ClickSubmit,
    Schedule { timer: Timer, delay_ms: u32 },
    Cancel(Timer),
}

impl Effect {
    pub(crate) fn schedule(timer: Timer, delay_ms: u32) -> Self {
        Self::Schedule { timer, delay_ms }
    }

    pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }
}
