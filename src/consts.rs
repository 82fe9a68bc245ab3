//! Shared timing and geometry constants.
//!
//! Pixel values are CSS pixels; durations are milliseconds.

/// Height of the fixed navbar subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 70.0;

/// Look-ahead added to the scroll offset when picking the active section.
pub const ACTIVE_LINK_LOOKAHEAD_PX: f64 = 100.0;

/// Scroll offset past which the navbar switches to its solid background.
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Viewport width at or below which the mobile layout applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Contact form.
pub const SEND_DELAY_MS: u32 = 2000;
pub const MAILTO_DELAY_MS: u32 = 1000;
pub const BANNER_DISPLAY_MS: u32 = 7000;
pub const BANNER_EXIT_MS: u32 = 300;

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;

// Typing effect.
pub const TYPING_START_DELAY_MS: u32 = 2000;
pub const TYPING_CHAR_MS: u32 = 100;
pub const TYPING_HOLD_MS: u32 = 2000;
pub const ERASING_CHAR_MS: u32 = 50;
pub const TYPING_PAUSE_MS: u32 = 500;

// Entrance reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// How long a pressed external link stays dimmed.
pub const LINK_PRESS_MS: u32 = 300;
pub const LINK_PRESS_OPACITY: &str = "0.7";
