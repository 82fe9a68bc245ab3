//! Inline presentation for the nodes the host creates at runtime.

use crate::feedback::BannerKind;

/// Keyframes used by the feedback banner, injected once into `<head>`.
pub const BANNER_KEYFRAMES: &str = "
@keyframes slideInFade {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slideOutFade {
    from { opacity: 1; transform: translateY(0); }
    to { opacity: 0; transform: translateY(-10px); }
}
";

pub const BANNER_ENTER_ANIMATION: &str = "slideInFade 0.3s ease-out";
pub const BANNER_EXIT_ANIMATION: &str = "slideOutFade 0.3s ease-out";

const BANNER_BASE: &str = "margin-top: 16px; padding: 12px 16px; border-radius: 8px; font-size: 14px; \
     font-weight: 500; text-align: center;";

#[must_use]
pub fn banner_css(kind: BannerKind) -> String {
    let palette = match kind {
        BannerKind::Success => {
            "background-color: rgba(33, 128, 141, 0.1); color: var(--color-success); \
             border: 1px solid rgba(33, 128, 141, 0.3);"
        }
        BannerKind::Error => {
            "background-color: rgba(255, 84, 89, 0.1); color: var(--color-error); \
             border: 1px solid rgba(255, 84, 89, 0.3);"
        }
    };
    format!("{BANNER_BASE} animation: {BANNER_ENTER_ANIMATION}; {palette}")
}

pub const SCROLL_TOP_CLASS: &str = "scroll-to-top";
pub const SCROLL_TOP_ICON: &str = r#"<i class="fas fa-chevron-up"></i>"#;
pub const SCROLL_TOP_CSS: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
     border-radius: 50%; background: var(--color-primary); color: white; border: none; cursor: pointer; \
     display: flex; align-items: center; justify-content: center; font-size: 18px; \
     box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); opacity: 0; visibility: hidden; \
     transition: all 0.3s ease; z-index: 1000;";

pub const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
pub const TYPING_CLASS: &str = "typing-text";
