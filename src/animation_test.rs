use super::*;

fn styles_for(effects: &[Effect], wanted: &Target) -> Vec<(&'static str, String)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::SetStyle { target, property, value } if target == wanted => Some((*property, value.clone())),
            _ => None,
        })
        .collect()
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn prepare_hides_every_card() {
    let mut reveal = RevealSet::default();
    let effects = reveal.prepare(3);
    assert_eq!(effects.len(), 9);
    assert_eq!(
        styles_for(&effects, &Target::Reveal(1)),
        vec![
            ("opacity", "0".to_owned()),
            ("transform", "translateY(30px)".to_owned()),
            ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out".to_owned()),
        ]
    );
}

#[test]
fn intersect_reveals_once() {
    let mut reveal = RevealSet::default();
    reveal.prepare(2);
    let effects = reveal.on_intersect(0, true);
    assert_eq!(
        styles_for(&effects, &Target::Reveal(0)),
        vec![("opacity", "1".to_owned()), ("transform", "translateY(0)".to_owned())]
    );
    assert!(reveal.is_revealed(0));
    assert!(!reveal.is_revealed(1));
    assert!(reveal.on_intersect(0, true).is_empty());
}

#[test]
fn leaving_viewport_does_not_hide() {
    let mut reveal = RevealSet::default();
    reveal.prepare(1);
    reveal.on_intersect(0, true);
    assert!(reveal.on_intersect(0, false).is_empty());
    assert!(reveal.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut reveal = RevealSet::default();
    reveal.prepare(1);
    assert!(reveal.on_intersect(7, true).is_empty());
    assert!(!reveal.is_revealed(7));
}

// =============================================================
// Scroll to top
// =============================================================

#[test]
fn button_is_created_hidden() {
    let mut button = ScrollTopButton::default();
    let effects = button.create();
    assert!(!button.is_visible());
    assert_eq!(
        styles_for(&effects, &Target::ScrollTopButton),
        vec![("opacity", "0".to_owned()), ("visibility", "hidden".to_owned())]
    );
}

#[test]
fn button_shows_past_threshold() {
    let mut button = ScrollTopButton::default();
    button.create();
    assert!(button.on_scroll(500.0).is_empty());
    let effects = button.on_scroll(501.0);
    assert!(button.is_visible());
    assert_eq!(
        styles_for(&effects, &Target::ScrollTopButton),
        vec![("opacity", "1".to_owned()), ("visibility", "visible".to_owned())]
    );
    assert!(button.on_scroll(900.0).is_empty());
    button.on_scroll(10.0);
    assert!(!button.is_visible());
}

#[test]
fn click_scrolls_to_top() {
    assert_eq!(ScrollTopButton::on_click(), vec![Effect::ScrollTo { top: 0.0, smooth: true }]);
}

// =============================================================
// Controller
// =============================================================

#[test]
fn on_load_on_narrow_viewport_skips_typing() {
    let mut anim = AnimationController::new(TypingEffect::new(vec!["Rust".to_owned()], ""));
    let effects = anim.on_load(2, 600.0, true);
    assert!(!effects.iter().any(|e| matches!(e, Effect::Schedule { .. })));
    assert!(!anim.reveal().is_revealed(0));
}

#[test]
fn on_load_on_wide_viewport_starts_typing() {
    let mut anim = AnimationController::new(TypingEffect::new(vec!["Rust".to_owned()], ""));
    let effects = anim.on_load(0, 1200.0, true);
    assert!(effects.contains(&Effect::Schedule { timer: Timer::TypingTick, delay_ms: 2000 }));
    assert!(!anim.on_timer(Timer::TypingTick).is_empty());
    assert!(anim.on_timer(Timer::SubmitComplete).is_empty());
}
