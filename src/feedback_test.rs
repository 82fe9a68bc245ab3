use super::*;

#[test]
fn kind_classes_and_icons() {
    assert_eq!(BannerKind::Success.class(), "success");
    assert_eq!(BannerKind::Error.class(), "error");
    assert_eq!(BannerKind::Success.icon(), "fa-check-circle");
    assert_eq!(BannerKind::Error.icon(), "fa-exclamation-circle");
}

#[test]
fn show_attaches_banner_and_schedules_expiry() {
    let mut slot = FeedbackSlot::default();
    let effects = slot.show("hello", BannerKind::Success);
    let id = slot.current().map(|b| b.id).unwrap();
    assert_eq!(
        effects,
        vec![
            Effect::ShowBanner { id, message: "hello".to_owned(), kind: BannerKind::Success },
            Effect::Schedule { timer: Timer::BannerExpire(id), delay_ms: 7000 },
        ]
    );
}

#[test]
fn second_show_replaces_first() {
    let mut slot = FeedbackSlot::default();
    slot.show("first", BannerKind::Error);
    let first = slot.current().map(|b| b.id).unwrap();
    let effects = slot.show("second", BannerKind::Success);
    let second = slot.current().map(|b| b.id).unwrap();

    assert_ne!(first, second);
    assert_eq!(effects[0], Effect::Cancel(Timer::BannerExpire(first)));
    assert_eq!(effects[1], Effect::Cancel(Timer::BannerRemove(first)));
    assert_eq!(effects[2], Effect::RemoveBanner(first));
    assert_eq!(slot.current().map(|b| b.message.as_str()), Some("second"));
}

#[test]
fn expire_then_remove_clears_slot() {
    let mut slot = FeedbackSlot::default();
    slot.show("bye", BannerKind::Success);
    let id = slot.current().map(|b| b.id).unwrap();

    let effects = slot.expire(id);
    assert_eq!(
        effects,
        vec![Effect::DismissBanner(id), Effect::Schedule { timer: Timer::BannerRemove(id), delay_ms: 300 }]
    );
    assert!(slot.current().is_some_and(|b| b.leaving));

    assert_eq!(slot.remove(id), vec![Effect::RemoveBanner(id)]);
    assert!(slot.current().is_none());
}

#[test]
fn stale_timers_are_ignored() {
    let mut slot = FeedbackSlot::default();
    slot.show("old", BannerKind::Error);
    let old = slot.current().map(|b| b.id).unwrap();
    slot.show("new", BannerKind::Error);

    assert!(slot.expire(old).is_empty());
    assert!(slot.remove(old).is_empty());
    assert_eq!(slot.current().map(|b| b.message.as_str()), Some("new"));
}

#[test]
fn expire_twice_only_dismisses_once() {
    let mut slot = FeedbackSlot::default();
    slot.show("once", BannerKind::Success);
    let id = slot.current().map(|b| b.id).unwrap();
    assert_eq!(slot.expire(id).len(), 2);
    assert!(slot.expire(id).is_empty());
}
