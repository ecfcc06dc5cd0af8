use std::time::Duration;

use catalog_core::{
    update, CatalogConfig, CatalogState, Effect, Msg, NotificationCenter, Severity,
};
use pretty_assertions::assert_eq;

#[test]
fn newer_notification_supersedes_and_cancels_older_timer() {
    let mut center = NotificationCenter::new(Duration::from_millis(3000));
    let first = center.show("X", Severity::Error);
    let second = center.show("Y", Severity::Success);

    assert_eq!(
        first,
        vec![Effect::ScheduleDismiss {
            token: 1,
            after: Duration::from_millis(3000),
        }]
    );
    assert_eq!(
        second,
        vec![
            Effect::CancelDismiss { token: 1 },
            Effect::ScheduleDismiss {
                token: 2,
                after: Duration::from_millis(3000),
            },
        ]
    );
    assert_eq!(center.current().map(|n| n.message.as_str()), Some("Y"));

    // Even if the first timer still fires, it cannot clear "Y".
    assert!(!center.expire(1));
    assert_eq!(center.current().map(|n| n.message.as_str()), Some("Y"));
    assert!(center.expire(2));
    assert!(center.current().is_none());
}

#[test]
fn configured_duration_flows_into_scheduled_timers() {
    let config = CatalogConfig {
        auto_dismiss: Duration::from_millis(500),
        ..CatalogConfig::default()
    };
    let state = CatalogState::with_config(config);
    let (_state, effects) = update(state, Msg::EditClicked(1));

    assert_eq!(
        effects,
        vec![Effect::ScheduleDismiss {
            token: 1,
            after: Duration::from_millis(500),
        }]
    );
}

#[test]
fn manual_dismiss_cancels_timer_and_expiry_is_ignored() {
    let (state, _) = update(CatalogState::new(), Msg::EditClicked(1));
    let token = state.notifications().current().unwrap().token;

    let (state, effects) = update(state, Msg::NotificationDismissed);
    assert_eq!(effects, vec![Effect::CancelDismiss { token }]);
    assert!(state.view().notification.is_none());

    let (state, effects) = update(state, Msg::NotificationDismissed);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::EditClicked(2));
    let (state, _) = update(state, Msg::NotificationExpired { token });
    assert!(state.notifications().current().is_some());
}

#[test]
fn matching_expiry_clears_the_slot() {
    let (state, _) = update(CatalogState::new(), Msg::EditClicked(1));
    let token = state.notifications().current().unwrap().token;
    let (mut state, effects) = update(state, Msg::NotificationExpired { token });

    assert!(effects.is_empty());
    assert!(state.notifications().current().is_none());
    assert!(state.consume_dirty());
}
