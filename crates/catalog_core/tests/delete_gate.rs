use catalog_core::{update, CatalogState, Effect, Msg, Severity};

fn delete_calls(effects: &[Effect]) -> Vec<u64> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::DeleteProduct { id } => Some(*id),
            _ => None,
        })
        .collect()
}

#[test]
fn request_then_cancel_issues_no_delete() {
    let (state, effects) = update(CatalogState::new(), Msg::DeleteClicked(4));
    assert!(effects.is_empty());
    assert_eq!(state.pending_deletion(), Some(4));
    assert_eq!(state.view().pending_deletion, Some(4));

    let (state, effects) = update(state, Msg::DeleteCancelled);
    assert!(delete_calls(&effects).is_empty());
    assert_eq!(state.pending_deletion(), None);
}

#[test]
fn request_then_confirm_issues_exactly_one_delete() {
    let (state, _) = update(CatalogState::new(), Msg::DeleteClicked(4));
    let (state, effects) = update(state, Msg::DeleteConfirmed);

    assert_eq!(delete_calls(&effects), vec![4]);
    assert_eq!(state.pending_deletion(), None);

    // A second confirm has nothing to act on.
    let (state, effects) = update(state, Msg::DeleteConfirmed);
    assert!(effects.is_empty());
    assert_eq!(state.pending_deletion(), None);
}

#[test]
fn reopening_gate_replaces_target() {
    let (state, _) = update(CatalogState::new(), Msg::DeleteClicked(1));
    let (state, _) = update(state, Msg::DeleteClicked(2));
    let (_state, effects) = update(state, Msg::DeleteConfirmed);

    assert_eq!(delete_calls(&effects), vec![2]);
}

#[test]
fn successful_delete_notifies_and_reloads() {
    let (state, _) = update(CatalogState::new(), Msg::DeleteClicked(4));
    let (state, _) = update(state, Msg::DeleteConfirmed);
    let (state, effects) = update(
        state,
        Msg::ProductDeleted {
            id: 4,
            message: "Producto 'Mouse' eliminado exitosamente".to_string(),
        },
    );

    assert!(state.is_loading());
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::FetchProducts(_))));
    let notification = state.notifications().current().unwrap();
    assert_eq!(notification.severity, Severity::Success);
    assert_eq!(notification.message, "Producto 'Mouse' eliminado exitosamente");
}

#[test]
fn failed_delete_notifies_without_reload() {
    let (state, _) = update(CatalogState::new(), Msg::DeleteClicked(4));
    let (state, _) = update(state, Msg::DeleteConfirmed);
    let (state, effects) = update(
        state,
        Msg::DeleteFailed {
            id: 4,
            detail: "Producto con ID 4 no encontrado".to_string(),
        },
    );

    assert_eq!(state.pending_deletion(), None);
    assert!(!state.is_loading());
    assert!(effects.iter().all(|effect| !effect.is_network()));
    assert_eq!(
        state.notifications().current().map(|n| n.severity),
        Some(Severity::Error)
    );
}
