use catalog_core::{update, CatalogState, Msg};

#[test]
fn update_is_noop() {
    let state = CatalogState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
