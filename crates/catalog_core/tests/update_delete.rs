use std::sync::Once;

use catalog_core::{
    update, Book, BookId, CatalogState, Effect, Msg, Problem, ProblemKind,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn book(n: usize) -> Book {
    Book {
        id: BookId::new(n.to_string()),
        title: format!("Title {n}"),
        author: format!("Author {n}"),
        publisher: format!("Publisher {n}"),
    }
}

fn loaded_state(n: usize) -> CatalogState {
    let (state, _) = update(CatalogState::new(), Msg::ReloadRequested);
    let (state, _) = update(state, Msg::CatalogLoaded(Ok((1..=n).map(book).collect())));
    state
}

fn confirm_delete(state: CatalogState, id: &BookId) -> CatalogState {
    let (state, effects) = update(state, Msg::DeleteRequested { id: id.clone() });
    assert_eq!(effects, vec![Effect::DeleteBook { id: id.clone() }]);
    let (state, effects) = update(
        state,
        Msg::BookDeleted {
            id: id.clone(),
            result: Ok(()),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn confirmed_delete_removes_exactly_one_row() {
    init_logging();
    let state = loaded_state(15);
    assert_eq!(state.view().rows.len(), 10);

    let state = confirm_delete(state, &BookId::new("3"));
    let view = state.view();

    assert_eq!(view.total, 14);
    assert_eq!(view.rows.len(), 9);
    assert!(view.rows.iter().all(|row| row.id.as_str() != "3"));
    assert_eq!(view.remaining, 5);
    assert_eq!(view.trigger.label, "Load More (5 remaining)");
}

#[test]
fn deleting_unrevealed_entry_keeps_cursor() {
    init_logging();
    let state = loaded_state(15);

    let state = confirm_delete(state, &BookId::new("12"));
    let view = state.view();

    assert_eq!(view.total, 14);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.trigger.label, "Load More (4 remaining)");
}

#[test]
fn deleting_last_row_reaches_terminal_trigger_state() {
    init_logging();
    let state = loaded_state(1);

    let state = confirm_delete(state, &BookId::new("1"));
    let view = state.view();

    assert_eq!(view.total, 0);
    assert!(view.rows.is_empty());
    assert_eq!(view.trigger.label, "No more books");
    assert!(!view.trigger.enabled);
}

#[test]
fn unknown_id_is_rejected_without_network_call() {
    init_logging();
    let state = loaded_state(2);
    let view_before = state.view();

    let (mut state, effects) = update(
        state,
        Msg::DeleteRequested {
            id: BookId::new("404"),
        },
    );

    assert!(effects.is_empty());
    let alert = state.take_alert().expect("validation alert");
    assert_eq!(alert.kind, ProblemKind::Validation);
    assert!(alert.message.contains("404"));
    assert_eq!(state.view(), view_before);
}

#[test]
fn overlapping_delete_rejected() {
    init_logging();
    let state = loaded_state(3);
    let (state, effects) = update(
        state,
        Msg::DeleteRequested {
            id: BookId::new("1"),
        },
    );
    assert_eq!(effects.len(), 1);

    let before = state.clone();
    let (next, effects) = update(
        state,
        Msg::DeleteRequested {
            id: BookId::new("2"),
        },
    );

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn failed_delete_keeps_row_and_alerts() {
    init_logging();
    let id = BookId::new("2");
    let state = loaded_state(3);
    let (state_after_request, _) = update(state, Msg::DeleteRequested { id: id.clone() });
    let view_before = state_after_request.view();

    let problem = Problem::new(ProblemKind::Status(500), "http status 500");
    let (mut state, effects) = update(
        state_after_request,
        Msg::BookDeleted {
            id,
            result: Err(problem),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view(), view_before);
    let alert = state.take_alert().expect("delete alert");
    assert!(alert.message.starts_with("Failed to delete book"));
    assert!(alert.message.contains("500"));
}

#[test]
fn stale_delete_completion_is_ignored() {
    init_logging();
    let id = BookId::new("1");
    let state = loaded_state(2);
    let (state, _) = update(state, Msg::DeleteRequested { id: id.clone() });

    // The mirror was replaced while the delete was in flight.
    let (state, _) = update(state, Msg::ReloadRequested);
    let (state, _) = update(state, Msg::CatalogLoaded(Ok(vec![book(7)])));

    let (state, effects) = update(
        state,
        Msg::BookDeleted {
            id,
            result: Ok(()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().total, 1);
}
