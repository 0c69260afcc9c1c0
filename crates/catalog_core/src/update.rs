use crate::{BookDraft, CatalogState, Effect, LoadPhase, Msg, Problem};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CatalogState, msg: Msg) -> (CatalogState, Vec<Effect>) {
    let effects = match msg {
        Msg::ReloadRequested => request_load(&mut state),
        Msg::CatalogLoaded(result) => {
            state.finish_load(result);
            Vec::new()
        }
        Msg::MoreRequested => {
            if matches!(state.phase(), LoadPhase::Idle | LoadPhase::Failed(_)) {
                // Until a load has succeeded the trigger doubles as a retry control.
                request_load(&mut state)
            } else if matches!(state.phase(), LoadPhase::Loaded) {
                state.reveal_next();
                Vec::new()
            } else {
                // Loading or Empty: the trigger is disabled.
                Vec::new()
            }
        }
        Msg::AddSubmitted {
            title,
            author,
            publisher,
        } => {
            let draft = BookDraft::trimmed(&title, &author, &publisher);
            if draft.has_blank_field() {
                state.raise_alert(Problem::validation("Please fill in all fields."));
                Vec::new()
            } else if state.begin_create() {
                vec![Effect::CreateBook { draft }]
            } else {
                Vec::new()
            }
        }
        Msg::BookCreated(result) => {
            state.create_settled();
            match result {
                Ok(book) => state.apply_created(book),
                Err(problem) => state.raise_alert(problem.prefixed("Failed to add book")),
            }
            Vec::new()
        }
        Msg::DeleteRequested { id } => {
            if !state.contains(&id) {
                state.raise_alert(Problem::validation(format!("No book with id {id}")));
                Vec::new()
            } else if state.begin_delete(id.clone()) {
                vec![Effect::DeleteBook { id }]
            } else {
                Vec::new()
            }
        }
        Msg::BookDeleted { id, result } => {
            state.delete_settled();
            match result {
                Ok(()) => state.apply_deleted(&id),
                Err(problem) => state.raise_alert(problem.prefixed("Failed to delete book")),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn request_load(state: &mut CatalogState) -> Vec<Effect> {
    if state.begin_load() {
        vec![Effect::FetchCatalog]
    } else {
        Vec::new()
    }
}
