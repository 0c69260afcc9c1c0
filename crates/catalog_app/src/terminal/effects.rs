use std::sync::mpsc;
use std::thread;

use catalog_api::{ApiError, ApiEvent, ApiFailure, ApiHandle, ApiSettings};
use catalog_core::{Book, BookDraft, BookId, Effect, Msg, Problem, ProblemKind};
use client_logging::{client_info, client_warn};

use super::app::AppEvent;

pub(crate) struct EffectRunner {
    api: ApiHandle,
}

impl EffectRunner {
    pub(crate) fn new(settings: ApiSettings, msg_tx: mpsc::Sender<AppEvent>) -> Self {
        let (api, events) = ApiHandle::new(settings);
        spawn_event_loop(events, msg_tx);
        Self { api }
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog => {
                    client_info!("FetchCatalog");
                    self.api.fetch_all();
                }
                Effect::CreateBook { draft } => {
                    client_info!("CreateBook title={}", draft.title);
                    self.api.create(map_draft(draft));
                }
                Effect::DeleteBook { id } => {
                    client_info!("DeleteBook id={id}");
                    self.api.delete(catalog_api::BookId::new(id.as_str()));
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<ApiEvent>, msg_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                ApiEvent::ListFinished(result) => {
                    if let Err(err) = &result {
                        client_warn!("catalog load failed: {err}");
                    }
                    Msg::CatalogLoaded(
                        result
                            .map(|books| books.into_iter().map(map_book).collect())
                            .map_err(map_failure),
                    )
                }
                ApiEvent::CreateFinished(result) => {
                    if let Err(err) = &result {
                        client_warn!("create failed: {err}");
                    }
                    Msg::BookCreated(result.map(map_book).map_err(map_failure))
                }
                ApiEvent::DeleteFinished { id, result } => {
                    if let Err(err) = &result {
                        client_warn!("delete failed: {err}");
                    }
                    Msg::BookDeleted {
                        id: BookId::new(id.as_str()),
                        result: result.map_err(map_failure),
                    }
                }
            };
            if msg_tx.send(AppEvent::Core(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_book(book: catalog_api::Book) -> Book {
    Book {
        id: BookId::new(book.id.as_str()),
        title: book.title,
        author: book.author,
        publisher: book.publisher,
    }
}

fn map_draft(draft: BookDraft) -> catalog_api::BookDraft {
    catalog_api::BookDraft {
        title: draft.title,
        author: draft.author,
        publisher: draft.publisher,
    }
}

fn map_failure(err: ApiError) -> Problem {
    let kind = match err.kind {
        ApiFailure::HttpStatus(code) => ProblemKind::Status(code),
        ApiFailure::InvalidUrl
        | ApiFailure::Timeout
        | ApiFailure::Network
        | ApiFailure::InvalidBody => ProblemKind::Transport,
    };
    Problem::new(kind, err.message)
}
