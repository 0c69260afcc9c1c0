use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ApiSettings, BookApi, ReqwestBookApi};
use crate::{ApiEvent, BookDraft, BookId};

enum ApiCommand {
    FetchAll,
    Create { draft: BookDraft },
    Delete { id: BookId },
}

/// Runs catalog requests on a background thread owning a tokio runtime.
/// Completions arrive on the event channel returned by [`ApiHandle::new`];
/// overlapping commands run concurrently and complete in any order.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
}

impl ApiHandle {
    pub fn new(settings: ApiSettings) -> (Self, mpsc::Receiver<ApiEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestBookApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch_all(&self) {
        let _ = self.cmd_tx.send(ApiCommand::FetchAll);
    }

    pub fn create(&self, draft: BookDraft) {
        let _ = self.cmd_tx.send(ApiCommand::Create { draft });
    }

    pub fn delete(&self, id: BookId) {
        let _ = self.cmd_tx.send(ApiCommand::Delete { id });
    }
}

async fn handle_command(
    api: &dyn BookApi,
    command: ApiCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    match command {
        ApiCommand::FetchAll => {
            log::debug!("fetching catalog");
            let result = api.list_books().await;
            let _ = event_tx.send(ApiEvent::ListFinished(result));
        }
        ApiCommand::Create { draft } => {
            log::debug!("creating book title={}", draft.title);
            let result = api.create_book(&draft).await;
            let _ = event_tx.send(ApiEvent::CreateFinished(result));
        }
        ApiCommand::Delete { id } => {
            log::debug!("deleting book id={id}");
            let result = api.delete_book(&id).await;
            let _ = event_tx.send(ApiEvent::DeleteFinished { id, result });
        }
    }
}
