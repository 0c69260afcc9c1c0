//! Catalog core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{Book, BookDraft, BookId, CatalogState, LoadPhase, Problem, ProblemKind};
pub use update::update;
pub use view_model::{BookRowView, CatalogViewModel, TriggerView, PAGE_SIZE};
