//! Catalog api: REST transport and background command execution.
mod client;
mod handle;
mod types;

pub use client::{ApiSettings, BookApi, ReqwestBookApi, DEFAULT_BASE_URL};
pub use handle::ApiHandle;
pub use types::{ApiError, ApiEvent, ApiFailure, Book, BookDraft, BookId};
