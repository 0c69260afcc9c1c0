use std::fmt;

use crate::view_model::{BookRowView, CatalogViewModel, TriggerView};

/// Opaque identifier assigned to a book by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One record of the remote catalog, as mirrored locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
}

/// The user-entered fields of a create request, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publisher: String,
}

impl BookDraft {
    pub fn trimmed(title: &str, author: &str, publisher: &str) -> Self {
        Self {
            title: title.trim().to_owned(),
            author: author.trim().to_owned(),
            publisher: publisher.trim().to_owned(),
        }
    }

    pub fn has_blank_field(&self) -> bool {
        self.title.is_empty() || self.author.is_empty() || self.publisher.is_empty()
    }
}

/// Closed taxonomy of failures surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemKind {
    Transport,
    Status(u16),
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub kind: ProblemKind,
    pub message: String,
}

impl Problem {
    pub fn new(kind: ProblemKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ProblemKind::Validation, message)
    }

    /// Same problem with a user-facing context prefix on the message.
    pub(crate) fn prefixed(self, prefix: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{prefix}: {}", self.message),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Load lifecycle of the catalog mirror.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Empty,
    Failed(Problem),
}

/// In-flight guard per operation kind. A second trigger of the same kind is
/// rejected while the first is outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct PendingOps {
    load: bool,
    create: bool,
    delete: Option<BookId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    books: Vec<Book>,
    shown: usize,
    phase: LoadPhase,
    pending: PendingOps,
    alert: Option<Problem>,
    dirty: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> CatalogViewModel {
        let rows = self.books[..self.shown]
            .iter()
            .map(BookRowView::for_book)
            .collect();
        CatalogViewModel {
            phase: self.phase.clone(),
            rows,
            trigger: TriggerView::for_phase(&self.phase, self.remaining()),
            total: self.books.len(),
            remaining: self.remaining(),
        }
    }

    /// Returns the pending one-shot alert, clearing it.
    pub fn take_alert(&mut self) -> Option<Problem> {
        self.alert.take()
    }

    /// Returns whether the view changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub(crate) fn remaining(&self) -> usize {
        self.books.len() - self.shown
    }

    pub(crate) fn contains(&self, id: &BookId) -> bool {
        self.books.iter().any(|book| book.id == *id)
    }

    pub(crate) fn raise_alert(&mut self, problem: Problem) {
        self.alert = Some(problem);
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Starts a load unless one is already outstanding.
    pub(crate) fn begin_load(&mut self) -> bool {
        if self.pending.load {
            return false;
        }
        self.pending.load = true;
        self.phase = LoadPhase::Loading;
        self.mark_dirty();
        true
    }

    /// Applies a load completion: wholesale mirror replacement on success,
    /// untouched mirror on failure.
    pub(crate) fn finish_load(&mut self, result: Result<Vec<Book>, Problem>) {
        self.pending.load = false;
        match result {
            Ok(books) if books.is_empty() => {
                self.books.clear();
                self.shown = 0;
                self.phase = LoadPhase::Empty;
            }
            Ok(books) => {
                self.books = books;
                self.shown = 0;
                self.phase = LoadPhase::Loaded;
                self.reveal_next();
            }
            Err(problem) => {
                self.phase = LoadPhase::Failed(problem);
            }
        }
        self.mark_dirty();
    }

    /// Reveals up to one more page of the mirror. A call with nothing left to
    /// reveal changes nothing.
    pub(crate) fn reveal_next(&mut self) {
        let step = self.remaining().min(crate::PAGE_SIZE);
        if step > 0 {
            self.shown += step;
            self.mark_dirty();
        }
        debug_assert!(self.shown <= self.books.len());
    }

    pub(crate) fn begin_create(&mut self) -> bool {
        if self.pending.create {
            return false;
        }
        self.pending.create = true;
        true
    }

    pub(crate) fn create_settled(&mut self) {
        self.pending.create = false;
    }

    /// Prepends the server-confirmed record and re-reveals from the first page.
    pub(crate) fn apply_created(&mut self, book: Book) {
        self.books.insert(0, book);
        self.shown = 0;
        self.phase = LoadPhase::Loaded;
        self.reveal_next();
        self.mark_dirty();
    }

    pub(crate) fn begin_delete(&mut self, id: BookId) -> bool {
        if self.pending.delete.is_some() {
            return false;
        }
        self.pending.delete = Some(id);
        true
    }

    pub(crate) fn delete_settled(&mut self) {
        self.pending.delete = None;
    }

    /// Removes the server-confirmed entry by identifier equality. The cursor
    /// shrinks only when the entry sat inside the revealed prefix.
    pub(crate) fn apply_deleted(&mut self, id: &BookId) {
        if let Some(pos) = self.books.iter().position(|book| book.id == *id) {
            self.books.remove(pos);
            if pos < self.shown {
                self.shown -= 1;
            }
            self.mark_dirty();
        }
        debug_assert!(self.shown <= self.books.len());
    }
}
