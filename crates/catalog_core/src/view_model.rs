use crate::state::{Book, BookId, LoadPhase};

/// Number of catalog entries revealed per trigger.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogViewModel {
    pub phase: LoadPhase,
    pub rows: Vec<BookRowView>,
    pub trigger: TriggerView,
    pub total: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRowView {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
}

impl BookRowView {
    pub(crate) fn for_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: or_placeholder(&book.title, "No title"),
            author: or_placeholder(&book.author, "Unknown author"),
            publisher: or_placeholder(&book.publisher, "Unknown publisher"),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_owned()
    } else {
        value.to_owned()
    }
}

/// Label and enabled flag of the load-more trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub label: String,
    pub enabled: bool,
}

impl Default for TriggerView {
    fn default() -> Self {
        Self::for_phase(&LoadPhase::Idle, 0)
    }
}

impl TriggerView {
    pub(crate) fn for_phase(phase: &LoadPhase, remaining: usize) -> Self {
        let (label, enabled) = match phase {
            LoadPhase::Idle => ("Load More".to_owned(), false),
            LoadPhase::Loading => ("Loading...".to_owned(), false),
            LoadPhase::Empty => ("No books available".to_owned(), false),
            LoadPhase::Failed(_) => ("Error loading books".to_owned(), true),
            LoadPhase::Loaded if remaining > 0 => {
                (format!("Load More ({remaining} remaining)"), true)
            }
            LoadPhase::Loaded => ("No more books".to_owned(), false),
        };
        Self { label, enabled }
    }
}
