use crate::state::{Book, BookId, Problem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for the catalog to be fetched anew.
    ReloadRequested,
    /// Transport finished a catalog fetch.
    CatalogLoaded(Result<Vec<Book>, Problem>),
    /// User clicked the load-more trigger.
    MoreRequested,
    /// User submitted the add-book form.
    AddSubmitted {
        title: String,
        author: String,
        publisher: String,
    },
    /// Transport finished a create request.
    BookCreated(Result<Book, Problem>),
    /// User clicked a row's delete control.
    DeleteRequested { id: BookId },
    /// Transport finished a delete request.
    BookDeleted {
        id: BookId,
        result: Result<(), Problem>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
