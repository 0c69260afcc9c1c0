use catalog_core::{BookRowView, CatalogViewModel, LoadPhase};

/// Formats one frame of the view model as terminal output.
pub(crate) fn render(view: &CatalogViewModel) -> String {
    let mut out = String::from("\n");
    match &view.phase {
        LoadPhase::Idle => {}
        LoadPhase::Loading => out.push_str("Loading books...\n"),
        LoadPhase::Empty => out.push_str("No books found\n"),
        LoadPhase::Failed(problem) => {
            out.push_str(&format!("Error: {problem}\n"));
        }
        LoadPhase::Loaded => {
            for row in &view.rows {
                out.push_str(&format_row(row));
                out.push('\n');
            }
        }
    }
    out.push_str(&format!(
        "[{}] ({} of {} shown)\n",
        view.trigger.label,
        view.rows.len(),
        view.total
    ));
    out
}

fn format_row(row: &BookRowView) -> String {
    format!(
        "[#{id}] {title} — {author} ({publisher})",
        id = row.id,
        title = row.title,
        author = row.author,
        publisher = row.publisher
    )
}
