use catalog_core::{BookId, Msg};

use super::app::AppEvent;

pub(crate) const HELP: &str = "\
Commands:
  more                                  reveal the next page (or retry a failed load)
  add <title> | <author> | <publisher>  add a book
  delete <id>                           delete a book by id
  reload                                fetch the catalog anew
  help                                  show this help
  quit                                  exit";

/// Maps one input line to an application event. Field validation is the state
/// machine's job; parsing only splits the line.
pub(crate) fn parse_line(line: &str) -> AppEvent {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    match command {
        "" => AppEvent::Core(Msg::NoOp),
        "more" | "m" => AppEvent::Core(Msg::MoreRequested),
        "reload" | "r" => AppEvent::Core(Msg::ReloadRequested),
        "add" | "a" => AppEvent::Core(parse_add(rest)),
        "delete" | "del" if !rest.is_empty() => AppEvent::Core(Msg::DeleteRequested {
            id: BookId::new(rest),
        }),
        "help" | "h" | "?" => AppEvent::Help,
        "quit" | "q" | "exit" => AppEvent::Quit,
        _ => AppEvent::Unknown(trimmed.to_string()),
    }
}

fn parse_add(rest: &str) -> Msg {
    let mut parts = rest.splitn(3, '|').map(str::trim);
    let title = parts.next().unwrap_or("").to_string();
    let author = parts.next().unwrap_or("").to_string();
    let publisher = parts.next().unwrap_or("").to_string();
    Msg::AddSubmitted {
        title,
        author,
        publisher,
    }
}
