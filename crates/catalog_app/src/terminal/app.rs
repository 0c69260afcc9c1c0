use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use catalog_api::ApiSettings;
use catalog_core::{update, CatalogState, Msg};
use client_logging::client_info;

use super::effects::EffectRunner;
use super::input::{parse_line, HELP};
use super::logging::{self, LogDestination};
use super::render;

/// Everything the main loop reacts to: parsed user commands and mapped api
/// completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEvent {
    Core(Msg),
    Help,
    Unknown(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(ApiSettings::default(), msg_tx.clone());
    spawn_input_thread(msg_tx.clone());

    let mut state = CatalogState::new();
    client_info!("catalog session started");
    println!("{HELP}");

    // The session opens with a full catalog fetch.
    let _ = msg_tx.send(AppEvent::Core(Msg::ReloadRequested));

    while let Ok(event) = msg_rx.recv() {
        match event {
            AppEvent::Core(msg) => {
                let (mut next, effects) = update(state, msg);
                runner.enqueue(effects);
                if let Some(problem) = next.take_alert() {
                    println!("! {problem}");
                }
                if next.consume_dirty() {
                    print!("{}", render::render(&next.view()));
                    io::stdout().flush()?;
                }
                state = next;
            }
            AppEvent::Help => println!("{HELP}"),
            AppEvent::Unknown(line) => {
                println!("Unrecognized command: {line}. Type 'help' for commands.");
            }
            AppEvent::Quit => break,
        }
    }

    client_info!("catalog session ended");
    Ok(())
}

fn spawn_input_thread(msg_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let event = parse_line(&line);
            let quit = matches!(event, AppEvent::Quit);
            if msg_tx.send(event).is_err() || quit {
                return;
            }
        }
        // End of input closes the session.
        let _ = msg_tx.send(AppEvent::Quit);
    });
}
