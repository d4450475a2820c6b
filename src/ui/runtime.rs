//! Event loop wiring: terminal lifecycle, input events, fetch execution.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal::setup_terminal;

/// Run the UI until the user quits.
///
/// Must be called from within a tokio runtime context: fetches are spawned
/// onto it and post their results back through the event channel. Results
/// that land after the loop exits hit a closed channel and are discarded.
pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_ms);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    let client = CatalogClient::new(config.endpoint);
    let (fetch_tx, mut fetch_rx) = tokio::sync::mpsc::channel::<UiCommand>(8);
    app.set_fetch_sender(fetch_tx);

    // One task per command keeps overlapping fetches independent; whichever
    // completes last determines the final state.
    let results = events.sender();
    tokio::spawn(async move {
        while let Some(UiCommand::Fetch) = fetch_rx.recv().await {
            let client = client.clone();
            let results = results.clone();
            tokio::spawn(async move {
                let outcome = client.fetch().await;
                let _ = results.send(AppEvent::FetchDone(outcome));
            });
        }
    });

    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchDone(outcome)) => app.on_fetch_done(outcome),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
