use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::orchestrator::FetchOrchestrator;
use crate::random;
use crate::source::{HttpQuoteSource, QuoteSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler, EventSink};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the quote widget until the user quits.
///
/// Fetch tasks run on `handle`; their intents come back through the event
/// queue so every transition happens on this thread.
pub fn run(config: Config, seed: Option<u64>, handle: Handle) -> anyhow::Result<()> {
    let source: Arc<dyn QuoteSource> = Arc::new(
        HttpQuoteSource::new(&config.source).context("failed to build quote source client")?,
    );

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(
        &config,
        random::from_seed(seed),
        Box::new(SystemClipboard::new()),
    );
    let events = EventHandler::new(tick_rate);

    // Fetch-side randomness is independent of the selection sequence.
    let fetch_seed = seed.map(|s| s.wrapping_add(1));
    let mut fetch = Some(spawn_fetch(&handle, &source, fetch_seed, events.intent_sink()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Fetch {
                    fetch = Some(restart_fetch(fetch.take(), || {
                        spawn_fetch(&handle, &source, fetch_seed, events.intent_sink())
                    }));
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Store(intent)) => app.on_store_intent(intent),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if let Some(task) = fetch {
        task.abort();
    }
    drop(guard);
    tracing::info!("quote machine stopped");
    Ok(())
}

/// Replace the previous fetch task with a new one.
///
/// Retries are only offered from `Failed`, which the previous task reports
/// as its last intent, so it may still be winding down here.
fn restart_fetch(
    previous: Option<JoinHandle<()>>,
    spawn: impl FnOnce() -> JoinHandle<()>,
) -> JoinHandle<()> {
    if let Some(task) = previous {
        if !task.is_finished() {
            tracing::debug!("aborting previous fetch task before retry");
        }
        task.abort();
    }
    spawn()
}

fn spawn_fetch(
    handle: &Handle,
    source: &Arc<dyn QuoteSource>,
    seed: Option<u64>,
    sink: EventSink,
) -> JoinHandle<()> {
    let mut orchestrator = FetchOrchestrator::new(Arc::clone(source), random::from_seed(seed));
    handle.spawn(async move {
        // Failures already reached the UI as FetchFailed.
        let _ = orchestrator.run(&sink).await;
    })
}
