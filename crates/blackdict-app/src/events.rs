use std::sync::Arc;

use blackdict_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod search;

use search::handle_search;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<UiEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::debug!("[EVENT_LOOP] UI channel closed: {e}");
                    break;
                }
            },
        };

        if !handle_events(&state, &app_to_ui_tx, event) {
            break;
        }
    }

    Ok(())
}

/// Returns `false` once the front end asked to close.
/// Never awaits the app-to-ui channel, so the front end can always hand
/// over its next event.
fn handle_events(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: UiEvent,
) -> bool {
    match event {
        UiEvent::Search {
            seq,
            word,
            language,
        } => {
            tracing::debug!("Search #{seq}: '{word}' in {language}");
            handle_search(state, seq, word, language, app_to_ui_tx);
        }
        UiEvent::Close => {
            tracing::info!("[EVENT_LOOP] Close requested");
            return false;
        }
    }

    true
}
