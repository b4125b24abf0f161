use std::sync::Arc;

use blackdict_core::LookupError;
use blackdict_core::preprocess::prepare;
use blackdict_render::{loading, render, render_error};
use blackdict_types::{AppEvent, DisplayModel, Language};
use kanal::AsyncSender;

use crate::state::AppState;

/// Validate, show the loading state, then resolve. Runs entirely on its own
/// task so the event loop never waits on the front end.
/// Searches are not cancelled; each one reports back under its own `seq`.
pub fn handle_search(
    state: &Arc<AppState>,
    seq: u64,
    word: String,
    language: Language,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) {
    let resolver = state.resolver.clone();
    let tx = app_to_ui_tx.clone();

    tokio::spawn(async move {
        let request = match prepare(&word, language) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!("Search #{seq} rejected: {err}");
                send_display(&tx, seq, render_error(&err)).await;
                return;
            }
        };

        send_display(&tx, seq, loading(&request)).await;

        let result = resolver.resolve_request(&request).await;

        match &result {
            Ok(resolution) if resolution.used_fallback() => tracing::info!(
                "Search #{seq}: '{}' shown in fallback {}",
                request.word,
                resolution.language
            ),
            Ok(resolution) => tracing::info!(
                "Search #{seq}: found '{}' in {}",
                resolution.entry.word,
                resolution.language
            ),
            Err(LookupError::Transport(e)) => {
                tracing::error!("Search #{seq}: source failure: {e}")
            }
            Err(e) => tracing::info!("Search #{seq}: {e}"),
        }

        send_display(&tx, seq, render(result.as_ref().map(|r| &r.entry))).await;
    });
}

async fn send_display(tx: &AsyncSender<AppEvent>, seq: u64, model: DisplayModel) {
    if let Err(e) = tx.send(AppEvent::Display { seq, model }).await {
        tracing::warn!("Search #{seq}: display dropped, UI gone: {e}");
    }
}
