use std::sync::Arc;

use kotoba_core::error::LookupError;
use serde::Serialize;

use crate::state::AppState;

pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Body written when a lookup fails outright
#[derive(Debug, Serialize)]
pub struct LookupFailure {
    pub status: u16,
    pub error: String,
}

impl From<&LookupError> for LookupFailure {
    fn from(e: &LookupError) -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            error: e.to_string(),
        }
    }
}

/// Run the lookup on the blocking pool so segmentation never stalls a runtime worker
pub async fn respond(state: &Arc<AppState>, text: String) -> anyhow::Result<String> {
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || handle_text_input(&state, &text)).await?
}

/// Look up one line of input and render the JSON response
pub fn handle_text_input(state: &AppState, text: &str) -> anyhow::Result<String> {
    let sentence = state.preprocessor.process(text);
    tracing::debug!("Looking up {} chars", sentence.chars().count());

    match state.processor.lookup(&sentence) {
        Ok(response) => {
            tracing::debug!("Lookup answered with status {}", response.status());
            render(&response, state.pretty)
        }
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            render(&LookupFailure::from(&e), state.pretty)
        }
    }
}

pub fn render<T: Serialize>(body: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(body)?
    } else {
        serde_json::to_string(body)?
    };
    Ok(rendered)
}
