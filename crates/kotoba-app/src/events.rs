use std::io::Write;
use std::sync::Arc;

use kanal::AsyncReceiver;

use crate::state::AppState;

pub mod text_input;

use text_input::respond;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    TextInput(String),
    InputClosed,
}

/// App's main loop. Every input line gets exactly one response line.
pub async fn event_loop<W: Write>(
    state: Arc<AppState>,
    rx: AsyncReceiver<AppEvent>,
    mut out: W,
) -> anyhow::Result<()> {
    tracing::debug!("Event loop started");

    loop {
        let event = match rx.recv().await {
            Ok(event) => event,
            Err(_) => {
                tracing::debug!("Input channel closed");
                return Ok(());
            }
        };

        match event {
            AppEvent::TextInput(text) => {
                let response = respond(&state, text).await?;
                writeln!(out, "{response}")?;
                out.flush()?;
            }
            AppEvent::InputClosed => {
                tracing::debug!("Event loop finished");
                return Ok(());
            }
        }
    }
}
