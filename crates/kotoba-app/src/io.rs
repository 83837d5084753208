use std::io::Write;

use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::events::AppEvent;

/// Forward stdin lines to the event loop until EOF
pub async fn stdin_reader(tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    line_reader(BufReader::new(tokio::io::stdin()), tx, interactive).await
}

pub async fn line_reader<R>(reader: R, tx: AsyncSender<AppEvent>, interactive: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        if interactive {
            prompt();
        }
        match lines.next_line().await? {
            Some(line) => tx.send(AppEvent::TextInput(line)).await?,
            None => break,
        }
    }

    tracing::debug!("Input closed");
    tx.send(AppEvent::InputClosed).await?;
    Ok(())
}

fn prompt() {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "> ");
    let _ = stderr.flush();
}
