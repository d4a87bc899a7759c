use std::io::{BufRead, Write};

use anyhow::Context;
use chartxo_ai::{ChatClient, ChatSession, GeminiClient, GenerativeTransport};
use chartxo_config::ChartxoConfig;
use chartxo_core::{CoreError, ImagePayload};
use chartxo_store::AppState;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::output::output;
use crate::ui;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Handle `chartxo chat`.
///
/// With `--message` a single question is asked and the transcript printed.
/// Otherwise questions are read from stdin, one per line, until EOF or `exit`.
pub async fn handle(
    args: &ChatArgs,
    config: &ChartxoConfig,
    state: &AppState,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let image = chart_image(args, state)?;
    let client = ChatClient::new(GeminiClient::from_config(config.require_gemini()?)?);
    let mut session = ChatSession::new(image);

    if let Some(message) = &args.message {
        session.send(&client, message).await;
        return output(&session.transcript(), flags.format);
    }

    let prompt = ui::prefs().interactive && !flags.quiet;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    converse(&client, &mut session, stdin.lock(), &mut stdout, prompt).await
}

fn chart_image(args: &ChatArgs, state: &AppState) -> anyhow::Result<ImagePayload> {
    if let Some(id) = &args.scan {
        let entry = state.find_scan(id).ok_or_else(|| CoreError::NotFound {
            entity_type: "scan".to_string(),
            id: id.clone(),
        })?;
        return Ok(ImagePayload::from_data_uri(&entry.image)?);
    }
    let path = args
        .image
        .as_deref()
        .context("either an image path or --scan is required")?;
    ImagePayload::from_file(path).with_context(|| format!("failed to load chart {}", path.display()))
}

/// Read questions line by line and write each reply. Blank lines are skipped.
pub async fn converse<T, R, W>(
    client: &ChatClient<T>,
    session: &mut ChatSession,
    input: R,
    out: &mut W,
    prompt: bool,
) -> anyhow::Result<()>
where
    T: GenerativeTransport,
    R: BufRead,
    W: Write,
{
    if prompt {
        writeln!(out, "Ask about the chart (`exit` to leave).")?;
    }
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&message.to_ascii_lowercase().as_str()) {
            break;
        }
        let reply = session.send(client, message).await;
        writeln!(out, "{reply}")?;
    }
    tracing::debug!(turns = session.transcript().len(), "chat ended");
    Ok(())
}
