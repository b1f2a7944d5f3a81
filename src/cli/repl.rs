// src/cli/repl.rs
// Interactive and one-shot command handling

use anyhow::Result;
use shopkeep::Agent;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

const PROMPT: &str = "shopkeep> ";

/// Run one request on the blocking pool; the agent itself is synchronous
async fn handle(agent: &Arc<Agent>, text: String) -> Result<String> {
    let agent = Arc::clone(agent);
    Ok(tokio::task::spawn_blocking(move || agent.handle(&text)).await?)
}

/// Handle a single command and print the reply
pub async fn run_ask(agent: Arc<Agent>, text: Vec<String>) -> Result<()> {
    let reply = handle(&agent, text.join(" ")).await?;
    println!("{}", reply);
    Ok(())
}

/// Read commands line by line until EOF, `quit` or `exit`
pub async fn run_repl(agent: Arc<Agent>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        debug!(input = line, "REPL request");
        let reply = handle(&agent, line.to_string()).await?;
        stdout.write_all(format!("{}\n", reply).as_bytes()).await?;
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
