// src/cli/tool.rs
// Direct operation calls and registry listing from the CLI

use anyhow::{Context, Result, bail};
use serde_json::Value;
use shopkeep::Agent;
use std::sync::Arc;

/// Call an operation by name with JSON object arguments and print the JSON result
pub async fn run_tool(agent: Arc<Agent>, name: String, args: String) -> Result<()> {
    let args = match serde_json::from_str::<Value>(&args).context("arguments must be JSON")? {
        Value::Object(map) => map,
        other => bail!("arguments must be a JSON object, got {}", other),
    };

    let output = tokio::task::spawn_blocking(move || agent.dispatcher().call_json(&name, args)).await?;
    println!("{}", output);
    Ok(())
}

/// Print grouped operation names and the total
pub fn run_list_tools(agent: &Agent) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&agent.tools())?);
    Ok(())
}
