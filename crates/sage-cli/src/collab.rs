//! Collaborator adapters backed by external commands.
//!
//! The core engine only knows the [`ScheduleGenerator`] trait; this module
//! adapts an arbitrary model CLI (anything that reads a prompt on stdin and
//! writes its answer to stdout) into that trait. With no command configured
//! the engine falls back to its offline path, so this adapter is strictly
//! optional.

use std::process::Stdio;

use async_trait::async_trait;
use log::debug;
use sage_core::{EngineError, ScheduleGenerator};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Environment variable set when the prompt may use live web search.
const ALLOW_SEARCH_ENV: &str = "SAGE_ALLOW_SEARCH";

/// Generator that shells out to an external model CLI.
///
/// The configured command line is split on whitespace; the prompt is piped
/// to stdin and the full stdout is returned as the raw response. Any spawn
/// failure, non-zero exit, or empty output is reported as a collaborator
/// error, which the engine absorbs into its fallback path.
pub struct CommandGenerator {
    command_line: String,
}

impl CommandGenerator {
    pub fn new(command_line: String) -> Self {
        Self { command_line }
    }
}

#[async_trait]
impl ScheduleGenerator for CommandGenerator {
    async fn invoke(&self, prompt: &str, allow_live_search: bool) -> sage_core::Result<String> {
        let mut parts = self.command_line.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            EngineError::invalid_input("generator_cmd", "Empty generator command")
        })?;

        let mut command = Command::new(program);
        command
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if allow_live_search {
            command.env(ALLOW_SEARCH_ENV, "1");
        }

        debug!("invoking generator command '{program}'");
        let mut child = command
            .spawn()
            .map_err(|e| EngineError::collaborator(format!("spawn '{program}' failed: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| EngineError::collaborator(format!("writing prompt failed: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| EngineError::collaborator(format!("waiting on '{program}' failed: {e}")))?;

        if !output.status.success() {
            return Err(EngineError::collaborator(format!(
                "'{program}' exited with {}",
                output.status
            )));
        }

        let response = String::from_utf8_lossy(&output.stdout).into_owned();
        if response.trim().is_empty() {
            return Err(EngineError::collaborator(format!(
                "'{program}' produced no output"
            )));
        }
        Ok(response)
    }
}
