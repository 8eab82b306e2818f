//! Scripted command replay.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use ark_editor::{Editor, EditorCommand, EditorError};

/// How a script is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySettings {
    /// Seed an empty canvas with a root container before the first command.
    pub initialize: bool,
    /// Log failed commands and continue instead of stopping.
    pub keep_going: bool,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            initialize: true,
            keep_going: false,
        }
    }
}

/// A command that failed while replaying with `keep_going`.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedCommand {
    /// One-based position in the script.
    pub position: usize,
    pub error: EditorError,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    pub applied: usize,
    pub failed: Vec<FailedCommand>,
}

/// Parse a JSON array of commands.
pub fn parse_script(content: &str) -> Result<Vec<EditorCommand>> {
    serde_json::from_str(content).context("parse command script")
}

/// Apply `commands` in order.
///
/// # Errors
///
/// Without `keep_going`, the first failing command stops the replay and is
/// returned with its script position.
pub fn replay(
    editor: &mut Editor,
    commands: Vec<EditorCommand>,
    settings: ReplaySettings,
) -> Result<ReplayReport> {
    let span = info_span!("replay", commands = commands.len());
    let _guard = span.enter();

    if settings.initialize
        && let Some(root) = editor.ensure_initialized().context("initialize canvas")?
    {
        debug!(component_id = %root, "seeded canvas");
    }

    let mut report = ReplayReport::default();
    for (index, command) in commands.into_iter().enumerate() {
        let position = index + 1;
        match editor.apply(command) {
            Ok(outcome) => {
                debug!(position, ?outcome, "command applied");
                report.applied += 1;
            }
            Err(error) if settings.keep_going => {
                warn!(position, %error, "command failed, continuing");
                report.failed.push(FailedCommand { position, error });
            }
            Err(error) => {
                return Err(error).with_context(|| format!("command #{position}"));
            }
        }
    }
    info!(
        applied = report.applied,
        failed = report.failed.len(),
        components = editor.tree().len(),
        "replay complete"
    );
    Ok(report)
}
