use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::classifier::Classification;
use crate::config::HookConfig;
use crate::event::ChangeEvent;
use crate::output;
use crate::rebuild::RebuildRunner;

/// What a single hook invocation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Payload did not decode; nothing printed, nothing run.
    Ignored,
    /// Non-critical edit; notice printed, nothing run.
    Notified,
    /// Critical edit in dry-run mode; rebuild reported but not run.
    DryRun,
    /// Critical edit; rebuild command succeeded.
    Rebuilt,
    /// Critical edit; rebuild command failed or could not start.
    RebuildFailed,
}

impl HookOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            HookOutcome::RebuildFailed => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}

/// Decode `raw`, classify the edited path and act on it.
///
/// Notices go to `out`. The rebuild, when needed, is delegated to `runner`
/// and blocks until it finishes.
pub fn handle_payload(
    raw: &[u8],
    config: &HookConfig,
    runner: &mut impl RebuildRunner,
    out: &mut impl Write,
) -> Result<HookOutcome> {
    let Some(event) = ChangeEvent::decode(raw) else {
        return Ok(HookOutcome::Ignored);
    };
    handle_event(&event, config, runner, out)
}

pub fn handle_event(
    event: &ChangeEvent,
    config: &HookConfig,
    runner: &mut impl RebuildRunner,
    out: &mut impl Write,
) -> Result<HookOutcome> {
    let file_path = event.file_path();
    let classification = config.patterns.classify(file_path);
    tracing::debug!(
        file_path,
        tool = event.tool_name().unwrap_or(""),
        critical = classification.is_critical(),
        patterns = config.patterns.patterns().len(),
        "classified edit"
    );

    let pattern = match classification {
        Classification::NonCritical => {
            output::print_hot_reload(out, file_path).context("failed to write notice")?;
            return Ok(HookOutcome::Notified);
        }
        Classification::Critical { pattern } => pattern,
    };

    output::print_critical_change(out, file_path, &pattern).context("failed to write notice")?;

    if config.dry_run {
        output::print_dry_run(out, &config.rebuild).context("failed to write notice")?;
        return Ok(HookOutcome::DryRun);
    }

    output::print_rebuild_start(out, &config.rebuild).context("failed to write notice")?;
    let result = runner.run(&config.rebuild);

    if result.success() {
        output::print_rebuild_succeeded(out).context("failed to write notice")?;
        Ok(HookOutcome::Rebuilt)
    } else {
        output::print_rebuild_failed(out).context("failed to write notice")?;
        Ok(HookOutcome::RebuildFailed)
    }
}
