use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Arguments passed after the container program: rebuild images, start detached.
pub const COMPOSE_UP_ARGS: &[&str] = &["compose", "up", "--build", "-d"];

/// Fixed external rebuild invocation: `<program> compose up --build -d`.
///
/// Without a `working_dir` the child inherits the hook's own working
/// directory, which is never resolved by the hook itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildCommand {
    pub program: String,
    pub working_dir: Option<PathBuf>,
}

/// Outcome of one rebuild invocation. Only the exit status is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildResult {
    /// The command ran and exited with this code (`None` when killed by a signal).
    Exited(Option<i32>),
    /// The command could not be started at all.
    SpawnFailed,
}

/// Seam between the dispatcher and the process that actually rebuilds.
pub trait RebuildRunner {
    fn run(&mut self, command: &RebuildCommand) -> RebuildResult;
}

/// Runs the rebuild as a blocking child process with inherited stdio.
#[derive(Debug, Default)]
pub struct ComposeRebuild;

impl RebuildCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run in `dir` instead of the inherited working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(COMPOSE_UP_ARGS);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for RebuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in COMPOSE_UP_ARGS {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl RebuildResult {
    pub fn from_status(status: ExitStatus) -> Self {
        RebuildResult::Exited(status.code())
    }

    pub fn success(&self) -> bool {
        matches!(self, RebuildResult::Exited(Some(0)))
    }
}

impl RebuildRunner for ComposeRebuild {
    fn run(&mut self, command: &RebuildCommand) -> RebuildResult {
        tracing::info!(
            command = %command,
            dir = ?command.working_dir(),
            "starting rebuild"
        );
        match command.to_command().status() {
            Ok(status) => {
                if !status.success() {
                    tracing::warn!(%status, "rebuild command exited unsuccessfully");
                }
                RebuildResult::from_status(status)
            }
            Err(err) => {
                tracing::error!(
                    program = %command.program,
                    error = %err,
                    "failed to start rebuild command"
                );
                RebuildResult::SpawnFailed
            }
        }
    }
}
