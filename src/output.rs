use std::io::{self, Write};
use std::path::Path;

use crate::rebuild::RebuildCommand;

/// Prefix on every line the hook prints, so the notices stand out in the runner's transcript.
const PREFIX: &str = "[Docker Sync]";

/// Shown instead of a file name when the event did not name a file.
pub const UNKNOWN_FILE: &str = "(unknown)";

/// Short name for a non-critical edit: the last path component, or the raw
/// path when it has none, or [`UNKNOWN_FILE`] when the path is empty.
pub fn display_name(file_path: &str) -> &str {
    if file_path.is_empty() {
        return UNKNOWN_FILE;
    }
    Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_path)
}

pub fn print_hot_reload(out: &mut impl Write, file_path: &str) -> io::Result<()> {
    writeln!(
        out,
        "{PREFIX} {} changed → picked up by hot reload (no Docker action needed)",
        display_name(file_path)
    )
}

pub fn print_critical_change(
    out: &mut impl Write,
    file_path: &str,
    pattern: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{PREFIX} Critical file changed: {file_path} (matched \"{pattern}\")"
    )
}

pub fn print_rebuild_start(out: &mut impl Write, command: &RebuildCommand) -> io::Result<()> {
    writeln!(out, "{PREFIX} Running {command}...")?;
    // The child inherits stdout; make sure our lines land before its output.
    out.flush()
}

pub fn print_dry_run(out: &mut impl Write, command: &RebuildCommand) -> io::Result<()> {
    writeln!(out, "{PREFIX} Dry run: would run {command}")
}

pub fn print_rebuild_failed(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{PREFIX} ❌ Docker rebuild failed")
}

pub fn print_rebuild_succeeded(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{PREFIX} ✅ Containers rebuilt and started")
}
