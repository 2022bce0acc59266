use crate::classifier::CriticalPatternSet;
use crate::cli::Cli;
use crate::rebuild::RebuildCommand;

/// Immutable hook configuration, built once at startup and passed by reference.
///
/// There is no configuration file: everything comes from built-in defaults
/// plus the optional command-line flags.
#[derive(Debug, Clone)]
pub struct HookConfig {
    pub patterns: CriticalPatternSet,
    pub rebuild: RebuildCommand,
    /// Report what would be rebuilt without spawning anything.
    pub dry_run: bool,
}

impl HookConfig {
    /// Build the configuration from parsed flags.
    ///
    /// The rebuild runs in `--project-dir` when given, otherwise it inherits
    /// the process's working directory (the hook runner starts us at the project root).
    pub fn from_cli(cli: &Cli) -> Self {
        let mut rebuild = RebuildCommand::new(cli.program.clone());
        if let Some(dir) = &cli.project_dir {
            rebuild = rebuild.in_dir(dir.clone());
        }

        Self {
            patterns: CriticalPatternSet::with_extra(&cli.patterns),
            rebuild,
            dry_run: cli.dry_run,
        }
    }
}
