use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Usage line printed when the positional file arguments are missing.
pub const USAGE: &str = "Usage: commits-analyser <commits_file> <identities_file>";

/// Analyse classified commits per developer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "commits-analyser",
    about = "Analyse classified commits per developer",
    version
)]
pub struct Settings {
    /// Commit classification dataset (CSV, 16 columns)
    pub commits_file: PathBuf,

    /// Committer identity mapping (CSV, id,name)
    pub identities_file: PathBuf,

    /// What to do with the aggregated counts
    #[arg(long, default_value = "interactive", value_parser = ["interactive", "summary", "json"])]
    pub output: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path (logs go to stderr when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── OutputMode ─────────────────────────────────────────────────────────────────

/// Typed view of the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Menu-driven charts and queries.
    Interactive,
    /// Per-developer totals table on stdout.
    Summary,
    /// Aggregate dumped as JSON on stdout.
    Json,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments.
    pub fn try_load() -> Result<Self, clap::Error> {
        Self::try_load_from(std::env::args_os())
    }

    /// Same as [`Settings::try_load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let settings = Settings::try_parse_from(args)?;
        Ok(Self::resolve_overrides(settings))
    }

    /// `--debug` overrides the log level.
    fn resolve_overrides(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    pub fn output_mode(&self) -> OutputMode {
        match self.output.as_str() {
            "summary" => OutputMode::Summary,
            "json" => OutputMode::Json,
            _ => OutputMode::Interactive,
        }
    }
}

/// Returns `true` when a parse failure is due to missing positional files,
/// which gets the short usage line instead of clap's report.
pub fn is_missing_arguments(err: &clap::Error) -> bool {
    err.kind() == clap::error::ErrorKind::MissingRequiredArgument
}

// ── Tests ──────────────────────────────────────────────────────────────────────
