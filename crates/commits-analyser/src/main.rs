mod bootstrap;

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Result;
use analyser_core::error::AnalyserError;
use analyser_core::settings::{self, OutputMode, Settings};
use analyser_data::analysis::{load_dataset, summarize, Dataset};
use analyser_ui::app::TerminalChartRenderer;
use analyser_ui::menu::Menu;
use analyser_ui::summary_view;
use analyser_ui::themes::Theme;

/// Exit status for usage and load failures.
const EXIT_FAILURE: i32 = 1;

fn main() -> Result<()> {
    let settings = match parse_args(std::env::args_os()) {
        Ok(settings) => settings,
        Err(ArgsError::Usage) => {
            println!("{}", settings::USAGE);
            std::process::exit(EXIT_FAILURE);
        }
        Err(ArgsError::Clap(e)) => e.exit(),
    };

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Commits Analyser v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Output: {}, Theme: {}", settings.output, settings.theme);

    let dataset = match load_dataset(&settings.commits_file, &settings.identities_file) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Load failed: {:?}", e);
            eprintln!("{}", load_failure_message(&e));
            std::process::exit(EXIT_FAILURE);
        }
    };

    match settings.output_mode() {
        OutputMode::Interactive => run_interactive(&dataset, &settings.theme)?,
        OutputMode::Summary => print_summary(&dataset)?,
        OutputMode::Json => print_json(&dataset)?,
    }

    Ok(())
}

// ── Startup ───────────────────────────────────────────────────────────────────

/// Why the command line was rejected.
#[derive(Debug)]
enum ArgsError {
    /// Positional files are missing; the short usage line is shown.
    Usage,
    /// Anything else clap reports itself (`--help`, `--version`, bad values).
    Clap(clap::Error),
}

fn parse_args<I, T>(args: I) -> std::result::Result<Settings, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Settings::try_load_from(args).map_err(|e| {
        if settings::is_missing_arguments(&e) {
            ArgsError::Usage
        } else {
            ArgsError::Clap(e)
        }
    })
}

/// User-facing line printed before exiting on a load failure.
fn load_failure_message(err: &AnalyserError) -> String {
    format!("Error: {err}")
}

// ── Output modes ──────────────────────────────────────────────────────────────

/// Run the menu on stdin/stdout, drawing charts full-screen.
fn run_interactive(dataset: &Dataset, theme: &str) -> Result<()> {
    let mut renderer = TerminalChartRenderer::new(Theme::from_name(theme));
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(dataset.query(), stdin.lock(), stdout.lock()).run(&mut renderer)?;
    Ok(())
}

fn print_summary(dataset: &Dataset) -> Result<()> {
    let rows = summarize(&dataset.aggregate);
    let mut out = io::stdout().lock();
    for line in summary_view::render_summary(&rows) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn print_json(dataset: &Dataset) -> Result<()> {
    let json = serde_json::to_string_pretty(&dataset.aggregate).map_err(AnalyserError::from)?;
    println!("{json}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    // ── parse_args ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_args_no_files_is_usage() {
        assert!(matches!(
            parse_args(["commits-analyser"]),
            Err(ArgsError::Usage)
        ));
    }

    #[test]
    fn test_parse_args_one_file_is_usage() {
        assert!(matches!(
            parse_args(["commits-analyser", "commits.csv"]),
            Err(ArgsError::Usage)
        ));
    }

    #[test]
    fn test_parse_args_bad_option_left_to_clap() {
        let result = parse_args(["commits-analyser", "a.csv", "b.csv", "--output", "xml"]);
        assert!(matches!(result, Err(ArgsError::Clap(_))));
    }

    #[test]
    fn test_parse_args_both_files() {
        let settings = parse_args(["commits-analyser", "a.csv", "b.csv"]).unwrap();
        assert_eq!(settings.commits_file, Path::new("a.csv"));
        assert_eq!(settings.identities_file, Path::new("b.csv"));
    }

    #[test]
    fn test_usage_line() {
        assert_eq!(
            settings::USAGE,
            "Usage: commits-analyser <commits_file> <identities_file>"
        );
        assert_eq!(EXIT_FAILURE, 1);
    }

    // ── load_failure_message ──────────────────────────────────────────────────

    #[test]
    fn test_unreadable_commits_file_message() {
        let tmp = TempDir::new().unwrap();
        let identities = write_file(tmp.path(), "ids.csv", "committer_id,name\nu1,Alice\n");
        let missing = tmp.path().join("missing.csv");

        let err = load_dataset(&missing, &identities).unwrap_err();

        assert_eq!(
            load_failure_message(&err),
            format!("Error: could not open file: {}", missing.display())
        );
    }

    #[test]
    fn test_unreadable_identities_file_message() {
        let tmp = TempDir::new().unwrap();
        let commits = write_file(
            tmp.path(),
            "commits.csv",
            "commit,a,c,p,m,u,f,r,e,po,fe,re,co,cm,committer,message\n",
        );
        let missing = tmp.path().join("nope.csv");

        let err = load_dataset(&commits, &missing).unwrap_err();

        assert_eq!(
            load_failure_message(&err),
            format!("Error: could not open file: {}", missing.display())
        );
    }
}
