//! Interactive menu shell.
//!
//! A thin loop over line-based input that prints prompts, validates the
//! numeric choices, and dispatches to the [`QueryEngine`]. Charts are handed to
//! a [`ChartRenderer`], so the loop can be driven from tests with scripted
//! input and a recording renderer.

use std::io::{self, BufRead, Write};

use analyser_core::error::Result;
use analyser_core::models::{ChartData, Scheme};
use analyser_data::query::QueryEngine;
use tracing::{debug, warn};

// ── ChartRenderer ─────────────────────────────────────────────────────────────

/// Presentation seam for bar charts.
pub trait ChartRenderer {
    /// Show `chart`, returning once the user has dismissed it.
    fn render(&mut self, chart: &ChartData) -> io::Result<()>;
}

// ── MenuChoice ────────────────────────────────────────────────────────────────

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CompareDeveloper,
    CompareFeature,
    MaxDeveloper,
    Exit,
}

impl MenuChoice {
    /// Map the 1-based menu number to a choice.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::CompareDeveloper),
            2 => Some(MenuChoice::CompareFeature),
            3 => Some(MenuChoice::MaxDeveloper),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "\nMenu
1. Compare the number of commits done by a particular developer for a given classification scheme.
2. Compare the number of commits done by all developers, which are classified with a given feature (for example, developer X has Y commits, developer I has J commits, and developer A has B commits for a given feature).
3. Print the developer with the maximum number of commits for a given feature (for example, print the developer who has the maximum number of commits with Corrective Tasks).
4. Exit";

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Menu loop bound to an input, an output, and a query engine.
pub struct Menu<'a, R, W> {
    engine: QueryEngine<'a>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: QueryEngine<'a>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Run until the user picks "Exit" or the input is closed.
    pub fn run(&mut self, renderer: &mut dyn ChartRenderer) -> Result<()> {
        loop {
            let Some(choice) = self.read_menu_choice()? else {
                break;
            };
            debug!("Menu choice: {:?}", choice);

            let finished = match choice {
                Some(MenuChoice::CompareDeveloper) => self.compare_developer(renderer)?,
                Some(MenuChoice::CompareFeature) => self.compare_feature(renderer)?,
                Some(MenuChoice::MaxDeveloper) => self.print_max_developer()?,
                Some(MenuChoice::Exit) => break,
                None => false,
            };
            if finished {
                break;
            }
        }

        writeln!(self.output, "Exiting...")?;
        Ok(())
    }

    // ── Actions ───────────────────────────────────────────────────────────────
    //
    // Each action returns `true` when the input was closed mid-way.

    fn compare_developer(&mut self, renderer: &mut dyn ChartRenderer) -> Result<bool> {
        let Some(developer) = self.pick_developer()? else {
            return Ok(true);
        };
        let Some(scheme) = self.pick_scheme()? else {
            return Ok(true);
        };

        let chart = self.engine.developer_chart(&developer, scheme)?;
        self.show(renderer, &chart)?;
        Ok(false)
    }

    fn compare_feature(&mut self, renderer: &mut dyn ChartRenderer) -> Result<bool> {
        let Some(scheme) = self.pick_scheme()? else {
            return Ok(true);
        };
        let Some(feature) = self.pick_feature(scheme)? else {
            return Ok(true);
        };

        let chart = self.engine.feature_chart(feature, scheme)?;
        self.show(renderer, &chart)?;
        Ok(false)
    }

    fn print_max_developer(&mut self) -> Result<bool> {
        let Some(scheme) = self.pick_scheme()? else {
            return Ok(true);
        };
        let Some(feature) = self.pick_feature(scheme)? else {
            return Ok(true);
        };

        let developer = self.engine.argmax_developer(feature, scheme)?;
        writeln!(self.output, "Max commits for {feature}: {developer}")?;
        Ok(false)
    }

    /// Hand `chart` to the renderer, falling back to a text listing when the
    /// terminal cannot display it.
    fn show(&mut self, renderer: &mut dyn ChartRenderer, chart: &ChartData) -> io::Result<()> {
        if let Err(e) = renderer.render(chart) {
            warn!("Chart rendering failed, printing as text: {}", e);
            writeln!(self.output, "{}", chart.title)?;
            for (label, value) in chart.labels.iter().zip(&chart.values) {
                writeln!(self.output, "  {label}: {value}")?;
            }
        }
        Ok(())
    }

    // ── Pickers ───────────────────────────────────────────────────────────────
    //
    // `Ok(None)` means the input was closed.

    /// `Some(None)` is a line that is not a valid menu number.
    fn read_menu_choice(&mut self) -> io::Result<Option<Option<MenuChoice>>> {
        writeln!(self.output, "{MENU_TEXT}")?;
        let Some(line) = self.prompt("Enter your choice: ")? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(n) => Ok(Some(MenuChoice::from_number(n))),
            Err(_) => {
                writeln!(self.output, "Error: invalid input")?;
                Ok(Some(None))
            }
        }
    }

    fn pick_scheme(&mut self) -> io::Result<Option<Scheme>> {
        for (i, scheme) in Scheme::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, scheme.title())?;
        }
        loop {
            let Some(line) = self.prompt("Please choose the classification scheme: ")? else {
                return Ok(None);
            };
            let scheme = match line.trim() {
                "1" => Scheme::SwmTasks,
                "2" => Scheme::NfrLabeling,
                "3" => Scheme::SoftEvolTasks,
                _ => continue,
            };
            return Ok(Some(scheme));
        }
    }

    fn pick_developer(&mut self) -> io::Result<Option<String>> {
        let developers: Vec<&str> = self.engine.developers().collect();
        writeln!(self.output, "List of developers: ")?;
        let index = self.pick_numbered(&developers, "Please choose a developer: ")?;
        Ok(index.map(|i| developers[i].to_string()))
    }

    fn pick_feature(&mut self, scheme: Scheme) -> io::Result<Option<&'static str>> {
        let features = scheme.features();
        writeln!(self.output, "List of features: ")?;
        let index = self.pick_numbered(features, "Please choose a feature: ")?;
        Ok(index.map(|i| features[i]))
    }

    /// List `items` as `n: item` and prompt until a number in range is given.
    /// Returns the 0-based index.
    fn pick_numbered(&mut self, items: &[&str], question: &str) -> io::Result<Option<usize>> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}: {}", i + 1, item)?;
        }
        if items.is_empty() {
            writeln!(self.output, "Nothing to choose from")?;
            return Ok(None);
        }
        loop {
            let Some(line) = self.prompt(question)? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                Ok(_) => {}
                Err(_) => writeln!(self.output, "Error: invalid input")?,
            }
        }
    }

    /// Print `question` and read one line; `None` at end of input.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use analyser_core::models::Aggregate;
    use analyser_data::aggregator::aggregate_commits;
    use analyser_data::identities::load_identities;

    // ── Helpers ───────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingRenderer {
        charts: Vec<ChartData>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, chart: &ChartData) -> io::Result<()> {
            self.charts.push(chart.clone());
            Ok(())
        }
    }

    struct FailingRenderer;

    impl ChartRenderer for FailingRenderer {
        fn render(&mut self, _chart: &ChartData) -> io::Result<()> {
            Err(io::Error::other("not a terminal"))
        }
    }

    fn alice_bob() -> Aggregate {
        let (ids, mut agg) = load_identities(["committer_id,name", "u1,Alice", "u2,Bob"]).unwrap();
        let commits = [
            "commit,a,c,p,m,u,f,r,e,po,fe,re,co,cm,committer,message",
            "c1,1,0,0,0,0,0,0,0,0,0,0,0,0,u1,one",
            "c2,1,0,0,0,0,0,0,0,0,0,0,0,0,u1,two",
            "c3,0,1,0,0,0,0,0,0,0,0,0,0,0,u2,three",
        ];
        aggregate_commits(commits, &ids, &mut agg).unwrap();
        agg
    }

    /// Drive the menu with `script` and return (output, rendered charts).
    fn run_script(agg: &Aggregate, script: &str) -> (String, Vec<ChartData>) {
        let mut renderer = RecordingRenderer::default();
        let mut output = Vec::new();
        Menu::new(QueryEngine::new(agg), script.as_bytes(), &mut output)
            .run(&mut renderer)
            .unwrap();
        (String::from_utf8(output).unwrap(), renderer.charts)
    }

    // ── MenuChoice ────────────────────────────────────────────────────────────

    #[test]
    fn test_menu_choice_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::CompareDeveloper));
        assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(5), None);
    }

    // ── Exit paths ────────────────────────────────────────────────────────────

    #[test]
    fn test_exit_choice() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "4\n");
        assert!(out.contains("Enter your choice: "));
        assert!(out.ends_with("Exiting...\n"));
        assert!(charts.is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let agg = alice_bob();
        let (out, _) = run_script(&agg, "");
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_end_of_input_inside_picker_exits() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "1\n1\n");
        assert!(out.contains("Please choose the classification scheme: "));
        assert!(out.ends_with("Exiting...\n"));
        assert!(charts.is_empty());
    }

    // ── Invalid input ─────────────────────────────────────────────────────────

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let agg = alice_bob();
        let (out, _) = run_script(&agg, "abc\n9\n4\n");
        assert_eq!(out.matches("Error: invalid input").count(), 1);
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn test_invalid_developer_input_reprompts() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "1\nzz\n0\n3\n2\n1\n4\n");
        assert_eq!(out.matches("Please choose a developer: ").count(), 4);
        assert_eq!(out.matches("Error: invalid input").count(), 1);
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Commits by Bob for SwM tasks");
    }

    #[test]
    fn test_invalid_scheme_input_reprompts_silently() {
        let agg = alice_bob();
        let (out, _) = run_script(&agg, "3\n7\nfoo\n1\n2\n4\n");
        assert_eq!(
            out.matches("Please choose the classification scheme: ").count(),
            3
        );
        assert!(!out.contains("Error: invalid input"));
        assert!(out.contains("Max commits for Corrective Tasks: Bob"));
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    #[test]
    fn test_compare_developer_renders_chart() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "1\n1\n1\n4\n");

        assert!(out.contains("List of developers: \n1: Alice\n2: Bob\n"));
        assert!(out.contains("1. Swanson's Maintenance Tasks"));
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Commits by Alice for SwM tasks");
        assert_eq!(charts[0].values, vec![2, 0, 0]);
        assert_eq!(charts[0].x_axis_title, "Features");
    }

    #[test]
    fn test_compare_feature_renders_chart() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "2\n1\n2\n4\n");

        assert!(out.contains("List of features: \n1: Adaptive Tasks\n"));
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Commits for Corrective Tasks");
        assert_eq!(charts[0].labels, vec!["Alice", "Bob"]);
        assert_eq!(charts[0].values, vec![0, 1]);
        assert_eq!(charts[0].x_axis_title, "Developers");
    }

    #[test]
    fn test_print_max_developer() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "3\n1\n1\n4\n");
        assert!(out.contains("Max commits for Adaptive Tasks: Alice\n"));
        assert!(charts.is_empty());
    }

    #[test]
    fn test_several_queries_in_one_session() {
        let agg = alice_bob();
        let (out, charts) = run_script(&agg, "1\n2\n3\n2\n2\n4\n3\n3\n2\n4\n");
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].title, "Commits by Bob for SoftEvol tasks");
        assert_eq!(charts[1].title, "Commits for Reliability");
        // Nobody has Re-Engineering commits; the first developer wins the tie.
        assert!(out.contains("Max commits for Re-Engineering: Alice"));
    }

    #[test]
    fn test_render_failure_falls_back_to_text() {
        let agg = alice_bob();
        let mut output = Vec::new();
        Menu::new(QueryEngine::new(&agg), "2\n1\n1\n4\n".as_bytes(), &mut output)
            .run(&mut FailingRenderer)
            .unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Commits for Adaptive Tasks\n  Alice: 2\n  Bob: 0\n"));
    }

    #[test]
    fn test_no_developers_returns_to_menu() {
        let agg = Aggregate::new();
        let (out, charts) = run_script(&agg, "1\n4\n");
        assert!(out.contains("Nothing to choose from"));
        assert!(out.ends_with("Exiting...\n"));
        assert!(charts.is_empty());
    }
}
