//! Full-screen chart display for the interactive menu.
//!
//! [`TerminalChartRenderer`] switches the terminal into raw mode on the
//! alternate screen, draws the chart, and blocks until the user dismisses it.
//! The terminal is restored before control returns to the line-based menu.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use analyser_core::models::ChartData;

use crate::chart_view;
use crate::menu::ChartRenderer;
use crate::themes::Theme;

/// Renders charts with ratatui on the real terminal.
#[derive(Debug, Clone)]
pub struct TerminalChartRenderer {
    theme: Theme,
}

impl TerminalChartRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Draw `chart` and wait for a dismiss key. Redraws on resize.
    fn run_chart(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        chart: &ChartData,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                chart_view::render_bar_chart(frame, area, chart, &self.theme);
            })?;

            if let Event::Key(key) = event::read()? {
                if is_dismiss_key(&key) {
                    debug!("Chart dismissed with {:?}", key.code);
                    return Ok(());
                }
            }
        }
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn render(&mut self, chart: &ChartData) -> io::Result<()> {
        require_terminal(io::stdin().is_terminal(), io::stdout().is_terminal())?;
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_chart(&mut terminal, chart);

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

/// Full-screen drawing needs both keyboard input and the screen on a
/// terminal; scripted stdin or redirected stdout gets an error instead.
pub fn require_terminal(stdin_is_tty: bool, stdout_is_tty: bool) -> io::Result<()> {
    if stdin_is_tty && stdout_is_tty {
        Ok(())
    } else {
        Err(io::Error::other("not a terminal"))
    }
}

/// `q`, `Q`, Esc, Enter, or Ctrl+C. Key releases are ignored.
pub fn is_dismiss_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => true,
        _ => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
