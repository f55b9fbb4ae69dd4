//! Bar chart view for query results.
//!
//! Renders a [`ChartData`] payload as a bordered [`ratatui::widgets::BarChart`]
//! with the y-axis title above the bars and the x-axis title below them.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use analyser_core::formatting;
use analyser_core::models::ChartData;

use crate::themes::Theme;

const MAX_BAR_WIDTH: u16 = 16;
const BAR_GAP: u16 = 2;

/// Render `chart` into `area`.
pub fn render_bar_chart(frame: &mut Frame, area: Rect, chart: &ChartData, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", chart.title), theme.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [y_title_area, bars_area, x_title_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(chart.y_axis_title.clone(), theme.axis_title)),
        y_title_area,
    );

    if chart.values.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing to plot", theme.warning))
                .alignment(Alignment::Center),
            bars_area,
        );
    } else {
        let bar_width = bar_width_for(bars_area.width, chart.values.len());
        let max = chart.max_value();
        let bars: Vec<Bar> = chart
            .labels
            .iter()
            .zip(&chart.values)
            .map(|(label, &value)| {
                Bar::default()
                    .value(value)
                    .text_value(formatting::format_count(value))
                    .label(Line::from(fit_label(label, bar_width as usize)))
                    .style(theme.bar_style(formatting::percentage(value, max, 1)))
                    .value_style(theme.bar_value)
            })
            .collect();

        let bar_chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .label_style(theme.bar_label)
            .max(max.max(1));
        frame.render_widget(bar_chart, bars_area);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(chart.x_axis_title.clone(), theme.axis_title))
            .alignment(Alignment::Center),
        x_title_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Press 'q', Esc or Enter to return to the menu",
            theme.dim,
        )),
        hint_area,
    );
}

/// Widest bar that fits `count` bars (plus gaps) into `width` columns,
/// clamped to `1..=MAX_BAR_WIDTH`.
pub fn bar_width_for(width: u16, count: usize) -> u16 {
    if count == 0 {
        return MAX_BAR_WIDTH;
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let gaps = BAR_GAP.saturating_mul(count.saturating_sub(1));
    (width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Shorten `label` to at most `width` display columns, marking the cut with
/// an ellipsis.
pub fn fit_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ── Tests ──────────────────────────────────────────────────────────────────────
