//! Plain-text summary table: one row per developer with the commit total for
//! each classification scheme, followed by a totals row.

use unicode_width::UnicodeWidthStr;

use analyser_core::formatting;
use analyser_core::models::Scheme;
use analyser_data::analysis::{grand_totals, DeveloperTotals};

const COLUMN_GAP: &str = "  ";

/// Render the summary table as text lines, ready to print.
pub fn render_summary(rows: &[DeveloperTotals]) -> Vec<String> {
    let totals = grand_totals(rows);

    let header: Vec<String> = std::iter::once("Developer".to_string())
        .chain(Scheme::ALL.iter().map(|s| s.name().to_string()))
        .collect();

    let body: Vec<Vec<String>> = rows
        .iter()
        .chain(std::iter::once(&totals))
        .map(|row| {
            std::iter::once(row.developer.clone())
                .chain(
                    Scheme::ALL
                        .iter()
                        .map(|s| formatting::format_count(row.get(*s))),
                )
                .collect::<Vec<String>>()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.width());
        }
    }

    let rule = "-".repeat(widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1));

    let mut lines = Vec::with_capacity(body.len() + 3);
    lines.push(format_row(&header, &widths));
    lines.push(rule.clone());
    let Some((total_row, developer_rows)) = body.split_last() else {
        return lines;
    };
    for cells in developer_rows {
        lines.push(format_row(cells, &widths));
    }
    lines.push(rule);
    lines.push(format_row(total_row, &widths));
    lines
}

/// Left-align the first column, right-align the numeric ones.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = " ".repeat(width.saturating_sub(cell.width()));
        if i == 0 {
            out.push_str(cell);
            out.push_str(&pad);
        } else {
            out.push_str(COLUMN_GAP);
            out.push_str(&pad);
            out.push_str(cell);
        }
    }
    out.trim_end().to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
