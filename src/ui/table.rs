//! Tabular rendering of package records.

use crate::core::types::PackageRecord;
use crate::ui;
use colored::Colorize;
use std::io::{self, Write};
use terminal_size::{Width, terminal_size};

const COLUMN_GAP: &str = "  ";
const MIN_FLEX_WIDTH: usize = 16;
const DEFAULT_TERM_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// `list`: installed packages with their latest release
    Installed,
    /// `search`: index hits
    Search,
    /// `update`: outdated packages
    Outdated,
}

impl TableKind {
    fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Installed | Self::Outdated => &["Package", "Current", "Latest", "Manager"],
            Self::Search => &["Package", "Version", "Description", "Manager"],
        }
    }

    /// Column that shrinks to fit the terminal
    fn flexible_column(&self) -> Option<usize> {
        match self {
            Self::Search => Some(2),
            Self::Installed | Self::Outdated => None,
        }
    }

    fn cells(&self, record: &PackageRecord) -> Vec<String> {
        let version = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        match self {
            Self::Installed | Self::Outdated => vec![
                record.name.clone(),
                version(&record.installed_version),
                version(&record.latest_version),
                record.manager.to_string(),
            ],
            Self::Search => vec![
                record.name.clone(),
                version(&record.latest_version),
                record.description.clone().unwrap_or_default(),
                record.manager.to_string(),
            ],
        }
    }
}

pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERM_WIDTH)
}

/// Print records as a table on stdout, falling back to one line per record
pub fn render(kind: TableKind, records: &[PackageRecord]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, kind, records, terminal_width());
}

/// Table first, plain lines if that fails; a closed pipe ends output quietly
pub fn render_to<W: Write>(out: &mut W, kind: TableKind, records: &[PackageRecord], term_width: usize) {
    let e = match write_table(out, kind, records, term_width) {
        Ok(()) => return,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return,
        Err(e) => e,
    };

    ui::verbose(&format!("Table rendering failed ({}), using plain output", e));
    if let Err(e) = write_plain(out, records) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            ui::verbose(&format!("Plain output failed: {}", e));
        }
    }
}

pub fn write_plain<W: Write>(out: &mut W, records: &[PackageRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", plain_line(record))?;
    }
    Ok(())
}

/// `name current -> latest (manager)`, unknown parts omitted
pub fn plain_line(record: &PackageRecord) -> String {
    let mut line = record.name.clone();
    match (&record.installed_version, &record.latest_version) {
        (Some(current), Some(latest)) if current != latest => {
            line.push_str(&format!(" {} -> {}", current, latest));
        }
        (Some(version), _) | (None, Some(version)) => {
            line.push_str(&format!(" {}", version));
        }
        (None, None) => {}
    }
    line.push_str(&format!(" ({})", record.manager));
    line
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn write_table<W: Write>(
    out: &mut W,
    kind: TableKind,
    records: &[PackageRecord],
    term_width: usize,
) -> io::Result<()> {
    let headers = kind.headers();
    let rows: Vec<Vec<String>> = records.iter().map(|r| kind.cells(r)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    if let Some(flex) = kind.flexible_column() {
        let fixed: usize = widths
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != flex)
            .map(|(_, w)| *w)
            .sum::<usize>()
            + COLUMN_GAP.len() * (widths.len() - 1);
        let available = term_width.saturating_sub(fixed).max(MIN_FLEX_WIDTH);
        widths[flex] = widths[flex].min(available);
    }

    let last = widths.len() - 1;
    let pad = |text: &str, idx: usize| -> String {
        let text = truncate(text, widths[idx]);
        if idx == last {
            text
        } else {
            format!("{:<width$}", text, width = widths[idx])
        }
    };

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| pad(h, idx).bold().to_string())
        .collect();
    writeln!(out, "{}", header_line.join(COLUMN_GAP))?;

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    writeln!(out, "{}", rule.join(COLUMN_GAP).bright_black())?;

    for (record, row) in records.iter().zip(&rows) {
        let outdated = record.is_outdated();
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let text = pad(cell, idx);
                match (idx, kind) {
                    (0, _) if outdated => text.red().to_string(),
                    (2, TableKind::Installed | TableKind::Outdated) if outdated => {
                        text.green().to_string()
                    }
                    (2, TableKind::Search) => text.dimmed().to_string(),
                    (3, _) => text.cyan().to_string(),
                    _ => text,
                }
            })
            .collect();
        writeln!(out, "{}", line.join(COLUMN_GAP))?;
    }

    Ok(())
}
