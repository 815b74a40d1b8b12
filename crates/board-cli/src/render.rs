//! Text and JSON rendering of leaderboard views.

use anyhow::Result;
use board_core::{LeaderboardView, RankedRow, SearchOutcome, lookup_row};
use board_model::{Ambassador, Rank, ViewOptions};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Rank lookup result for a single ambassador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankReport {
    pub email: String,
    /// Unranked when the email is missing or the score is zero.
    pub rank: Rank,
    /// `None` when the email is not in the snapshot.
    pub row: Option<RankedRow>,
}

impl RankReport {
    pub fn new(ambassadors: &[Ambassador], email: &str, options: &ViewOptions) -> Self {
        let row = lookup_row(ambassadors, email, options);
        Self {
            email: email.to_string(),
            rank: row.as_ref().map_or(Rank::UNRANKED, |row| row.rank),
            row,
        }
    }
}

pub fn render_leaderboard(view: &LeaderboardView, format: OutputFormat, styled: bool) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(view)?);
    }
    Ok(match view {
        LeaderboardView::Ready { rows, total } => {
            let table = ranked_table(rows, styled);
            format!("{table}\nShowing {} of {total} ambassadors", rows.len())
        }
        other => other.message().unwrap_or_default(),
    })
}

pub fn render_search(outcome: &SearchOutcome, format: OutputFormat, styled: bool) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }
    Ok(match outcome {
        SearchOutcome::Matches(rows) => ranked_table(rows, styled).to_string(),
        SearchOutcome::Inactive => "Enter a name or email to search.".to_string(),
        other => other.message().unwrap_or_default(),
    })
}

pub fn render_rank(report: &RankReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    Ok(match &report.row {
        Some(row) => format!(
            "{} ({}): {} with {} points",
            row.name, row.contact, row.rank, row.score
        ),
        None => format!("{}: {}", report.email, report.rank),
    })
}

/// Table of ranked rows: rank, name, contact and points.
pub fn ranked_table(rows: &[RankedRow], styled: bool) -> Table {
    let mut table = Table::new();
    if !styled {
        table.force_no_tty();
    }
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("Name"),
        header_cell("Contact"),
        header_cell("Points"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            rank_cell(row.rank),
            Cell::new(&row.name),
            Cell::new(&row.contact).fg(Color::Grey),
            Cell::new(row.score)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rank_cell(rank: Rank) -> Cell {
    if rank.is_ranked() {
        Cell::new(rank).add_attribute(Attribute::Bold)
    } else {
        Cell::new(rank).fg(Color::DarkGrey)
    }
}
