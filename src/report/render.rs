//! Plain-text report rendering, projection table export and chart data

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write;

use super::Report;
use crate::error::ReportError;
use crate::projection::{ProjectionResult, ProjectionRow};

/// Column headers of the projection table
pub const TABLE_COLUMNS: [&str; 6] = ["Month", "Users", "Revenue", "Total Cost", "Net Profit", "Cash Flow"];

/// Line chart of cumulative cash flow, ready for a plotting collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `(month, cash_flow)` pairs, month ascending
    pub points: Vec<(u32, f64)>,
}

impl ChartSpec {
    pub fn cash_flow(result: &ProjectionResult) -> Self {
        Self {
            title: "Financial Projection".to_string(),
            x_label: "Month".to_string(),
            y_label: "Cumulative Cash Flow".to_string(),
            points: result.cash_flow_series(),
        }
    }
}

/// Write the projection table as CSV; values are written unrounded
pub fn write_table_csv<W: Write>(rows: &[ProjectionRow], writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TABLE_COLUMNS)?;

    for row in rows {
        csv_writer.write_record([
            row.month.to_string(),
            row.users.to_string(),
            row.revenue.to_string(),
            row.total_cost.to_string(),
            row.net_profit.to_string(),
            row.cash_flow.to_string(),
        ])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Fixed-width projection table with currency to two decimals
pub fn format_table(rows: &[ProjectionRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>12} {:>14} {:>14} {:>14} {:>14}",
        TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2], TABLE_COLUMNS[3], TABLE_COLUMNS[4], TABLE_COLUMNS[5]
    );
    let _ = writeln!(out, "{}", "-".repeat(78));

    for row in rows {
        let _ = writeln!(
            out,
            "{:>5} {:>12.2} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.month, row.users, row.revenue, row.total_cost, row.net_profit, row.cash_flow
        );
    }
    out
}

fn month_or_never(month: Option<u32>) -> String {
    month.map_or_else(|| "not reached".to_string(), |m| format!("month {}", m))
}

/// Render the whole report as a plain-text document
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(out, "{}", "=".repeat(report.title.len()));
    let _ = writeln!(out, "Generated: {}\n", report.generated_at.format("%Y-%m-%d %H:%M UTC"));

    for section in &report.sections {
        let _ = writeln!(out, "{}", section.heading);
        let _ = writeln!(out, "{}", "-".repeat(section.heading.len()));
        let _ = writeln!(out, "{}\n", section.content);
    }

    let _ = writeln!(out, "Financial Projection");
    let _ = writeln!(out, "--------------------");
    out.push_str(&format_table(&report.projection.rows));

    let summary = report.projection.summary();
    let _ = writeln!(out);
    let _ = writeln!(out, "Total revenue:          {:.2}", summary.total_revenue);
    let _ = writeln!(out, "Total cost:             {:.2}", summary.total_cost);
    let _ = writeln!(out, "Total net profit:       {:.2}", summary.total_net_profit);
    let _ = writeln!(out, "Final users:            {:.2}", summary.final_users);
    let _ = writeln!(out, "Final cash flow:        {:.2}", summary.final_cash_flow);
    let _ = writeln!(out, "Peak funding need:      {:.2}", 0.0 - summary.min_cash_flow);
    let _ = writeln!(out, "First profitable month: {}", month_or_never(summary.first_profitable_month));
    let _ = writeln!(out, "Breakeven:              {}", month_or_never(summary.breakeven_month));

    out
}
