//! Plain-text rendering of the cost-effectiveness table.

use crate::domain::analysis::CeTable;

const HEADERS: [&str; 6] = [
    "Name",
    "E[Cost]",
    "E[Effect]",
    "Incremental Cost",
    "Incremental Effect",
    "ICER",
];

/// Renders the table as aligned columns.
///
/// The name column is left-aligned, numeric columns right-aligned. Missing
/// incremental values print as `-`.
pub fn render_text(table: &CeTable, precision: usize) -> String {
    let body: Vec<[String; 6]> = table
        .rows
        .iter()
        .map(|row| {
            [
                row.name.to_string(),
                format!("{:.*}", precision, row.cost),
                format!("{:.*}", precision, row.effect),
                optional(row.incremental_cost, precision),
                optional(row.incremental_effect, precision),
                format!("{:.*}", precision, row.icer),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    let mut out = String::new();
    for cells in std::iter::once(&header).chain(body.iter()) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(column, (cell, &width))| {
                if column == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }
    out
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}
