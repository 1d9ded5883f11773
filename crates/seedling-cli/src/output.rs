//! Formatted output helpers for CLI commands.
//!
//! Renders catalog entries as aligned, tab-free tables.

use seedling_imagevector::{ImageSource, VersionConstraint};

const HEADERS: [&str; 6] = ["NAME", "REPOSITORY", "TAG", "RUNTIME", "TARGET", "ARCH"];

/// Formats an optional constraint, `*` when absent.
#[must_use]
pub fn format_constraint(constraint: Option<&VersionConstraint>) -> String {
    constraint.map_or_else(|| "*".to_string(), ToString::to_string)
}

/// Renders catalog entries as a table, one row per entry in catalog order.
#[must_use]
pub fn sources_table(sources: &[&ImageSource]) -> String {
    let rows: Vec<[String; 6]> = sources
        .iter()
        .map(|s| {
            [
                s.name.clone(),
                s.repository.clone(),
                s.tag.clone().unwrap_or_else(|| "-".to_string()),
                format_constraint(s.runtime_version.as_ref()),
                format_constraint(s.target_version.as_ref()),
                if s.architectures.is_empty() {
                    "*".to_string()
                } else {
                    s.architectures.join(",")
                },
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: &[&str]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    push_row(&HEADERS);
    for row in &rows {
        push_row(&row.each_ref().map(String::as_str));
    }
    out
}
