// src/render.rs
//
// Column projection and plain-text table output. Projection is purely
// structural: the selected shared fields appear in canonical order, and
// the reserved `players` column expands to one boolean column per
// requested player (all of them together, never a subset).

use std::collections::BTreeSet;

use crate::aggregate::AggregatedRow;
use crate::select::Column;

pub fn project(
    players: &[String],
    rows: &[&AggregatedRow],
    columns: &BTreeSet<Column>,
) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = Vec::new();
    for col in columns {
        match col {
            Column::Players => headers.extend(players.iter().cloned()),
            other => headers.push(s!(other.as_str())),
        }
    }

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(headers.len());
        for col in columns {
            match col {
                Column::TaskId => cells.push(row.task_id.to_string()),
                Column::Region => cells.push(s!(row.region.as_str())),
                Column::Description => cells.push(row.description.clone()),
                Column::Points => cells.push(row.points.to_string()),
                Column::CompletionPct => cells.push(row.completion_pct.clone()),
                Column::Players => {
                    cells.extend(row.completed.iter().map(|&done| {
                        s!(if done { "true" } else { "false" })
                    }));
                }
            }
        }
        out.push(cells);
    }
    (headers, out)
}

/// Left-aligned columns, two-space gutter, dashed rule under the headers.
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        out.push_str(cell);
        if i + 1 < widths.len() {
            for _ in 0..w.saturating_sub(cell.chars().count()) {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}
