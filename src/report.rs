// src/report.rs
//
// Read-only views over an aggregated table. Neither view reorders rows.

use crate::aggregate::{AggregatedRow, AggregatedTable};
use crate::error::{Error, Result};

/// Rows at least one requested player has completed.
pub fn any_completed(table: &AggregatedTable) -> Vec<&AggregatedRow> {
    table
        .rows
        .iter()
        .filter(|r| r.completed.iter().any(|&done| done))
        .collect()
}

/// Any-completed rows the primary player has not completed: tasks at
/// least one other player has done that the first-named player has not.
pub fn suggestions(table: &AggregatedTable) -> Result<Vec<&AggregatedRow>> {
    if table.players.len() < 2 {
        return Err(Error::InsufficientPlayers {
            required: 2,
            got: table.players.len(),
        });
    }
    Ok(any_completed(table)
        .into_iter()
        .filter(|r| r.completed.first().is_some_and(|&done| !done))
        .collect())
}
