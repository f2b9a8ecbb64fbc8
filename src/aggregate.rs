// src/aggregate.rs
//
// Sequential fetch-then-parse per player, then an asymmetric join keyed
// on the primary player's task ids. The first player in the input order
// is the primary: their visible task set defines the report's scope, so
// a task only other players can see never appears.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::select::Region;
use crate::specs::tasks::{self, TaskRecord};

/// One task joined across all requested players. `completed` runs
/// parallel to the owning table's `players`, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRow {
    pub task_id: u32,
    pub region: Region,
    pub description: String,
    pub points: u32,
    pub completion_pct: String,
    pub completed: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedTable {
    /// Requested players in input order, primary first.
    pub players: Vec<String>,
    /// Rows in the primary player's document order.
    pub rows: Vec<AggregatedRow>,
}

pub fn aggregate(
    fetcher: &dyn Fetcher,
    players: &[String],
    regions: &BTreeSet<Region>,
) -> Result<AggregatedTable> {
    if players.is_empty() {
        return Err(Error::InsufficientPlayers { required: 1, got: 0 });
    }

    // Region filter applies at index time, before the join, so a task the
    // filter drops can never trigger a missing-task error either.
    let mut by_player: Vec<IndexMap<u32, TaskRecord>> = Vec::with_capacity(players.len());
    for player in players {
        let doc = fetcher.fetch(player).map_err(|source| Error::FetchFailure {
            player: player.clone(),
            source,
        })?;
        let indexed = tasks::parse_doc(&doc)?
            .into_iter()
            .filter(|r| regions.contains(&r.region))
            .map(|r| (r.task_id, r))
            .collect();
        by_player.push(indexed);
    }

    let mut rows = Vec::with_capacity(by_player[0].len());
    for (task_id, task) in &by_player[0] {
        let mut completed = Vec::with_capacity(players.len());
        for (player, records) in players.iter().zip(&by_player) {
            match records.get(task_id) {
                Some(rec) => completed.push(rec.player_completed),
                // Secondary page lacks a task the primary shows: fail
                // fast rather than guess at a default.
                None => {
                    return Err(Error::MissingPlayerTask {
                        player: player.clone(),
                        task_id: *task_id,
                    });
                }
            }
        }
        rows.push(AggregatedRow {
            task_id: *task_id,
            region: task.region,
            description: task.description.clone(),
            points: task.points,
            completion_pct: task.completion_pct.clone(),
            completed,
        });
    }

    Ok(AggregatedTable {
        players: players.to_vec(),
        rows,
    })
}
