// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a report. All of these are terminal for the
/// current invocation — no retry, no partial table.
#[derive(Debug, Error)]
pub enum Error {
    /// Region or column token matching no canonical name or alias.
    #[error("unknown selector: {0:?}")]
    InvalidSelector(String),

    #[error("need at least {required} players, got {got}")]
    InsufficientPlayers { required: usize, got: usize },

    /// The fetcher could not produce markup for a player. Whatever it
    /// returned is carried as-is; retry policy belongs to the fetcher.
    #[error("fetch failed for player {player:?}")]
    FetchFailure {
        player: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Page-level parse failure. Individual malformed rows are skipped
    /// with a warning instead (see specs::tasks).
    #[error("could not parse tasks page: {0}")]
    ParseFailure(String),

    /// Join inconsistency: a secondary player's page lacks a task the
    /// primary player's page shows.
    #[error("player {player:?} has no record for task {task_id}")]
    MissingPlayerTask { player: String, task_id: u32 },
}
