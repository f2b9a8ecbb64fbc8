// src/params.rs

/// Task table, one row per task. Served unhighlighted; per-player state
/// comes from the sync service and is merged in by the fetcher.
pub const TASKS_PAGE: &str =
    "https://oldschool.runescape.wiki/w/Trailblazer_Reloaded_League/Tasks";

/// Per-player completion records, same service the wiki's sync gadget
/// reads. Path shape: SYNC_ENDPOINT/<player>/LEAGUE_KEY.
pub const SYNC_ENDPOINT: &str = "https://sync.runescape.wiki/runelite/player";
pub const LEAGUE_KEY: &str = "TRAILBLAZER_RELOADED_LEAGUE";

pub const USER_AGENT: &str = "leaguespy/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
