// src/select.rs
//
// Region and column selection. User tokens are matched exactly against a
// fixed alias table — no prefix or fuzzy matching — and an unknown token
// aborts the whole parse so a typo can never silently narrow the report.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Asgarnia,
    Desert,
    Fremennik,
    Kandarin,
    Morytania,
    Tirannwn,
    Wilderness,
    Kourend,
    // Implicit/global regions. Not addressable via --regions; added to
    // every selection unless the caller excludes them.
    General,
    Misthalin,
    Karamja,
}

use Region::*;

/// The eight regions a `--regions` spec can name.
pub const SELECTABLE_REGIONS: [Region; 8] = [
    Asgarnia, Desert, Fremennik, Kandarin, Morytania, Tirannwn, Wilderness, Kourend,
];

/// Added after alias resolution unless the caller opts out.
pub const GLOBAL_REGIONS: [Region; 3] = [General, Misthalin, Karamja];

const ALL_REGIONS: [Region; 11] = [
    Asgarnia, Desert, Fremennik, Kandarin, Morytania, Tirannwn, Wilderness, Kourend,
    General, Misthalin, Karamja,
];

// Global regions are deliberately absent: they are not --regions tokens.
const REGION_ALIASES: [(&str, Region); 25] = [
    ("a", Asgarnia), ("asg", Asgarnia), ("asgarnia", Asgarnia),
    ("d", Desert), ("des", Desert), ("desert", Desert),
    ("f", Fremennik), ("frem", Fremennik), ("fremennik", Fremennik),
    ("k", Kandarin), ("kand", Kandarin), ("kandarin", Kandarin),
    ("m", Morytania), ("mory", Morytania), ("morytania", Morytania),
    ("t", Tirannwn), ("tir", Tirannwn), ("elf", Tirannwn), ("tirannwn", Tirannwn),
    ("w", Wilderness), ("wildy", Wilderness), ("wilderness", Wilderness),
    ("z", Kourend), ("zeah", Kourend), ("kourend", Kourend),
];

impl Region {
    pub fn as_str(self) -> &'static str {
        match self {
            Asgarnia => "asgarnia",
            Desert => "desert",
            Fremennik => "fremennik",
            Kandarin => "kandarin",
            Morytania => "morytania",
            Tirannwn => "tirannwn",
            Wilderness => "wilderness",
            Kourend => "kourend",
            General => "general",
            Misthalin => "misthalin",
            Karamja => "karamja",
        }
    }

    /// Canonical tag as it appears in the page's area attribute.
    pub fn from_tag(tag: &str) -> Option<Region> {
        ALL_REGIONS
            .iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(tag))
            .copied()
    }
}

/// Comma-separated region spec → canonical set. Empty spec means the full
/// eight-region selectable set; global regions never enter here (the
/// caller adds `GLOBAL_REGIONS` separately unless excluded).
pub fn parse_regions(spec: &str) -> Result<BTreeSet<Region>> {
    if spec.trim().is_empty() {
        return Ok(SELECTABLE_REGIONS.into_iter().collect());
    }

    let mut out = BTreeSet::new();
    for token in spec.split(',') {
        let token = token.trim();
        let lc = token.to_ascii_lowercase();
        match REGION_ALIASES.iter().find(|(alias, _)| *alias == lc) {
            Some((_, region)) => {
                out.insert(*region);
            }
            None => return Err(Error::InvalidSelector(s!(token))),
        }
    }
    Ok(out)
}

/// Output columns of the aggregated table, in display order. `Players` is
/// the reserved selector for the per-player boolean columns: selecting it
/// emits every requested player's column together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    TaskId,
    Region,
    Description,
    Points,
    CompletionPct,
    Players,
}

pub const ALL_COLUMNS: [Column; 6] = [
    Column::TaskId,
    Column::Region,
    Column::Description,
    Column::Points,
    Column::CompletionPct,
    Column::Players,
];

const COLUMN_ALIASES: [(&str, Column); 18] = [
    ("i", Column::TaskId), ("id", Column::TaskId), ("task_id", Column::TaskId),
    ("r", Column::Region), ("reg", Column::Region), ("region", Column::Region),
    ("d", Column::Description), ("desc", Column::Description),
    ("description", Column::Description),
    ("p", Column::Points), ("pts", Column::Points), ("points", Column::Points),
    ("c", Column::CompletionPct), ("pct", Column::CompletionPct),
    ("completion_pct", Column::CompletionPct),
    ("w", Column::Players), ("who", Column::Players), ("players", Column::Players),
];

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::TaskId => "task_id",
            Column::Region => "region",
            Column::Description => "description",
            Column::Points => "points",
            Column::CompletionPct => "completion_pct",
            Column::Players => "players",
        }
    }
}

/// Comma-separated column spec → canonical set. Empty spec means all
/// columns, per-player booleans included.
pub fn parse_columns(spec: &str) -> Result<BTreeSet<Column>> {
    if spec.trim().is_empty() {
        return Ok(ALL_COLUMNS.into_iter().collect());
    }

    let mut out = BTreeSet::new();
    for token in spec.split(',') {
        let token = token.trim();
        let lc = token.to_ascii_lowercase();
        match COLUMN_ALIASES.iter().find(|(alias, _)| *alias == lc) {
            Some((_, column)) => {
                out.insert(*column);
            }
            None => return Err(Error::InvalidSelector(s!(token))),
        }
    }
    Ok(out)
}
