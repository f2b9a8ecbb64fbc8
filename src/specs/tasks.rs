// src/specs/tasks.rs
//
// The wiki task table, rendered for one player. Every task row carries
// data-taskid; the region rides on data-tbz-area-for-filtering and the
// player's completion state on the highlight-on class token. Cells:
// [0] completed count, [1] description, [2] difficulty, [3] icon,
// [4] points, [5] server-wide completion %.

use crate::core::html;
use crate::core::sanitize::normalize_entities;
use crate::error::{Error, Result};
use crate::select::Region;

/// One task as seen from one player's perspective. `task_id` is unique
/// within a player's record set and stable across players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub task_id: u32,
    pub region: Region,
    pub description: String,
    pub points: u32,
    /// Server-wide completion percentage, display-only.
    pub completion_pct: String,
    pub player_completed: bool,
}

/// Extract every task row, in document order. A malformed row is skipped
/// with a warning. A document with no task rows at all, or where every
/// row present is malformed, is a parse failure: a wrong or broken page
/// must not yield an empty report.
pub fn parse_doc(doc: &str) -> Result<Vec<TaskRecord>> {
    // The page runs to megabytes; lower it once and scan by byte offset
    // instead of re-lowering the tail for every row.
    let lc = html::to_lower(doc);

    let mut out = Vec::new();
    let mut seen = 0usize;

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = html::next_tag_block_lc(&lc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        let tr_lc = &lc[tr_s..tr_e];
        pos = tr_e;

        if html::attr_ci(html::tag_opener(tr), "data-taskid").is_none() {
            continue; // header / filter-widget rows
        }
        seen += 1;

        match parse_row(tr, tr_lc) {
            Ok(rec) => out.push(rec),
            Err(why) => log::warn!("skipping malformed task row: {why}"),
        }
    }

    if out.is_empty() {
        return Err(Error::ParseFailure(if seen == 0 {
            s!("no task rows in document")
        } else {
            format!("all {seen} task rows malformed")
        }));
    }
    Ok(out)
}

fn parse_row(tr: &str, tr_lc: &str) -> std::result::Result<TaskRecord, String> {
    let opener = html::tag_opener(tr);

    let id_raw = html::attr_ci(opener, "data-taskid").ok_or("missing data-taskid")?;
    let task_id: u32 = id_raw
        .trim()
        .parse()
        .map_err(|_| format!("bad task id {id_raw:?}"))?;

    let area = html::attr_ci(opener, "data-tbz-area-for-filtering")
        .ok_or_else(|| format!("task {task_id}: missing area attribute"))?;
    let region = Region::from_tag(area.trim())
        .ok_or_else(|| format!("task {task_id}: unknown region {area:?}"))?;

    let player_completed = html::has_class(opener, "highlight-on");

    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = html::next_tag_block_lc(tr_lc, "<td", "</td>", pos) {
        let inner = html::inner_after_open_tag(&tr[td_s..td_e]);
        cells.push(html::strip_tags(normalize_entities(&inner)));
        pos = td_e;
    }
    if cells.len() < 6 {
        return Err(format!(
            "task {task_id}: expected 6 cells, found {}",
            cells.len()
        ));
    }

    let points: u32 = cells[4]
        .parse()
        .map_err(|_| format!("task {task_id}: bad points {:?}", cells[4]))?;

    Ok(TaskRecord {
        task_id,
        region,
        description: std::mem::take(&mut cells[1]),
        points,
        completion_pct: std::mem::take(&mut cells[5]),
        player_completed,
    })
}
