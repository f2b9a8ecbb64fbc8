// src/fetch.rs
//
// The wiki serves the task page unhighlighted for everyone; the
// highlight-on classes the parser reads are applied client-side by the
// wiki's sync gadget from the player's RuneLite sync record. A plain GET
// of the page therefore never reflects a player's state. The fetcher
// does what the gadget does: pull the neutral page, pull the player's
// completed task ids from the sync service, and merge the highlights
// into the markup before handing it over.

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::core::html;
use crate::params::{HTTP_TIMEOUT_SECS, LEAGUE_KEY, SYNC_ENDPOINT, TASKS_PAGE, USER_AGENT};

pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Given a player identifier, return the raw markup for that player's
/// view of the tasks page. Failures must be distinguishable errors; an
/// empty body is never success.
pub trait Fetcher {
    fn fetch(&self, player: &str) -> std::result::Result<String, FetchError>;
}

/// Blocking client against the wiki. Built once per invocation and reused
/// for every player.
pub struct WikiFetcher {
    client: Client,
}

/// The sync record carries more than this; only the task list matters.
#[derive(Deserialize)]
struct SyncRecord {
    league_tasks: Vec<u32>,
}

impl WikiFetcher {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(WikiFetcher { client })
    }

    fn fetch_page(&self) -> std::result::Result<String, FetchError> {
        let resp = self
            .client
            .get(TASKS_PAGE)
            .send()?
            .error_for_status()?;

        let body = resp.text()?;
        if body.trim().is_empty() {
            return Err(s!("empty response body").into());
        }
        Ok(body)
    }

    /// Completed task ids for one player. An unknown or never-synced
    /// player is a non-success status here, which surfaces as the error.
    fn fetch_completed(&self, player: &str) -> std::result::Result<Vec<u32>, FetchError> {
        let mut url = Url::parse(SYNC_ENDPOINT)?;
        url.path_segments_mut()
            .map_err(|_| s!("sync endpoint is not a base url"))?
            .push(player)
            .push(LEAGUE_KEY);

        let record: SyncRecord = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(record.league_tasks)
    }
}

impl Fetcher for WikiFetcher {
    fn fetch(&self, player: &str) -> std::result::Result<String, FetchError> {
        let page = self.fetch_page()?;
        let completed = self.fetch_completed(player)?;
        Ok(merge_highlights(&page, &completed))
    }
}

/// Apply a player's completed task ids to the neutral page markup: each
/// matching task row's opener gains the highlight-on class token. Rows
/// already carrying it, and ids absent from the page, are left alone.
pub fn merge_highlights(page: &str, completed: &[u32]) -> String {
    let done: BTreeSet<u32> = completed.iter().copied().collect();
    let lc = html::to_lower(page);

    let mut out = String::with_capacity(page.len() + done.len() * 16);
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = html::next_tag_block_lc(&lc, "<tr", "</tr>", pos) {
        out.push_str(&page[pos..tr_s]);
        let tr = &page[tr_s..tr_e];
        pos = tr_e;

        let opener = html::tag_opener(tr);
        let wants_highlight = html::attr_ci(opener, "data-taskid")
            .and_then(|id| id.trim().parse::<u32>().ok())
            .is_some_and(|id| done.contains(&id))
            && !html::has_class(opener, "highlight-on");

        if wants_highlight {
            out.push_str(&highlight_opener(opener));
            out.push_str(&tr[opener.len()..]);
        } else {
            out.push_str(tr);
        }
    }
    out.push_str(&page[pos..]);
    out
}

fn highlight_opener(opener: &str) -> String {
    // Append to the existing class list, or add one before the '>'.
    match html::attr_span_ci(opener, "class") {
        Some((_, end)) => join!(&opener[..end], " highlight-on", &opener[end..]),
        None => match opener.rfind('>') {
            Some(gt) => join!(&opener[..gt], r#" class="highlight-on""#, &opener[gt..]),
            None => s!(opener),
        },
    }
}
