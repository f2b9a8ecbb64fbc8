// tests/aggregate_report.rs
//
// Join and view semantics against a stub fetcher serving canned pages.

use std::collections::BTreeMap;

use leaguespy::aggregate::aggregate;
use leaguespy::error::Error;
use leaguespy::fetch::{FetchError, Fetcher};
use leaguespy::report::{any_completed, suggestions};
use leaguespy::select::{GLOBAL_REGIONS, parse_regions};

struct StubFetcher(BTreeMap<String, String>);

impl Fetcher for StubFetcher {
    fn fetch(&self, player: &str) -> Result<String, FetchError> {
        self.0
            .get(player)
            .cloned()
            .ok_or_else(|| format!("no canned page for {player}").into())
    }
}

fn task_row(id: u32, region: &str, done: bool) -> String {
    format!(
        concat!(
            r#"<tr data-taskid="{id}" data-tbz-area-for-filtering="{region}" "#,
            r#"class="qc-active{hl}"><td>9</td><td>Task {id}</td><td>Easy</td>"#,
            "<td></td><td>10</td><td>50.0%</td></tr>",
        ),
        id = id,
        region = region,
        hl = if done { " highlight-on" } else { "" },
    )
}

fn page(rows: &[String]) -> String {
    format!("<table><tbody>{}</tbody></table>", rows.join(""))
}

fn stub(pages: &[(&str, String)]) -> StubFetcher {
    StubFetcher(
        pages
            .iter()
            .map(|(name, doc)| (name.to_string(), doc.clone()))
            .collect(),
    )
}

fn players(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

// P1: tasks 1,2,3 completed (false, false, true); P2: (true, false, false).
fn worked_example() -> StubFetcher {
    stub(&[
        (
            "p1",
            page(&[
                task_row(1, "asgarnia", false),
                task_row(2, "asgarnia", false),
                task_row(3, "asgarnia", true),
            ]),
        ),
        (
            "p2",
            page(&[
                task_row(1, "asgarnia", true),
                task_row(2, "asgarnia", false),
                task_row(3, "asgarnia", false),
            ]),
        ),
    ])
}

#[test]
fn join_scope_is_the_primary_players_task_set() {
    let fetcher = stub(&[
        (
            "p1",
            page(&[
                task_row(1, "asgarnia", false),
                task_row(2, "asgarnia", false),
                task_row(3, "asgarnia", true),
            ]),
        ),
        (
            "p2",
            page(&[
                task_row(1, "asgarnia", true),
                task_row(2, "asgarnia", false),
                task_row(3, "asgarnia", false),
                task_row(4, "asgarnia", true), // only p2 sees this one
            ]),
        ),
    ]);

    let regions = parse_regions("a").unwrap();
    let table = aggregate(&fetcher, &players(&["p1", "p2"]), &regions).unwrap();

    let ids: Vec<u32> = table.rows.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn secondary_missing_a_primary_task_fails_fast() {
    let fetcher = stub(&[
        (
            "p1",
            page(&[task_row(1, "asgarnia", false), task_row(2, "asgarnia", true)]),
        ),
        ("p2", page(&[task_row(1, "asgarnia", true)])),
    ]);

    let regions = parse_regions("a").unwrap();
    match aggregate(&fetcher, &players(&["p1", "p2"]), &regions) {
        Err(Error::MissingPlayerTask { player, task_id }) => {
            assert_eq!(player, "p2");
            assert_eq!(task_id, 2);
        }
        other => panic!("expected MissingPlayerTask, got {other:?}"),
    }
}

#[test]
fn region_filter_applies_before_the_join() {
    // p2 never sees the desert task, but it is filtered out of p1's set
    // before the join, so no missing-task error fires.
    let fetcher = stub(&[
        (
            "p1",
            page(&[task_row(1, "asgarnia", true), task_row(2, "desert", true)]),
        ),
        ("p2", page(&[task_row(1, "asgarnia", false)])),
    ]);

    let regions = parse_regions("a").unwrap();
    let table = aggregate(&fetcher, &players(&["p1", "p2"]), &regions).unwrap();
    let ids: Vec<u32> = table.rows.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn global_regions_are_additive() {
    let fetcher = stub(&[(
        "p1",
        page(&[task_row(1, "asgarnia", true), task_row(2, "misthalin", true)]),
    )]);

    let mut regions = parse_regions("a").unwrap();
    regions.extend(GLOBAL_REGIONS);

    let table = aggregate(&fetcher, &players(&["p1"]), &regions).unwrap();
    assert_eq!(table.rows.len(), 2);

    // Excluding globals drops the misthalin task.
    let regions = parse_regions("a").unwrap();
    let table = aggregate(&fetcher, &players(&["p1"]), &regions).unwrap();
    let ids: Vec<u32> = table.rows.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn no_players_is_insufficient() {
    let fetcher = stub(&[]);
    let regions = parse_regions("").unwrap();
    match aggregate(&fetcher, &[], &regions) {
        Err(Error::InsufficientPlayers { required: 1, got: 0 }) => {}
        other => panic!("expected InsufficientPlayers, got {other:?}"),
    }
}

#[test]
fn fetch_failure_names_the_player() {
    let fetcher = stub(&[("p1", page(&[task_row(1, "asgarnia", true)]))]);
    let regions = parse_regions("a").unwrap();
    match aggregate(&fetcher, &players(&["p1", "ghost"]), &regions) {
        Err(Error::FetchFailure { player, .. }) => assert_eq!(player, "ghost"),
        other => panic!("expected FetchFailure, got {other:?}"),
    }
}

#[test]
fn any_completed_keeps_rows_with_at_least_one_true() {
    let regions = parse_regions("a").unwrap();
    let table = aggregate(&worked_example(), &players(&["p1", "p2"]), &regions).unwrap();

    let view = any_completed(&table);
    let ids: Vec<u32> = view.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![1, 3]); // task 2: nobody has it
}

#[test]
fn suggestions_drop_rows_the_primary_completed() {
    let regions = parse_regions("a").unwrap();
    let table = aggregate(&worked_example(), &players(&["p1", "p2"]), &regions).unwrap();

    let view = suggestions(&table).unwrap();
    let ids: Vec<u32> = view.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![1]); // task 3 excluded: p1 already has it
}

#[test]
fn suggestions_require_two_players() {
    let regions = parse_regions("a").unwrap();
    let table = aggregate(&worked_example(), &players(&["p1"]), &regions).unwrap();

    match suggestions(&table) {
        Err(Error::InsufficientPlayers { required: 2, got: 1 }) => {}
        other => panic!("expected InsufficientPlayers, got {other:?}"),
    }
}

#[test]
fn booleans_follow_input_player_order() {
    let regions = parse_regions("a").unwrap();
    let table = aggregate(&worked_example(), &players(&["p2", "p1"]), &regions).unwrap();

    assert_eq!(table.players, vec!["p2", "p1"]);
    // Task 1: p2 true, p1 false.
    assert_eq!(table.rows[0].completed, vec![true, false]);

    // With p2 primary, task 1 is no longer a suggestion.
    let view = suggestions(&table).unwrap();
    let ids: Vec<u32> = view.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![3]);
}
