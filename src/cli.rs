// src/cli.rs
//
// Thin argument loop over the library. Selector and player-count
// validation happen before any fetch; any failure exits non-zero with no
// partial table printed.

use std::env;

use color_eyre::eyre::{Result, bail, eyre};

use crate::aggregate;
use crate::error::Error;
use crate::fetch::WikiFetcher;
use crate::render;
use crate::report;
use crate::select::{self, GLOBAL_REGIONS};

enum Command {
    Tasks,
    Suggest,
}

pub fn run() -> Result<()> {
    let mut args = env::args().skip(1);

    let command = match args.next().as_deref() {
        Some("tasks") => Command::Tasks,
        Some("suggest") => Command::Suggest,
        Some("-h") | Some("--help") | None => {
            eprintln!(include_str!("cli_help.txt"));
            return Ok(());
        }
        Some(other) => bail!("unknown command: {other}"),
    };

    let mut regions_spec = s!();
    let mut columns_spec = s!();
    let mut exclude_global = false;
    let mut players: Vec<String> = Vec::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-r" | "--regions" => {
                regions_spec = args
                    .next()
                    .ok_or_else(|| eyre!(join!("missing value for ", &a)))?;
            }
            "-c" | "--columns" => {
                columns_spec = args
                    .next()
                    .ok_or_else(|| eyre!(join!("missing value for ", &a)))?;
            }
            "-x" | "--exclude-global" => exclude_global = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(());
            }
            _ if a.starts_with('-') => bail!("unknown arg: {a}"),
            _ => players.push(a),
        }
    }

    // Cheap validation first: a typo must never cost a fetch.
    let mut regions = select::parse_regions(&regions_spec)?;
    let columns = select::parse_columns(&columns_spec)?;
    if !exclude_global {
        regions.extend(GLOBAL_REGIONS);
    }

    let required = match command {
        Command::Tasks => 1,
        Command::Suggest => 2,
    };
    if players.len() < required {
        return Err(Error::InsufficientPlayers {
            required,
            got: players.len(),
        }
        .into());
    }

    let fetcher = WikiFetcher::new()?;
    let table = aggregate::aggregate(&fetcher, &players, &regions)?;

    let view = match command {
        Command::Tasks => report::any_completed(&table),
        Command::Suggest => report::suggestions(&table)?,
    };

    let (headers, rows) = render::project(&table.players, &view, &columns);
    print!("{}", render::format_table(&headers, &rows));
    Ok(())
}
