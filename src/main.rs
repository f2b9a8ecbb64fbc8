// src/main.rs

use env_logger::Env;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    leaguespy::cli::run()
}
