// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Callfold CLI, suggests whether to call or fold on the flop.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::{process::ExitCode, time::Instant};

use callfold_eval::{analyze, analyze_par, equity, parse_cards};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero hole cards, e.g. "Ah Ad".
    #[clap(long)]
    hero: String,
    /// The flop cards, e.g. "Kc 7h 2d".
    #[clap(long)]
    flop: String,
    /// Number of threads used to enumerate the opponent holdings.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Increase logging verbosity.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The analysis configuration.
#[derive(Debug)]
struct Config {
    hero: String,
    flop: String,
    tasks: usize,
    json: bool,
}

fn run(config: Config) -> Result<()> {
    let hero = parse_cards(&config.hero, equity::HERO_CARDS)
        .with_context(|| format!("invalid hero cards '{}'", config.hero))?;
    let flop = parse_cards(&config.flop, equity::FLOP_CARDS)
        .with_context(|| format!("invalid flop '{}'", config.flop))?;

    let now = Instant::now();
    let res = if config.tasks > 1 {
        analyze_par(&hero, &flop, config.tasks)?
    } else {
        analyze(&hero, &flop)?
    };

    info!(
        "Analyzed {} holdings with {} tasks in {:.3}ms",
        res.total(),
        config.tasks,
        now.elapsed().as_secs_f64() * 1e3
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&res)?);
    } else {
        print!("{}", report::Report::new(&hero, &flop, &res));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        hero: cli.hero,
        flop: cli.flop,
        tasks: cli.tasks as usize,
        json: cli.json,
    };

    if let Err(e) = run(config) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let cli = Cli::parse_from(["callfold", "--hero", "Ah Ad", "--flop", "Kc 7h 2d", "-vv"]);
        assert_eq!(cli.hero, "Ah Ad");
        assert_eq!(cli.flop, "Kc 7h 2d");
        assert_eq!(cli.tasks, 1);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.json);

        assert!(Cli::try_parse_from(["callfold", "--hero", "Ah Ad"]).is_err());
        assert!(
            Cli::try_parse_from(["callfold", "--hero", "Ah Ad", "--flop", "Kc 7h 2d", "-t", "0"])
                .is_err()
        );
    }

    #[test]
    fn run_errors() {
        let config = |hero: &str, flop: &str| Config {
            hero: hero.to_string(),
            flop: flop.to_string(),
            tasks: 2,
            json: true,
        };

        let err = run(config("Ah", "Kc 7h 2d")).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid hero cards 'Ah': expected 2 cards, found 1"
        );

        let err = run(config("Ah Ad", "Kc 7h Zd")).unwrap_err();
        assert_eq!(format!("{err:#}"), "invalid flop 'Kc 7h Zd': invalid card 'Zd'");

        let err = run(config("Ah Ad", "Kc Ad 2d")).unwrap_err();
        assert_eq!(format!("{err:#}"), "duplicate card Ad");

        assert!(run(config("Ah Ad", "Kc 7h 2d")).is_ok());
    }
}
