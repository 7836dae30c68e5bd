// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Ranks the 169 starting hand classes by the percentage of random flops where
// the suggested action is to call.
//
// ```bash
// $ cargo r --release --features=parallel --example flop_chart -- --flops 200
// ```
use clap::{Parser, value_parser};
use rand::{SeedableRng, rngs::StdRng};
use std::{fmt, time::Instant};

use callfold_eval::*;

/// A starting hand class like `AA`, `AKs` or `T9o`.
#[derive(Debug, Clone, Copy)]
struct HandClass {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl HandClass {
    fn all() -> Vec<HandClass> {
        let mut classes = Vec::with_capacity(169);
        for high in Rank::ranks().rev() {
            for low in Rank::ranks().rev().filter(|&r| r <= high) {
                if low != high {
                    classes.push(HandClass { high, low, suited: true });
                }
                classes.push(HandClass { high, low, suited: false });
            }
        }
        classes
    }

    fn cards(&self) -> [Card; 2] {
        let suit = if self.suited { Suit::Hearts } else { Suit::Spades };
        [Card::new(self.high, Suit::Hearts), Card::new(self.low, suit)]
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match (self.high == self.low, self.suited) {
            (true, _) => "",
            (false, true) => "s",
            (false, false) => "o",
        };
        write!(f, "{}{}{kind}", self.high, self.low)
    }
}

fn call_pct(hero: [Card; 2], cli: &Cli, rng: &mut StdRng) -> f64 {
    let mut calls = 0;
    for _ in 0..cli.flops {
        let mut deck = Deck::new_and_shuffled(rng).without(&hero);
        let flop = (0..3).filter_map(|_| deck.deal()).collect::<Vec<_>>();

        match analyze_par(&hero, &flop, cli.tasks as usize) {
            Ok(res) if res.recommendation() == Recommendation::Call => calls += 1,
            Ok(_) => {}
            Err(e) => panic!("{e}"),
        }
    }

    calls as f64 * 100.0 / cli.flops as f64
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of random flops for each starting hand.
    #[clap(long, short, default_value_t = 100, value_parser = value_parser!(u16).range(1..))]
    flops: u16,
    /// The number of tasks used for each analysis.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// The random generator seed.
    #[clap(long, short, default_value_t = 101)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let now = Instant::now();
    let mut chart = HandClass::all()
        .into_iter()
        .map(|class| (class, call_pct(class.cards(), &cli, &mut rng)))
        .collect::<Vec<_>>();
    chart.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (pos, (class, pct)) in chart.iter().enumerate() {
        println!("{:>4}. {:<4}{:>6.1}%", pos + 1, class.to_string(), pct);
    }

    println!(
        "\nHands: {} Flops: {} Elapsed: {:.3}s",
        chart.len(),
        cli.flops,
        now.elapsed().as_secs_f64()
    );
}
