// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel flop analysis.
use std::{panic, thread};

use callfold_cards::Card;

use super::{EquityResult, InputError, Scenario, Tally};

/// Parallel [analyze](super::analyze) using `num_tasks` threads.
///
/// The opponent holdings are split in contiguous chunks, one for each task,
/// and the partial counters are merged in the enumeration order so that the
/// result, samples included, is the same as the single threaded one.
///
/// Panics if `num_tasks` is zero.
pub fn analyze_par(
    hero: &[Card],
    flop: &[Card],
    num_tasks: usize,
) -> Result<EquityResult, InputError> {
    assert!(num_tasks > 0);

    let scenario = Scenario::new(hero, flop)?;

    let mut pairs = Vec::with_capacity(1_081);
    scenario.deck.for_each(2, |pair| pairs.push([pair[0], pair[1]]));

    let chunk_size = pairs.len().div_ceil(num_tasks).max(1);

    let tallies = thread::scope(|s| {
        let scenario = &scenario;
        let handles = pairs
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move || {
                    let mut tally = Tally::default();
                    for &pair in chunk {
                        tally.record(scenario.hero, pair, scenario.eval(pair));
                    }

                    tally
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let tally = tallies
        .into_iter()
        .fold(Tally::default(), |mut acc, tally| {
            acc.merge(tally);
            acc
        });

    Ok(tally.into_result(scenario.hero))
}
