// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Flop equity enumerator.
//!
//! Given the hero hole cards and the flop, [analyze] evaluates the hero hand
//! and compares it against every two cards an opponent could hold, the 1081
//! pairs that can be made with the 47 unseen cards, counting the opponent
//! hands that are ahead, behind or tied and breaking them down by category.
//!
//! ```
//! # use callfold_eval::*;
//! let res = analyze_text("Ah Ad", "Kc 7h 2d").unwrap();
//! assert_eq!(res.hero_rank(), HandRank::OnePair);
//! assert_eq!(res.total(), 1_081);
//! assert_eq!(res.recommendation(), Recommendation::Call);
//! ```
use log::{debug, trace};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::cmp::Ordering;
use thiserror::Error;

use callfold_cards::{Card, Deck, ParseError, parse_cards};

use crate::{HandRank, HandValue, Recommendation, decide};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::analyze_par;

/// The number of hero hole cards.
pub const HERO_CARDS: usize = 2;

/// The number of flop cards.
pub const FLOP_CARDS: usize = 3;

/// The max number of example holdings kept for each category.
pub const SAMPLES_PER_CATEGORY: usize = 3;

/// Errors returned for an invalid analysis input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The cards text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The hero doesn't have two cards.
    #[error("expected 2 hero cards, found {0}")]
    HeroCards(usize),
    /// The flop doesn't have three cards.
    #[error("expected 3 flop cards, found {0}")]
    FlopCards(usize),
    /// A card appears more than once in the hero cards and flop.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// The opponent holdings for a hand category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    count: u32,
    samples: Vec<[Card; 2]>,
}

impl CategoryStats {
    /// The number of holdings.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The first holdings found, at most [SAMPLES_PER_CATEGORY].
    pub fn samples(&self) -> &[[Card; 2]] {
        &self.samples
    }

    fn record(&mut self, pair: [Card; 2]) {
        self.count += 1;
        if self.samples.len() < SAMPLES_PER_CATEGORY {
            self.samples.push(pair);
        }
    }

    fn merge(&mut self, other: CategoryStats) {
        self.count += other.count;

        let room = SAMPLES_PER_CATEGORY.saturating_sub(self.samples.len());
        self.samples.extend(other.samples.into_iter().take(room));
    }
}

/// Opponent holdings grouped by their hand category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    stats: [CategoryStats; HandRank::COUNT],
}

impl Breakdown {
    /// The stats for a category.
    pub fn get(&self, rank: HandRank) -> &CategoryStats {
        &self.stats[rank.index()]
    }

    /// Iterates the categories with at least one holding, weakest first.
    pub fn iter(&self) -> impl Iterator<Item = (HandRank, &CategoryStats)> {
        HandRank::ranks()
            .zip(&self.stats)
            .filter(|(_, stats)| stats.count > 0)
    }

    /// The categories with at least one holding, most frequent first.
    pub fn by_count(&self) -> Vec<(HandRank, &CategoryStats)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by(|(r1, s1), (r2, s2)| s2.count.cmp(&s1.count).then(r2.cmp(r1)));
        entries
    }

    /// The number of holdings in all categories.
    pub fn total(&self) -> u32 {
        self.stats.iter().map(|s| s.count).sum()
    }

    /// Checks if there are no holdings.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn record(&mut self, rank: HandRank, pair: [Card; 2]) {
        self.stats[rank.index()].record(pair);
    }

    fn merge(&mut self, other: Breakdown) {
        for (stats, other) in self.stats.iter_mut().zip(other.stats) {
            stats.merge(other);
        }
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (rank, stats) in self.iter() {
            map.serialize_entry(rank.label(), stats)?;
        }

        map.end()
    }
}

/// The result of a flop analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityResult {
    hero: HandValue,
    better: u32,
    worse: u32,
    tie: u32,
    better_breakdown: Breakdown,
    worse_breakdown: Breakdown,
    recommendation: Recommendation,
}

impl EquityResult {
    /// The hero hand value.
    pub fn hero(&self) -> HandValue {
        self.hero
    }

    /// The hero hand category.
    pub fn hero_rank(&self) -> HandRank {
        self.hero.rank()
    }

    /// Number of opponent holdings that beat the hero.
    pub fn better(&self) -> u32 {
        self.better
    }

    /// Number of opponent holdings that lose to the hero.
    pub fn worse(&self) -> u32 {
        self.worse
    }

    /// Number of opponent holdings that tie with the hero.
    pub fn tie(&self) -> u32 {
        self.tie
    }

    /// The total number of opponent holdings.
    pub fn total(&self) -> u32 {
        self.better + self.worse + self.tie
    }

    /// The categories of the holdings that beat the hero.
    pub fn better_breakdown(&self) -> &Breakdown {
        &self.better_breakdown
    }

    /// The categories of the holdings that lose to the hero.
    pub fn worse_breakdown(&self) -> &Breakdown {
        &self.worse_breakdown
    }

    /// The suggested action.
    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    /// Percentage of holdings the hero is ahead of.
    pub fn ahead_pct(&self) -> f64 {
        self.pct(self.worse)
    }

    /// Percentage of holdings the hero is behind.
    pub fn behind_pct(&self) -> f64 {
        self.pct(self.better)
    }

    /// Percentage of holdings that tie with the hero.
    pub fn tie_pct(&self) -> f64 {
        self.pct(self.tie)
    }

    fn pct(&self, count: u32) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(count) * 100.0 / f64::from(total),
        }
    }
}

/// A validated hero and flop.
struct Scenario {
    flop: [Card; FLOP_CARDS],
    hero: HandValue,
    deck: Deck,
}

impl Scenario {
    fn new(hero: &[Card], flop: &[Card]) -> Result<Self, InputError> {
        let hero: [Card; HERO_CARDS] = hero
            .try_into()
            .map_err(|_| InputError::HeroCards(hero.len()))?;
        let flop: [Card; FLOP_CARDS] = flop
            .try_into()
            .map_err(|_| InputError::FlopCards(flop.len()))?;

        let known = [hero[0], hero[1], flop[0], flop[1], flop[2]];
        for (idx, card) in known.iter().enumerate() {
            if known[..idx].contains(card) {
                return Err(InputError::DuplicateCard(*card));
            }
        }

        let value = HandValue::eval(&known);
        let [h1, h2, f1, f2, f3] = known;
        trace!("Hero {h1}{h2} flop {f1}{f2}{f3}: {value}");

        Ok(Self {
            flop,
            hero: value,
            deck: Deck::default().without(&known),
        })
    }

    /// Evaluates an opponent pair with the flop.
    fn eval(&self, pair: [Card; 2]) -> HandValue {
        HandValue::eval(&[pair[0], pair[1], self.flop[0], self.flop[1], self.flop[2]])
    }
}

/// Counters for a set of opponent holdings.
#[derive(Debug, Default)]
struct Tally {
    better: u32,
    worse: u32,
    tie: u32,
    better_breakdown: Breakdown,
    worse_breakdown: Breakdown,
}

impl Tally {
    fn record(&mut self, hero: HandValue, pair: [Card; 2], value: HandValue) {
        match value.cmp(&hero) {
            Ordering::Greater => {
                self.better += 1;
                self.better_breakdown.record(value.rank(), pair);
            }
            Ordering::Less => {
                self.worse += 1;
                self.worse_breakdown.record(value.rank(), pair);
            }
            Ordering::Equal => self.tie += 1,
        }
    }

    /// Adds the counters of a tally for holdings that come after this one.
    fn merge(&mut self, other: Tally) {
        self.better += other.better;
        self.worse += other.worse;
        self.tie += other.tie;
        self.better_breakdown.merge(other.better_breakdown);
        self.worse_breakdown.merge(other.worse_breakdown);
    }

    fn into_result(self, hero: HandValue) -> EquityResult {
        let recommendation = decide(self.better, self.worse);
        debug!(
            "{hero}: better={} worse={} tie={} -> {recommendation}",
            self.better, self.worse, self.tie
        );

        EquityResult {
            hero,
            better: self.better,
            worse: self.worse,
            tie: self.tie,
            better_breakdown: self.better_breakdown,
            worse_breakdown: self.worse_breakdown,
            recommendation,
        }
    }
}

/// Compares the hero hand against all the opponent holdings.
///
/// The hero must have two cards and the flop three, all distinct.
pub fn analyze(hero: &[Card], flop: &[Card]) -> Result<EquityResult, InputError> {
    let scenario = Scenario::new(hero, flop)?;

    let mut tally = Tally::default();
    scenario.deck.for_each(2, |pair| {
        let pair = [pair[0], pair[1]];
        tally.record(scenario.hero, pair, scenario.eval(pair));
    });

    Ok(tally.into_result(scenario.hero))
}

/// Parses the hero cards and flop text and runs [analyze].
pub fn analyze_text(hero: &str, flop: &str) -> Result<EquityResult, InputError> {
    let hero = parse_cards(hero, HERO_CARDS)?;
    let flop = parse_cards(flop, FLOP_CARDS)?;
    analyze(&hero, &flop)
}
