// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator scans the rank and suit groups of a 5, 6 or 7 cards hand and
//! matches the strongest pattern directly, without enumerating the 5-cards
//! subsets, the result is the same as the best value of all the 5-cards hands
//! that can be made from the given cards.
//!
//! A [HandValue] is made of a [HandRank] category followed by up to five
//! tie-break ranks in decreasing significance, values compare
//! lexicographically so that `v1 > v2` means that `v1` beats `v2`:
//!
//! ```
//! # use callfold_eval::*;
//! let cards = parse_cards("Ah Ad Kc 7h 2d", 5).unwrap();
//! let v1 = HandValue::eval(&cards);
//! assert_eq!(v1.rank(), HandRank::OnePair);
//! assert_eq!(v1.kickers(), &[14, 13, 7, 2]);
//!
//! let cards = parse_cards("Ah Ad Ac Kc 2d", 5).unwrap();
//! let v2 = HandValue::eval(&cards);
//! assert!(v2 > v1);
//! ```
use serde::Serialize;
use std::{cmp::Ordering, fmt, iter};
use thiserror::Error;

use callfold_cards::Card;

/// Errors returned by [HandValue::try_eval].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have between 5 and 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The hand contains the same card twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum HandRank {
    /// No matches.
    HighCard = 0,
    /// Two cards with the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// Five cards in sequence with the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 9;

    const ALL: [HandRank; Self::COUNT] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    /// Returns all hand categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::ALL.into_iter()
    }

    /// The category index, from 0 for a high card to 8 for a straight flush.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The category display label.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl From<HandRank> for &'static str {
    fn from(rank: HandRank) -> Self {
        rank.label()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hand value.
///
/// The kickers are rank values from 2 to 14 (ace) padded with zeros, for
/// straights the ace counts as 1 in the wheel so its high card is 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandValue {
    rank: HandRank,
    kickers: [u8; 5],
}

impl HandValue {
    /// Creates a hand value from a category and its tie-break ranks.
    ///
    /// Only the first five kickers are used.
    pub fn new(rank: HandRank, kickers: &[u8]) -> Self {
        Self::with_kickers(rank, kickers.iter().copied())
    }

    fn with_kickers(rank: HandRank, kickers: impl IntoIterator<Item = u8>) -> Self {
        let mut slots = [0; 5];
        for (slot, value) in slots.iter_mut().zip(kickers) {
            *slot = value;
        }

        Self {
            rank,
            kickers: slots,
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks without the zero padding.
    pub fn kickers(&self) -> &[u8] {
        let len = self.kickers.iter().take_while(|&&k| k > 0).count();
        &self.kickers[..len]
    }

    /// Evaluates a 5, 6 or 7 cards hand after checking its size and that it
    /// doesn't contain duplicates.
    pub fn try_eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EvalError::InvalidHandSize(cards.len()));
        }

        let mut seen = 0u64;
        for card in cards {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                return Err(EvalError::DuplicateCard(*card));
            }

            seen |= bit;
        }

        Ok(Self::eval(cards))
    }

    /// Evaluates a 5, 6 or 7 cards hand.
    ///
    /// The cards must be distinct, use [HandValue::try_eval] for unchecked input.
    ///
    /// Panics if the hand doesn't have between 5 and 7 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert!((5..=7).contains(&cards.len()), "5 <= cards <= 7");

        // Bit i is set if rank value i is present.
        let mut ranks = 0u16;
        let mut suits = [0u16; 4];
        let mut counts = [0u8; 15];

        for card in cards {
            let value = card.rank().value();
            ranks |= 1 << value;
            suits[card.suit() as usize] |= 1 << value;
            counts[usize::from(value)] += 1;
        }

        // (count, value) groups sorted by count and then value descending.
        let mut groups = [(0u8, 0u8); 7];
        let mut len = 0;
        for value in (2..=14u8).rev() {
            let count = counts[usize::from(value)];
            if count > 0 {
                groups[len] = (count, value);
                len += 1;
            }
        }

        let groups = &mut groups[..len];
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let (c1, r1) = groups[0];
        let (c2, r2) = groups.get(1).copied().unwrap_or_default();

        let flush = suits.into_iter().find(|s| s.count_ones() >= 5);

        if let Some(high) = flush.and_then(straight_high) {
            Self::with_kickers(HandRank::StraightFlush, [high])
        } else if c1 == 4 {
            let kicker = ranks_desc(ranks & !(1 << r1)).take(1);
            Self::with_kickers(HandRank::FourOfAKind, iter::once(r1).chain(kicker))
        } else if c1 == 3 && c2 >= 2 {
            Self::with_kickers(HandRank::FullHouse, [r1, r2])
        } else if let Some(suit) = flush {
            Self::with_kickers(HandRank::Flush, ranks_desc(suit).take(5))
        } else if let Some(high) = straight_high(ranks) {
            Self::with_kickers(HandRank::Straight, [high])
        } else if c1 == 3 {
            let kickers = ranks_desc(ranks & !(1 << r1)).take(2);
            Self::with_kickers(HandRank::ThreeOfAKind, iter::once(r1).chain(kickers))
        } else if c1 == 2 && c2 == 2 {
            // With three pairs the lowest pair can play as the kicker.
            let kicker = ranks_desc(ranks & !(1 << r1) & !(1 << r2)).take(1);
            Self::with_kickers(HandRank::TwoPair, [r1, r2].into_iter().chain(kicker))
        } else if c1 == 2 {
            let kickers = ranks_desc(ranks & !(1 << r1)).take(3);
            Self::with_kickers(HandRank::OnePair, iter::once(r1).chain(kickers))
        } else {
            Self::with_kickers(HandRank::HighCard, ranks_desc(ranks).take(5))
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;

        let mut sep = " (";
        for kicker in self.kickers() {
            write!(f, "{sep}{kicker}")?;
            sep = " ";
        }

        if !self.kickers().is_empty() {
            write!(f, ")")?;
        }

        Ok(())
    }
}

/// Compares two hand values, `Greater` means that `a` beats `b`.
pub fn compare(a: &HandValue, b: &HandValue) -> Ordering {
    a.cmp(b)
}

/// Iterates the rank values set in `mask` from the highest.
fn ranks_desc(mask: u16) -> impl Iterator<Item = u8> {
    (2..=14u8).rev().filter(move |&v| mask & (1u16 << v) != 0)
}

/// Returns the high card of the highest 5 ranks sequence in `mask`.
fn straight_high(mask: u16) -> Option<u8> {
    // The ace also plays as a 1.
    let mask = if mask & (1 << 14) != 0 {
        mask | (1 << 1)
    } else {
        mask
    };

    (5..=14u8).rev().find(|&high| {
        let run = 0b11111u16 << (high - 4);
        mask & run == run
    })
}
