// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Callfold hand evaluator and flop equity enumerator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands and a flop analyzer that
//! compares the hero hand against all the opponent hole cards to suggest
//! whether to call or fold.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use callfold_eval::*;
//! // 2s, 2h, .., 4h
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert_eq!(v1.rank(), HandRank::FourOfAKind);
//! assert_eq!(v2.rank(), HandRank::FullHouse);
//! assert!(v1 > v2);
//! ```
//!
//! To analyze a flop use [analyze] with the hero cards and the flop:
//!
//! ```
//! # use callfold_eval::*;
//! let hero = parse_cards("7s 2d", 2).unwrap();
//! let flop = parse_cards("Kh Qh 9c", 3).unwrap();
//!
//! let res = analyze(&hero, &flop).unwrap();
//! assert_eq!(res.hero_rank(), HandRank::HighCard);
//! assert!(res.better() > res.worse());
//! assert_eq!(res.recommendation(), Recommendation::Fold);
//! ```
//!
//! The **`parallel`** feature enables `analyze_par` that splits the opponent
//! holdings across a given number of threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod decision;
pub use decision::{Recommendation, decide};

pub mod equity;
#[cfg(feature = "parallel")]
pub use equity::analyze_par;
pub use equity::{Breakdown, CategoryStats, EquityResult, InputError, analyze, analyze_text};

pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, compare};

// Reexport cards types.
pub use callfold_cards::{Card, Deck, ParseError, Rank, Suit, parse_cards};
