// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Callfold cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use callfold_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.rank().value(), 14);
//! assert_eq!(kd.to_string(), "Kd");
//! ```
//!
//! to parse them from text:
//!
//! ```
//! # use callfold_cards::{parse_cards, Card, Rank, Suit};
//! let ah = "ah".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! let hero = parse_cards("Ah Ad", 2).unwrap();
//! assert_eq!(hero.len(), 2);
//! ```
//!
//! and a [Deck] type for removing known cards and iterating the hands that
//! can be dealt from the remaining cards.
//!
//! For example to iterate through all the opponent hole cards given the hero
//! cards and the flop:
//!
//! ```
//! # use callfold_cards::{parse_cards, Deck};
//! let known = parse_cards("Ah Ad Kc 7h 2d", 5).unwrap();
//! let deck = Deck::default().without(&known);
//! assert_eq!(deck.len(), 47);
//!
//! let mut counter = 0;
//! deck.for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_081);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod parse;
pub use parse::{ParseError, parse_cards};
