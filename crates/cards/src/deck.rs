// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ParseError;

/// A Poker card.
///
/// A card is stored as its position in the canonical deck order, ranks from
/// deuce to ace and for each rank the suits in spades, hearts, diamonds, clubs
/// order:
///
/// ```text
///   index = rank * 4 + suit
///   rank  = deuce=0,trey=1,four=2,...,ace=12
///   suit  = spades=0,hearts=1,diamonds=2,clubs=3
/// ```
///
/// Cards compare in deck order and serialize to their text form (`"Ah"`).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(rank as u8 * 4 + suit as u8)
    }

    /// Create a card from its deck index, returns `None` if `index >= 52`.
    pub fn from_index(index: u8) -> Option<Card> {
        (usize::from(index) < Deck::SIZE).then_some(Self(index))
    }

    /// This card position in the canonical deck order.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[usize::from(self.0 % 4)]
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[usize::from(self.0 / 4)]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank numeric value, from 2 for a deuce to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank with the given value (2..=14).
    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(2)
            .and_then(|idx| Self::ALL.get(usize::from(idx)))
            .copied()
    }

    /// Returns the rank for a rank character, case insensitive.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank character.
    pub fn to_char(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// Returns the suit for a suit character, case insensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// The suit character.
    pub fn to_char(&self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Returns a new deck with the `known` cards removed.
    ///
    /// Cards that are not in the deck are ignored, the order of the remaining
    /// cards is preserved.
    pub fn without(&self, known: &[Card]) -> Deck {
        let known = known.iter().copied().collect::<AHashSet<_>>();
        let cards = self
            .cards
            .iter()
            .filter(|c| !known.contains(c))
            .copied()
            .collect();
        Self { cards }
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The deck cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the deck cards in order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are generated in lexicographic order of the cards positions in the
    /// deck, for k=2 this is every pair `(i, j)` with `i < j`.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut hand = [self.cards[0]; 7];
        loop {
            for i in 0..k {
                hand[i] = self.cards[pos[i]];
            }

            f(&hand[..k]);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                return;
            };

            pos[i] += 1;
            for j in i + 1..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card, Card::new(card.rank(), card.suit()));
            assert_eq!(Card::from_index(card.index()), Some(card));
            cards.insert(card.index());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(cards.iter().all(|&idx| usize::from(idx) < Deck::SIZE));
        assert_eq!(Card::from_index(52), None);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.rank(), Rank::King);
        assert_eq!(kd.suit(), Suit::Diamonds);
        assert_eq!(kd.index(), 11 * 4 + 2);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:?}"), "Card(Ah)");
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        for r in Rank::ranks() {
            assert_eq!(Rank::from_value(r.value()), Some(r));
            assert_eq!(Rank::from_char(r.to_char()), Some(r));
            assert_eq!(Rank::from_char(r.to_char().to_ascii_lowercase()), Some(r));
        }

        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
        assert_eq!(Rank::from_char('1'), None);
        assert_eq!(Rank::from_char('X'), None);
    }

    #[test]
    fn deck_order() {
        let deck = Deck::default();
        assert_eq!(deck.len(), Deck::SIZE);

        let first = deck.iter().take(5).collect::<Vec<_>>();
        assert_eq!(
            first,
            vec![
                Card::new(Rank::Deuce, Suit::Spades),
                Card::new(Rank::Deuce, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Diamonds),
                Card::new(Rank::Deuce, Suit::Clubs),
                Card::new(Rank::Trey, Suit::Spades),
            ]
        );

        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Clubs));
        assert!(deck.cards().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn deck_without() {
        let deck = Deck::default();
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        let rest = deck.without(&[ah, kd]);
        assert_eq!(rest.len(), 50);
        assert!(!rest.contains(ah));
        assert!(!rest.contains(kd));
        assert!(rest.cards().windows(2).all(|w| w[0] < w[1]));

        // Removing missing cards is a no-op.
        let again = rest.without(&[ah]);
        assert_eq!(again, rest);

        // The source deck is untouched.
        assert_eq!(deck.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_pairs_order() {
        let deck = Deck::default().without(&[
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Diamonds),
        ]);
        assert_eq!(deck.len(), 47);

        let mut pairs = Vec::new();
        deck.for_each(2, |cards| pairs.push((cards[0], cards[1])));

        assert_eq!(pairs.len(), 1_081);
        assert!(pairs.iter().all(|(c1, c2)| c1 < c2));
        assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(pairs[0], (deck.cards()[0], deck.cards()[1]));
    }

    #[test]
    fn deck_for_each_small() {
        // A 7 cards deck has 21 5-cards subsets and a single 7-cards one.
        let deck = Deck::from(Deck::default().into_iter().take(7).collect::<Vec<_>>());

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 21);

        count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards, deck.cards());
            count += 1;
        });
        assert_eq!(count, 1);

        // Nothing to iterate when k is larger than the deck.
        let deck = Deck::from(deck.cards()[..3].to_vec());
        deck.for_each(4, |_| panic!("unexpected hand"));
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"Qc\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }
}
