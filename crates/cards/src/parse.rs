// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text parsing.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors returned when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token is not a rank character followed by a suit character.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// The text does not contain the expected number of cards.
    #[error("expected {expected} cards, found {found}")]
    CardCount {
        /// The number of cards requested.
        expected: usize,
        /// The number of tokens in the text.
        found: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a card like `Ah`, `td` or `9C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(rank).ok_or_else(invalid)?;
        let suit = Suit::from_char(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses exactly `expected` whitespace separated cards.
///
/// The cards are returned in the text order:
///
/// ```
/// # use callfold_cards::*;
/// let flop = parse_cards("Kc 7h 2d", 3).unwrap();
/// assert_eq!(flop[0], Card::new(Rank::King, Suit::Clubs));
///
/// assert!(matches!(
///     parse_cards("Ah Ah", 2),
///     Err(ParseError::DuplicateCard(_))
/// ));
/// ```
pub fn parse_cards(text: &str, expected: usize) -> Result<Vec<Card>, ParseError> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != expected {
        return Err(ParseError::CardCount {
            expected,
            found: tokens.len(),
        });
    }

    let mut cards = Vec::with_capacity(expected);
    for token in tokens {
        let card = token.parse::<Card>()?;
        if cards.contains(&card) {
            return Err(ParseError::DuplicateCard(card));
        }

        cards.push(card);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;

    #[test]
    fn parse_card() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!("Ah".parse::<Card>(), Ok(ah));
        assert_eq!("aH".parse::<Card>(), Ok(ah));
        assert_eq!("AH".parse::<Card>(), Ok(ah));
        assert_eq!("ah".parse::<Card>(), Ok(ah));

        let tc = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!("Tc".parse::<Card>(), Ok(tc));
        assert_eq!("tC".parse::<Card>(), Ok(tc));
    }

    #[test]
    fn parse_invalid_card() {
        for token in ["", "A", "Ahh", "10h", "1h", "Ax", "Zh", "hA", " Ah", "A h"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(ParseError::InvalidCard(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn format_parse_all_cards() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn parse_cards_set() {
        let cards = parse_cards("  Kc 7h\t2d \n", 3).unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::King, Suit::Clubs),
                Card::new(Rank::Seven, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Diamonds),
            ]
        );

        assert_eq!(parse_cards("", 0), Ok(vec![]));
    }

    #[test]
    fn parse_cards_errors() {
        assert_eq!(
            parse_cards("Ah", 2),
            Err(ParseError::CardCount {
                expected: 2,
                found: 1
            })
        );

        assert_eq!(
            parse_cards("Ah Kd Qs", 2),
            Err(ParseError::CardCount {
                expected: 2,
                found: 3
            })
        );

        assert_eq!(
            parse_cards("Ah Ah", 2),
            Err(ParseError::DuplicateCard(Card::new(Rank::Ace, Suit::Hearts)))
        );

        // Duplicates are detected regardless of case.
        assert_eq!(
            parse_cards("Kc 7h kC", 3),
            Err(ParseError::DuplicateCard(Card::new(Rank::King, Suit::Clubs)))
        );

        assert_eq!(
            parse_cards("Ah Xd", 2),
            Err(ParseError::InvalidCard("Xd".to_string()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::InvalidCard("Xd".to_string()).to_string(),
            "invalid card 'Xd'"
        );
        assert_eq!(
            ParseError::CardCount {
                expected: 3,
                found: 2
            }
            .to_string(),
            "expected 3 cards, found 2"
        );
        assert_eq!(
            ParseError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)).to_string(),
            "duplicate card As"
        );
    }
}
