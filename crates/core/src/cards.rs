use crate::{Deck, RngState, TrickError, DECK_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// The thirteen ranks of a standard deck; jokers are flavor only.
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

/// A card is an opaque token to the trick itself: deal and gather only ever
/// move cards by position. Suit and rank exist for pool construction and
/// display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// The set of distinct cards a session samples its 21-card deck from.
/// Supplied by the front end before a session can start.
#[derive(Debug, Clone)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// The standard 52-card set. No jokers: the trick wants uniquely
    /// identifiable cards and nothing else.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// The standard set plus the two jokers, for front ends that want the
    /// full box of cards on display.
    pub fn with_jokers() -> Self {
        let mut pool = Self::standard();
        pool.cards.push(Card::new(Suit::Spades, Rank::Joker));
        pool.cards.push(Card::new(Suit::Hearts, Rank::Joker));
        pool
    }

    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draws 21 distinct cards uniformly at random.
    pub fn sample_deck(&self, rng: &mut RngState) -> Result<Deck, TrickError> {
        if self.cards.len() < DECK_SIZE {
            return Err(TrickError::PoolTooSmall {
                available: self.cards.len(),
            });
        }
        Deck::new(rng.sample(&self.cards, DECK_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pool_is_52_distinct_cards() {
        let pool = CardPool::standard();
        assert_eq!(pool.len(), 52);
        let mut seen = pool.cards().to_vec();
        seen.sort_by_key(|card| (card.suit as u8, card.rank as u8));
        seen.dedup();
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn sample_deck_draws_21_distinct_cards() {
        let pool = CardPool::standard();
        let mut rng = RngState::from_seed(11);
        let deck = pool.sample_deck(&mut rng).unwrap();
        let mut cards = deck.cards().to_vec();
        cards.sort_by_key(|card| (card.suit as u8, card.rank as u8));
        cards.dedup();
        assert_eq!(cards.len(), 21);
    }

    #[test]
    fn jokers_only_appear_in_the_flavored_pool() {
        assert!(CardPool::standard()
            .cards()
            .iter()
            .all(|card| card.rank != Rank::Joker));
        let pool = CardPool::with_jokers();
        assert_eq!(pool.len(), 54);
        assert_eq!(
            pool.cards()
                .iter()
                .filter(|card| card.rank == Rank::Joker)
                .count(),
            2
        );
        let mut rng = RngState::from_seed(4);
        assert!(pool.sample_deck(&mut rng).is_ok());
    }

    #[test]
    fn undersized_pool_is_rejected() {
        let pool = CardPool::new(CardPool::standard().cards()[..20].to_vec());
        let mut rng = RngState::from_seed(0);
        assert!(matches!(
            pool.sample_deck(&mut rng),
            Err(TrickError::PoolTooSmall { available: 20 })
        ));
    }
}
