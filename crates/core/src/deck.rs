use crate::{Card, PileIndex, RngState, TrickError, DECK_SIZE, PILE_SIZE};
use serde::Serialize;

/// The full ordered 21-card sequence tracked across rounds. A `Deck` can
/// only be built through validated paths, so its length is always exactly
/// 21; the sole mutation is the order-only `shuffle`.
///
/// Serialize-only on purpose: deserialization would bypass the size check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Result<Self, TrickError> {
        if cards.len() != DECK_SIZE {
            return Err(TrickError::InvalidDeckSize { len: cards.len() });
        }
        Ok(Self { cards })
    }

    // Gather concatenates three validated piles, so the length is 21 by
    // construction.
    pub(crate) fn from_gather(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|held| *held == card)
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }
}

/// One of the three 7-card subsequences produced by a single deal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub(crate) fn from_deal(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// The pile triple from one deal. Owned transiently by a single round:
/// `gather` consumes it, so a selection can only ever be applied to the
/// piles the caller actually displayed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Piles {
    piles: [Pile; 3],
}

impl Piles {
    pub(crate) fn from_deal(piles: [Vec<Card>; 3]) -> Self {
        Self {
            piles: piles.map(Pile::from_deal),
        }
    }

    /// Builds a pile triple from raw card lists, validating the 7-card
    /// shape of every pile.
    pub fn from_vecs(piles: [Vec<Card>; 3]) -> Result<Self, TrickError> {
        for (index, pile) in piles.iter().enumerate() {
            if pile.len() != PILE_SIZE {
                return Err(TrickError::InvalidPileSelection { index });
            }
        }
        Ok(Self::from_deal(piles))
    }

    pub fn get(&self, index: PileIndex) -> &Pile {
        &self.piles[index.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// Which pile holds `card`, if any.
    pub fn locate(&self, card: Card) -> Option<PileIndex> {
        PileIndex::ALL
            .into_iter()
            .find(|index| self.piles[index.index()].contains(card))
    }

    pub(crate) fn into_parts(self) -> [Vec<Card>; 3] {
        self.piles.map(Pile::into_cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardPool;

    fn cards(count: usize) -> Vec<Card> {
        CardPool::standard().cards()[..count].to_vec()
    }

    #[test]
    fn deck_requires_exactly_21_cards() {
        assert!(Deck::new(cards(21)).is_ok());
        assert!(matches!(
            Deck::new(cards(20)),
            Err(TrickError::InvalidDeckSize { len: 20 })
        ));
        assert!(matches!(
            Deck::new(cards(22)),
            Err(TrickError::InvalidDeckSize { len: 22 })
        ));
    }

    #[test]
    fn shuffle_preserves_the_card_set() {
        let mut deck = Deck::new(cards(21)).unwrap();
        let mut rng = RngState::from_seed(5);
        let mut before = deck.cards().to_vec();
        deck.shuffle(&mut rng);
        let mut after = deck.cards().to_vec();
        before.sort_by_key(|card| (card.suit as u8, card.rank as u8));
        after.sort_by_key(|card| (card.suit as u8, card.rank as u8));
        assert_eq!(before, after);
    }

    #[test]
    fn from_vecs_rejects_short_piles() {
        let deck = cards(21);
        let err = Piles::from_vecs([
            deck[..7].to_vec(),
            deck[7..13].to_vec(),
            deck[13..20].to_vec(),
        ]);
        assert!(matches!(
            err,
            Err(TrickError::InvalidPileSelection { index: 1 })
        ));
    }

    #[test]
    fn locate_finds_the_holding_pile() {
        let deck = cards(21);
        let piles = Piles::from_vecs([
            deck[..7].to_vec(),
            deck[7..14].to_vec(),
            deck[14..].to_vec(),
        ])
        .unwrap();
        assert_eq!(piles.locate(deck[3]), Some(PileIndex::Left));
        assert_eq!(piles.locate(deck[9]), Some(PileIndex::Middle));
        assert_eq!(piles.locate(deck[20]), Some(PileIndex::Right));
        assert_eq!(piles.locate(CardPool::standard().cards()[40]), None);
    }
}
