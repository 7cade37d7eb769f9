use crate::{Card, Deck, Piles, Step};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DECK_SIZE: usize = 21;
pub const PILE_COUNT: usize = 3;
pub const PILE_SIZE: usize = 7;
pub const ROUNDS: u8 = 3;

/// Where the spectator's card lands after three gathers. Fixed by the
/// sandwich placement over a 3-pile/7-card split; never change it
/// independently of the geometry above.
pub const REVEAL_INDEX: usize = 10;

const _: () = assert!(DECK_SIZE == PILE_COUNT * PILE_SIZE);

#[derive(Debug, Error)]
pub enum TrickError {
    #[error("invalid deck size: {len} (want {DECK_SIZE})")]
    InvalidDeckSize { len: usize },
    #[error("invalid pile selection: {index}")]
    InvalidPileSelection { index: usize },
    #[error("card pool too small: {available} (want at least {DECK_SIZE})")]
    PoolTooSmall { available: usize },
    #[error("invalid step: {step:?}")]
    InvalidStep { step: Step },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PileIndex {
    Left,
    Middle,
    Right,
}

impl PileIndex {
    pub const ALL: [PileIndex; 3] = [PileIndex::Left, PileIndex::Middle, PileIndex::Right];

    pub fn from_index(index: usize) -> Result<Self, TrickError> {
        match index {
            0 => Ok(PileIndex::Left),
            1 => Ok(PileIndex::Middle),
            2 => Ok(PileIndex::Right),
            _ => Err(TrickError::InvalidPileSelection { index }),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Round-robin deal: the card at input position `i` goes to pile `i % 3`,
/// preserving relative order within each pile. Pure and deterministic; a
/// `Deck` is 21 cards by construction, so this cannot fail.
pub fn deal(deck: &Deck) -> Piles {
    let mut piles = [
        Vec::with_capacity(PILE_SIZE),
        Vec::with_capacity(PILE_SIZE),
        Vec::with_capacity(PILE_SIZE),
    ];
    for (position, card) in deck.cards().iter().enumerate() {
        piles[position % PILE_COUNT].push(*card);
    }
    Piles::from_deal(piles)
}

/// Deal entry point for unvalidated card sequences.
pub fn deal_slice(cards: &[Card]) -> Result<Piles, TrickError> {
    let deck = Deck::new(cards.to_vec())?;
    Ok(deal(&deck))
}

/// Re-stacks the three piles into one deck with the chosen pile sandwiched
/// between the two others (kept in ascending index order). This placement
/// is what drives the spectator's card to `REVEAL_INDEX` after three
/// rounds. Consumes the piles: a selection applies to exactly the piles
/// the preceding `deal` produced.
pub fn gather(piles: Piles, chosen: PileIndex) -> Deck {
    let [left, middle, right] = piles.into_parts();
    let [first, second, third] = match chosen {
        PileIndex::Left => [middle, left, right],
        PileIndex::Middle => [left, middle, right],
        PileIndex::Right => [left, right, middle],
    };
    let mut cards = Vec::with_capacity(DECK_SIZE);
    cards.extend(first);
    cards.extend(second);
    cards.extend(third);
    Deck::from_gather(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardPool;

    fn ordered_deck() -> Deck {
        Deck::new(CardPool::standard().cards()[..DECK_SIZE].to_vec()).unwrap()
    }

    #[test]
    fn deal_is_round_robin() {
        let deck = ordered_deck();
        let piles = deal(&deck);
        for (position, card) in deck.cards().iter().enumerate() {
            let pile = piles.get(PileIndex::from_index(position % 3).unwrap());
            assert_eq!(pile.get(position / 3), Some(*card));
        }
        for pile in piles.iter() {
            assert_eq!(pile.cards().len(), PILE_SIZE);
        }
    }

    #[test]
    fn gather_sandwiches_the_chosen_pile() {
        let deck = ordered_deck();
        for chosen in PileIndex::ALL {
            let piles = deal(&deck);
            let expected_middle = piles.get(chosen).cards().to_vec();
            let gathered = gather(piles, chosen);
            assert_eq!(&gathered.cards()[7..14], expected_middle.as_slice());
            assert_eq!(gathered.cards().len(), DECK_SIZE);
        }
    }

    #[test]
    fn gather_keeps_unchosen_piles_in_ascending_order() {
        let deck = ordered_deck();
        let piles = deal(&deck);
        let left = piles.get(PileIndex::Left).cards().to_vec();
        let middle = piles.get(PileIndex::Middle).cards().to_vec();
        let gathered = gather(piles, PileIndex::Right);
        assert_eq!(&gathered.cards()[..7], left.as_slice());
        assert_eq!(&gathered.cards()[14..], middle.as_slice());
    }

    #[test]
    fn deal_and_gather_are_deterministic() {
        let deck = ordered_deck();
        let first = gather(deal(&deck), PileIndex::Middle);
        let second = gather(deal(&deck), PileIndex::Middle);
        assert_eq!(first, second);
    }

    #[test]
    fn deal_slice_rejects_wrong_sizes() {
        let pool = CardPool::standard();
        assert!(matches!(
            deal_slice(&pool.cards()[..20]),
            Err(TrickError::InvalidDeckSize { len: 20 })
        ));
        assert!(matches!(
            deal_slice(&pool.cards()[..22]),
            Err(TrickError::InvalidDeckSize { len: 22 })
        ));
    }

    #[test]
    fn pile_index_rejects_out_of_range() {
        assert!(matches!(
            PileIndex::from_index(3),
            Err(TrickError::InvalidPileSelection { index: 3 })
        ));
        assert_eq!(PileIndex::from_index(2).unwrap(), PileIndex::Right);
    }
}
