use crate::{Card, Deck, PileIndex, Piles, PILE_SIZE, REVEAL_INDEX, ROUNDS};

/// Staged "mind-reading" patter layered over the real trick: deliberately
/// wrong guesses after rounds 1 and 2, the true card after round 3. Pure
/// bookkeeping for front ends; the session machine never sees it.
#[derive(Debug, Default, Clone)]
pub struct MindReaderScript {
    decoys: Vec<Card>,
}

impl MindReaderScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed selection. The decoy is taken from a
    /// non-chosen pile, so a staged wrong guess can never accidentally
    /// name the spectator's card.
    pub fn record_selection(&mut self, piles: &Piles, chosen: PileIndex) {
        let decoy_pile = if chosen == PileIndex::Left {
            PileIndex::Middle
        } else {
            PileIndex::Left
        };
        // Vary the slot between rounds so repeat games do not telegraph
        // the script.
        let slot = (self.decoys.len() * 3 + 2) % PILE_SIZE;
        if let Some(card) = piles.get(decoy_pile).get(slot) {
            self.decoys.push(card);
        }
    }

    /// The staged wrong guess shown after `round` (1 or 2) completes.
    pub fn wrong_guess(&self, round: u8) -> Option<Card> {
        if round == 0 || round >= ROUNDS {
            return None;
        }
        self.decoys.get(round as usize - 1).copied()
    }

    /// The genuine final-round guess.
    pub fn true_guess(deck: &Deck) -> Card {
        deck.cards()[REVEAL_INDEX]
    }

    pub fn reset(&mut self) {
        self.decoys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CardPool, EventBus, GameSession, Step};

    #[test]
    fn wrong_guesses_never_name_the_tracked_card() {
        for seed in [2u64, 5, 21, 1024] {
            let mut events = EventBus::default();
            let mut game = GameSession::new(CardPool::standard(), seed).unwrap();
            let mut script = MindReaderScript::new();
            game.start(&mut events).unwrap();
            let secret = game.deck().cards()[6];
            game.confirm_memorized(&mut events).unwrap();
            while game.step() != Step::Reveal {
                let piles = game.deal_piles(&mut events).unwrap();
                let chosen = piles.locate(secret).unwrap();
                script.record_selection(&piles, chosen);
                game.apply_selection(piles, chosen, &mut events).unwrap();
            }
            for round in 1..ROUNDS {
                let guess = script.wrong_guess(round).unwrap();
                assert_ne!(guess, secret);
            }
            assert_eq!(MindReaderScript::true_guess(game.deck()), secret);
        }
    }

    #[test]
    fn no_guess_outside_the_staged_rounds() {
        let script = MindReaderScript::new();
        assert_eq!(script.wrong_guess(0), None);
        assert_eq!(script.wrong_guess(3), None);
    }
}
