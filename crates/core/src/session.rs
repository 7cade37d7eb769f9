use crate::{
    deal, gather, Card, CardPool, Deck, Event, EventBus, PileIndex, Piles, RngState, TrickError,
    REVEAL_INDEX, ROUNDS,
};
use serde::{Deserialize, Serialize};

/// Screen flow of one game: `Welcome → Memorize → Round(1..=3) → Reveal`.
/// The round counter lives inside the step, so a fourth round is
/// unrepresentable; after round 3 the machine advances to `Reveal`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Memorize,
    Round(u8),
    Reveal,
}

/// One player's game. Owns its deck, RNG and pool; sessions are plain
/// values with no shared state, one per independent player. Every
/// transition completes synchronously and returns `InvalidStep` when
/// fired out of order.
#[derive(Debug, Clone)]
pub struct GameSession {
    pool: CardPool,
    rng: RngState,
    deck: Deck,
    step: Step,
}

impl GameSession {
    /// Fails up front with `PoolTooSmall` so the problem surfaces before
    /// any game starts.
    pub fn new(pool: CardPool, seed: u64) -> Result<Self, TrickError> {
        let mut rng = RngState::from_seed(seed);
        let deck = pool.sample_deck(&mut rng)?;
        Ok(Self {
            pool,
            rng,
            deck,
            step: Step::Welcome,
        })
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Current round, while in one.
    pub fn round(&self) -> Option<u8> {
        match self.step {
            Step::Round(round) => Some(round),
            _ => None,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// `Welcome → Memorize`: samples a fresh 21-card deck for the
    /// spectator to pick a card from.
    pub fn start(&mut self, events: &mut EventBus) -> Result<(), TrickError> {
        self.expect_step(Step::Welcome)?;
        self.deck = self.pool.sample_deck(&mut self.rng)?;
        self.step = Step::Memorize;
        events.push(Event::GameStarted {
            seed: self.rng.seed(),
        });
        events.push(Event::DeckSampled {
            count: self.deck.cards().len(),
        });
        Ok(())
    }

    /// `Memorize → Round(1)`. Reshuffles the same 21 cards; cosmetic, the
    /// trick does not depend on the memorize-stage ordering.
    pub fn confirm_memorized(&mut self, events: &mut EventBus) -> Result<(), TrickError> {
        self.expect_step(Step::Memorize)?;
        self.deck.shuffle(&mut self.rng);
        self.step = Step::Round(1);
        events.push(Event::MemorizeConfirmed);
        Ok(())
    }

    /// Piles for display in the current round.
    pub fn deal_piles(&self, events: &mut EventBus) -> Result<Piles, TrickError> {
        let Step::Round(round) = self.step else {
            return Err(TrickError::InvalidStep { step: self.step });
        };
        events.push(Event::PilesDealt { round });
        Ok(deal(&self.deck))
    }

    /// `Round(n) → Round(n+1)` (or `Reveal` after round 3). Takes the
    /// piles the caller displayed by value; the session never re-derives
    /// them from a deck that may already have moved on.
    pub fn apply_selection(
        &mut self,
        piles: Piles,
        chosen: PileIndex,
        events: &mut EventBus,
    ) -> Result<(), TrickError> {
        let Step::Round(round) = self.step else {
            return Err(TrickError::InvalidStep { step: self.step });
        };
        self.deck = gather(piles, chosen);
        events.push(Event::PileChosen {
            round,
            pile: chosen,
        });
        if round < ROUNDS {
            self.step = Step::Round(round + 1);
        } else {
            self.step = Step::Reveal;
            events.push(Event::CardRevealed {
                card: self.deck.cards()[REVEAL_INDEX],
            });
        }
        Ok(())
    }

    /// The answer: the card driven to index 10 by the three gathers.
    pub fn revealed_card(&self) -> Result<Card, TrickError> {
        self.expect_step(Step::Reveal)?;
        Ok(self.deck.cards()[REVEAL_INDEX])
    }

    /// `Reveal → Welcome`: discard the finished game; the next `start`
    /// samples a fresh deck.
    pub fn play_again(&mut self, events: &mut EventBus) -> Result<(), TrickError> {
        self.expect_step(Step::Reveal)?;
        self.step = Step::Welcome;
        events.push(Event::GameReset);
        Ok(())
    }

    fn expect_step(&self, step: Step) -> Result<(), TrickError> {
        if self.step != step {
            return Err(TrickError::InvalidStep { step: self.step });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> GameSession {
        GameSession::new(CardPool::standard(), seed).unwrap()
    }

    fn advance_to_round_one(session: &mut GameSession, events: &mut EventBus) {
        session.start(events).unwrap();
        session.confirm_memorized(events).unwrap();
    }

    #[test]
    fn full_game_follows_the_screen_flow() {
        let mut events = EventBus::default();
        let mut game = session(42);
        assert_eq!(game.step(), Step::Welcome);

        game.start(&mut events).unwrap();
        assert_eq!(game.step(), Step::Memorize);

        game.confirm_memorized(&mut events).unwrap();
        for round in 1..=ROUNDS {
            assert_eq!(game.step(), Step::Round(round));
            let piles = game.deal_piles(&mut events).unwrap();
            game.apply_selection(piles, PileIndex::Left, &mut events)
                .unwrap();
        }
        assert_eq!(game.step(), Step::Reveal);
        game.revealed_card().unwrap();

        game.play_again(&mut events).unwrap();
        assert_eq!(game.step(), Step::Welcome);
    }

    #[test]
    fn tracked_card_is_revealed_at_index_10() {
        for seed in [0u64, 1, 7, 0xC0FFEE] {
            let mut events = EventBus::default();
            let mut game = session(seed);
            advance_to_round_one(&mut game, &mut events);
            let secret = game.deck().cards()[14];
            while game.step() != Step::Reveal {
                let piles = game.deal_piles(&mut events).unwrap();
                let chosen = piles.locate(secret).unwrap();
                game.apply_selection(piles, chosen, &mut events).unwrap();
            }
            assert_eq!(game.revealed_card().unwrap(), secret);
            assert_eq!(game.deck().position_of(secret), Some(REVEAL_INDEX));
        }
    }

    #[test]
    fn out_of_order_actions_are_rejected() {
        let mut events = EventBus::default();
        let mut game = session(3);
        assert!(matches!(
            game.confirm_memorized(&mut events),
            Err(TrickError::InvalidStep { step: Step::Welcome })
        ));
        assert!(matches!(
            game.deal_piles(&mut events),
            Err(TrickError::InvalidStep { step: Step::Welcome })
        ));
        assert!(matches!(
            game.revealed_card(),
            Err(TrickError::InvalidStep { step: Step::Welcome })
        ));

        game.start(&mut events).unwrap();
        assert!(matches!(
            game.start(&mut events),
            Err(TrickError::InvalidStep {
                step: Step::Memorize
            })
        ));
    }

    #[test]
    fn start_samples_a_fresh_deck_each_game() {
        let mut events = EventBus::default();
        let mut game = session(9);
        advance_to_round_one(&mut game, &mut events);
        let first_deck = game.deck().clone();
        for _ in 0..ROUNDS {
            let piles = game.deal_piles(&mut events).unwrap();
            game.apply_selection(piles, PileIndex::Middle, &mut events)
                .unwrap();
        }
        game.play_again(&mut events).unwrap();
        game.start(&mut events).unwrap();
        assert_ne!(game.deck(), &first_deck);
    }

    #[test]
    fn events_trace_one_round() {
        let mut events = EventBus::default();
        let mut game = session(1);
        game.start(&mut events).unwrap();
        game.confirm_memorized(&mut events).unwrap();
        let piles = game.deal_piles(&mut events).unwrap();
        game.apply_selection(piles, PileIndex::Right, &mut events)
            .unwrap();
        let log: Vec<Event> = events.drain().collect();
        assert_eq!(
            log,
            vec![
                Event::GameStarted { seed: 1 },
                Event::DeckSampled { count: 21 },
                Event::MemorizeConfirmed,
                Event::PilesDealt { round: 1 },
                Event::PileChosen {
                    round: 1,
                    pile: PileIndex::Right
                },
            ]
        );
    }
}
