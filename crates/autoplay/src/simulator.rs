use crate::{AutoplayConfig, AutoplayError, BatchOutcome, GameTrace, RoundRecord};
use ventuno_core::{
    CardPool, EventBus, GameSession, MindReaderScript, PileIndex, RngState, Step, DECK_SIZE,
};

/// Drives one session through whole games, always selecting the pile that
/// holds the secret card — the procedure an honest spectator follows.
#[derive(Debug)]
pub struct Simulator {
    pub session: GameSession,
    pub events: EventBus,
}

impl Simulator {
    pub fn new(seed: u64) -> Result<Self, AutoplayError> {
        Ok(Self {
            session: GameSession::new(CardPool::standard(), seed)?,
            events: EventBus::default(),
        })
    }

    /// Plays one complete game with the secret card starting at
    /// `secret_position` in the memorize deck, and leaves the session back
    /// at the welcome step.
    pub fn play_game(&mut self, secret_position: usize) -> Result<GameTrace, AutoplayError> {
        if secret_position >= DECK_SIZE {
            return Err(AutoplayError::InvalidSecretPosition {
                position: secret_position,
            });
        }
        self.session.start(&mut self.events)?;
        let secret = self.session.deck().cards()[secret_position];
        self.session.confirm_memorized(&mut self.events)?;

        let mut script = MindReaderScript::new();
        let mut rounds = Vec::new();
        while let Step::Round(round) = self.session.step() {
            let piles = self.session.deal_piles(&mut self.events)?;
            let chosen = piles
                .locate(secret)
                .ok_or(AutoplayError::CardLost { round })?;
            script.record_selection(&piles, chosen);
            let pile_cards = PileIndex::ALL.map(|index| piles.get(index).cards().to_vec());
            self.session
                .apply_selection(piles, chosen, &mut self.events)?;
            let secret_position_after = self
                .session
                .deck()
                .position_of(secret)
                .ok_or(AutoplayError::CardLost { round })?;
            rounds.push(RoundRecord {
                round,
                piles: pile_cards,
                chosen,
                deck_after: self.session.deck().cards().to_vec(),
                staged_guess: script.wrong_guess(round),
                secret_position_after,
            });
        }

        let revealed = self.session.revealed_card()?;
        let trace = GameTrace {
            seed: self.session.seed(),
            secret_position_start: secret_position,
            secret_card: secret,
            rounds,
            revealed,
            success: revealed == secret,
        };
        self.session.play_again(&mut self.events)?;
        Ok(trace)
    }
}

/// Runs `config.games` seeded games; game `g` uses seed `config.seed + g`
/// so a batch is reproducible from its base seed alone.
pub fn run_batch(config: AutoplayConfig) -> Result<BatchOutcome, AutoplayError> {
    let mut position_rng = RngState::from_seed(config.seed);
    let mut traces = Vec::with_capacity(config.games as usize);
    for game in 0..config.games {
        let mut simulator = Simulator::new(config.seed.wrapping_add(u64::from(game)))?;
        let position = match config.secret_position {
            Some(position) => position,
            None => (position_rng.next_u64() % DECK_SIZE as u64) as usize,
        };
        traces.push(simulator.play_game(position)?);
    }
    Ok(BatchOutcome::from_traces(config.seed, traces))
}
