use anyhow::Result;
use std::collections::VecDeque;
use ventuno_core::{
    Card, CardPool, Event, EventBus, GameSession, MindReaderScript, PileIndex, Piles, Rank, Step,
    Suit, TrickError, PILE_COUNT, ROUNDS,
};

pub const DEFAULT_SEED: u64 = 0xC0FFEE;
const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub seed: u64,
    pub session: GameSession,
    pub events: EventBus,
    pub script: MindReaderScript,
    /// The piles currently on screen. `select_pile` hands exactly this
    /// value to the session, never a recomputed deal.
    pub piles: Option<Piles>,
    pub pile_cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: u64) -> Result<Self> {
        let session = GameSession::new(CardPool::standard(), seed)?;
        Ok(Self {
            seed,
            session,
            events: EventBus::default(),
            script: MindReaderScript::new(),
            piles: None,
            pile_cursor: 0,
            event_log: VecDeque::new(),
            status_line: "press Enter to start".to_string(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn move_cursor(&mut self, forward: bool) {
        if !matches!(self.session.step(), Step::Round(_)) {
            return;
        }
        if forward {
            self.pile_cursor = (self.pile_cursor + 1) % PILE_COUNT;
        } else {
            self.pile_cursor = (self.pile_cursor + PILE_COUNT - 1) % PILE_COUNT;
        }
    }

    pub fn activate(&mut self) {
        match self.session.step() {
            Step::Welcome => self.start_game(),
            Step::Memorize => self.confirm_memorized(),
            Step::Round(_) => self.select_pile(self.pile_cursor),
            Step::Reveal => self.play_again(),
        }
    }

    pub fn start_game(&mut self) {
        self.script.reset();
        let outcome = self.session.start(&mut self.events);
        if outcome.is_ok() {
            self.status_line = "memorize one card, then press Enter".to_string();
        }
        self.report(outcome);
    }

    pub fn confirm_memorized(&mut self) {
        let outcome = self.session.confirm_memorized(&mut self.events);
        if outcome.is_ok() {
            self.refresh_piles();
        }
        self.report(outcome);
    }

    pub fn select_pile(&mut self, index: usize) {
        if !matches!(self.session.step(), Step::Round(_)) {
            self.status_line = "no piles on the table".to_string();
            return;
        }
        let chosen = match PileIndex::from_index(index) {
            Ok(chosen) => chosen,
            Err(err) => {
                self.status_line = err.to_string();
                return;
            }
        };
        let Some(piles) = self.piles.take() else {
            self.status_line = "no piles on the table".to_string();
            return;
        };
        let round = self.session.round().unwrap_or(0);
        self.script.record_selection(&piles, chosen);
        let outcome = self.session.apply_selection(piles, chosen, &mut self.events);
        match &outcome {
            Ok(()) if round < ROUNDS => {
                self.refresh_piles();
                if let Some(guess) = self.script.wrong_guess(round) {
                    self.status_line = format!(
                        "hmm... is it the {}? no, keep going",
                        card_label(guess)
                    );
                }
            }
            Ok(()) => {
                self.status_line = "I have it. behold the 11th card".to_string();
            }
            Err(_) => {}
        }
        self.report(outcome);
    }

    pub fn play_again(&mut self) {
        let outcome = self.session.play_again(&mut self.events);
        if outcome.is_ok() {
            self.piles = None;
            self.pile_cursor = 0;
            self.status_line = "press Enter to start".to_string();
        }
        self.report(outcome);
    }

    pub fn on_tick(&mut self) {
        self.drain_events();
    }

    pub fn step_label(&self) -> &'static str {
        match self.session.step() {
            Step::Welcome => "Welcome",
            Step::Memorize => "Memorize",
            Step::Round(1) => "Round 1",
            Step::Round(2) => "Round 2",
            Step::Round(_) => "Round 3",
            Step::Reveal => "Reveal",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self.session.step() {
            Step::Welcome => "Enter: start  q: quit  ?: help",
            Step::Memorize => "pick any card in your head, then Enter",
            Step::Round(_) => "1/2/3 or arrows+Enter: the pile with your card",
            Step::Reveal => "Enter: play again  q: quit",
        }
    }

    fn refresh_piles(&mut self) {
        match self.session.deal_piles(&mut self.events) {
            Ok(piles) => {
                self.piles = Some(piles);
                self.pile_cursor = 0;
            }
            Err(err) => self.status_line = err.to_string(),
        }
    }

    fn report(&mut self, outcome: Result<(), TrickError>) {
        if let Err(err) = outcome {
            self.status_line = err.to_string();
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        let drained: Vec<Event> = self.events.drain().collect();
        for event in drained {
            let line = describe_event(&event);
            self.event_log.push_back(line);
            while self.event_log.len() > MAX_EVENT_LOG {
                self.event_log.pop_front();
            }
        }
    }
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::GameStarted { seed } => format!("game started (seed {seed})"),
        Event::DeckSampled { count } => format!("dealt a fresh deck of {count}"),
        Event::MemorizeConfirmed => "spectator memorized a card".to_string(),
        Event::PilesDealt { round } => format!("round {round}: piles on the table"),
        Event::PileChosen { round, pile } => {
            format!("round {round}: pile {} chosen", pile.index() + 1)
        }
        Event::CardRevealed { card } => format!("revealed: {}", card_label(*card)),
        Event::GameReset => "back to the welcome screen".to_string(),
    }
}

pub fn card_label(card: Card) -> String {
    format!("{}{}", rank_label(card.rank), suit_label(card.suit))
}

fn rank_label(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::King => "K",
        Rank::Queen => "Q",
        Rank::Jack => "J",
        Rank::Ten => "10",
        Rank::Nine => "9",
        Rank::Eight => "8",
        Rank::Seven => "7",
        Rank::Six => "6",
        Rank::Five => "5",
        Rank::Four => "4",
        Rank::Three => "3",
        Rank::Two => "2",
        Rank::Joker => "Jk",
    }
}

fn suit_label(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "♠",
        Suit::Hearts => "♥",
        Suit::Clubs => "♣",
        Suit::Diamonds => "♦",
    }
}
