use crate::{Card, PileIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GameStarted { seed: u64 },
    DeckSampled { count: usize },
    MemorizeConfirmed,
    PilesDealt { round: u8 },
    PileChosen { round: u8, pile: PileIndex },
    CardRevealed { card: Card },
    GameReset,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
