use crate::AutoplayError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ventuno_core::{Card, PileIndex, Rank, Suit};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u8,
    pub piles: [Vec<Card>; 3],
    pub chosen: PileIndex,
    pub deck_after: Vec<Card>,
    #[serde(default)]
    pub staged_guess: Option<Card>,
    pub secret_position_after: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTrace {
    pub seed: u64,
    pub secret_position_start: usize,
    pub secret_card: Card,
    pub rounds: Vec<RoundRecord>,
    pub revealed: Card,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub seed: u64,
    pub games: u32,
    pub successes: u32,
    pub traces: Vec<GameTrace>,
}

impl BatchOutcome {
    pub(crate) fn from_traces(seed: u64, traces: Vec<GameTrace>) -> Self {
        let successes = traces.iter().filter(|trace| trace.success).count() as u32;
        Self {
            seed,
            games: traces.len() as u32,
            successes,
            traces,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.successes == self.games
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "batch: seed={} games={} successes={}",
                self.seed, self.games, self.successes
            ),
            String::new(),
        ];
        for trace in &self.traces {
            lines.push(format!(
                "game seed={} secret={} start_position={} revealed={} {}",
                trace.seed,
                format_card(trace.secret_card),
                trace.secret_position_start,
                format_card(trace.revealed),
                if trace.success { "ok" } else { "MISS" }
            ));
            for record in &trace.rounds {
                let piles = record
                    .piles
                    .iter()
                    .map(|pile| {
                        pile.iter()
                            .map(|card| format_card(*card))
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect::<Vec<_>>();
                lines.push(format!(
                    "  round {} chose {:?} -> secret at {}",
                    record.round, record.chosen, record.secret_position_after
                ));
                for (index, pile) in piles.iter().enumerate() {
                    lines.push(format!("    pile {}: {}", index + 1, pile));
                }
                if let Some(guess) = record.staged_guess {
                    lines.push(format!("    staged guess: {}", format_card(guess)));
                }
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

pub fn write_json(path: &Path, outcome: &BatchOutcome) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(outcome)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, outcome: &BatchOutcome) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, outcome.to_text_report())?;
    Ok(())
}

pub fn format_card(card: Card) -> String {
    format!("{}{}", rank_short(card.rank), suit_short(card.suit))
}

fn rank_short(rank: Rank) -> &'static str {
    match rank {
        Rank::Ace => "A",
        Rank::King => "K",
        Rank::Queen => "Q",
        Rank::Jack => "J",
        Rank::Ten => "T",
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

fn suit_short(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "S",
        Suit::Hearts => "H",
        Suit::Clubs => "C",
        Suit::Diamonds => "D",
    }
}
