use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use ventuno_autoplay::{run_batch, write_json, write_text, AutoplayConfig};
use ventuno_core::{
    Card, CardPool, EventBus, GameSession, MindReaderScript, PileIndex, Rank, Step, Suit,
};

#[derive(Debug, Clone, Default)]
struct CliOptions {
    seed: Option<u64>,
    games: Option<u32>,
    position: Option<usize>,
    json: Option<PathBuf>,
    text: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((first, rest)) if !first.starts_with('-') => (first.as_str(), rest.to_vec()),
        _ => ("play", args.clone()),
    };
    match command {
        "play" => play(parse_options(&rest)),
        "simulate" => simulate(parse_options(&rest)),
        "cui" => ventuno_cui::run_with_args(&rest),
        "help" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("usage: ventuno [play|simulate|cui] [options]");
    println!("  play       interactive trick at the prompt (default)");
    println!("             --seed N");
    println!("  simulate   seeded self-play verification batches");
    println!("             --seed N  --games M  --position P");
    println!("             --json PATH  --text PATH");
    println!("  cui        full-screen terminal interface");
    println!("             --seed N");
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--games" => {
                if let Some(value) = args.get(idx + 1) {
                    options.games = value.parse::<u32>().ok();
                    idx += 1;
                }
            }
            "--position" => {
                if let Some(value) = args.get(idx + 1) {
                    options.position = value.parse::<usize>().ok();
                    idx += 1;
                }
            }
            "--json" => {
                if let Some(value) = args.get(idx + 1) {
                    options.json = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--text" => {
                if let Some(value) = args.get(idx + 1) {
                    options.text = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    options
}

fn simulate(options: CliOptions) -> Result<()> {
    let defaults = AutoplayConfig::default();
    let config = AutoplayConfig {
        seed: options.seed.unwrap_or(defaults.seed),
        games: options.games.unwrap_or(100),
        secret_position: options.position,
    };
    let outcome = run_batch(config).context("run self-play batch")?;
    if let Some(path) = options.json.as_ref() {
        write_json(path, &outcome)
            .with_context(|| format!("write report to {}", path.display()))?;
        println!(
            "wrote {} ({}/{} games ok)",
            path.display(),
            outcome.successes,
            outcome.games
        );
    }
    if let Some(path) = options.text.as_ref() {
        write_text(path, &outcome)
            .with_context(|| format!("write report to {}", path.display()))?;
        println!(
            "wrote {} ({}/{} games ok)",
            path.display(),
            outcome.successes,
            outcome.games
        );
    }
    if options.json.is_none() && options.text.is_none() {
        println!("{}", outcome.to_text_report());
    }
    if !outcome.all_succeeded() {
        bail!("{} of {} games missed", outcome.games - outcome.successes, outcome.games);
    }
    Ok(())
}

fn play(options: CliOptions) -> Result<()> {
    let seed = options.seed.unwrap_or_else(entropy_seed);
    let mut session =
        GameSession::new(CardPool::standard(), seed).context("create game session")?;
    let mut events = EventBus::default();

    println!("Ventuno — the 21-card trick (seed {seed})");
    println!();
    println!("Pick a card in your head. Three times I deal three piles and");
    println!("you tell me only which pile your card is in. Then I name it.");
    loop {
        if prompt_line("\npress Enter to start (q quits): ")?.is_none() {
            return Ok(());
        }
        session.start(&mut events).context("start game")?;

        println!("\nMemorize one of these cards:");
        print_memorize_grid(session.deck().cards());
        if prompt_line("\npress Enter once you have it: ")?.is_none() {
            return Ok(());
        }
        session.confirm_memorized(&mut events).context("confirm")?;

        let mut script = MindReaderScript::new();
        while let Step::Round(round) = session.step() {
            let piles = session.deal_piles(&mut events)?;
            println!("\n-- round {round} --");
            for index in PileIndex::ALL {
                let labels: Vec<String> = piles
                    .get(index)
                    .cards()
                    .iter()
                    .map(|card| format_card(*card))
                    .collect();
                println!("  pile {}: {}", index.index() + 1, labels.join(" "));
            }
            let Some(chosen) = ask_pile()? else {
                return Ok(());
            };
            script.record_selection(&piles, chosen);
            session.apply_selection(piles, chosen, &mut events)?;
            if let Some(guess) = script.wrong_guess(round) {
                println!("  hmm... the {}? no, not yet.", format_card(guess));
            }
        }

        let revealed = session.revealed_card()?;
        println!("\nYour card is the {}.", format_card(revealed));
        session.play_again(&mut events)?;
        events.drain().for_each(drop);
        match prompt_line("\nplay again? [y/N]: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => break,
        }
    }
    Ok(())
}

fn print_memorize_grid(cards: &[Card]) {
    for row in cards.chunks(7) {
        let labels: Vec<String> = row.iter().map(|card| format!("{:>3}", format_card(*card))).collect();
        println!("  {}", labels.join(" "));
    }
}

fn ask_pile() -> Result<Option<PileIndex>> {
    loop {
        let Some(answer) = prompt_line("which pile holds your card? [1-3]: ")? else {
            return Ok(None);
        };
        let parsed = answer
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1));
        match parsed.map(PileIndex::from_index) {
            Some(Ok(chosen)) => return Ok(Some(chosen)),
            _ => println!("  enter 1, 2 or 3"),
        }
    }
}

/// `None` means the player quit (EOF or "q").
fn prompt_line(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    let line = line.trim().to_string();
    if read == 0 || line == "q" {
        return Ok(None);
    }
    Ok(Some(line))
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0xC0FFEE)
}

fn format_card(card: Card) -> String {
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
