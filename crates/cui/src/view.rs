use crate::app::{card_label, App};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use ventuno_core::{PileIndex, Step};

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    match app.session.step() {
        Step::Welcome => draw_welcome(frame, root[1]),
        Step::Memorize => draw_memorize(frame, root[1], app),
        Step::Round(_) => draw_piles(frame, root[1], app),
        Step::Reveal => draw_reveal(frame, root[1], app),
    }
    draw_events(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(format!("Ventuno — the 21-card trick | {}", app.step_label()).bold()),
        Line::from(format!("Seed {} | {}", app.seed, app.hint())),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn draw_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("I will read your mind with twenty-one cards.".bold()),
        Line::from(""),
        Line::from("You pick a card in your head. Three times I deal the"),
        Line::from("cards into three piles, and you only ever tell me which"),
        Line::from("pile your card is in. Then I name your card."),
        Line::from(""),
        Line::from("Press Enter when you are ready."),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Welcome"));
    frame.render_widget(widget, area);
}

fn draw_memorize(frame: &mut Frame, area: Rect, app: &App) {
    let cards = app.session.deck().cards();
    let mut lines = vec![
        Line::from("Memorize any one of these cards. Do not point at it."),
        Line::from(""),
    ];
    for row in cards.chunks(7) {
        let labels: Vec<String> = row.iter().map(|card| format!("{:>4}", card_label(*card))).collect();
        lines.push(Line::from(labels.join("  ")));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Press Enter once you have it.".italic()));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Memorize"));
    frame.render_widget(widget, area);
}

fn draw_piles(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let Some(piles) = app.piles.as_ref() else {
        let widget = Paragraph::new("dealing...")
            .block(Block::default().borders(Borders::ALL).title("Piles"));
        frame.render_widget(widget, area);
        return;
    };

    for index in PileIndex::ALL {
        let items: Vec<ListItem> = piles
            .get(index)
            .cards()
            .iter()
            .map(|card| ListItem::new(format!("  {}", card_label(*card))))
            .collect();
        let selected = index.index() == app.pile_cursor;
        let border_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let title = format!(" Pile {} [{}] ", index.index() + 1, index.index() + 1);
        let widget = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        frame.render_widget(widget, columns[index.index()]);
    }
}

fn draw_reveal(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    for round in 1..3 {
        if let Some(guess) = app.script.wrong_guess(round) {
            lines.push(Line::from(format!(
                "Round {round} I teased you with the {} — not it.",
                card_label(guess)
            )));
        }
    }
    lines.push(Line::from(""));
    match app.session.revealed_card() {
        Ok(card) => {
            lines.push(Line::from(
                format!("Your card is the {}.", card_label(card)).bold(),
            ));
        }
        Err(err) => lines.push(Line::from(err.to_string())),
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press Enter to play again."));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Reveal"));
    frame.render_widget(widget, area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| ListItem::new(line.as_str()))
        .collect();
    let widget =
        List::new(items).block(Block::default().borders(Borders::ALL).title("Events"));
    frame.render_widget(widget, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 40, frame.area());
    let lines = vec![
        Line::from("Keys".bold()),
        Line::from(""),
        Line::from("Enter / Space  primary action for the step"),
        Line::from("1 2 3          choose a pile directly"),
        Line::from("← → / h l      move the pile cursor"),
        Line::from("?  Esc         toggle this help"),
        Line::from("q              quit"),
    ];
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
