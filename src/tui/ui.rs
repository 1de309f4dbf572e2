//! Stateless UI rendering for tic-tac-toe.
//!
//! Everything drawn here comes from an engine [`Snapshot`]; the text
//! helpers are separated from layout so they can be tested directly.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen};
use super::setup::{Field, SetupForm};
use crate::clock::Clock;
use crate::games::tictactoe::{Mark, Outcome, Position, Snapshot, Square};
use crate::store::ScoreStore;
use strum::IntoEnumIterator;

/// Name and glyph for `mark`, falling back to defaults before setup.
fn identity(snapshot: &Snapshot, mark: Mark) -> (&str, &str) {
    match &snapshot.players {
        Some(players) => {
            let player = players.get(mark);
            (player.display_name().as_str(), player.glyph().as_str())
        }
        None => (mark.default_name(), mark.default_glyph()),
    }
}

/// "{glyph} {name}'s turn".
pub fn turn_text(snapshot: &Snapshot) -> String {
    let (name, glyph) = identity(snapshot, snapshot.round.current_turn());
    format!("{} {}'s turn", glyph, name)
}

/// One line per move: "#1 ❌ Ada → R1C1".
pub fn history_lines(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .round
        .move_log()
        .iter()
        .enumerate()
        .map(|(i, mov)| {
            let (name, glyph) = identity(snapshot, mov.mark);
            format!("#{} {} {} → {}", i + 1, glyph, name, mov.position.coordinate())
        })
        .collect()
}

/// Scoreboard line with both players and draws.
pub fn score_text(snapshot: &Snapshot) -> String {
    let (first, first_glyph) = identity(snapshot, Mark::First);
    let (second, second_glyph) = identity(snapshot, Mark::Second);
    format!(
        "{} {}: {}   {} {}: {}   Draws: {}",
        first_glyph,
        first,
        snapshot.score.wins(Mark::First),
        second_glyph,
        second,
        snapshot.score.wins(Mark::Second),
        snapshot.score.draws()
    )
}

/// Banner for a finished round.
pub fn outcome_text(snapshot: &Snapshot, outcome: &Outcome) -> String {
    match outcome.winner() {
        Some(mark) => {
            let (name, glyph) = identity(snapshot, mark);
            format!("🏆 {} {} Wins!", glyph, name)
        }
        None => "✨ It's a Draw! Well played by both!".to_string(),
    }
}

/// Renders the active screen.
pub fn draw<S: ScoreStore, C: Clock>(frame: &mut Frame, app: &App<S, C>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Setup => draw_setup(frame, chunks[1], app.form()),
        Screen::Playing => draw_game(frame, chunks[1], app),
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_setup(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let mut lines = Vec::new();
    for mark in Mark::iter() {
        let setup = form.setup(mark);
        let name_style = focus_style(form.focus() == Field::Name(mark));
        lines.push(Line::from(vec![
            Span::raw(format!("{} name: ", mark.default_name())),
            Span::styled(format!("{}▏", setup.display_name), name_style),
        ]));

        let mut glyphs = vec![Span::raw("  symbol: ")];
        let selected = form.glyph_index(mark);
        for (i, option) in mark.glyph_options().iter().enumerate() {
            let style = if Some(i) == selected {
                focus_style(form.focus() == Field::Glyph(mark)).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            glyphs.push(Span::styled(format!(" {} {} ", option.glyph, option.label), style));
        }
        lines.push(Line::from(glyphs));
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Tab: next field   ←/→: change symbol   Enter: start   Esc: quit"));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Player setup "),
    );
    frame.render_widget(form, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn draw_game<S: ScoreStore, C: Clock>(frame: &mut Frame, area: Rect, app: &App<S, C>) {
    let snapshot = app.snapshot();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(32)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score
            Constraint::Length(1), // Turn or outcome
            Constraint::Min(9),    // Board
            Constraint::Length(1), // Keys
        ])
        .split(columns[0]);

    frame.render_widget(
        Paragraph::new(score_text(snapshot)).alignment(Alignment::Center),
        left[0],
    );

    let headline = match app.outcome() {
        Some(outcome) => Paragraph::new(outcome_text(snapshot, &outcome)).style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new(turn_text(snapshot)),
    };
    frame.render_widget(headline.alignment(Alignment::Center), left[1]);

    draw_board(frame, left[2], snapshot, app.cursor());

    let undo = if snapshot.can_undo { "u: undo   " } else { "" };
    frame.render_widget(
        Paragraph::new(format!("{}r: reset   n: new game   q: quit", undo))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        left[3],
    );

    let history: Vec<Line> = history_lines(snapshot).into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(history).block(Block::default().borders(Borders::ALL).title(" Moves ")),
        columns[1],
    );
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position) {
    let board_area = center_rect(area, 23, 7);
    let winning = snapshot.round.winning_line();
    let live = !snapshot.round.is_over();

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let Some(pos) = Position::from_index(row * 3 + col) else {
                continue;
            };
            let text = match snapshot.round.board().get(pos) {
                Square::Empty => format!("  {}  ", pos.to_index() + 1),
                Square::Occupied(mark) => format!("  {}  ", identity(snapshot, mark).1),
            };
            let mut style = match snapshot.round.board().get(pos) {
                Square::Empty => Style::default().fg(Color::DarkGray),
                Square::Occupied(_) => Style::default().add_modifier(Modifier::BOLD),
            };
            if winning.is_some_and(|line| line.contains(pos)) {
                style = style.fg(Color::Black).bg(Color::Green);
            } else if live && pos == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
            if col < 2 {
                spans.push(Span::raw("│"));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(Line::from("─────┼─────┼─────"));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        board_area,
    );
}

/// Centers a rect of the given size inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::games::tictactoe::{Engine, PlayerSetup};
    use crate::store::MemoryScoreStore;
    use crate::tui::setup::SetupForm;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn engine() -> Engine<MemoryScoreStore, ManualClock> {
        let mut engine = Engine::with_clock(MemoryScoreStore::new(), ManualClock::default());
        engine
            .start_round(
                PlayerSetup::new(Mark::First, "Ada").glyph("🔥"),
                PlayerSetup::new(Mark::Second, "Bo"),
            )
            .unwrap();
        engine
    }

    fn rendered(app: &App<MemoryScoreStore, ManualClock>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_turn_text_uses_player_identity() {
        let mut engine = engine();
        assert_eq!(turn_text(&engine.snapshot()), "🔥 Ada's turn");
        engine.apply_move(0).unwrap();
        assert_eq!(turn_text(&engine.snapshot()), "⭕ Bo's turn");
    }

    #[test]
    fn test_history_lines_use_coordinates() {
        let mut engine = engine();
        engine.apply_move(0).unwrap();
        engine.apply_move(5).unwrap();
        assert_eq!(
            history_lines(&engine.snapshot()),
            ["#1 🔥 Ada → R1C1", "#2 ⭕ Bo → R2C3"]
        );
    }

    #[test]
    fn test_outcome_and_score_text() {
        let mut engine = engine();
        let mut report = None;
        for pos in [0, 3, 1, 4, 2] {
            report = Some(engine.apply_move(pos).unwrap());
        }
        let report = report.unwrap();
        let outcome = report.outcome.unwrap();
        assert_eq!(outcome_text(&report.snapshot, &outcome), "🏆 🔥 Ada Wins!");
        assert_eq!(
            score_text(&report.snapshot),
            "🔥 Ada: 1   ⭕ Bo: 0   Draws: 0"
        );
        assert_eq!(
            outcome_text(&report.snapshot, &Outcome::Draw),
            "✨ It's a Draw! Well played by both!"
        );
    }

    #[test]
    fn test_setup_screen_draws_form() {
        let app = App::new(
            Engine::with_clock(MemoryScoreStore::new(), ManualClock::default()),
            SetupForm::new(
                PlayerSetup::new(Mark::First, "Ada"),
                PlayerSetup::new(Mark::Second, "Bo"),
            ),
        );
        let screen = rendered(&app);
        assert!(screen.contains("Player setup"));
        assert!(screen.contains("Ada"));
        assert!(screen.contains("Diamond"));
    }

    #[test]
    fn test_play_screen_draws_board_and_history() {
        let mut app = App::new(
            engine(),
            SetupForm::new(
                PlayerSetup::new(Mark::First, "Ada"),
                PlayerSetup::new(Mark::Second, "Bo"),
            ),
        );
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE));
        let screen = rendered(&app);
        assert!(screen.contains("Moves"));
        assert!(screen.contains("R3C3"));
        assert!(screen.contains("Bo's turn"));
    }
}
