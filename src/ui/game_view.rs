use crate::game::{Cell, GameStatus, PlayerColor, Session, GAME_NAME};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Opponent choice shown before each game.
pub fn render_mode_select(frame: &mut Frame) {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from("Choose your opponent"),
        Line::from(""),
        Line::from(vec![
            Span::styled("P", key),
            Span::raw("  Play against another player"),
        ]),
        Line::from(vec![
            Span::styled("C", key),
            Span::raw("  Play against the computer"),
        ]),
        Line::from(vec![Span::styled("Q", key), Span::raw("  Quit")]),
    ];

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(GAME_NAME));

    frame.render_widget(menu, frame.area());
}

fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::Red,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
    }
}

fn render_header(frame: &mut Frame, session: &Session, area: ratatui::layout::Rect) {
    let (status, color) = match session.status() {
        GameStatus::Won => match session.winner() {
            Some(winner) => (
                format!("Game Over  |  {} wins", winner.name()),
                player_color(winner.color()),
            ),
            None => ("Game Over".to_string(), Color::White),
        },
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
        GameStatus::Setup | GameStatus::InProgress => match session.current_player() {
            Some(player) => (
                format!(
                    "Current Player: {} ({})  |  {}",
                    player.name(),
                    player.token(),
                    player.color().name()
                ),
                player_color(player.color()),
            ),
            None => ("Choose an opponent".to_string(), Color::White),
        },
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(GAME_NAME));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &Session,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let board = session.board();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 1..=board.columns() {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {col} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {col} ")));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.columns() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 1..=board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 1..=board.columns() {
            let span = match board.cell(row, col) {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Token(token) => {
                    let color = session
                        .player_for_token(token)
                        .map_or(Color::White, |player| player_color(player.color()));
                    Span::styled(
                        format!(" {token} "),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 1..=board.columns() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→ or 1-7: Select  |  Enter: Drop  |  R: Restart  |  M: Menu  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
