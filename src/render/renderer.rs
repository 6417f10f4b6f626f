use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Effects, GameEvent, GameState, Position, PowerUpKind};
use crate::metrics::GameMetrics;
use crate::session::Session;

const HEAD: Color = Color::Rgb(34, 211, 238);
const BODY: Color = Color::Rgb(52, 211, 153);
const FOOD: Color = Color::Rgb(245, 158, 11);
const OBSTACLE: Color = Color::Rgb(167, 139, 250);
const COFFEE: Color = Color::Rgb(168, 85, 247);
const BOOTS: Color = Color::Rgb(34, 197, 94);
const SHIELD: Color = Color::Rgb(56, 189, 248);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &Session) {
        let state = session.state();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(2), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, session.metrics()), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_alive {
            frame.render_widget(self.render_grid(state, session.is_paused()), game_area);
        } else {
            frame.render_widget(self.render_game_over(state, session.metrics()), game_area);
        }

        frame.render_widget(self.render_footer(session), chunks[2]);
    }

    fn render_grid(&self, state: &GameState, paused: bool) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.grid.height());

        for y in 0..state.grid.height() {
            let mut spans = Vec::with_capacity(state.grid.width());

            for x in 0..state.grid.width() {
                let pos = Position::new(x as i32, y as i32);
                spans.push(cell_span(state, pos));
            }

            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value),
            Span::raw("    "),
            Span::styled("High: ", label),
            Span::styled(metrics.high_score.max(state.score).to_string(), value),
            Span::raw("    "),
            Span::styled("Level: ", label),
            Span::styled(state.level.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_footer(&self, session: &Session) -> Paragraph<'_> {
        let mut status = vec![Span::styled(
            status_text(session.notice(), session.is_paused()),
            Style::default().fg(Color::White),
        )];
        let effects = effects_summary(&session.state().effects);
        if !effects.is_empty() {
            status.push(Span::raw("  "));
            status.push(Span::styled(effects, Style::default().fg(Color::Cyan)));
        }

        let text = vec![
            Line::from(status),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Space", Style::default().fg(Color::Cyan)),
                Span::raw(" to pause | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" to restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(state: &GameState, pos: Position) -> Span<'static> {
    if pos == state.snake.head() {
        Span::styled(
            "■ ",
            Style::default().fg(HEAD).add_modifier(Modifier::BOLD),
        )
    } else if state.snake.occupies(pos) {
        Span::styled("□ ", Style::default().fg(BODY))
    } else if state.obstacles.contains(&pos) {
        Span::styled("▓▓", Style::default().fg(OBSTACLE))
    } else if let Some(powerup) = state.powerup_at(pos) {
        let (glyph, color) = match powerup.kind {
            PowerUpKind::Coffee => ("C ", COFFEE),
            PowerUpKind::Boots => ("B ", BOOTS),
            PowerUpKind::Shield => ("U ", SHIELD),
        };
        Span::styled(glyph, Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else if pos == state.food {
        Span::styled(
            "O ",
            Style::default().fg(FOOD).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(". ", Style::default().fg(Color::DarkGray))
    }
}

/// One-line status for the latest notable event
pub fn status_text(notice: Option<GameEvent>, paused: bool) -> &'static str {
    if paused {
        return "Paused.";
    }

    match notice {
        None => "Good luck!",
        Some(GameEvent::ShieldAbsorbed) => "Shield saved you!",
        Some(GameEvent::LevelUp { .. }) => "Level up!",
        Some(GameEvent::PowerUpCollected(PowerUpKind::Coffee)) => "Coffee! 2x points",
        Some(GameEvent::PowerUpCollected(PowerUpKind::Boots)) => "Speed boots!",
        Some(GameEvent::PowerUpCollected(PowerUpKind::Shield)) => "Umbrella ready",
        Some(GameEvent::GameOver { .. }) => "Game over. Press R to restart.",
        Some(_) => "",
    }
}

/// Short list of the effects currently held
pub fn effects_summary(effects: &Effects) -> String {
    let mut parts = Vec::new();
    if effects.coffee_until.is_some() {
        parts.push("coffee".to_string());
    }
    if effects.boots_until.is_some() {
        parts.push("boots".to_string());
    }
    if effects.shield > 0 {
        parts.push(format!("umbrella x{}", effects.shield));
    }
    parts.join(" ")
}
