use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, GameConfig, GameSession};
use crate::metrics::GameMetrics;

/// A terminal notice shown over the final board, acknowledged with any key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub lines: Vec<String>,
}

pub struct Renderer {
    config: GameConfig,
}

impl Renderer {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn render_menu(&self, frame: &mut Frame, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(8),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let mut lines = vec![
            Line::from(Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" to start    "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to exit"),
            ]),
        ];

        if metrics.games_played > 0 {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("High score: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.high_score.to_string()),
                Span::raw("    "),
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::raw(metrics.games_played.to_string()),
            ]));
        }

        let menu = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(menu, chunks[1]);
    }

    pub fn render_game(
        &self,
        frame: &mut Frame,
        session: &GameSession,
        metrics: &GameMetrics,
        notice: Option<&Notice>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_header(session, metrics);
        frame.render_widget(header, chunks[0]);

        // Center the board horizontally
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let board = self.render_board(session);
        frame.render_widget(board, board_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);

        if let Some(notice) = notice {
            self.render_notice(frame, notice);
        }
    }

    /// Draw the playable cells; the block border stands in for the wall
    fn render_board(&self, session: &GameSession) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in self.config.playable_min..=self.config.playable_max {
            let mut spans = Vec::new();

            for x in self.config.playable_min..=self.config.playable_max {
                let cell = Cell::new(x, y);

                let span = if cell == session.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if session.snake.contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if session.food1.contains(&cell) {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if session.food2.contains(&cell) {
                    Span::styled(
                        "O ",
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake Game "),
            )
            .alignment(Alignment::Center)
    }

    fn render_header(&self, session: &GameSession, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Points: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake.len().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" to exit to menu | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_notice(&self, frame: &mut Frame, notice: &Notice) {
        let area = centered_rect(50, 30, frame.area());

        let mut lines = vec![Line::from("")];
        for text in &notice.lines {
            lines.push(Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to return to the menu",
            Style::default().fg(Color::Gray),
        )));

        let body = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red))
                .title(format!(" {} ", notice.title)),
        );

        frame.render_widget(Clear, area);
        frame.render_widget(body, area);
    }
}

/// Rect centered in `r`, sized as a percentage of it
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = centered_rect(50, 30, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 30);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 35);
    }
}
