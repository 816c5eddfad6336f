use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{game::word_points, App};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let dim_italic_style = Style::default()
            .patch(dim_style)
            .add_modifier(Modifier::ITALIC);
        let green_style = Style::default().fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(1), // root word + score
                    Constraint::Length(1), // letter bar
                    Constraint::Length(3), // input field
                    Constraint::Min(1),    // found words
                    Constraint::Length(1), // key hints
                ]
                .as_ref(),
            )
            .split(area);

        // header: root word on the left, running score on the right
        let score_text = format!("{} points", self.game.score);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(score_text.width() as u16),
            ])
            .split(chunks[0]);

        Paragraph::new(Span::styled(self.game.root_word.clone(), bold_style))
            .render(header[0], buf);
        Paragraph::new(Span::styled(score_text, bold_style))
            .alignment(Alignment::Right)
            .render(header[1], buf);

        let letter_bar = self.game.root_word.chars().join(" ");
        Paragraph::new(Span::styled(letter_bar, dim_style)).render(chunks[1], buf);

        // input field; dimmed while the error popup owns the keyboard
        let input_style = if self.error.is_some() {
            dim_style
        } else {
            Style::default()
        };
        let cursor = Span::styled(" ", Style::default().add_modifier(Modifier::UNDERLINED));
        Paragraph::new(Line::from(vec![Span::raw(self.input.clone()), cursor]))
            .style(input_style)
            .block(Block::default().borders(Borders::ALL).title("your word"))
            .render(chunks[2], buf);

        let items: Vec<ListItem> = self
            .game
            .used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("({}) ", word.chars().count()), dim_style),
                    Span::raw(word.clone()),
                    Span::styled(format!("  +{}", word_points(word)), green_style),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("found words ({})", self.game.used_words.len())),
            )
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(
            "enter submit / ctrl-n new game / esc quit",
            dim_italic_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);

        if let Some(error) = &self.error {
            let title = error.title();
            let message = error.to_string();
            let hint = "press any key";

            let content_width = [title.width(), message.width(), hint.width()]
                .into_iter()
                .max()
                .unwrap_or(0) as u16;
            let popup_width = (content_width + 4).min(area.width.saturating_sub(2));
            let popup = centered_rect(popup_width, 4, area);

            Clear.render(popup, buf);
            Paragraph::new(vec![
                Line::from(Span::raw(message)),
                Line::from(Span::styled(hint, dim_italic_style)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, red_bold_style)),
            )
            .render(popup, buf);
        }
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
