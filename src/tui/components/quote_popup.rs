//! # QuotePopup Component
//!
//! Centered overlay showing the current turtle's quote. Scales in when it
//! appears and dims while closing.
//!
//! Only one popup exists at a time; `Effects` enforces that, this component
//! just draws whatever it is handed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Horizontal padding plus borders.
const CHROME_WIDTH: u16 = 6;

pub struct QuotePopup<'a> {
    pub text: &'a str,
    /// Appear transition, 0.0 → 1.0.
    pub appear: f32,
    pub exiting: bool,
}

impl<'a> QuotePopup<'a> {
    pub fn new(text: &'a str, appear: f32, exiting: bool) -> Self {
        Self {
            text,
            appear,
            exiting,
        }
    }

    /// Popup width: fits the quote, capped at 80% of the screen, and scaled
    /// from half size up while appearing.
    pub fn width(&self, area: Rect) -> u16 {
        let quoted = u16::try_from(self.text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2 + CHROME_WIDTH);
        let full = quoted.min(area.width / 5 * 4).max(CHROME_WIDTH + 1);
        let scale = 0.5 + 0.5 * self.appear.clamp(0.0, 1.0);
        ((f32::from(full) * scale).round() as u16).min(area.width)
    }
}

impl Component for QuotePopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = self.width(area);

        let mut style = Style::default()
            .fg(Color::Green)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD);
        if self.exiting {
            style = style.add_modifier(Modifier::DIM);
        }

        let paragraph = Paragraph::new(format!("\"{}\"", self.text))
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(style)
                    .padding(Padding::horizontal(2)),
            );
        let height = u16::try_from(paragraph.line_count(width))
            .unwrap_or(u16::MAX)
            .min(area.height);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}
