//! # TitleBar Component
//!
//! Top line showing the page title. This is the terminal's stand-in for the
//! document title.
//!
//! While a glitch is running the corrupted text is shown in red instead; the
//! caller decides which text to pass.

use crate::core::profile::Rgb;
use crate::tui::component::Component;
use crate::tui::ui::rgb;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

/// Top title line.
///
/// # Props
///
/// - `title`: text to show (page title, or its glitched copy)
/// - `glitched`: render in the glitch colour
pub struct TitleBar {
    pub title: String,
    pub glitched: bool,
}

impl TitleBar {
    pub fn new(title: String, glitched: bool) -> Self {
        Self { title, glitched }
    }

    fn style(&self) -> Style {
        let color = if self.glitched { Rgb::RED } else { Rgb::YELLOW };
        Style::default().fg(rgb(color)).add_modifier(Modifier::BOLD)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.title.as_str())
            .style(self.style())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_title_bar_shows_title() {
        let mut title_bar = TitleBar::new("TMNT Portfolio - Raphael".to_string(), false);
        let buffer = render(&mut title_bar);
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("TMNT Portfolio - Raphael"));
    }

    #[test]
    fn test_glitched_title_is_red() {
        let mut title_bar = TitleBar::new("T!NT".to_string(), true);
        let buffer = render(&mut title_bar);
        let cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "!")
            .unwrap();
        assert_eq!(cell.fg, rgb(Rgb::RED));
    }

    #[test]
    fn test_normal_title_is_yellow() {
        let mut title_bar = TitleBar::new("TMNT".to_string(), false);
        let buffer = render(&mut title_bar);
        let cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "M")
            .unwrap();
        assert_eq!(cell.fg, rgb(Rgb::YELLOW));
    }
}
