//! # Landing Page Component
//!
//! Headline, the turtle roster with bobbing sprites, and the key hints.
//!

use std::f32::consts::PI;
use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::profile::{self, LANDING_HEADLINE, LANDING_SUBTITLE};
use crate::core::section::ORDER;
use crate::tui::component::Component;
use crate::tui::ui::rgb;

const SPRITE: [&str; 3] = [r" .---. ", r"( o o )", r" `---' "];
const SPRITE_WIDTH: u16 = 9;
/// One bob cycle.
const FLOAT_PERIOD: f32 = 3.0;
/// Each sprite starts this much later than the previous one.
const FLOAT_DELAY: f32 = 0.5;

/// Rows a sprite is lifted by at `elapsed`: 1 near the top of its cycle,
/// else 0. Sprites sit still until their start delay has passed.
pub fn float_offset(elapsed: Duration, index: usize) -> u16 {
    let t = elapsed.as_secs_f32() - index as f32 * FLOAT_DELAY;
    if t < 0.0 {
        return 0;
    }
    let phase = (t / FLOAT_PERIOD).fract();
    if (phase * PI).sin() > 0.5 { 1 } else { 0 }
}

pub struct LandingPage {
    elapsed: Duration,
    dimmed: bool,
}

impl LandingPage {
    pub fn new(elapsed: Duration, dimmed: bool) -> Self {
        Self { elapsed, dimmed }
    }

    fn render_roster(&self, frame: &mut Frame, area: Rect) {
        let turtles: Vec<_> = ORDER.iter().filter_map(|&s| profile::profile(s)).collect();
        let columns = Layout::horizontal(turtles.iter().map(|_| Constraint::Length(SPRITE_WIDTH + 4)))
            .flex(Flex::Center)
            .split(area);

        for (i, (turtle, column)) in turtles.iter().zip(columns.iter()).enumerate() {
            let color = rgb(turtle.color);
            let mut lines: Vec<Line> = Vec::new();
            // Headroom for the bob
            if float_offset(self.elapsed, i) == 0 {
                lines.push(Line::from(""));
            }
            for row in SPRITE {
                lines.push(Line::from(Span::styled(row, Style::default().fg(color))));
            }
            lines.push(Line::from(Span::styled(
                turtle.name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *column);
        }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut headline = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        if self.dimmed {
            headline = headline.add_modifier(Modifier::DIM);
        }

        let header = vec![
            Line::from(Span::styled(LANDING_HEADLINE, headline)),
            Line::from(Span::styled(
                LANDING_SUBTITLE,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let hints = Line::from(Span::styled(
            "← → browse   Enter quote   Esc home   click a tab",
            Style::default().fg(Color::DarkGray),
        ));

        let roster_height = SPRITE.len() as u16 + 2;
        let [header_area, _, roster_area, _, hint_area] = Layout::vertical([
            Constraint::Length(header.len() as u16),
            Constraint::Length(1),
            Constraint::Length(roster_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Paragraph::new(header).alignment(Alignment::Center),
            header_area,
        );
        self.render_roster(frame, roster_area);
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            hint_area,
        );
    }
}
