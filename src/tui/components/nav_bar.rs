//! # NavBar Component
//!
//! One button per section, in keyboard order. The active section's button is
//! highlighted; the hovered one gets a bright border.
//!
//! Button rects come from [`button_areas`], which the event loop also uses
//! for mouse hit testing, so the drawn buttons and the clickable regions
//! always agree.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::section::{ORDER, Section};
use crate::core::state::SectionSlot;
use crate::tui::component::Component;

/// Split the nav bar into one equal-width rect per section.
pub fn button_areas(area: Rect) -> Vec<(Section, Rect)> {
    let rects = Layout::horizontal(ORDER.iter().map(|_| Constraint::Fill(1))).split(area);
    ORDER.iter().copied().zip(rects.iter().copied()).collect()
}

/// Which section's button (if any) is under the given cell.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Section> {
    button_areas(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(section, _)| section)
}

pub struct NavBar<'a> {
    pub slots: &'a [SectionSlot],
    pub hovered: Option<Section>,
}

impl<'a> NavBar<'a> {
    pub fn new(slots: &'a [SectionSlot], hovered: Option<Section>) -> Self {
        Self { slots, hovered }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (section, rect) in button_areas(area) {
            let active = self
                .slots
                .iter()
                .any(|slot| slot.section == section && slot.active);
            let hovered = self.hovered == Some(section);

            let label_style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            let border_style = if hovered {
                Style::default().fg(Color::Yellow)
            } else if active {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let button = Paragraph::new(section.label())
                .style(label_style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(button, rect);
        }
    }
}
