//! # ProfileView Component
//!
//! A turtle's page: name, tagline, weapon, bio and animated stat bars.
//!
//! Fade and bar fill come from the current entrance animation; once it ends
//! the caller passes full values.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap};

use crate::core::profile::Profile;
use crate::tui::component::Component;
use crate::tui::ui::rgb;

pub struct ProfileView {
    pub profile: &'static Profile,
    /// Entrance fade, 0.0 → 1.0.
    pub fade: f32,
    /// Per-stat fill, 0.0 → 1.0. Missing entries count as full.
    pub fills: Vec<f32>,
}

impl ProfileView {
    pub fn new(profile: &'static Profile, fade: f32, fills: Vec<f32>) -> Self {
        Self {
            profile,
            fade,
            fills,
        }
    }

    fn base_style(&self) -> Style {
        let style = Style::default().fg(rgb(self.profile.color));
        if self.fade < 0.5 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Component for ProfileView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = self.base_style();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(Span::styled(
                format!(" {} ", self.profile.name),
                style.add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = vec![
            Line::from(Span::styled(self.profile.tagline, style.add_modifier(Modifier::ITALIC))),
            Line::from(vec![
                Span::styled("Weapon: ", Style::default().fg(Color::DarkGray)),
                Span::styled(self.profile.weapon, style),
            ]),
            Line::from(""),
            Line::from(self.profile.bio),
        ];

        let stats = self.profile.stats;
        let mut constraints = vec![Constraint::Length(header.len() as u16 + 1), Constraint::Length(1)];
        constraints.extend(stats.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(
            Paragraph::new(header).wrap(Wrap { trim: true }),
            rows[0],
        );

        for (i, stat) in stats.iter().enumerate() {
            let fill = match self.fills.get(i).copied() {
                Some(f) if f.is_finite() => f.clamp(0.0, 1.0),
                _ => 1.0,
            };
            let ratio = (f64::from(stat.value) / 100.0 * f64::from(fill)).clamp(0.0, 1.0);
            let [label_area, bar_area] =
                Layout::horizontal([Constraint::Length(15), Constraint::Min(0)]).areas(rows[i + 2]);
            frame.render_widget(
                Paragraph::new(stat.name).style(Style::default().fg(Color::Gray)),
                label_area,
            );
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(rgb(self.profile.color)).bg(Color::Black))
                    .ratio(ratio)
                    .label(format!("{}", stat.value)),
                bar_area,
            );
        }
    }
}
