use std::time::Duration;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::effects::{Effects, FlashOverlay};
use crate::core::profile::{self, Rgb};
use crate::core::section::Section;
use crate::core::state::NavigationState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, NavBar, ProfileView, QuotePopup, TitleBar, nav_bar};

/// Terminals can't do translucency, so the overlay is blended into each
/// cell's background. 0.1 opacity is invisible on most themes; scale it up.
const FLASH_GAIN: f32 = 4.0;

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

/// Screen regions, top to bottom.
pub struct Areas {
    pub title: Rect,
    pub nav: Rect,
    pub main: Rect,
    pub footer: Rect,
}

pub fn layout(frame_area: Rect) -> Areas {
    use Constraint::{Length, Min};
    let [title, nav, main, footer] =
        Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(frame_area);
    Areas {
        title,
        nav,
        main,
        footer,
    }
}

/// Section whose nav button is under the given screen cell.
pub fn hit_test_nav(frame_area: Rect, column: u16, row: u16) -> Option<Section> {
    nav_bar::hit_test(layout(frame_area).nav, column, row)
}

pub fn draw_ui(
    frame: &mut Frame,
    nav: &NavigationState,
    effects: &Effects,
    tui: &TuiState,
    now: Duration,
) {
    let areas = layout(frame.area());

    // Title bar (glitched copy wins while it lasts)
    let mut title_bar = match effects.glitch_title() {
        Some(glitched) => TitleBar::new(glitched.to_string(), true),
        None => TitleBar::new(nav.title().to_string(), false),
    };
    title_bar.render(frame, areas.title);

    NavBar::new(nav.slots(), tui.hovered).render(frame, areas.nav);

    // Entrance animation only applies to the section it was started for
    let entrance = effects
        .entrance()
        .filter(|e| e.section == nav.current());
    let fade = entrance.map(|e| e.fade_progress(now)).unwrap_or(1.0);

    let current = nav.current();
    match profile::profile(current) {
        Some(p) => {
            let fills = match entrance {
                Some(e) => (0..p.stats.len()).map(|i| e.stat_fill(now, i)).collect(),
                None => Vec::new(),
            };
            ProfileView::new(p, fade, fills).render(frame, areas.main);
        }
        None => LandingPage::new(now, fade < 0.5).render(frame, areas.main),
    }

    let footer = Paragraph::new(Line::from(
        " ←/a prev  →/d next  1-5 jump  Enter quote  Esc home  q quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, areas.footer);

    if let Some(quote) = effects.quote() {
        QuotePopup::new(&quote.text, quote.appear_progress(now), quote.is_exiting(now))
            .render(frame, frame.area());
    }

    let area = frame.area();
    apply_flash(frame.buffer_mut(), area, effects.overlays(), now);
}

/// Blend every live flash overlay into the buffer's backgrounds.
fn apply_flash(buf: &mut Buffer, area: Rect, overlays: &[FlashOverlay], now: Duration) {
    for overlay in overlays {
        let alpha = (overlay.opacity(now) * FLASH_GAIN).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            continue;
        }
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &mut buf[(x, y)];
                let base = match cell.bg {
                    Color::Rgb(r, g, b) => Rgb(r, g, b),
                    _ => Rgb(0, 0, 0),
                };
                cell.set_bg(rgb(blend(base, overlay.color, alpha)));
            }
        }
    }
}

fn blend(base: Rgb, over: Rgb, alpha: f32) -> Rgb {
    let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - alpha) + f32::from(b) * alpha).round() as u8;
    Rgb(mix(base.0, over.0), mix(base.1, over.1), mix(base.2, over.2))
}
