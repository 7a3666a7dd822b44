use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Props are built fresh each frame from `NavigationState` and `Effects`,
/// so components never hold on to app state between draws.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
