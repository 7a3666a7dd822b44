use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    // Keyboard navigation (mapped to core actions)
    Previous,
    Next,
    Select,
    Reset,
    /// Number keys jump straight to a section index.
    Jump(usize),
    // Pointer events, resolved against the nav bar by hit testing
    MouseClick(u16, u16),
    MouseMove(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a raw crossterm event to a `TuiEvent`. Unhandled input maps to `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Moved => Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row)),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Left | KeyCode::Char('a' | 'A')) => Some(TuiEvent::Previous),
        (_, KeyCode::Right | KeyCode::Char('d' | 'D')) => Some(TuiEvent::Next),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => Some(TuiEvent::Select),
        (_, KeyCode::Esc) => Some(TuiEvent::Reset),
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Jump(c as usize - '1' as usize)),
        _ => None,
    }
}
