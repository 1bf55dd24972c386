//! Drives a [`ScrollElement`] from crossterm input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};

use crate::element::ScrollElement;

/// Cells scrolled per wheel notch or arrow key.
const LINE: f64 = 1.0;

/// Terminal space the host keeps for itself around the scroll viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome {
    pub columns: u16,
    pub rows: u16,
}

impl Chrome {
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// Apply one terminal event to an element that fills the whole terminal.
///
/// Returns true if the event scrolled or resized the element.
pub fn apply_event(element: &ScrollElement, event: &Event) -> bool {
    apply_event_with(element, event, Chrome::default())
}

/// Apply one terminal event, sizing the viewport as the terminal minus `chrome`.
pub fn apply_event_with(element: &ScrollElement, event: &Event, chrome: Chrome) -> bool {
    match event {
        Event::Key(key) => apply_key(element, key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => element.scroll_by(0.0, LINE),
            MouseEventKind::ScrollUp => element.scroll_by(0.0, -LINE),
            MouseEventKind::ScrollRight => element.scroll_by(LINE, 0.0),
            MouseEventKind::ScrollLeft => element.scroll_by(-LINE, 0.0),
            _ => false,
        },
        Event::Resize(width, height) => {
            let before = element.viewport();
            element.resize(
                f64::from(width.saturating_sub(chrome.columns)),
                f64::from(height.saturating_sub(chrome.rows)),
            );
            before != element.viewport()
        }
        _ => false,
    }
}

fn apply_key(element: &ScrollElement, key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    let (_, height) = element.viewport();
    let page = (height - LINE).max(LINE);

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => element.scroll_by(0.0, LINE),
        KeyCode::Up | KeyCode::Char('k') => element.scroll_by(0.0, -LINE),
        KeyCode::Right | KeyCode::Char('l') => element.scroll_by(LINE, 0.0),
        KeyCode::Left | KeyCode::Char('h') => element.scroll_by(-LINE, 0.0),
        KeyCode::PageDown => element.scroll_by(0.0, page),
        KeyCode::PageUp => element.scroll_by(0.0, -page),
        KeyCode::Home => element.scroll_to_top(),
        KeyCode::End => element.scroll_to_bottom(),
        _ => false,
    }
}
