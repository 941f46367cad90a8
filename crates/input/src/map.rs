//! Mapping from terminal events to sandbox input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, InputEvent, ViewLayout, INVENTORY_SIZE};

/// Map a key press to a discrete event (quit, slot select, grid toggle).
///
/// Movement keys return `None`; they are tracked as held keys instead.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as u8 - b'1';
            ((slot as usize) < INVENTORY_SIZE).then_some(InputEvent::SelectSlot(slot))
        }
        KeyCode::Char('g') | KeyCode::Char('G') => Some(InputEvent::ToggleGrid),
        _ => None,
    }
}

/// Movement direction bound to a key, if any.
pub fn movement_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Map a mouse button press to a click at the playfield pixel under the pointer.
pub fn map_mouse(mouse: MouseEvent, layout: &ViewLayout) -> Option<InputEvent> {
    let (x, y) = layout.cell_to_pixel(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PrimaryClick { x, y }),
        MouseEventKind::Down(MouseButton::Right) => Some(InputEvent::SecondaryClick { x, y }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
