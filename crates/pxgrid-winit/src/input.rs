//! Translates winit input events into core [`Msg`] values.

use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key as WKey, NamedKey};

use pxgrid_core::{
    messages::{Key, ModMask, Msg, PointerAction, PointerButton},
    Point,
};

pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Msg> {
    if event.state != ElementState::Pressed {
        return None;
    }

    let key = match &event.logical_key {
        WKey::Named(named) => match named {
            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,
            NamedKey::Escape => Key::Escape,
            NamedKey::Enter => Key::Enter,
            NamedKey::Space => Key::Space,
            NamedKey::Backspace => Key::Backspace,
            _ => return None,
        },
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
        _ => return None,
    };

    // The logical key already incorporates shift ('+' vs '='), which is all
    // the editor binds; other modifier combinations are not tracked.
    Some(Msg::KeyDown {
        key,
        modifiers: ModMask::NONE,
    })
}

/// Translate a button event at the last known cursor position (winit does
/// not attach a position to button events).
pub(crate) fn translate_button(
    btn_state: ElementState,
    button: MouseButton,
    pos: Point,
) -> Option<Msg> {
    let action = match btn_state {
        ElementState::Pressed => match button {
            MouseButton::Left => PointerAction::Press(PointerButton::Primary),
            MouseButton::Right => PointerAction::Press(PointerButton::Secondary),
            _ => return None,
        },
        ElementState::Released => PointerAction::Release,
    };
    Some(Msg::Pointer { action, pos })
}
