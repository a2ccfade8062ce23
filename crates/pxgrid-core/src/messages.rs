//! Input messages: [`Msg`], [`Key`], [`PointerAction`], [`ModMask`].

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Backspace,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// ModMask
// ---------------------------------------------------------------------------

/// Bitmask of modifier keys held during an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CTRL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    /// Whether this mask contains all bits of `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for ModMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

/// A pointer (mouse or touch) button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// Left mouse button, or a touch contact.
    Primary,
    Secondary,
}

/// A pointer action. `Release` is delivered regardless of position so drag
/// latches always clear, even when the pointer left the area it pressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerAction {
    Press(PointerButton),
    Release,
    Move,
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// An input message delivered to the application model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    KeyDown { key: Key, modifiers: ModMask },
    /// A pointer event at a surface position.
    Pointer { action: PointerAction, pos: Point },
    /// The window was resized (surface dimensions in cells).
    Screen { width: i32, height: i32 },
    /// A status notice, typically the result of a command effect.
    Notice(String),
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: a `KeyDown` with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: ModMask::NONE,
        }
    }

    /// Convenience: a primary-button press at `pos`.
    pub fn press(pos: Point) -> Self {
        Self::Pointer {
            action: PointerAction::Press(PointerButton::Primary),
            pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_mask_ops() {
        let m = ModMask::SHIFT | ModMask::CTRL;
        assert!(m.contains(ModMask::SHIFT));
        assert!(m.contains(ModMask::CTRL));
        assert!(!m.contains(ModMask::ALT));
        assert!(m.contains(ModMask::NONE));
    }

    #[test]
    fn msg_helpers() {
        assert_eq!(
            Msg::key(Key::Char('d')),
            Msg::KeyDown {
                key: Key::Char('d'),
                modifiers: ModMask::NONE
            }
        );
        assert_eq!(
            Msg::press(Point::new(3, 4)),
            Msg::Pointer {
                action: PointerAction::Press(PointerButton::Primary),
                pos: Point::new(3, 4)
            }
        );
    }
}
