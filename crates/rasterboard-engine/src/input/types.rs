/// Keyboard key identifier.
///
/// Covers the keys an interactive canvas cares about: letters for commands,
/// digits for palette slots, and a few control keys. Anything else arrives as
/// `Key::Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    Unknown(u32),
}

impl Key {
    /// Palette slot for digit keys: `Digit0..Digit9` map to `0..9`.
    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Digit0 => Some(0),
            Key::Digit1 => Some(1),
            Key::Digit2 => Some(2),
            Key::Digit3 => Some(3),
            Key::Digit4 => Some(4),
            Key::Digit5 => Some(5),
            Key::Digit6 => Some(6),
            Key::Digit7 => Some(7),
            Key::Digit8 => Some(8),
            Key::Digit9 => Some(9),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in physical surface pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are included so event processing does not depend on an
/// external "current pointer position".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is a key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_palette_slots() {
        assert_eq!(Key::Digit0.digit(), Some(0));
        assert_eq!(Key::Digit9.digit(), Some(9));
    }

    #[test]
    fn non_digit_keys_have_no_slot() {
        assert_eq!(Key::R.digit(), None);
        assert_eq!(Key::Escape.digit(), None);
        assert_eq!(Key::Unknown(42).digit(), None);
    }
}
