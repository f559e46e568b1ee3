use std::collections::HashSet;

use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Tracks "is down" information and the pointer position. The runtime needs
/// the position because button events from the window system do not carry
/// coordinates of their own.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in physical surface pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets so keys and buttons
                    // cannot stay stuck after focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
            }) => {
                self.pointer_pos = Some((*x, *y));
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_position_tracks_moves_and_leaves() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 20.0 }));
        assert_eq!(s.pointer_pos, Some((10.0, 20.0)));

        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn keys_toggle_with_press_and_release() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Key {
            key: Key::R,
            state: KeyState::Pressed,
            repeat: false,
        });
        assert!(s.key_down(Key::R));

        s.apply_event(&InputEvent::Key {
            key: Key::R,
            state: KeyState::Released,
            repeat: false,
        });
        assert!(!s.key_down(Key::R));
    }

    #[test]
    fn focus_loss_clears_held_state() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Key {
            key: Key::T,
            state: KeyState::Pressed,
            repeat: false,
        });
        s.apply_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 1.0,
            y: 2.0,
        }));

        s.apply_event(&InputEvent::Focused(false));
        assert!(!s.key_down(Key::T));
        assert!(!s.button_down(MouseButton::Left));
    }

    #[test]
    fn button_press_updates_pointer_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 33.0,
            y: 44.0,
        }));
        assert_eq!(s.pointer_pos, Some((33.0, 44.0)));
    }
}
