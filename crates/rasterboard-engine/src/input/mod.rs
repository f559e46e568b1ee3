//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates window-system events into [`InputEvent`]s and
//! dispatches each one synchronously to the application.
//!
//! Positions are physical surface pixels, so pointer coordinates agree with
//! the drawable extent reported to the application.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
