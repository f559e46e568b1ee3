use crate::input::InputEvent;

use super::ctx::{EventCtx, FrameCtx};

/// Tells the runtime whether to keep going after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The application as seen by the runtime.
///
/// Callbacks never re-enter: each input event and each frame is dispatched
/// synchronously and runs to completion before the next one is delivered.
pub trait App {
    /// Called for each translated input event.
    fn on_input(&mut self, ctx: &EventCtx, event: &InputEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
