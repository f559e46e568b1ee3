use rasterboard_core::{Canvas, PixelPoint, Rgb, ShapeMode, Sketch};
use rasterboard_engine::core::{App, AppControl, EventCtx, FrameCtx};
use rasterboard_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use rasterboard_engine::render::PointRenderer;

use crate::batch::PointBatch;
use crate::palette::PALETTE;

/// The plotting pad: owns the whole interaction context.
///
/// Current mode, current color, pending clicks, and the retained point batch
/// all live here — there are no ambient globals. Input handlers run to
/// completion before the next event is delivered, so no guarding is needed.
pub struct PadApp {
    sketch: Sketch,
    color: Rgb,
    batch: PointBatch,
    renderer: PointRenderer,
}

impl PadApp {
    pub fn new() -> Self {
        Self {
            sketch: Sketch::new(),
            color: Rgb::black(),
            batch: PointBatch::new(),
            renderer: PointRenderer::new(),
        }
    }

    fn on_click(&mut self, ctx: &EventCtx, x: f32, y: f32) {
        let canvas = match Canvas::new(ctx.surface_width, ctx.surface_height) {
            Ok(c) => c,
            Err(e) => {
                // Only reachable while minimized; nothing can be plotted.
                log::warn!("ignoring click: {e}");
                return;
            }
        };

        let p = PixelPoint::new(x as i32, y as i32);
        log::debug!("click at {},{}", p.x, p.y);
        self.sketch.click(p, canvas, self.color, &mut self.batch);
    }

    fn on_key(&mut self, key: Key) -> AppControl {
        if let Some(slot) = key.digit() {
            self.color = PALETTE[slot as usize];
            // The at-rest marker always shows the active color.
            self.batch.set_marker_color(self.color);
            return AppControl::Continue;
        }

        match key {
            Key::R => {
                log::debug!("mode: segment");
                self.sketch.set_mode(ShapeMode::Segment, &mut self.batch);
            }
            Key::T => {
                log::debug!("mode: triangle");
                self.sketch.set_mode(ShapeMode::Triangle, &mut self.batch);
            }
            Key::Escape => return AppControl::Exit,
            _ => {}
        }

        AppControl::Continue
    }
}

impl App for PadApp {
    fn on_input(&mut self, ctx: &EventCtx, event: &InputEvent) -> AppControl {
        match event {
            InputEvent::PointerButton(e)
                if e.button == MouseButton::Left && e.state == MouseButtonState::Pressed =>
            {
                self.on_click(ctx, e.x, e.y);
                AppControl::Continue
            }

            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
            } => self.on_key(*key),

            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (renderer, batch) = (&mut self.renderer, &self.batch);
        ctx.render(Rgb::white(), |rctx, target| {
            renderer.render(rctx, target, batch.vertices());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EventCtx {
        EventCtx {
            surface_width: 800,
            surface_height: 600,
        }
    }

    fn click(app: &mut PadApp, x: f32, y: f32) {
        app.on_input(
            &ctx(),
            &InputEvent::PointerButton(
                rasterboard_engine::input::PointerButtonEvent {
                    button: MouseButton::Left,
                    state: MouseButtonState::Pressed,
                    x,
                    y,
                },
            ),
        );
    }

    fn press(app: &mut PadApp, key: Key) -> AppControl {
        app.on_input(
            &ctx(),
            &InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
            },
        )
    }

    #[test]
    fn two_clicks_in_segment_mode_plot_a_line() {
        let mut app = PadApp::new();
        press(&mut app, Key::R);
        click(&mut app, 10.0, 10.0);
        assert_eq!(app.batch.vertices().len(), 1); // marker only

        click(&mut app, 13.0, 13.0);
        // Marker + four diagonal pixels.
        assert_eq!(app.batch.vertices().len(), 5);
    }

    #[test]
    fn triangle_mode_needs_three_clicks() {
        let mut app = PadApp::new();
        press(&mut app, Key::T);
        click(&mut app, 0.0, 0.0);
        click(&mut app, 10.0, 0.0);
        assert_eq!(app.batch.vertices().len(), 1);

        click(&mut app, 0.0, 10.0);
        // Marker + three 11-pixel edges.
        assert_eq!(app.batch.vertices().len(), 34);
    }

    #[test]
    fn digit_selects_palette_color_for_the_next_shape() {
        let mut app = PadApp::new();
        press(&mut app, Key::R);
        press(&mut app, Key::Digit1);

        click(&mut app, 0.0, 0.0);
        click(&mut app, 2.0, 0.0);

        let plotted = &app.batch.vertices()[1..];
        assert!(plotted.iter().all(|v| v.color == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn clicks_before_any_mode_plot_nothing() {
        let mut app = PadApp::new();
        for i in 0..4 {
            click(&mut app, i as f32, i as f32);
        }
        assert_eq!(app.batch.vertices().len(), 1);
    }

    #[test]
    fn right_button_is_ignored() {
        let mut app = PadApp::new();
        press(&mut app, Key::R);
        app.on_input(
            &ctx(),
            &InputEvent::PointerButton(
                rasterboard_engine::input::PointerButtonEvent {
                    button: MouseButton::Right,
                    state: MouseButtonState::Pressed,
                    x: 1.0,
                    y: 1.0,
                },
            ),
        );
        assert!(app.sketch.pending().is_empty());
    }

    #[test]
    fn escape_exits() {
        let mut app = PadApp::new();
        assert_eq!(press(&mut app, Key::Escape), AppControl::Exit);
    }

    #[test]
    fn mode_switch_mid_shape_starts_over() {
        let mut app = PadApp::new();
        press(&mut app, Key::R);
        click(&mut app, 5.0, 5.0);

        press(&mut app, Key::T);
        assert!(app.sketch.pending().is_empty());
        assert_eq!(app.batch.vertices().len(), 1);
    }
}
