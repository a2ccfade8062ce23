//! Winit graphical backend for dotpad.
//!
//! Renders the editor surface as colored glyph tiles in a native window
//! using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel presentation
//! - [`fontdue`] for lightweight font rasterization
//!
//! The driver tracks the cursor position itself so that button presses
//! carry a real grid position — painting happens on press, not only on
//! move.

mod input;
mod renderer;

use std::num::NonZeroU32;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use pxgrid_core::{AppRunner, EventLoopDriver, Msg, Point, PointerAction};

use renderer::SurfaceRenderer;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
pub struct WinitConfig {
    /// Window title.
    pub title: String,
    /// Font bytes (TTF/OTF). Without a font, cell backgrounds still render
    /// but text does not.
    pub font_data: Option<Vec<u8>>,
    /// Font size in pixels; drives the cell size.
    pub font_size: f32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "dotpad".into(),
            font_data: None,
            font_size: 16.0,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver. Owns the main-thread event loop and feeds
/// an [`AppRunner`].
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }
}

impl EventLoopDriver for WinitDriver {
    fn run(self, runner: AppRunner) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp {
            config: self.config,
            runner,
            state: None,
        };
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WinitApp — ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    runner: AppRunner,
    state: Option<WinitState>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: SurfaceRenderer,
    pixel_width: u32,
    pixel_height: u32,
    /// Last cursor position in surface (grid) coordinates.
    cursor: Point,
}

impl WinitApp {
    fn render(&mut self) {
        if self.runner.should_quit() {
            return;
        }
        let patch = self.runner.draw_patch();

        let Some(state) = self.state.as_mut() else { return };
        if let Some(patch) = patch {
            state.renderer.apply_patch(&patch);
        }

        let (width, height) = (state.pixel_width, state.pixel_height);
        if width == 0 || height == 0 {
            return;
        }
        let Ok(mut buf) = state.surface.buffer_mut() else { return };
        state
            .renderer
            .blit_to_buffer(&mut buf, width as usize, height as usize);
        buf.present().ok();
    }

    fn dispatch(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        self.runner.handle_msg(msg);
        if self.runner.should_quit() {
            event_loop.exit();
            return;
        }
        self.render();
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let (cols, rows) = self.runner.size();
        let renderer = SurfaceRenderer::new(
            self.config.font_data.as_deref(),
            self.config.font_size,
            cols as usize,
            rows as usize,
        );

        let pixel_w = renderer.pixel_width() as u32;
        let pixel_h = renderer.pixel_height() as u32;
        log::debug!("window surface {cols}x{rows} cells, {pixel_w}x{pixel_h} px");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(pixel_w, pixel_h))
            .with_resizable(true);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("failed to create window"),
        );
        let context =
            softbuffer::Context::new(window.clone()).expect("failed to create softbuffer context");
        let mut surface = softbuffer::Surface::new(&context, window.clone())
            .expect("failed to create softbuffer surface");
        surface
            .resize(
                NonZeroU32::new(pixel_w).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(pixel_h).unwrap_or(NonZeroU32::MIN),
            )
            .ok();

        self.state = Some(WinitState {
            window,
            surface,
            renderer,
            pixel_width: pixel_w,
            pixel_height: pixel_h,
            cursor: Point::ZERO,
        });

        self.runner.init();
        self.render();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.runner.handle_msg(Msg::Quit);
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    state.pixel_width = width;
                    state.pixel_height = height;
                    state
                        .surface
                        .resize(
                            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
                        )
                        .ok();
                }
                self.render();
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event) {
                    self.dispatch(msg, event_loop);
                }
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let cursor = self.state.as_ref().map(|s| s.cursor).unwrap_or(Point::ZERO);
                if let Some(msg) = input::translate_button(btn_state, button, cursor) {
                    self.dispatch(msg, event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let Some(state) = self.state.as_mut() else { return };
                let (cw, ch) = state.renderer.cell_size();
                let pos = Point::new(
                    (position.x as i32) / (cw as i32).max(1),
                    (position.y as i32) / (ch as i32).max(1),
                );
                if pos == state.cursor {
                    return; // still inside the same cell
                }
                state.cursor = pos;
                self.dispatch(
                    Msg::Pointer {
                        action: PointerAction::Move,
                        pos,
                    },
                    event_loop,
                );
            }

            WindowEvent::CursorLeft { .. } => {
                // Leaving the window ends any drag, mirroring a release.
                self.dispatch(
                    Msg::Pointer {
                        action: PointerAction::Release,
                        pos: self.state.as_ref().map(|s| s.cursor).unwrap_or(Point::ZERO),
                    },
                    event_loop,
                );
            }

            _ => {}
        }
    }
}
