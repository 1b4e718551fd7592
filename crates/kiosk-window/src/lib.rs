//! kiosk-window: fixed-size winit window presented through a CPU framebuffer.
//!
//! Responsibilities:
//! - Create a non-resizable window and a softbuffer surface for it.
//! - Pace redraws at a fixed target rate and report frame deltas.
//! - Dispatch pointer, update and redraw callbacks to an [`EventHandler`].
//! - Capture the first callback error or panic, keep the window up for a grace
//!   period, then end the loop with that error.

use std::any::Any;
use std::fmt;
use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

mod pacing;

pub use pacing::FramePacer;
pub use winit::event::{ElementState, MouseButton};

#[derive(Clone, Debug)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// How long the window stays open after a fatal callback error.
    pub failure_grace: Duration,
}

/// Pixels of the frame being drawn, `0x00RRGGBB`, row-major.
pub struct Frame<'a> {
    pub pixels: &'a mut [u32],
    pub width: u32,
    pub height: u32,
}

pub struct WindowCtx<'a> {
    window: &'a Window,
    size: PhysicalSize<u32>,
    last_cursor_pos: [f32; 2],
    elwt: &'a EventLoopWindowTarget<()>,
}

impl<'a> WindowCtx<'a> {
    pub fn window(&self) -> &Window { self.window }
    pub fn size(&self) -> PhysicalSize<u32> { self.size }
    pub fn mouse_pos(&self) -> [f32; 2] { self.last_cursor_pos }
    pub fn request_redraw(&self) { self.window.request_redraw(); }
    /// Stop the event loop; `run` then returns `Ok(())`.
    pub fn exit(&self) { self.elwt.exit(); }
}

pub trait EventHandler {
    fn init(&mut self, _ctx: &mut WindowCtx) -> Result<()> { Ok(()) }
    fn on_mouse_move(&mut self, _ctx: &mut WindowCtx, _pos: [f32; 2]) -> Result<()> { Ok(()) }
    fn on_mouse_input(&mut self, _ctx: &mut WindowCtx, _state: ElementState, _button: MouseButton) -> Result<()> { Ok(()) }
    /// Advance time by `dt` seconds. Called once per frame, before `on_redraw`.
    fn on_update(&mut self, _ctx: &mut WindowCtx, _dt: f32) -> Result<()> { Ok(()) }
    fn on_redraw(&mut self, _ctx: &mut WindowCtx, _frame: Frame<'_>) -> Result<()> { Ok(()) }
    fn on_close_requested(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        ctx.exit();
        Ok(())
    }
}

pub struct KioskWindow {
    event_loop: EventLoop<()>,
    window: Rc<Window>,
    context: softbuffer::Context<Rc<Window>>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    settings: WindowSettings,
}

impl KioskWindow {
    pub fn new(settings: WindowSettings) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(settings.title.as_str())
            .with_inner_size(PhysicalSize::new(settings.width, settings.height))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = Rc::new(window);

        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create framebuffer context: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create framebuffer surface: {e}"))?;

        log::info!("window {}x{} at {} fps", settings.width, settings.height, settings.fps);
        Ok(Self { event_loop, window, context, surface, settings })
    }

    pub fn window(&self) -> &Window { &self.window }

    /// Run the event loop until the handler exits, the window is closed, or a
    /// callback fails. A failure is returned after the grace period elapses.
    pub fn run(self, mut handler: impl EventHandler + 'static) -> Result<()> {
        let Self { event_loop, window, context, mut surface, settings } = self;
        let mut pacer = FramePacer::new(settings.fps);
        let mut last_cursor_pos: [f32; 2] = [0.0, 0.0];
        let mut needs_init = true;
        let mut failure: Option<anyhow::Error> = None;
        let mut close_at: Option<Instant> = None;

        event_loop.run(|event, elwt| {
            if let Some(deadline) = close_at {
                // Failed: only wait out the grace period or an explicit close.
                match event {
                    Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => elwt.exit(),
                    Event::AboutToWait if Instant::now() >= deadline => elwt.exit(),
                    Event::AboutToWait => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    _ => {}
                }
                return;
            }

            let mut ctx = WindowCtx { window: &window, size: window.inner_size(), last_cursor_pos, elwt };
            match event {
                Event::Resumed if needs_init => {
                    needs_init = false;
                    capture(&mut failure, || handler.init(&mut ctx));
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => {
                        capture(&mut failure, || handler.on_close_requested(&mut ctx));
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        last_cursor_pos = [position.x as f32, position.y as f32];
                        ctx.last_cursor_pos = last_cursor_pos;
                        capture(&mut failure, || handler.on_mouse_move(&mut ctx, last_cursor_pos));
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        capture(&mut failure, || handler.on_mouse_input(&mut ctx, state, button));
                    }
                    WindowEvent::RedrawRequested => {
                        let dt = pacer.tick(Instant::now());
                        capture(&mut failure, || handler.on_update(&mut ctx, dt));
                        if failure.is_none() {
                            let size = ctx.size;
                            capture(&mut failure, || {
                                present(&mut surface, size, |frame| handler.on_redraw(&mut ctx, frame))
                            });
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    let now = Instant::now();
                    if pacer.due(now) {
                        window.request_redraw();
                        pacer.schedule_next(now);
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
                }
                _ => {}
            }

            if let Some(err) = &failure {
                let grace = settings.failure_grace;
                report_failure(err, grace);
                let deadline = Instant::now() + grace;
                close_at = Some(deadline);
                elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
        })?;

        drop(context);
        into_result(failure)
    }
}

/// Context on the error [`KioskWindow::run`] returns after a loop failure.
/// Its full diagnostics went to stderr when the failure was captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLoopFailed;

impl fmt::Display for FrameLoopFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("frame loop failed")
    }
}

fn report_failure(err: &anyhow::Error, grace: Duration) {
    eprintln!("{err:?}");
    log::error!("frame loop failed: {err:#}; closing in {:.1}s", grace.as_secs_f32());
}

fn into_result(failure: Option<anyhow::Error>) -> Result<()> {
    match failure {
        Some(err) => Err(err.context(FrameLoopFailed)),
        None => Ok(()),
    }
}

/// Run one callback, turning a panic into an error. Only the first failure is
/// kept; later callbacks are skipped once one has failed.
fn capture(failure: &mut Option<anyhow::Error>, f: impl FnOnce() -> Result<()>) {
    if failure.is_some() {
        return;
    }
    let outcome = panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(anyhow!("panic in frame loop: {}", panic_message(payload.as_ref()))));
    if let Err(err) = outcome {
        *failure = Some(err);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn present(
    surface: &mut softbuffer::Surface<Rc<Window>, Rc<Window>>,
    size: PhysicalSize<u32>,
    draw: impl FnOnce(Frame<'_>) -> Result<()>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow!("failed to resize framebuffer: {e}"))?;
    let mut buffer = surface
        .buffer_mut()
        .map_err(|e| anyhow!("failed to map framebuffer: {e}"))?;
    draw(Frame { pixels: &mut buffer[..], width: size.width, height: size.height })?;
    buffer
        .present()
        .map_err(|e| anyhow!("failed to present frame: {e}"))?;
    Ok(())
}
