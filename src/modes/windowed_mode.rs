use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use std::{num::NonZeroU32, time::Instant};

use crate::{
    data::{
        error::{AppError, AppResult},
        Command, Program, RefreshRateMode, CAP_MILLI_HZ,
    },
    math::Point,
};

type WindowSurface = Surface<&'static Window, &'static Window>;

struct WindowState {
    pub prog: Program,
    pub window: Option<&'static Window>,
    pub surface: Option<WindowSurface>,
    pub final_buffer_size: PhysicalSize<u32>,
    pub cursor: PhysicalPosition<f64>,
    pub next_frame: Instant,
    pub error: Option<AppError>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // The window is leaked into a static reference for the
        // surface, so it must only ever be created once.
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let p = cursor_to_canvas(self.cursor, self.prog.scale());
                self.prog.push_command(Command::Click(p));
            }

            // The canvas keeps its startup size; only the surface follows.
            WindowEvent::Resized(size) => {
                let Some(surface) = self.surface.as_mut() else {
                    log::warn!("Unable to resize the surface: none was created");
                    return;
                };

                if let Err(e) = Self::resize_surface(surface, size.width, size.height) {
                    log::warn!("Failed to resize the surface: {e}");
                    return;
                }

                self.final_buffer_size = size;
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) => self.prog.push_command(Command::Close),

                    Key::Character("r") => self.prog.push_command(Command::Regenerate),

                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                if self.prog.frame() {
                    event_loop.exit();
                    return;
                }

                if let Err(e) = self.present() {
                    log::warn!("Failing to present buffers to the window: {e}");
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window else {
            return;
        };

        let now = Instant::now();

        if now >= self.next_frame {
            window.request_redraw();

            let rate = self.prog.refresh_rate();
            self.next_frame += rate;

            // Don't try to catch up after a stall.
            if self.next_frame < now {
                self.next_frame = now + rate;
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

impl WindowState {
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> AppResult<()> {
        let scale = self.prog.scale() as u32;
        let (w, h) = self.prog.config().size;
        let win_size = PhysicalSize::<u32>::new(w as u32 * scale, h as u32 * scale);

        let window_attributes = Window::default_attributes()
            .with_title("orbitswap")
            .with_inner_size(win_size)
            .with_resizable(false);

        let window: &'static Window =
            Box::leak(Box::new(event_loop.create_window(window_attributes)?));
        self.window = Some(window);

        // Sized to the viewport once, at startup.
        let size = window.inner_size();
        self.final_buffer_size = size;
        self.prog.fit_canvas(
            (size.width / scale) as usize,
            (size.height / scale) as usize,
        );

        let context = Context::new(window)?;
        let mut surface = Surface::new(&context, window)?;
        Self::resize_surface(&mut surface, size.width, size.height)?;
        self.surface = Some(surface);

        // Lock the size on window managers that ignore `resizable`.
        window.set_min_inner_size(Some(win_size));
        window.set_max_inner_size(Some(win_size));

        if self.prog.get_rr_mode() != RefreshRateMode::Specified {
            Self::check_refresh_rate(window, &mut self.prog);
        }

        self.next_frame = Instant::now();
        window.request_redraw();

        Ok(())
    }

    fn resize_surface(surface: &mut WindowSurface, w: u32, h: u32) -> AppResult<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
            return Err(AppError::ZeroSize);
        };

        surface.resize(w, h)?;
        Ok(())
    }

    fn present(&mut self) -> AppResult<()> {
        let (Some(window), Some(surface)) = (self.window, self.surface.as_mut()) else {
            return Ok(());
        };

        let mut buffer = surface.buffer_mut()?;

        self.prog.pix.scale_to(
            self.prog.scale() as usize,
            &mut buffer,
            Some(self.final_buffer_size.width as usize),
        );

        // softbuffer expects 0RGB.
        buffer.iter_mut().for_each(|p| *p &= 0x00_FF_FF_FF);

        window.pre_present_notify();
        buffer.present()?;

        Ok(())
    }

    fn check_refresh_rate(window: &Window, prog: &mut Program) {
        let Some(Some(mut milli_hz)) = window
            .current_monitor()
            .map(|m| m.refresh_rate_millihertz())
        else {
            log::warn!(
                "Unable to query the monitor's refresh rate, staying at {}hz",
                prog.get_milli_hz() as f32 / 1000.0
            );
            return;
        };

        if milli_hz == prog.get_milli_hz() {
            return;
        }

        if milli_hz > CAP_MILLI_HZ {
            log::info!("Refresh rate capped to {}hz", CAP_MILLI_HZ / 1000);
            milli_hz = CAP_MILLI_HZ;
        }

        log::info!(
            "Detected refresh rate {}hz (use --fps to lock it)",
            milli_hz as f32 / 1000.0
        );

        prog.change_fps_frac(milli_hz);
    }
}

/// The window shows every canvas pixel as a `scale`-sized square.
fn cursor_to_canvas(cursor: PhysicalPosition<f64>, scale: u8) -> Point {
    let scale = scale.max(1) as f64;
    Point::new((cursor.x / scale) as f32, (cursor.y / scale) as f32)
}

pub fn winit_main(prog: Program) -> AppResult<()> {
    let event_loop = EventLoop::new()?;

    let mut state = WindowState {
        prog,
        window: None,
        surface: None,
        final_buffer_size: PhysicalSize::<u32>::new(0, 0),
        cursor: PhysicalPosition::new(0.0, 0.0),
        next_frame: Instant::now(),
        error: None,
    };

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut state)?;

    log::debug!("Rendered {} frames", state.prog.frames());

    match state.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_divided_by_scale() {
        let cursor = PhysicalPosition::new(300.0, 125.0);
        assert_eq!(cursor_to_canvas(cursor, 1), Point::new(300.0, 125.0));
        assert_eq!(cursor_to_canvas(cursor, 2), Point::new(150.0, 62.5));
        assert_eq!(cursor_to_canvas(cursor, 4), Point::new(75.0, 31.25));
    }

    #[test]
    fn zero_scale_is_treated_as_one() {
        let cursor = PhysicalPosition::new(10.5, 7.0);
        assert_eq!(cursor_to_canvas(cursor, 0), Point::new(10.5, 7.0));
    }
}
