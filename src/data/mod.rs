pub mod error;
pub mod reader;

use std::time::Duration;

use crate::{
    graphics::{blend::Argb, render, PixelBuffer, DEFAULT_BACKGROUND},
    math::{rng::SceneRng, Point},
    modes::Mode,
    scene::{Scene, SceneConfig},
};

pub const DEFAULT_MILLI_HZ: u32 = 60 * 1000;
pub const CAP_MILLI_HZ: u32 = 240 * 1000;

pub const DEFAULT_WIDTH: u16 = 1280;
pub const DEFAULT_HEIGHT: u16 = 800;
pub const DEFAULT_SCALE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRateMode {
    /// Follow the monitor, like a display refresh callback would.
    Sync,
    Specified,
}

/// Startup configuration. Defaults reproduce the fixed constants of
/// the scene; the command line can override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub size: (u16, u16),
    pub scale: u8,
    pub milli_hz: u32,
    pub refresh_rate_mode: RefreshRateMode,
    pub seed: Option<u64>,
    pub background: Argb,
    pub scene: SceneConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            scale: DEFAULT_SCALE,
            milli_hz: DEFAULT_MILLI_HZ,
            refresh_rate_mode: RefreshRateMode::Sync,
            seed: None,
            background: DEFAULT_BACKGROUND,
            scene: SceneConfig::default(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    /// Pointer press in canvas coordinates.
    Click(Point),
    Regenerate,
    SwitchConMode,
    Close,
}

/// Main program struct. Owns the scene and the canvas it is drawn
/// on; the window or terminal front-end only feeds it commands and
/// presents `pix`.
pub struct Program {
    config: Config,
    pub pix: PixelBuffer,
    scene: Scene,
    rng: SceneRng,
    commands: Vec<Command>,
    refresh_rate: Duration,
    frames: u64,
}

impl Program {
    pub fn new(config: Config) -> Self {
        let (w, h) = config.size;
        let mut pix = PixelBuffer::new(w as usize, h as usize);
        pix.set_background(config.background);

        let mut rng = SceneRng::new(config.seed);
        let scene = Scene::generate(&config.scene, canvas_center(&pix), &mut rng);

        let mut prog = Self {
            config,
            pix,
            scene,
            rng,
            commands: Vec::new(),
            refresh_rate: Duration::ZERO,
            frames: 0,
        };

        prog.change_fps_frac(prog.config.milli_hz);
        prog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn scale(&self) -> u8 {
        self.config.scale
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.pix.width() as f32, self.pix.height() as f32)
    }

    /// Sizes the canvas to the surface the host actually gave us and
    /// lays the scene out again around the new center. Only meant to
    /// run once at startup; later resizes don't touch the canvas.
    pub fn fit_canvas(&mut self, w: usize, h: usize) {
        if (w, h) == (self.pix.width(), self.pix.height()) || w == 0 || h == 0 {
            return;
        }

        log::info!("Canvas sized to {w}x{h}");

        self.pix = PixelBuffer::new(w, h);
        self.pix.set_background(self.config.background);
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        self.scene = Scene::generate(&self.config.scene, canvas_center(&self.pix), &mut self.rng);
        log::debug!("Generated {} circles", self.scene.circles().len());
    }

    pub fn push_command(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    /// Returns true if a close was requested.
    pub fn eval_command(&mut self, cmd: &Command) -> bool {
        match cmd {
            Command::Click(p) => {
                let _ = self.scene.click(*p);
            }

            Command::Regenerate => self.regenerate(),

            Command::SwitchConMode => {
                if self.config.mode.is_con() {
                    self.config.mode = self.config.mode.next();
                    log::debug!("Switching to {} rendering", self.config.mode.get_name());
                }
            }

            Command::Close => return true,
        }

        false
    }

    pub fn eval_commands(&mut self) -> bool {
        let cmds = std::mem::take(&mut self.commands);

        cmds.iter()
            .fold(false, |close, cmd| self.eval_command(cmd) | close)
    }

    /// The frame driver: applies queued input, then pulses, draws and
    /// advances the swap. Returns true if a close was requested.
    pub fn frame(&mut self) -> bool {
        if self.eval_commands() {
            return true;
        }

        let pix = &mut self.pix;
        self.scene.tick(|scene| render::draw_scene(scene, pix));
        self.frames += 1;

        false
    }

    pub fn refresh_rate(&self) -> Duration {
        self.refresh_rate
    }

    pub fn get_rr_mode(&self) -> RefreshRateMode {
        self.config.refresh_rate_mode
    }

    pub fn get_milli_hz(&self) -> u32 {
        self.config.milli_hz
    }

    pub fn change_fps_frac(&mut self, milli_hz: u32) {
        let milli_hz = milli_hz.clamp(1, CAP_MILLI_HZ);
        self.config.milli_hz = milli_hz;
        self.refresh_rate = Duration::from_micros(1_000_000_000 / milli_hz as u64);
    }
}

fn canvas_center(pix: &PixelBuffer) -> Point {
    Point::new(pix.width() as f32, pix.height() as f32).center()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Program {
        Program::new(Config {
            seed: Some(21),
            size: (800, 600),
            ..Config::default()
        })
    }

    #[test]
    fn scene_is_centered_on_canvas() {
        let prog = seeded();
        let center = prog.scene().circles()[0];
        assert_eq!(center.pos, Point::new(400.0, 300.0));
        assert_eq!(center.radius, 150.0);
    }

    #[test]
    fn click_takes_effect_on_next_frame() {
        let mut prog = seeded();
        let target = prog.scene().circles()[3].pos;

        prog.push_command(Command::Click(target));
        assert!(!prog.scene().is_animating());

        assert!(!prog.frame());
        assert!(prog.scene().is_animating());

        for _ in 0..prog.config().scene.swap_duration {
            prog.frame();
        }

        assert_eq!(prog.scene().center_index(), 3);
        assert!(!prog.scene().is_animating());
    }

    #[test]
    fn frame_draws_the_scene() {
        let mut prog = seeded();
        prog.frame();

        let center = prog.pix.pixel(300 * 800 + 400);
        assert_eq!(center, render::slot_color(0));
        assert_eq!(prog.pix.pixel(0), 0);
        assert_eq!(prog.frames(), 1);
    }

    #[test]
    fn close_stops_the_frame() {
        let mut prog = seeded();
        prog.push_command(Command::Close);
        assert!(prog.frame());
        assert_eq!(prog.frames(), 0);
    }

    #[test]
    fn fit_canvas_recenters() {
        let mut prog = seeded();
        prog.fit_canvas(1000, 1000);
        assert_eq!(prog.canvas_size(), (1000.0, 1000.0));
        assert_eq!(prog.scene().circles()[0].pos, Point::new(500.0, 500.0));

        prog.fit_canvas(0, 10);
        assert_eq!(prog.canvas_size(), (1000.0, 1000.0));
    }

    #[test]
    fn fps_is_clamped() {
        let mut prog = seeded();
        prog.change_fps_frac(60_000);
        assert_eq!(prog.refresh_rate(), Duration::from_micros(16_666));

        prog.change_fps_frac(u32::MAX);
        assert_eq!(prog.get_milli_hz(), CAP_MILLI_HZ);

        prog.change_fps_frac(0);
        assert_eq!(prog.get_milli_hz(), 1);
    }

    #[test]
    fn regenerate_keeps_slot_count() {
        let mut prog = seeded();
        prog.push_command(Command::Regenerate);
        prog.frame();
        assert_eq!(prog.scene().circles().len(), 11);
        assert_eq!(prog.scene().center_index(), 0);
    }
}
