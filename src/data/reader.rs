use std::str::FromStr;

use super::{error::ArgError, Config, Program, RefreshRateMode};
use crate::{
    graphics::Pixel,
    modes::Mode,
    scene::{swap::SwapStyle, MAX_SMALL_CIRCLES_COUNT},
};

pub const USAGE: &str = "\
Usage: orbitswap [options]

Options:
    --win                 Render in a window (default)
    --block               Render in the terminal with half blocks
    --ascii               Render in the terminal with ascii art
    --size WxH            Canvas size in pixels (default 1280x800)
    --scale N             Integer pixel scale of the window (default 1)
    --fps F               Lock the frame rate instead of following the monitor
    --count N             Number of orbiting circles (default 10, at most 360)
    --seed N              Seed the layout for a reproducible arrangement
    --background R G B    Background color (default 255 255 255)
    --full-swap           Also animate the incoming circle's radius
    -h, --help            Print this message

Keys:
    Esc / q               Quit (q in the terminal only)
    r                     Lay the circles out again
    .                     Cycle terminal rendering style
";

fn parse_value<T: FromStr>(option: &'static str, value: Option<&String>) -> Result<T, ArgError> {
    let value = value.ok_or(ArgError::MissingValue(option))?;

    value.parse::<T>().map_err(|_| ArgError::InvalidValue {
        option,
        value: value.clone(),
    })
}

fn parse_size(value: Option<&String>) -> Result<(u16, u16), ArgError> {
    let raw = value.ok_or(ArgError::MissingValue("--size"))?;

    let invalid = || ArgError::InvalidValue {
        option: "--size",
        value: raw.clone(),
    };

    let s = raw
        .split('x')
        .map(|x| x.parse::<u16>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match s[..] {
        [0, _] | [_, 0] => Err(ArgError::Zero("--size")),
        [w, h] => Ok((w, h)),
        _ => Err(invalid()),
    }
}

impl Config {
    /// Applies command line options. The first item is the program
    /// name and is skipped.
    pub fn eval_args<'a>(
        mut self,
        args: &mut dyn Iterator<Item = &'a String>,
    ) -> Result<Self, ArgError> {
        args.next();

        let mut color = [0xFFu8; 4];
        let mut custom_background = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--win" => self.mode = Mode::Win,

                #[cfg(feature = "terminal")]
                "--block" => self.mode = Mode::ConBlock,

                #[cfg(feature = "terminal")]
                "--ascii" => self.mode = Mode::ConAscii,

                #[cfg(not(feature = "terminal"))]
                "--block" | "--ascii" => return Err(ArgError::FeatureDisabled("terminal")),

                "--size" => self.size = parse_size(args.next())?,

                "--scale" => {
                    self.scale = parse_value("--scale", args.next())?;

                    if self.scale == 0 {
                        return Err(ArgError::Zero("--scale"));
                    }
                }

                "--fps" => {
                    let rate: f64 = parse_value("--fps", args.next())?;

                    if !(rate > 0.0) || !rate.is_finite() {
                        return Err(ArgError::InvalidValue {
                            option: "--fps",
                            value: rate.to_string(),
                        });
                    }

                    self.milli_hz = (rate * 1000.0).round().clamp(1.0, u32::MAX as f64) as u32;
                    self.refresh_rate_mode = RefreshRateMode::Specified;
                }

                "--count" => {
                    let count: usize = parse_value("--count", args.next())?;

                    if count > MAX_SMALL_CIRCLES_COUNT {
                        return Err(ArgError::InvalidValue {
                            option: "--count",
                            value: count.to_string(),
                        });
                    }

                    self.scene.count = count;
                }

                "--seed" => self.seed = Some(parse_value("--seed", args.next())?),

                "--background" => {
                    // [a, r, g, b]
                    for channel in color.iter_mut().skip(1) {
                        *channel = parse_value("--background", args.next())?;
                    }
                    custom_background = true;
                }

                "--full-swap" => self.scene.swap_style = SwapStyle::Full,

                "-h" | "--help" => return Err(ArgError::HelpRequested),

                unknown => log::warn!("Unknown option {unknown}, ignoring"),
            }
        }

        if custom_background {
            self.background = u32::from_be_bytes(color).set_alpha(0xFF);
        }

        Ok(self)
    }
}

impl Program {
    pub fn print_startup_info(&self) {
        let config = self.config();
        let (w, h) = config.size;

        log::info!("orbitswap {}", env!("CARGO_PKG_VERSION"));
        log::info!("Canvas: {w}x{h}, scale {}", config.scale);

        match config.refresh_rate_mode {
            RefreshRateMode::Sync => log::info!("Refresh rate: following the monitor"),
            RefreshRateMode::Specified => {
                log::info!("Refresh rate: {}hz", config.milli_hz as f64 / 1000.0)
            }
        }

        log::info!(
            "Scene: {} orbiting circles, seed {}, {} swap",
            config.scene.count,
            config
                .seed
                .map_or_else(|| "random".to_string(), |s| s.to_string()),
            match config.scene.swap_style {
                SwapStyle::Observed => "partial",
                SwapStyle::Full => "full",
            }
        );

        match config.mode {
            Mode::Win => log::info!("Running with: Winit"),
            m => log::info!("Running in a terminal: {} rendering", m.get_name()),
        }
    }
}
