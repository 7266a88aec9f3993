use super::Circle;

pub const PULSE_SPEED: f32 = 0.5;
pub const PULSE_INTERVAL: u32 = 10;
pub const PULSE_AMPLITUDE: f32 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PulseConfig {
    /// Radius change per firing frame.
    pub speed: f32,
    /// Fires once every `interval` frames.
    pub interval: u32,
    /// Half-width of the band around the resting radius.
    pub amplitude: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            speed: PULSE_SPEED,
            interval: PULSE_INTERVAL,
            amplitude: PULSE_AMPLITUDE,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PulseDirection {
    Grow,
    Shrink,
}

impl PulseDirection {
    fn sign(self) -> f32 {
        match self {
            PulseDirection::Grow => 1.0,
            PulseDirection::Shrink => -1.0,
        }
    }
}

/// Lockstep radius oscillation. All orbiting circles share one
/// direction; a flip caused by one circle applies to the circles
/// after it in the same pass.
#[derive(Debug, Clone)]
pub struct Pulse {
    config: PulseConfig,
    direction: PulseDirection,
    frame: u32,
}

impl Pulse {
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            direction: PulseDirection::Grow,
            frame: 0,
        }
    }

    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    pub fn direction(&self) -> PulseDirection {
        self.direction
    }

    pub fn update(&mut self, circles: &mut [Circle], center_index: usize) {
        if self.frame == 0 {
            self.step(circles, center_index);
        }

        self.frame = (self.frame + 1) % self.config.interval.max(1);
    }

    fn step(&mut self, circles: &mut [Circle], center_index: usize) {
        let amplitude = self.config.amplitude;

        for (_, circle) in circles
            .iter_mut()
            .enumerate()
            .filter(|&(i, _)| i != center_index)
        {
            circle.radius += self.direction.sign() * self.config.speed;

            if circle.radius > circle.original_radius + amplitude {
                circle.radius = circle.original_radius + amplitude;
                self.direction = PulseDirection::Shrink;
            } else if circle.radius < circle.original_radius - amplitude {
                circle.radius = circle.original_radius - amplitude;
                self.direction = PulseDirection::Grow;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{rng::SceneRng, Point};
    use crate::scene::{layout, SceneConfig};

    fn ring() -> Vec<Circle> {
        let mut rng = SceneRng::new(Some(11));
        layout::generate(&SceneConfig::default(), Point::new(500.0, 500.0), &mut rng).circles
    }

    #[test]
    fn fires_once_per_interval() {
        let mut circles = vec![
            Circle::new(Point::new(0.0, 0.0), 150.0),
            Circle::new(Point::new(300.0, 0.0), 60.0),
        ];
        let mut pulse = Pulse::new(PulseConfig::default());

        for _ in 0..PULSE_INTERVAL {
            pulse.update(&mut circles, 0);
        }
        assert_eq!(circles[1].radius, 60.5);

        pulse.update(&mut circles, 0);
        assert_eq!(circles[1].radius, 61.0);
    }

    #[test]
    fn radius_stays_in_band_forever() {
        let mut circles = ring();
        let mut pulse = Pulse::new(PulseConfig::default());

        for _ in 0..5000 {
            pulse.update(&mut circles, 0);

            for c in circles.iter().skip(1) {
                assert!(c.radius <= c.original_radius + PULSE_AMPLITUDE);
                assert!(c.radius >= c.original_radius - PULSE_AMPLITUDE);
            }
        }
    }

    #[test]
    fn center_is_never_pulsed() {
        let mut circles = ring();
        let center = circles[3];
        let mut pulse = Pulse::new(PulseConfig::default());

        for _ in 0..500 {
            pulse.update(&mut circles, 3);
        }

        assert_eq!(circles[3], center);
    }

    #[test]
    fn direction_flips_at_band_edges() {
        let mut circles = vec![
            Circle::new(Point::new(0.0, 0.0), 150.0),
            Circle::new(Point::new(300.0, 0.0), 60.0),
        ];
        let config = PulseConfig {
            interval: 1,
            ..PulseConfig::default()
        };
        let mut pulse = Pulse::new(config);

        // 60 -> 63 takes six steps, the seventh overshoots and clamps.
        for _ in 0..7 {
            pulse.update(&mut circles, 0);
        }
        assert_eq!(circles[1].radius, 63.0);
        assert_eq!(pulse.direction(), PulseDirection::Shrink);

        for _ in 0..13 {
            pulse.update(&mut circles, 0);
        }
        assert_eq!(circles[1].radius, 57.0);
        assert_eq!(pulse.direction(), PulseDirection::Grow);
    }

    #[test]
    fn out_of_band_radius_is_pulled_back_in_one_step() {
        let mut circles = vec![
            Circle::new(Point::new(0.0, 0.0), 150.0),
            Circle {
                pos: Point::new(300.0, 0.0),
                radius: 150.0,
                original_radius: 60.0,
            },
        ];
        let mut pulse = Pulse::new(PulseConfig::default());

        pulse.update(&mut circles, 0);

        assert_eq!(circles[1].radius, 63.0);
        assert_eq!(pulse.direction(), PulseDirection::Shrink);
    }
}
