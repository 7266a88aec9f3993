//! The circles and everything that moves them.
//!
//! A [`Scene`] owns a fixed sequence of circles. The slot at
//! `center_index` holds the center role; every other slot pulses.
//! Clicking an orbiting circle starts a swap that moves it into the
//! middle over a fixed number of frames.

pub mod input;
pub mod layout;
pub mod pulse;
pub mod swap;

use crate::math::{rng::SceneRng, shapes, Point};

use pulse::{Pulse, PulseConfig};
use swap::{SwapAnimator, SwapStyle};

pub const BIG_CIRCLE_RADIUS: f32 = 150.0;
pub const SMALL_CIRCLES_COUNT: usize = 10;
/// Upper bound for `--count`. Anything past what fits on the orbit
/// only ends up dropped.
pub const MAX_SMALL_CIRCLES_COUNT: usize = 360;
pub const SMALL_CIRCLE_MIN_RADIUS: f32 = 50.0;
pub const SMALL_CIRCLE_MAX_RADIUS: f32 = 70.0;
pub const ORBIT_RADIUS: f32 = BIG_CIRCLE_RADIUS + 150.0;
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;
pub const SWAP_DURATION: u32 = 30;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub pos: Point,
    pub radius: f32,
    /// Resting radius the pulse oscillates around.
    pub original_radius: f32,
}

impl Circle {
    pub fn new(pos: Point, radius: f32) -> Self {
        Self {
            pos,
            radius,
            original_radius: radius,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        shapes::circle(self.pos, self.radius, p)
    }

    pub fn overlaps(&self, other: &Circle) -> bool {
        shapes::circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub big_radius: f32,
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    pub orbit_radius: f32,
    pub max_attempts: u32,
    pub pulse: PulseConfig,
    pub swap_duration: u32,
    pub swap_style: SwapStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            big_radius: BIG_CIRCLE_RADIUS,
            count: SMALL_CIRCLES_COUNT,
            min_radius: SMALL_CIRCLE_MIN_RADIUS,
            max_radius: SMALL_CIRCLE_MAX_RADIUS,
            orbit_radius: ORBIT_RADIUS,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            pulse: PulseConfig::default(),
            swap_duration: SWAP_DURATION,
            swap_style: SwapStyle::default(),
        }
    }
}

pub struct Scene {
    circles: Vec<Circle>,
    center_index: usize,
    pulse: Pulse,
    swap: SwapAnimator,
}

impl Scene {
    pub fn new(config: &SceneConfig, circles: Vec<Circle>) -> Self {
        Self {
            circles,
            center_index: 0,
            pulse: Pulse::new(config.pulse),
            swap: SwapAnimator::new(config.swap_duration, config.swap_style),
        }
    }

    pub fn from_circles(circles: Vec<Circle>) -> Self {
        Self::new(&SceneConfig::default(), circles)
    }

    /// Lays out a fresh scene around `center`.
    pub fn generate(config: &SceneConfig, center: Point, rng: &mut SceneRng) -> Self {
        let placement = layout::generate(config, center, rng);

        if !placement.dropped.is_empty() {
            log::warn!(
                "Dropped {} of {} orbiting circles after {} placement attempts each: {:?}",
                placement.dropped.len(),
                config.count,
                config.max_attempts,
                placement.dropped
            );
        }

        Self::new(config, placement.circles)
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[cfg(test)]
    pub(crate) fn circles_mut(&mut self) -> &mut [Circle] {
        &mut self.circles
    }

    pub fn center_index(&self) -> usize {
        self.center_index
    }

    pub fn is_animating(&self) -> bool {
        self.swap.is_animating()
    }

    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }

    /// Pulses the orbiting circles. Suspended while a swap runs.
    pub fn update_pulse(&mut self) {
        if self.swap.is_animating() {
            return;
        }

        self.pulse.update(&mut self.circles, self.center_index);
    }

    /// Starts a swap with `target`. Returns whether anything started.
    pub fn request_swap(&mut self, target: usize) -> bool {
        self.swap.request(&self.circles, self.center_index, target)
    }

    pub fn step_swap(&mut self) {
        if let Some(new_center) = self.swap.step(&mut self.circles) {
            log::debug!(
                "Swap finished: center moved from slot {} to slot {}",
                self.center_index,
                new_center
            );
            self.center_index = new_center;
        }
    }

    /// Hit-tests `p` (canvas coordinates) and requests a swap with
    /// whatever was hit. Returns the hit slot, if any.
    pub fn click(&mut self, p: Point) -> Option<usize> {
        let hit = input::hit_test(&self.circles, p)?;

        if self.request_swap(hit) {
            log::debug!("Click at ({:.1}, {:.1}) hit slot {hit}, swapping", p.x, p.y);
        } else {
            log::debug!("Click at ({:.1}, {:.1}) hit slot {hit}, ignored", p.x, p.y);
        }

        Some(hit)
    }

    /// One frame: pulse, draw, then advance the swap.
    pub fn tick(&mut self, render: impl FnOnce(&Scene)) {
        self.update_pulse();
        render(self);
        self.step_swap();
    }
}
