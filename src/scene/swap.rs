use super::Circle;
use crate::math::{lerp, lerp_vec};

/// How the incoming circle's displayed radius behaves during a swap.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SwapStyle {
    /// Only position and resting radius of the incoming circle are
    /// animated; its displayed radius keeps its old value.
    #[default]
    Observed,
    /// The displayed radius is animated as well.
    Full,
}

/// Endpoints of a running swap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SwapFrames {
    pub center: usize,
    pub target: usize,
    pub start: Circle,
    pub end: Circle,
    pub frame: u32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SwapState {
    Idle,
    Animating(SwapFrames),
}

pub struct SwapAnimator {
    state: SwapState,
    duration: u32,
    style: SwapStyle,
}

impl SwapAnimator {
    pub fn new(duration: u32, style: SwapStyle) -> Self {
        Self {
            state: SwapState::Idle,
            duration: duration.max(1),
            style,
        }
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, SwapState::Animating(_))
    }

    /// Captures both circles and starts animating. Ignored while a swap
    /// is running, for the current center, and for slots that don't exist.
    pub fn request(&mut self, circles: &[Circle], center: usize, target: usize) -> bool {
        if self.is_animating() || target == center {
            return false;
        }

        let (Some(&start), Some(&end)) = (circles.get(center), circles.get(target)) else {
            return false;
        };

        log::debug!("Swap started: slot {center} <-> slot {target}");

        self.state = SwapState::Animating(SwapFrames {
            center,
            target,
            start,
            end,
            frame: 0,
        });

        true
    }

    /// Advances one frame. Returns the new center index on the frame
    /// the swap completes.
    pub fn step(&mut self, circles: &mut [Circle]) -> Option<usize> {
        let SwapState::Animating(frames) = &mut self.state else {
            return None;
        };

        frames.frame += 1;

        let t = frames.frame as f32 / self.duration as f32;
        let SwapFrames {
            center,
            target,
            start,
            end,
            frame,
        } = *frames;

        if let Some(c) = circles.get_mut(center) {
            c.pos = lerp_vec(start.pos, end.pos, t);
            c.radius = lerp(start.radius, end.radius, t);
            c.original_radius = lerp(start.original_radius, end.original_radius, t);
        }

        if let Some(c) = circles.get_mut(target) {
            c.pos = lerp_vec(end.pos, start.pos, t);
            c.original_radius = lerp(end.original_radius, start.original_radius, t);

            if self.style == SwapStyle::Full {
                c.radius = lerp(end.radius, start.radius, t);
            }
        }

        if frame < self.duration {
            return None;
        }

        self.state = SwapState::Idle;

        Some(target)
    }
}
