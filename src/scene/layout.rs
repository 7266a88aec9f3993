use std::f32::consts::TAU;

use super::{Circle, SceneConfig};
use crate::math::{rng::SceneRng, Point};

/// Result of laying out a scene. `dropped` holds the ring positions
/// (`1..=count`) that could not be placed without overlap.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    pub circles: Vec<Circle>,
    pub dropped: Vec<usize>,
}

/// Puts the big circle at `center` and spreads `config.count` circles
/// evenly on the orbit. A ring position keeps its angle and re-rolls
/// its radius until it clears every circle placed so far, giving up
/// after `config.max_attempts` rolls.
pub fn generate(config: &SceneConfig, center: Point, rng: &mut SceneRng) -> Placement {
    let mut placement = Placement {
        circles: Vec::with_capacity(config.count + 1),
        dropped: Vec::new(),
    };

    placement
        .circles
        .push(Circle::new(center, config.big_radius));

    for i in 1..=config.count {
        let angle = (i as f32 / config.count as f32) * TAU;
        let pos = center + Point::from_angle(angle) * config.orbit_radius;

        let candidate = (0..config.max_attempts).find_map(|_| {
            let radius = rng.random_range(config.min_radius, config.max_radius);
            let circle = Circle::new(pos, radius);

            (!placement.circles.iter().any(|c| c.overlaps(&circle))).then_some(circle)
        });

        match candidate {
            Some(circle) => placement.circles.push(circle),
            None => placement.dropped.push(i),
        }
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(640.0, 400.0);

    fn generate_seeded(config: &SceneConfig, seed: u64) -> Placement {
        generate(config, CENTER, &mut SceneRng::new(Some(seed)))
    }

    #[test]
    fn default_layout_places_everything() {
        for seed in 0..20 {
            let p = generate_seeded(&SceneConfig::default(), seed);
            assert_eq!(p.circles.len(), 11);
            assert!(p.dropped.is_empty());
        }
    }

    #[test]
    fn center_is_exact() {
        let p = generate_seeded(&SceneConfig::default(), 9);
        let c = p.circles[0];
        assert_eq!(c.pos, CENTER);
        assert_eq!(c.radius, 150.0);
        assert_eq!(c.original_radius, 150.0);
    }

    #[test]
    fn orbit_circles_sit_on_the_orbit_with_valid_radii() {
        let config = SceneConfig::default();
        let p = generate_seeded(&config, 5);

        for c in &p.circles[1..] {
            assert!((c.pos.distance(CENTER) - config.orbit_radius).abs() < 1e-3);
            assert!((config.min_radius..=config.max_radius).contains(&c.radius));
            assert_eq!(c.radius, c.original_radius);
        }
    }

    #[test]
    fn no_two_circles_overlap() {
        let config = SceneConfig {
            count: 14,
            orbit_radius: 260.0,
            ..SceneConfig::default()
        };

        for seed in 0..20 {
            let p = generate_seeded(&config, seed);
            assert_eq!(p.circles.len() + p.dropped.len(), config.count + 1);

            for (i, a) in p.circles.iter().enumerate() {
                for b in &p.circles[i + 1..] {
                    assert!(a.pos.distance(b.pos) >= a.radius + b.radius);
                }
            }
        }
    }

    #[test]
    fn unplaceable_circles_are_dropped() {
        // Orbit lies inside the big circle, nothing fits.
        let config = SceneConfig {
            orbit_radius: 10.0,
            ..SceneConfig::default()
        };

        let p = generate_seeded(&config, 1);
        assert_eq!(p.circles.len(), 1);
        assert_eq!(p.dropped, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn crowded_ring_drops_some() {
        // 20 circles of radius >= 50 need a circumference of at least 2000.
        let config = SceneConfig {
            count: 20,
            ..SceneConfig::default()
        };

        let p = generate_seeded(&config, 2);
        assert!(!p.dropped.is_empty());
        assert!(p.circles.len() < 21);
        assert_eq!(p.circles.len() + p.dropped.len(), 21);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = generate_seeded(&SceneConfig::default(), 77);
        let b = generate_seeded(&SceneConfig::default(), 77);
        assert_eq!(a.circles, b.circles);
    }

    #[test]
    fn zero_count_is_just_the_center() {
        let config = SceneConfig {
            count: 0,
            ..SceneConfig::default()
        };
        let p = generate_seeded(&config, 0);
        assert_eq!(p.circles.len(), 1);
        assert!(p.dropped.is_empty());
    }
}
