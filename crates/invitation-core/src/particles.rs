//! Confetti particle simulation.
//!
//! Each particle is a small quad launched from a burst origin with a
//! randomized velocity inside the burst's cone. Every tick it drifts along
//! its heading, slows down, falls, wobbles and tilts, and fades linearly
//! until its lifetime runs out.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::celebration::{Burst, ParticleEffect};

/// Confetti palette.
pub const COLORS: [&str; 7] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

const START_VELOCITY: f64 = 45.0;
const DECAY: f64 = 0.9;
const GRAVITY: f64 = 3.0;
const TICKS: u32 = 200;
const SCALAR: f64 = 1.0;

#[derive(Debug, Clone)]
struct Confetto {
    x: f64,
    y: f64,
    wobble: f64,
    wobble_speed: f64,
    velocity: f64,
    heading: f64,
    tilt_angle: f64,
    color: &'static str,
    tick: u32,
    // Per-tick jitter of the quad's corners
    random: f64,
}

impl Confetto {
    fn launch(rng: &mut StdRng, x: f64, y: f64, burst: &Burst) -> Self {
        let spread = burst.spread.to_radians();
        Self {
            x,
            y,
            wobble: rng.random::<f64>() * 10.0,
            wobble_speed: (rng.random::<f64>() * 0.1 + 0.05).min(0.11),
            velocity: START_VELOCITY * 0.5 + rng.random::<f64>() * START_VELOCITY,
            heading: -burst.angle.to_radians() + (0.5 * spread - rng.random::<f64>() * spread),
            tilt_angle: (rng.random::<f64>() * 0.5 + 0.25) * std::f64::consts::PI,
            color: COLORS[rng.random_range(0..COLORS.len())],
            tick: 0,
            random: rng.random::<f64>() + 2.0,
        }
    }

    /// Advance one frame. Returns false once the particle has expired.
    fn step(&mut self, rng: &mut StdRng) -> bool {
        self.x += self.heading.cos() * self.velocity;
        self.y += self.heading.sin() * self.velocity + GRAVITY;
        self.velocity *= DECAY;
        self.wobble += self.wobble_speed;
        self.tilt_angle += 0.1;
        self.random = rng.random::<f64>() + 2.0;
        self.tick += 1;
        self.tick < TICKS
    }

    fn sprite(&self) -> ConfettiSprite {
        let wobble_x = self.x + 10.0 * SCALAR * self.wobble.cos();
        let wobble_y = self.y + 10.0 * SCALAR * self.wobble.sin();
        let (tilt_sin, tilt_cos) = self.tilt_angle.sin_cos();
        let x1 = self.x + self.random * tilt_cos;
        let y1 = self.y + self.random * tilt_sin;
        let x2 = wobble_x + self.random * tilt_cos;
        let y2 = wobble_y + self.random * tilt_sin;

        ConfettiSprite {
            points: [
                (self.x.floor(), self.y.floor()),
                (wobble_x.floor(), y1.floor()),
                (x2.floor(), y2.floor()),
                (x1.floor(), wobble_y.floor()),
            ],
            color: self.color,
            opacity: 1.0 - f64::from(self.tick) / f64::from(TICKS),
        }
    }
}

/// One renderable particle: a quad in overlay pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiSprite {
    pub points: [(f64, f64); 4],
    pub color: &'static str,
    pub opacity: f64,
}

impl ConfettiSprite {
    /// Points formatted for an SVG `polygon`.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// All live particles on an overlay of a given size.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Confetto>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f64, height: f64, rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
            rng,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Launch every particle of `burst` from its origin.
    pub fn fire(&mut self, burst: &Burst) {
        let x = self.width * burst.origin.x;
        let y = self.height * burst.origin.y;
        let rng = &mut self.rng;
        self.particles.extend(
            (0..burst.particle_count).map(|_| Confetto::launch(rng, x, y, burst)),
        );
    }

    /// Advance every particle one frame, dropping expired ones.
    pub fn step(&mut self) {
        let rng = &mut self.rng;
        self.particles.retain_mut(|p| p.step(rng));
    }

    pub fn sprites(&self) -> Vec<ConfettiSprite> {
        self.particles.iter().map(Confetto::sprite).collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Thread-safe [`ParticleEffect`] backed by a [`ParticleField`].
///
/// The card fires bursts from timer tasks; the overlay calls [`tick`] once
/// per frame to advance and read back the sprites.
///
/// [`tick`]: ConfettiCannon::tick
#[derive(Debug)]
pub struct ConfettiCannon {
    field: Mutex<ParticleField>,
}

impl ConfettiCannon {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            field: Mutex::new(ParticleField::new(width, height)),
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.field.lock().resize(width, height);
    }

    pub fn size(&self) -> (f64, f64) {
        self.field.lock().size()
    }

    /// Step the simulation and return what to draw this frame.
    pub fn tick(&self) -> Vec<ConfettiSprite> {
        let mut field = self.field.lock();
        if field.is_empty() {
            return Vec::new();
        }
        field.step();
        field.sprites()
    }

    pub fn is_idle(&self) -> bool {
        self.field.lock().is_empty()
    }
}

impl ParticleEffect for ConfettiCannon {
    fn burst(&self, burst: &Burst) {
        tracing::debug!(
            "Confetti burst: {} particles at ({}, {})",
            burst.particle_count,
            burst.origin.x,
            burst.origin.y
        );
        self.field.lock().fire(burst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::Origin;

    fn upward(count: u32) -> Burst {
        Burst {
            particle_count: count,
            angle: 90.0,
            spread: 0.0,
            origin: Origin { x: 0.5, y: 1.0 },
        }
    }

    #[test]
    fn test_fire_spawns_at_origin() {
        let mut field = ParticleField::with_seed(800.0, 600.0, 7);
        field.fire(&upward(25));

        assert_eq!(field.len(), 25);
        for sprite in field.sprites() {
            assert_eq!(sprite.points[0], (400.0, 600.0));
            assert_eq!(sprite.opacity, 1.0);
        }
    }

    #[test]
    fn test_upward_burst_rises_first() {
        let mut field = ParticleField::with_seed(800.0, 600.0, 1);
        field.fire(&upward(10));
        field.step();

        for sprite in field.sprites() {
            let (x, y) = sprite.points[0];
            assert!(y < 600.0, "particle should rise, got y={}", y);
            assert!((x - 400.0).abs() <= 1.0, "zero spread keeps x centred");
        }
    }

    #[test]
    fn test_particles_fade_and_expire() {
        let mut field = ParticleField::with_seed(800.0, 600.0, 3);
        field.fire(&upward(5));

        field.step();
        let early = field.sprites()[0].opacity;
        for _ in 0..100 {
            field.step();
        }
        let late = field.sprites()[0].opacity;
        assert!(late < early);

        for _ in 0..200 {
            field.step();
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_cannon_tick_when_idle_is_empty() {
        let cannon = ConfettiCannon::new(400.0, 300.0);
        assert!(cannon.is_idle());
        assert!(cannon.tick().is_empty());

        cannon.burst(&upward(3));
        assert!(!cannon.is_idle());
        assert_eq!(cannon.tick().len(), 3);
    }

    #[test]
    fn test_svg_points_format() {
        let sprite = ConfettiSprite {
            points: [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (7.0, 8.0)],
            color: COLORS[0],
            opacity: 0.5,
        };
        assert_eq!(sprite.svg_points(), "1,2 3,4 5,6 7,8");
    }
}
