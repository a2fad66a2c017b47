//! Celebration schedule.
//!
//! Accepting the invitation fires four confetti bursts: a wide burst from
//! below centre, one from each side, then a second wide burst.
//!
//! ```text
//!   t=0ms     ──●── centre, 160° spread
//!   t=250ms   ●──── left edge, aimed 60°
//!   t=400ms   ────● right edge, aimed 120°
//!   t=600ms   ──●── centre, 160° spread
//! ```

use std::time::Duration;

/// Normalized launch point on the overlay (0..1 on both axes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// One timed emission of particles.
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    /// Launch direction in degrees, 90 is straight up
    pub angle: f64,
    /// Cone width in degrees around `angle`
    pub spread: f64,
    pub origin: Origin,
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            particle_count: 50,
            angle: 90.0,
            spread: 45.0,
            origin: Origin::default(),
        }
    }
}

/// A burst together with its offset from the start of the celebration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledBurst {
    pub delay: Duration,
    pub burst: Burst,
}

/// Renders a transient particle burst. Fire-and-forget.
pub trait ParticleEffect: Send + Sync {
    fn burst(&self, burst: &Burst);
}

/// Offsets of the four bursts, in firing order.
pub const BURST_OFFSETS_MS: [u64; 4] = [0, 250, 400, 600];

/// Build the celebration for the current viewport class. Narrow viewports
/// get fewer particles and a lower centre origin.
pub fn celebration_schedule(narrow: bool) -> [ScheduledBurst; 4] {
    let center = Burst {
        particle_count: if narrow { 70 } else { 100 },
        angle: 90.0,
        spread: 160.0,
        origin: Origin {
            x: 0.5,
            y: if narrow { 0.7 } else { 0.6 },
        },
    };
    let side_count = if narrow { 30 } else { 50 };
    let left = Burst {
        particle_count: side_count,
        angle: 60.0,
        spread: 80.0,
        origin: Origin { x: 0.0, y: 0.5 },
    };
    let right = Burst {
        particle_count: side_count,
        angle: 120.0,
        spread: 80.0,
        origin: Origin { x: 1.0, y: 0.5 },
    };

    let [t0, t1, t2, t3] = BURST_OFFSETS_MS.map(Duration::from_millis);
    [
        ScheduledBurst { delay: t0, burst: center.clone() },
        ScheduledBurst { delay: t1, burst: left },
        ScheduledBurst { delay: t2, burst: right },
        ScheduledBurst { delay: t3, burst: center },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_offsets() {
        let delays: Vec<u64> = celebration_schedule(false)
            .iter()
            .map(|s| s.delay.as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![0, 250, 400, 600]);
    }

    #[test]
    fn test_narrow_reduces_particles() {
        let wide = celebration_schedule(false);
        let narrow = celebration_schedule(true);

        let total = |s: &[ScheduledBurst; 4]| -> u32 {
            s.iter().map(|b| b.burst.particle_count).sum()
        };
        assert_eq!(total(&wide), 300);
        assert_eq!(total(&narrow), 200);
        assert_eq!(narrow[0].burst.origin.y, 0.7);
        assert_eq!(wide[0].burst.origin.y, 0.6);
    }

    #[test]
    fn test_side_bursts_aim_inward() {
        let schedule = celebration_schedule(false);
        assert_eq!(schedule[1].burst.origin.x, 0.0);
        assert!(schedule[1].burst.angle < 90.0);
        assert_eq!(schedule[2].burst.origin.x, 1.0);
        assert!(schedule[2].burst.angle > 90.0);
    }
}
