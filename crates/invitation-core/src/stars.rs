//! Ambient star field.

use rand::Rng;

/// Maximum drift from a star's anchor on each axis, in pixels.
pub const DRIFT_PX: f64 = 5.0;

/// A decorative star marker.
///
/// Anchor position, opacity and size are fixed when the field is scattered;
/// offset and rotation change on every drift.
#[derive(Debug, Clone, PartialEq)]
pub struct StarMarker {
    /// Percent of the viewport height
    pub top_pct: f64,
    /// Percent of the viewport width
    pub left_pct: f64,
    pub opacity: f64,
    pub size_px: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_deg: f64,
}

impl StarMarker {
    fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top_pct: rng.random::<f64>() * 100.0,
            left_pct: rng.random::<f64>() * 100.0,
            opacity: 0.3 + rng.random::<f64>() * 0.4,
            size_px: 8.0 + rng.random::<f64>() * 12.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation_deg: 0.0,
        }
    }

    fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.offset_x = (rng.random::<f64>() - 0.5) * 2.0 * DRIFT_PX;
        self.offset_y = (rng.random::<f64>() - 0.5) * 2.0 * DRIFT_PX;
        self.rotation_deg = rng.random::<f64>() * 360.0;
    }

    /// CSS transform for the current offset and rotation.
    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.1}deg)",
            self.offset_x, self.offset_y, self.rotation_deg
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarField {
    markers: Vec<StarMarker>,
}

impl StarField {
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            markers: (0..count).map(|_| StarMarker::scatter(rng)).collect(),
        }
    }

    /// Re-randomize every marker's offset and rotation.
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for marker in &mut self.markers {
            marker.drift(rng);
        }
    }

    pub fn markers(&self) -> &[StarMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = StarField::scatter(50, &mut rng);

        assert_eq!(field.len(), 50);
        for star in field.markers() {
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.3..0.7).contains(&star.opacity));
            assert!((8.0..20.0).contains(&star.size_px));
            assert_eq!(star.transform(), "translate(0.00px, 0.00px) rotate(0.0deg)");
        }
    }

    #[test]
    fn test_drift_keeps_anchor() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = StarField::scatter(8, &mut rng);
        let before = field.clone();

        field.drift(&mut rng);

        for (old, new) in before.markers().iter().zip(field.markers()) {
            assert_eq!(old.top_pct, new.top_pct);
            assert_eq!(old.left_pct, new.left_pct);
            assert_eq!(old.opacity, new.opacity);
            assert!(new.offset_x.abs() <= DRIFT_PX);
            assert!(new.offset_y.abs() <= DRIFT_PX);
            assert!((0.0..360.0).contains(&new.rotation_deg));
        }
        assert_ne!(before, field);
    }
}
