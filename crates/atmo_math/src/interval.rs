/// A closed parametric span `[min, max]` along a ray.
///
/// Intersectors report entry/exit distances as an interval. Either end
/// may be negative when the hit lies behind the ray origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Splits `[0, max]` into `count` equal segments and returns
    /// `(step, midpoints)`, the midpoint-rule sample positions.
    ///
    /// `count` must be non-zero.
    pub fn midpoints(&self, count: u32) -> (f32, impl Iterator<Item = f32>) {
        let step = self.max / count as f32;
        (step, (0..count).map(move |i| (i as f32 + 0.5) * step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoints_ignore_min() {
        // Marching always starts at the ray origin, not at the entry point.
        let (step, samples) = Interval::new(-4.0, 8.0).midpoints(4);
        let samples: Vec<f32> = samples.collect();

        assert_eq!(step, 2.0);
        assert_eq!(samples, vec![1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_midpoints_single_segment() {
        let (step, samples) = Interval::new(0.0, 3.0).midpoints(1);
        let samples: Vec<f32> = samples.collect();

        assert_eq!(step, 3.0);
        assert_eq!(samples, vec![1.5]);
    }
}
