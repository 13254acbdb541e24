use serde::Serialize;

/// Evaluated (x, y) points in grid order.
///
/// Built fresh by every evaluation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

impl Curve {
    pub(crate) fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Points as `(x, y)` tuples, the shape chart widgets consume
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, y)| *y)
    }

    /// y at the grid point closest to `x`, if one lies within `tolerance`
    pub fn y_at(&self, x: f64, tolerance: f64) -> Option<f64> {
        self.points
            .iter()
            .filter(|(px, _)| (px - x).abs() <= tolerance)
            .min_by(|a, b| (a.0 - x).abs().total_cmp(&(b.0 - x).abs()))
            .map(|(_, y)| *y)
    }

    /// `(min, max)` of the x values
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.0;
        let last = self.points.last()?.0;
        Some((first, last))
    }

    /// `(min, max)` of the y values, ignoring NaN
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.ys().filter(|y| !y.is_nan()).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_at_nearest_within_tolerance() {
        let curve = Curve::new(vec![(0.0, 1.0), (0.5, 2.0), (1.0, 3.0)]);
        assert_eq!(curve.y_at(0.5, 1e-9), Some(2.0));
        assert_eq!(curve.y_at(0.52, 0.05), Some(2.0));
        assert_eq!(curve.y_at(0.25, 0.01), None);
    }

    #[test]
    fn test_bounds() {
        let curve = Curve::new(vec![(-1.0, 0.3), (0.0, 0.9), (1.0, 0.1)]);
        assert_eq!(curve.x_bounds(), Some((-1.0, 1.0)));
        assert_eq!(curve.y_bounds(), Some((0.1, 0.9)));
    }

    #[test]
    fn test_empty_bounds() {
        let curve = Curve::new(Vec::new());
        assert!(curve.is_empty());
        assert_eq!(curve.x_bounds(), None);
        assert_eq!(curve.y_bounds(), None);
    }
}
