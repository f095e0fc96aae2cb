//! Axis bounds and per-iteration frames
//!
//! Rows are stored iteration-major, so frame `f` is the contiguous block
//! `[f * num_particles, (f + 1) * num_particles)`. Bounds are computed once
//! over the whole dump and shared by every frame, which keeps the camera
//! fixed for the whole animation.

use super::dataset::Dataset;
use ndarray::{s, ArrayView2};

/// Shared axis range for every frame (same range on x and y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min_limit: f64,
    pub max_limit: f64,
}

impl AxisBounds {
    /// `floor(min) + 1` and `floor(max) + 1` over both columns jointly.
    ///
    /// Returns None for a dump without rows.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        Self::from_points(dataset.points())
    }

    pub fn from_points(points: ArrayView2<'_, f64>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Some(Self {
            min_limit: min.floor() + 1.0,
            max_limit: max.floor() + 1.0,
        })
    }

    /// Range handed to the plotting backend.
    ///
    /// When all values share one integer floor the limits coincide, so the
    /// drawn range is widened by one unit.
    pub fn plot_range(&self) -> (f64, f64) {
        if self.max_limit > self.min_limit {
            (self.min_limit, self.max_limit)
        } else {
            (self.min_limit, self.min_limit + 1.0)
        }
    }
}

/// Positions of all particles at one iteration
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub index: usize,
    pub points: ArrayView2<'a, f64>,
}

impl Frame<'_> {
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Owned `(x, y)` pairs in file order
    pub fn to_points(&self) -> Vec<(f64, f64)> {
        self.points
            .outer_iter()
            .map(|row| (row[0], row[1]))
            .collect()
    }
}

/// Select the rows of iteration `index`, or None when the dump is too short
pub fn frame(dataset: &Dataset, num_particles: usize, index: usize) -> Option<Frame<'_>> {
    let start = index.checked_mul(num_particles)?;
    let end = start.checked_add(num_particles)?;
    if end > dataset.rows() {
        return None;
    }

    Some(Frame {
        index,
        points: dataset.points().slice_move(s![start..end, ..]),
    })
}

/// Frames `0..num_iters` in order.
///
/// Stops early if the dump runs out of rows; callers validate the shape
/// first (`Dataset::validate_shape`) so that never happens silently.
pub fn frames(
    dataset: &Dataset,
    num_particles: usize,
    num_iters: usize,
) -> impl Iterator<Item = Frame<'_>> {
    (0..num_iters).map_while(move |index| frame(dataset, num_particles, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[(f64, f64)]) -> Dataset {
        let mut text = String::from("header\n");
        for (x, y) in rows {
            text.push_str(&format!("{} {}\n", x, y));
        }
        Dataset::parse(&text).unwrap()
    }

    #[test]
    fn test_bounds_span() {
        let ds = dataset(&[(-3.7, 0.2), (4.9, 12.3), (1.0, -0.5)]);
        let bounds = AxisBounds::from_dataset(&ds).unwrap();
        assert_eq!(bounds.min_limit, -3.0); // floor(-3.7) + 1
        assert_eq!(bounds.max_limit, 13.0); // floor(12.3) + 1
        assert_eq!(bounds.plot_range(), (-3.0, 13.0));
    }

    #[test]
    fn test_bounds_single_point() {
        let ds = dataset(&[(2.5, -1.0)]);
        let bounds = AxisBounds::from_dataset(&ds).unwrap();
        assert_eq!(bounds.min_limit, 0.0);
        assert_eq!(bounds.max_limit, 3.0);
    }

    #[test]
    fn test_bounds_degenerate_range() {
        let ds = dataset(&[(0.25, 0.75)]);
        let bounds = AxisBounds::from_dataset(&ds).unwrap();
        assert_eq!(bounds.min_limit, 1.0);
        assert_eq!(bounds.max_limit, 1.0);
        assert_eq!(bounds.plot_range(), (1.0, 2.0));
    }

    #[test]
    fn test_bounds_empty() {
        assert!(AxisBounds::from_dataset(&dataset(&[])).is_none());
    }

    #[test]
    fn test_frame_slicing() {
        let rows: Vec<(f64, f64)> = (0..6).map(|i| (i as f64, -(i as f64))).collect();
        let ds = dataset(&rows);

        let f0 = frame(&ds, 3, 0).unwrap();
        assert_eq!(f0.index, 0);
        assert_eq!(f0.to_points(), rows[0..3].to_vec());

        let f1 = frame(&ds, 3, 1).unwrap();
        assert_eq!(f1.index, 1);
        assert_eq!(f1.to_points(), rows[3..6].to_vec());

        assert!(frame(&ds, 3, 2).is_none());
    }

    #[test]
    fn test_frames_in_order() {
        let rows: Vec<(f64, f64)> = (0..8).map(|i| (i as f64, 0.0)).collect();
        let ds = dataset(&rows);

        let collected: Vec<_> = frames(&ds, 2, 4).collect();
        assert_eq!(collected.len(), 4);
        for (i, f) in collected.iter().enumerate() {
            assert_eq!(f.index, i);
            assert_eq!(f.len(), 2);
            assert_eq!(f.points[[0, 0]], (2 * i) as f64);
        }
    }

    #[test]
    fn test_frames_stop_when_rows_run_out() {
        let rows: Vec<(f64, f64)> = (0..5).map(|i| (i as f64, 0.0)).collect();
        let ds = dataset(&rows);
        assert_eq!(frames(&ds, 2, 4).count(), 2);
    }

    #[test]
    fn test_frame_index_overflow() {
        let ds = dataset(&[(1.0, 1.0)]);
        assert!(frame(&ds, usize::MAX, 2).is_none());
    }
}
