use super::*;
use rayon::prelude::*;

/// Naive k-means iteration with tolerance-based convergence.
///
/// Implements Lloyd's algorithm against accessor methods so the runner owns
/// the buffers. Each iteration fully reassigns every point to its nearest
/// center, then recomputes each center as the mean of its assigned points.
///
/// # Implementation
///
/// - `assign()` — Full per-point reassignment, parallelized across points
/// - `centroids()` — Mean recomputation via [`Absorb`] folds
/// - `converged()` — Feature-wise closeness between center generations
///
/// # Determinism
///
/// Ties in `neighbor()` resolve to the lowest center index, so the labeling
/// is a pure function of the points and the current centers. Parallelism
/// only spreads independent per-point work; it cannot reorder results.
pub trait Lloyd: Sync {
    /// Point type that can be absorbed into centroids.
    type P: Absorb + Clone + Send + Sync;
    /// Returns the data points to cluster.
    fn points(&self) -> &[Self::P];
    /// Returns current center positions.
    fn centers(&self) -> &[Self::P];
    /// Computes distance between two points.
    fn distance(&self, a: &Self::P, b: &Self::P) -> Energy;
    /// Tolerance-based closeness between an old and a new center.
    fn close(&self, old: &Self::P, new: &Self::P) -> bool;

    /// Number of clusters.
    fn k(&self) -> usize {
        self.centers().len()
    }
    /// Number of points.
    fn n(&self) -> usize {
        self.points().len()
    }
    /// Gets point by index.
    fn point(&self, i: usize) -> &Self::P {
        &self.points()[i]
    }
    /// Gets center by index.
    fn center(&self, j: usize) -> &Self::P {
        &self.centers()[j]
    }

    /// Finds the nearest center for a point (O(k) distance calls).
    /// Ties resolve to the lowest center index.
    fn neighbor(&self, x: &Self::P) -> (Label, Energy) {
        self.centers()
            .iter()
            .enumerate()
            .map(|(j, c)| (j, self.distance(c, x)))
            .inspect(|(_, d)| debug_assert!(d.is_finite()))
            .fold((0, Energy::INFINITY), |best, (j, d)| {
                if d < best.1 { (j, d) } else { best }
            })
    }

    /// Assigns every point to its nearest center.
    fn assign(&self) -> Vec<Label> {
        self.points()
            .par_iter()
            .map(|x| self.neighbor(x).0)
            .collect::<Vec<Label>>()
    }

    /// Computes new centers from the given assignment. A center with no
    /// assigned points keeps its previous position.
    fn centroids(&self, labels: &[Label]) -> Vec<Self::P> {
        self.centers()
            .iter()
            .enumerate()
            .map(|(j, old)| match labels.iter().any(|l| *l == j) {
                false => old.clone(),
                true => labels
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| **l == j)
                    .map(|(i, _)| self.point(i))
                    .fold(old.identity(), Self::P::absorb),
            })
            .collect::<Vec<Self::P>>()
    }

    /// Whether every new center is within tolerance of its predecessor.
    fn converged(&self, next: &[Self::P]) -> bool {
        self.centers()
            .iter()
            .zip(next.iter())
            .all(|(old, new)| self.close(old, new))
    }

    /// Root-mean-square point-to-center distance under the given assignment.
    fn rms(&self, labels: &[Label]) -> Energy {
        (labels
            .par_iter()
            .enumerate()
            .map(|(i, j)| self.distance(self.point(i), self.center(*j)))
            .map(|d| d * d)
            .sum::<Energy>()
            / self.n() as Energy)
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equidistant_points_take_the_lowest_center_index() {
        let points = vec![Point::from(vec![0.]), Point::from(vec![2.])];
        let centers = vec![Point::from(vec![0.]), Point::from(vec![2.])];
        let run = Segmentation::from_centers(points, centers, 1).unwrap();
        let (label, distance) = run.neighbor(&Point::from(vec![1.]));
        assert_eq!(label, 0);
        assert_eq!(distance, 1.);
    }

    #[test]
    fn assignment_matches_per_point_neighbors() {
        let points = vec![
            Point::from(vec![0., 0.]),
            Point::from(vec![9., 9.]),
            Point::from(vec![1., 1.]),
        ];
        let centers = vec![Point::from(vec![0., 0.]), Point::from(vec![10., 10.])];
        let run = Segmentation::from_centers(points, centers, 1).unwrap();
        assert_eq!(run.assign(), vec![0, 1, 0]);
    }
}
