use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Clusters points into `k` groups within `t` Lloyd iterations.
///
/// Convenience wrapper over [`Segmentation`] using the default seed.
pub fn cluster(points: Vec<Point>, k: usize, t: usize) -> Result<Clusters, Error> {
    Ok(Segmentation::new(points, k, t)?.solve())
}

/// The result of a clustering run: exactly `k` centers and one label per
/// input point, each label in `[0, k)`.
#[derive(Debug, Clone)]
pub struct Clusters {
    centers: Vec<Point>,
    labels: Vec<Label>,
}

impl Clusters {
    /// Final center positions, one per cluster.
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }
    /// Final assignment, one label per input point.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

/// A single clustering run over an owned dataset.
///
/// Centers are either sampled from the points by a seeded generator
/// ([`Segmentation::new`]) or supplied by the caller
/// ([`Segmentation::from_centers`], e.g. to resume from a previous result).
/// All invalid-argument conditions are rejected at construction, before any
/// iteration happens.
pub struct Segmentation {
    points: Vec<Point>,
    centers: Vec<Point>,
    t: usize,
}

impl Segmentation {
    /// Validates the dataset and samples `k` distinct initial centers with
    /// the default seed.
    pub fn new(points: Vec<Point>, k: usize, t: usize) -> Result<Self, Error> {
        Self::seeded(points, k, t, KMEANS_SEED)
    }

    /// Validates the dataset and samples `k` distinct initial centers
    /// uniformly without replacement from the given seed.
    pub fn seeded(points: Vec<Point>, k: usize, t: usize, seed: u64) -> Result<Self, Error> {
        Self::validated(&points, k)?;
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let centers = rand::seq::index::sample(rng, points.len(), k)
            .into_iter()
            .map(|i| points[i].clone())
            .collect::<Vec<Point>>();
        Ok(Self { points, centers, t })
    }

    /// Starts from caller-supplied centers, bypassing random sampling.
    pub fn from_centers(points: Vec<Point>, centers: Vec<Point>, t: usize) -> Result<Self, Error> {
        Self::validated(&points, centers.len())?;
        for (i, c) in centers.iter().enumerate() {
            if c.dimension() != points[0].dimension() {
                return Err(Error::Dimension {
                    index: i,
                    expected: points[0].dimension(),
                    found: c.dimension(),
                });
            }
        }
        Ok(Self { points, centers, t })
    }

    /// Runs Lloyd iterations until the centers stabilize or the budget is
    /// exhausted, consuming the run.
    pub fn solve(mut self) -> Clusters {
        log::info!("{:<32}{:<32}", "kmeans iterating", format!("k = {}", self.k()));
        let mut labels = self.assign();
        for i in 0..self.t {
            let next = self.centroids(&labels);
            log::debug!("{:3} rms {:.6}", i, self.rms(&labels));
            if self.converged(&next) {
                break;
            }
            self.centers = next;
            labels = self.assign();
        }
        Clusters {
            centers: self.centers,
            labels,
        }
    }

    /// Rejects out-of-range cluster counts and ragged dimensionality.
    fn validated(points: &[Point], k: usize) -> Result<(), Error> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyPoints);
        }
        if k == 0 || k > n {
            return Err(Error::ClusterCount { k, n });
        }
        let expected = points[0].dimension();
        for (index, p) in points.iter().enumerate() {
            if p.dimension() != expected {
                return Err(Error::Dimension {
                    index,
                    expected,
                    found: p.dimension(),
                });
            }
        }
        Ok(())
    }
}

impl Lloyd for Segmentation {
    type P = Point;

    fn points(&self) -> &[Point] {
        &self.points
    }
    fn centers(&self) -> &[Point] {
        &self.centers
    }
    fn distance(&self, a: &Point, b: &Point) -> Energy {
        a.distance(b)
    }
    fn close(&self, old: &Point, new: &Point) -> bool {
        old.close(new)
    }
}
