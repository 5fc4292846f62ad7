use super::*;

/// A fixed-dimensionality feature vector.
///
/// Input points carry unit weight. Folding points through [`Absorb`] keeps
/// the features equal to the weighted mean of everything absorbed so far,
/// which is how centroids are recomputed without a separate count buffer.
#[derive(Debug, Clone)]
pub struct Point {
    features: Vec<Energy>,
    weight: Energy,
}

impl From<Vec<Energy>> for Point {
    fn from(features: Vec<Energy>) -> Self {
        Self {
            features,
            weight: 1.,
        }
    }
}

impl Point {
    /// Number of features.
    pub fn dimension(&self) -> usize {
        self.features.len()
    }

    /// Feature values.
    pub fn features(&self) -> &[Energy] {
        &self.features
    }

    /// Euclidean distance to another point of the same dimensionality.
    pub fn distance(&self, other: &Self) -> Energy {
        debug_assert!(self.dimension() == other.dimension());
        self.features
            .iter()
            .zip(other.features.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<Energy>()
            .sqrt()
    }

    /// Feature-wise closeness under the crate's absolute + relative tolerance.
    pub fn close(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self
                .features
                .iter()
                .zip(other.features.iter())
                .all(|(a, b)| (a - b).abs() <= KMEANS_TOLERANCE_ABS + KMEANS_TOLERANCE_REL * b.abs())
    }
}

impl Absorb for Point {
    fn identity(&self) -> Self {
        Self {
            features: vec![0.; self.dimension()],
            weight: 0.,
        }
    }
    fn absorb(self, other: &Self) -> Self {
        let weight = self.weight + other.weight;
        if weight == 0. {
            return self;
        }
        let features = self
            .features
            .iter()
            .zip(other.features.iter())
            .map(|(a, b)| (a * self.weight + b * other.weight) / weight)
            .collect();
        Self { features, weight }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.features.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.1}", x)?;
        }
        write!(f, ")")
    }
}
