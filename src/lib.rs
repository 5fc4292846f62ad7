//! Deterministic k-means segmentation over small numeric datasets.
//!
//! The crate clusters fixed-dimensionality feature vectors with Lloyd's
//! algorithm: assign every point to its nearest centroid, recompute each
//! centroid as the mean of its assigned points, repeat until the centroids
//! stop moving or the iteration budget runs out. Initialization samples
//! distinct points from a seeded generator, so identical inputs and seeds
//! produce identical clusterings.
//!
//! ## Core Types
//!
//! - [`Point`] — A feature vector with Euclidean distance
//! - [`Segmentation`] — A clustering run owning points, centers, and labels
//! - [`Clusters`] — The final centers and per-point labels
//!
//! ## Algorithms
//!
//! - [`Lloyd`] — Naive k-means iteration with tolerance-based convergence
//! - [`Absorb`] — Incremental centroid updates during clustering
//!
//! ## Extraction
//!
//! - [`Recognizer`] — Seam for an external entity-recognition collaborator
//! - [`person_names`] — Collects person spans per document
mod absorb;
mod error;
mod lloyd;
mod persons;
mod point;
mod segmentation;

pub use absorb::*;
pub use error::*;
pub use lloyd::*;
pub use persons::*;
pub use point::*;
pub use segmentation::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Distances, convergence thresholds, and feature values.
pub type Energy = f64;
/// Cluster index a point is currently assigned to.
pub type Label = usize;

// ============================================================================
// K-MEANS CLUSTERING
// Lloyd iteration parameters shared by the library, binaries, and tests.
// ============================================================================
/// Default seed for centroid initialization. Fixed so demo output is stable.
pub const KMEANS_SEED: u64 = 42;
/// Default Lloyd iteration budget; convergence usually stops us much earlier.
pub const KMEANS_ITERATIONS: usize = 20;
/// Absolute term of the centroid convergence tolerance.
pub const KMEANS_TOLERANCE_ABS: Energy = 1e-8;
/// Relative term of the centroid convergence tolerance.
pub const KMEANS_TOLERANCE_REL: Energy = 1e-5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Called once at the top of every binary.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
