//! Segment Binary
//!
//! Clusters the demo retail customer dataset and prints the resulting
//! segments. Each customer has two features: average monthly spend (USD)
//! and number of monthly purchases.
//!
//! Options: --k, --iterations, --seed

use centroids::*;
use clap::Parser;

/// (average monthly spend, monthly purchases) per customer.
const CUSTOMERS: [[f64; 2]; 9] = [
    [35., 2.],
    [40., 3.],
    [45., 2.],
    [120., 4.],
    [135., 5.],
    [150., 6.],
    [300., 8.],
    [320., 9.],
    [340., 8.],
];

#[derive(Parser)]
#[command(about = "segment the demo customers with k-means")]
struct Args {
    /// Number of clusters.
    #[arg(long, default_value_t = 3)]
    k: usize,
    /// Lloyd iteration budget.
    #[arg(long, default_value_t = KMEANS_ITERATIONS)]
    iterations: usize,
    /// Seed for centroid initialization.
    #[arg(long, default_value_t = KMEANS_SEED)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let points = CUSTOMERS
        .iter()
        .map(|p| Point::from(p.to_vec()))
        .collect::<Vec<Point>>();
    let clusters = Segmentation::seeded(points, args.k, args.iterations, args.seed)?.solve();
    println!("Cluster centers (avg spend, purchases):");
    for (i, center) in clusters.centers().iter().enumerate() {
        println!(
            "  Cluster {}: spend=${:.1}, purchases={:.1}",
            i + 1,
            center.features()[0],
            center.features()[1]
        );
    }
    println!();
    println!("Customer assignments:");
    for (customer, label) in CUSTOMERS.iter().zip(clusters.labels()) {
        println!(
            "  Customer [{}, {}] -> Cluster {}",
            customer[0],
            customer[1],
            label + 1
        );
    }
    Ok(())
}
