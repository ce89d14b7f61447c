//! # kmeans2d
//!
//! Planar k-means clustering with fixed-iteration Lloyd refinement and
//! per-iteration diagnostics.
//!
//! ## Features
//!
//! - **Fixed-iteration loop**: the run executes exactly the requested
//!   number of iterations; the diagnostic score is reported per iteration
//!   but never used to stop early
//! - **Deterministic assignment**: nearest-centroid lookup is a strict
//!   linear reduction, so ties always resolve to the lower centroid index
//! - **Reproducible seeding**: initial centroids are drawn as distinct
//!   input points from a seeded ChaCha generator, and every entry point has
//!   a variant accepting a caller-supplied random source
//! - **Explicit empty-cluster handling**: a cluster that loses all members
//!   fails the run by default; redrawing its centroid from the data is an
//!   opt-in policy
//! - **Parallel assignment**: per-point lookups inside a rebuild run on
//!   rayon without changing results
//!
//! ## Example
//!
//! ```rust
//! use kmeans2d::{run_clustering, ClusteringConfig, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 11.0),
//! ];
//!
//! let config = ClusteringConfig::new(2).with_iterations(3).with_seed(42);
//! let outcome = run_clustering(&points, &config).unwrap();
//!
//! let state = outcome.final_state.unwrap();
//! assert_eq!(state.clusters.len(), 2);
//! assert_eq!(state.point_count(), 4);
//! ```
//!
//! ## Model interface
//!
//! ```rust
//! use kmeans2d::{KMeans, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 11.0),
//! ];
//!
//! let mut model = KMeans::new(2, 3);
//! model.run(&points).unwrap();
//! let cluster = model.assign(Point::new(9.0, 9.0)).unwrap();
//! assert!(cluster < 2);
//! ```

mod algorithm;
mod cluster;
mod config;
mod distance;
mod error;
mod kmeans;
mod point;

pub use algorithm::{
    run_clustering, run_clustering_with_rng, run_from_centroids, ClusteringOutcome,
};
pub use cluster::{build_clusters, Cluster, ClusteringState};
pub use config::{ClusteringConfig, EmptyClusterPolicy};
pub use distance::{centroid, distance, nearest_centroid_index};
pub use error::ClusteringError;
pub use kmeans::KMeans;
pub use point::Point;
