use thiserror::Error;

/// Error types for the kmeans2d library
#[derive(Error, Debug)]
pub enum ClusteringError {
    /// The number of clusters k is invalid (must be > 0)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough data points for the requested number of clusters
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The input point set is empty
    #[error("Input point set is empty")]
    EmptyInput,

    /// A centroid was requested for zero points
    #[error("Cannot compute the centroid of an empty point set")]
    EmptyPointSet,

    /// A cluster lost all members during refinement
    #[error("Cluster {index} has no members to recompute a centroid from")]
    EmptyCluster { index: usize },

    /// Nearest-centroid lookup was called with zero centroids
    #[error("Nearest-centroid lookup requires at least one centroid")]
    NoCentroids,

    /// No clustering state has been produced yet
    #[error("No clustering state available. Call run() with at least one iteration first.")]
    NotRun,
}
