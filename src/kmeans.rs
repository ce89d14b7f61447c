use crate::algorithm::run_clustering;
use crate::cluster::{Cluster, ClusteringState};
use crate::config::ClusteringConfig;
use crate::distance::nearest_centroid_index;
use crate::error::ClusteringError;
use crate::point::Point;

/// Planar k-means model.
///
/// Wraps the engine behind a small train-then-query interface: configure,
/// [`run`](KMeans::run) on a point set, then read back the final clusters,
/// the per-iteration diagnostic scores, or the nearest trained centroid for
/// any point.
///
/// # Example
///
/// ```
/// use kmeans2d::{KMeans, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 11.0),
/// ];
///
/// let mut model = KMeans::new(2, 5);
/// model.run(&points).unwrap();
///
/// assert_eq!(model.clusters().unwrap().len(), 2);
/// assert_eq!(model.scores().len(), 5);
/// ```
pub struct KMeans {
    /// Model configuration
    config: ClusteringConfig,

    /// Per-iteration diagnostic scores of the last run
    scores: Vec<f64>,

    /// Final state of the last run (None before a run, or after a
    /// zero-iteration run)
    state: Option<ClusteringState>,
}

impl KMeans {
    /// Create a model with the given cluster count and iteration count.
    ///
    /// Validation happens at [`run`](KMeans::run): `k == 0` surfaces there
    /// as [`ClusteringError::InvalidK`].
    pub fn new(k: usize, iterations: usize) -> Self {
        Self {
            config: ClusteringConfig::new(k).with_iterations(iterations),
            scores: Vec::new(),
            state: None,
        }
    }

    /// Create a model with a custom configuration.
    pub fn with_config(config: ClusteringConfig) -> Self {
        Self {
            config,
            scores: Vec::new(),
            state: None,
        }
    }

    /// Run the clustering loop on `points`, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid for `points`
    /// (`k == 0`, empty input, `k` larger than the population) or if a
    /// cluster empties under the `Fail` policy. The previous state is
    /// discarded either way.
    pub fn run(&mut self, points: &[Point]) -> Result<(), ClusteringError> {
        self.scores.clear();
        self.state = None;

        let outcome = run_clustering(points, &self.config)?;
        self.scores = outcome.scores;
        self.state = outcome.final_state;

        Ok(())
    }

    /// Diagnostic score of each iteration of the last run.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Final state of the last run, if one exists.
    pub fn state(&self) -> Option<&ClusteringState> {
        self.state.as_ref()
    }

    /// Final clusters of the last run, if a state exists.
    pub fn clusters(&self) -> Option<&[Cluster]> {
        self.state.as_ref().map(|s| s.clusters.as_slice())
    }

    /// Centroids of the final clusters, if a state exists.
    pub fn centroids(&self) -> Option<Vec<Point>> {
        self.state.as_ref().map(ClusteringState::centroids)
    }

    /// Index of the trained centroid nearest to `point`.
    ///
    /// # Errors
    ///
    /// Returns [`ClusteringError::NotRun`] if no state exists yet.
    pub fn assign(&self, point: Point) -> Result<usize, ClusteringError> {
        let state = self.state.as_ref().ok_or(ClusteringError::NotRun)?;
        nearest_centroid_index(&state.centroids(), point)
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of iterations.
    pub fn iterations(&self) -> usize {
        self.config.iterations
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }
}
