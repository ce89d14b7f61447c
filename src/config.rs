/// What to do when a cluster loses all of its members during refinement.
///
/// The arithmetic mean of zero points is undefined, so the engine has to
/// make an explicit choice when it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Abort the run with [`ClusteringError::EmptyCluster`].
    ///
    /// [`ClusteringError::EmptyCluster`]: crate::ClusteringError::EmptyCluster
    #[default]
    Fail,

    /// Redraw the cluster's centroid uniformly at random from the input
    /// points and keep going.
    Reseed,
}

/// Configuration for a clustering run
#[derive(Debug, Clone)]
pub struct ClusteringConfig {
    /// Number of clusters
    pub k: usize,

    /// Number of refinement iterations to run. The loop always runs exactly
    /// this many times; there is no early stopping. Zero iterations produce
    /// no clustering state.
    pub iterations: usize,

    /// Random seed for the initial centroid draw (and for `Reseed` redraws)
    pub seed: u64,

    /// How to handle a cluster that ends up with zero members
    pub empty_cluster_policy: EmptyClusterPolicy,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            k: 2,
            iterations: 10,
            seed: 0,
            empty_cluster_policy: EmptyClusterPolicy::Fail,
        }
    }
}

impl ClusteringConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of refinement iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the empty-cluster policy
    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy;
        self
    }
}
