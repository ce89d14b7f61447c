use crate::cluster::ClusteringState;
use crate::config::{ClusteringConfig, EmptyClusterPolicy};
use crate::distance::centroid;
use crate::error::ClusteringError;
use crate::point::Point;
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Result of a clustering run
#[derive(Debug, Clone)]
pub struct ClusteringOutcome {
    /// Diagnostic score of each executed iteration, in order
    pub scores: Vec<f64>,

    /// The state produced by the last rebuild, or `None` if zero iterations
    /// ran
    pub final_state: Option<ClusteringState>,
}

impl ClusteringOutcome {
    /// Number of iterations that actually ran
    pub fn iterations_run(&self) -> usize {
        self.scores.len()
    }
}

/// Run the fixed-iteration Lloyd loop with a ChaCha RNG seeded from
/// `config.seed`.
///
/// Iteration 0 seeds the centroids by drawing `config.k` distinct points
/// uniformly without replacement from `points`; every later iteration
/// recomputes each cluster's centroid as the mean of its members and
/// rebuilds the partition. The loop runs exactly `config.iterations` times
/// with no early stopping.
pub fn run_clustering(
    points: &[Point],
    config: &ClusteringConfig,
) -> Result<ClusteringOutcome, ClusteringError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    run_clustering_with_rng(points, config, &mut rng)
}

/// Same as [`run_clustering`], but with a caller-supplied random source.
pub fn run_clustering_with_rng<R: Rng + ?Sized>(
    points: &[Point],
    config: &ClusteringConfig,
    rng: &mut R,
) -> Result<ClusteringOutcome, ClusteringError> {
    validate(points, config.k)?;

    if config.iterations == 0 {
        return Ok(ClusteringOutcome {
            scores: Vec::new(),
            final_state: None,
        });
    }

    let initial = seed_centroids(points, config.k, rng);
    debug!("seeded {} centroids from {} points", initial.len(), points.len());

    run_from_centroids(
        points,
        initial,
        config.iterations,
        config.empty_cluster_policy,
        rng,
    )
}

/// Run the refinement loop from caller-supplied initial centroids.
///
/// This enters the state machine at the seeded stage, which makes the whole
/// loop deterministic for a fixed centroid choice; the random source is
/// only consulted for `Reseed` redraws.
pub fn run_from_centroids<R: Rng + ?Sized>(
    points: &[Point],
    initial_centroids: Vec<Point>,
    iterations: usize,
    policy: EmptyClusterPolicy,
    rng: &mut R,
) -> Result<ClusteringOutcome, ClusteringError> {
    let mut scores = Vec::with_capacity(iterations);
    let mut state: Option<ClusteringState> = None;
    let mut centroids = initial_centroids;

    for iteration in 0..iterations {
        // Iteration 0 uses the seeded centroids as-is; afterwards each
        // cluster's centroid becomes the mean of its members.
        if let Some(prev) = &state {
            centroids = next_centroids(prev, points, policy, rng)?;
        }

        let next = ClusteringState::build(&centroids, points)?;
        debug!(
            "iteration {}/{}: sum of distances = {:.6}",
            iteration + 1,
            iterations,
            next.score
        );

        scores.push(next.score);
        state = Some(next);
    }

    Ok(ClusteringOutcome {
        scores,
        final_state: state,
    })
}

fn validate(points: &[Point], k: usize) -> Result<(), ClusteringError> {
    if k == 0 {
        return Err(ClusteringError::InvalidK(
            "k must be greater than 0".to_string(),
        ));
    }

    if points.is_empty() {
        return Err(ClusteringError::EmptyInput);
    }

    if points.len() < k {
        return Err(ClusteringError::InsufficientData(format!(
            "Number of points ({}) is less than k ({})",
            points.len(),
            k
        )));
    }

    Ok(())
}

/// Draw k distinct points uniformly without replacement as the initial
/// centroids.
fn seed_centroids<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
    points.choose_multiple(rng, k).copied().collect()
}

fn next_centroids<R: Rng + ?Sized>(
    prev: &ClusteringState,
    points: &[Point],
    policy: EmptyClusterPolicy,
    rng: &mut R,
) -> Result<Vec<Point>, ClusteringError> {
    let mut centroids = Vec::with_capacity(prev.clusters.len());

    for (index, cluster) in prev.clusters.iter().enumerate() {
        let next = if cluster.is_empty() {
            match policy {
                EmptyClusterPolicy::Fail => {
                    return Err(ClusteringError::EmptyCluster { index });
                }
                EmptyClusterPolicy::Reseed => {
                    debug!("cluster {} is empty, redrawing its centroid", index);
                    *points.choose(rng).ok_or(ClusteringError::EmptyInput)?
                }
            }
        } else {
            centroid(&cluster.members)?
        };

        centroids.push(next);
    }

    Ok(centroids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_points(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(i as f64, (i * i) as f64))
            .collect()
    }

    #[test]
    fn test_seed_centroids_distinct() {
        let points = grid_points(50);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let seeds = seed_centroids(&points, 5, &mut rng);

        assert_eq!(seeds.len(), 5);
        for (i, a) in seeds.iter().enumerate() {
            assert!(points.contains(a));
            for b in &seeds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_run_clustering_basic() {
        let points = grid_points(40);
        let config = ClusteringConfig::new(4)
            .with_iterations(5)
            .with_seed(42)
            .with_empty_cluster_policy(EmptyClusterPolicy::Reseed);

        let outcome = run_clustering(&points, &config).unwrap();

        assert_eq!(outcome.iterations_run(), 5);
        let state = outcome.final_state.unwrap();
        assert_eq!(state.clusters.len(), 4);
        assert_eq!(state.point_count(), 40);
    }

    #[test]
    fn test_zero_iterations_produce_no_state() {
        let points = grid_points(10);
        let config = ClusteringConfig::new(2).with_iterations(0);

        let outcome = run_clustering(&points, &config).unwrap();

        assert!(outcome.scores.is_empty());
        assert!(outcome.final_state.is_none());
    }

    #[test]
    fn test_invalid_k() {
        let points = grid_points(10);
        let config = ClusteringConfig::new(0).with_iterations(3);

        let result = run_clustering(&points, &config);
        assert!(matches!(result, Err(ClusteringError::InvalidK(_))));
    }

    #[test]
    fn test_empty_input() {
        let config = ClusteringConfig::new(2).with_iterations(3);

        let result = run_clustering(&[], &config);
        assert!(matches!(result, Err(ClusteringError::EmptyInput)));
    }

    #[test]
    fn test_k_larger_than_population() {
        let points = grid_points(3);
        let config = ClusteringConfig::new(5).with_iterations(3);

        let result = run_clustering(&points, &config);
        assert!(matches!(result, Err(ClusteringError::InsufficientData(_))));
    }

    #[test]
    fn test_empty_cluster_fails_by_default() {
        // The far centroid gets no members in iteration 0, so the first
        // refinement has to surface it.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let initial = vec![Point::new(0.3, 0.3), Point::new(100.0, 100.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_from_centroids(&points, initial, 2, EmptyClusterPolicy::Fail, &mut rng);
        assert!(matches!(
            result,
            Err(ClusteringError::EmptyCluster { index: 1 })
        ));
    }

    #[test]
    fn test_empty_cluster_reseed_keeps_k() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let initial = vec![Point::new(0.3, 0.3), Point::new(100.0, 100.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let outcome =
            run_from_centroids(&points, initial, 4, EmptyClusterPolicy::Reseed, &mut rng).unwrap();

        let state = outcome.final_state.unwrap();
        assert_eq!(state.clusters.len(), 2);
        assert_eq!(state.point_count(), 3);
    }
}
