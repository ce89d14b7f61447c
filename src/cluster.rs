use crate::distance::{distance, nearest_centroid_index};
use crate::error::ClusteringError;
use crate::point::Point;
use rayon::prelude::*;

/// One cluster: a centroid and the points currently assigned to it.
///
/// Members keep their relative order of appearance in the input point set.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// The cluster's representative point
    pub centroid: Point,

    /// Points assigned to this cluster, in input order
    pub members: Vec<Point>,
}

impl Cluster {
    fn new(centroid: Point) -> Self {
        Self {
            centroid,
            members: Vec::new(),
        }
    }

    /// Number of member points
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the cluster has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The outcome of one rebuild: the cluster partition and its diagnostic
/// score.
///
/// A state is built fresh on every iteration and never mutated afterwards;
/// only its centroids feed into the next iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringState {
    /// Clusters in centroid order
    pub clusters: Vec<Cluster>,

    /// Sum over all clusters, over all members, of the member-to-centroid
    /// distance (plain distances, not squared). Diagnostic only; never used
    /// to decide termination.
    pub score: f64,
}

impl ClusteringState {
    /// Build the partition for `centroids` and compute its score.
    pub fn build(centroids: &[Point], points: &[Point]) -> Result<Self, ClusteringError> {
        let clusters = build_clusters(centroids, points)?;

        let score = clusters
            .iter()
            .map(|cluster| {
                cluster
                    .members
                    .iter()
                    .map(|&p| distance(p, cluster.centroid))
                    .sum::<f64>()
            })
            .sum();

        Ok(Self { clusters, score })
    }

    /// Total number of points across all clusters
    pub fn point_count(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }

    /// The centroid of each cluster, in cluster order
    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }
}

/// Partition `points` into one cluster per centroid.
///
/// Clusters come out in centroid order and may be empty. Every input point
/// lands in exactly one cluster, and members keep their input order. The
/// per-point lookups are independent, so they run on a parallel iterator;
/// grouping then happens sequentially in input order, so the result is
/// identical to a serial scan.
///
/// # Errors
///
/// Returns [`ClusteringError::NoCentroids`] if `centroids` is empty.
pub fn build_clusters(
    centroids: &[Point],
    points: &[Point],
) -> Result<Vec<Cluster>, ClusteringError> {
    if centroids.is_empty() {
        return Err(ClusteringError::NoCentroids);
    }

    let assignments: Vec<usize> = points
        .par_iter()
        .map(|&p| nearest_centroid_index(centroids, p))
        .collect::<Result<_, _>>()?;

    let mut clusters: Vec<Cluster> = centroids.iter().map(|&c| Cluster::new(c)).collect();
    for (&point, &index) in points.iter().zip(&assignments) {
        clusters[index].members.push(point);
    }

    Ok(clusters)
}
