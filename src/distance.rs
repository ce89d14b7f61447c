use crate::error::ClusteringError;
use crate::point::Point;

/// Euclidean distance between two points.
///
/// Symmetric and non-negative; zero exactly when the coordinates coincide.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Componentwise arithmetic mean of a point set.
///
/// # Errors
///
/// Returns [`ClusteringError::EmptyPointSet`] if `points` is empty; the
/// mean of zero points is undefined and callers must decide how to react.
pub fn centroid(points: &[Point]) -> Result<Point, ClusteringError> {
    if points.is_empty() {
        return Err(ClusteringError::EmptyPointSet);
    }

    let mut x = 0.0;
    let mut y = 0.0;
    for p in points {
        x += p.x;
        y += p.y;
    }

    let n = points.len() as f64;
    Ok(Point::new(x / n, y / n))
}

/// Find the index of the centroid nearest to `point` by linear scan.
///
/// The scan keeps a running minimum and only replaces it on a strictly
/// smaller distance, so when two centroids are equidistant the one with the
/// lower index wins.
///
/// # Errors
///
/// Returns [`ClusteringError::NoCentroids`] if `centroids` is empty.
pub fn nearest_centroid_index(
    centroids: &[Point],
    point: Point,
) -> Result<usize, ClusteringError> {
    if centroids.is_empty() {
        return Err(ClusteringError::NoCentroids);
    }

    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;

    for (index, &c) in centroids.iter().enumerate() {
        let dist = distance(c, point);
        if dist < best_dist {
            best_dist = dist;
            best_index = index;
        }
    }

    Ok(best_index)
}
