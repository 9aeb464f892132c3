//! # Density Clustering (DBSCAN)
//!
//! Groups a noisy screen-space point cloud into dense regions.
//!
//! ## Algorithm
//!
//! 1. Compute every point's neighborhood (points within `radius`, itself included)
//! 2. Visit points in input order; a point with at least `min_points`
//!    neighbors is a core point and seeds a new cluster
//! 3. Expand the cluster breadth-first from its seed: every reached point
//!    joins the cluster, and reached core points push their own neighbors
//! 4. Points reached by no core point are noise and are dropped
//!
//! Expansion order is fully determined by input order, so identical input
//! yields identical clusters in identical order. A point belongs to the first
//! cluster that reaches it. A cluster left with fewer than `min_points`
//! members (because its border points were claimed earlier) is not emitted.

mod neighbors;


pub use neighbors::DistanceFn;

use std::collections::VecDeque;

use config::constants::ClusterConfig;
use outline_geometry::{distance2, Point2};
use tracing::debug;

use crate::error::AnalysisResult;

/// A dense group of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    indices: Vec<usize>,
    points: Vec<Point2>,
}

impl Cluster {
    /// Member points, in the order the expansion reached them.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Indices of the members in the clustered input, parallel to [`Cluster::points`].
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cluster has no members. Never true for emitted clusters.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Clusters produced by one clustering run, in discovery order.
pub type ClusterSet = Vec<Cluster>;

/// Full result of one clustering run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clustering {
    /// Emitted clusters, in discovery order.
    pub clusters: ClusterSet,
    /// Input indices reached by no core point, ascending.
    pub noise: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Unvisited,
    Noise,
    Member,
}

/// Configured DBSCAN engine.
///
/// # Examples
/// ```
/// use config::constants::ClusterConfig;
/// use outline_analysis::Dbscan;
/// use outline_geometry::Point2;
///
/// let dbscan = Dbscan::new(ClusterConfig::new(2.0, 3).unwrap());
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(50.0, 50.0), // noise
/// ];
/// let clusters = dbscan.clusters(&points);
/// assert_eq!(clusters.len(), 1);
/// assert_eq!(clusters[0].len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dbscan<D = fn(Point2, Point2) -> f64> {
    config: ClusterConfig,
    distance: D,
}

impl Dbscan {
    /// Engine using Euclidean screen distance.
    pub fn new(config: ClusterConfig) -> Self {
        Self {
            config,
            distance: distance2,
        }
    }
}

impl<D: DistanceFn> Dbscan<D> {
    /// Engine using a caller-supplied distance function.
    pub fn with_distance(config: ClusterConfig, distance: D) -> Self {
        Self { config, distance }
    }

    /// The clustering parameters.
    pub fn config(&self) -> ClusterConfig {
        self.config
    }

    /// Clusters `points`, discarding noise.
    pub fn clusters(&self, points: &[Point2]) -> ClusterSet {
        self.classify(points).clusters
    }

    /// Clusters `points` and reports which inputs were noise.
    ///
    /// Members of undersized clusters are neither emitted nor noise.
    pub fn classify(&self, points: &[Point2]) -> Clustering {
        if points.is_empty() {
            return Clustering::default();
        }

        let min_points = self.config.min_points;
        let table = neighbors::neighbor_table(points, self.config.radius, &self.distance);
        let is_core = |i: usize| table[i].len() >= min_points;

        let mut labels = vec![Label::Unvisited; points.len()];
        let mut clusters = ClusterSet::new();
        let mut undersized = 0usize;

        for seed in 0..points.len() {
            if labels[seed] != Label::Unvisited {
                continue;
            }
            if !is_core(seed) {
                labels[seed] = Label::Noise;
                continue;
            }

            labels[seed] = Label::Member;
            let mut indices = vec![seed];
            let mut queue: VecDeque<usize> = table[seed].iter().copied().filter(|&j| j != seed).collect();

            while let Some(j) = queue.pop_front() {
                let label = labels[j];
                match label {
                    Label::Member => {}
                    Label::Noise => {
                        // Border point: joins, does not expand.
                        labels[j] = Label::Member;
                        indices.push(j);
                    }
                    Label::Unvisited => {
                        labels[j] = Label::Member;
                        indices.push(j);
                        if is_core(j) {
                            queue.extend(
                                table[j]
                                    .iter()
                                    .copied()
                                    .filter(|&k| labels[k] != Label::Member),
                            );
                        }
                    }
                }
            }

            if indices.len() < min_points {
                undersized += 1;
                continue;
            }
            let members = indices.iter().map(|&i| points[i]).collect();
            clusters.push(Cluster {
                indices,
                points: members,
            });
        }

        let noise: Vec<usize> = (0..points.len()).filter(|&i| labels[i] == Label::Noise).collect();

        debug!(
            points = points.len(),
            clusters = clusters.len(),
            noise = noise.len(),
            undersized,
            "density clustering finished"
        );
        Clustering { clusters, noise }
    }
}

/// One-shot clustering with explicit parameters.
///
/// # Errors
///
/// `InvalidParameter` when `min_points` is zero or `radius` is not a
/// positive finite number.
pub fn cluster<D: DistanceFn>(
    points: &[Point2],
    radius: f64,
    min_points: usize,
    distance: D,
) -> AnalysisResult<ClusterSet> {
    let config = ClusterConfig::new(radius, min_points)?;
    Ok(Dbscan::with_distance(config, distance).clusters(points))
}
