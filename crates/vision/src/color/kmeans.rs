//! Lloyd's k-means over RGB points with k-means++ seeding and restarts.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Result, VisionError};

pub type Point = [f64; 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansConfig {
    pub clusters: usize,
    /// Independent runs; the lowest-inertia run is kept
    pub restarts: usize,
    pub max_iter: usize,
    /// Relative to the mean per-channel variance of the data
    pub tolerance: f64,
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            clusters: KMEANS_CLUSTERS,
            restarts: KMEANS_RESTARTS,
            max_iter: KMEANS_MAX_ITER,
            tolerance: KMEANS_TOLERANCE,
            seed: KMEANS_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    pub centroids: Vec<Point>,
    /// Cluster index per input point
    pub labels: Vec<usize>,
    /// Sum of squared distances to the assigned centroid
    pub inertia: f64,
}

impl Clustering {
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.centroids.len()];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Centroid of the most populated cluster; ties go to the lower index
    pub fn dominant(&self) -> Option<Point> {
        let counts = self.counts();
        let mut best: Option<usize> = None;
        for (i, &count) in counts.iter().enumerate() {
            if best.is_none_or(|b| count > counts[b]) {
                best = Some(i);
            }
        }
        best.map(|i| self.centroids[i])
    }
}

pub fn kmeans(points: &[Point], config: &KMeansConfig) -> Result<Clustering> {
    if points.is_empty() {
        return Err(VisionError::Clustering("no points to cluster".to_string()));
    }
    if config.clusters == 0 {
        return Err(VisionError::Clustering("cluster count must be positive".to_string()));
    }

    let clusters = config.clusters.min(points.len());
    let tolerance = config.tolerance * mean_variance(points);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut best: Option<Clustering> = None;
    for _ in 0..config.restarts.max(1) {
        let seeds = plus_plus_init(points, clusters, &mut rng);
        let run = lloyd(points, seeds, config.max_iter, tolerance);
        if best.as_ref().is_none_or(|b| run.inertia < b.inertia) {
            best = Some(run);
        }
    }

    best.ok_or_else(|| VisionError::Clustering("no clustering run completed".to_string()))
}

fn squared_distance(a: &Point, b: &Point) -> f64 {
    (0..3).map(|i| (a[i] - b[i]).powi(2)).sum()
}

fn nearest(point: &Point, centroids: &[Point]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(point, centroid);
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

fn mean_variance(points: &[Point]) -> f64 {
    let n = points.len() as f64;
    let mut total = 0.0;
    for channel in 0..3 {
        let mean = points.iter().map(|p| p[channel]).sum::<f64>() / n;
        total += points.iter().map(|p| (p[channel] - mean).powi(2)).sum::<f64>() / n;
    }
    total / 3.0
}

/// k-means++ seeding: each new seed is drawn proportionally to its squared
/// distance from the closest seed so far.
fn plus_plus_init<R: Rng + ?Sized>(points: &[Point], clusters: usize, rng: &mut R) -> Vec<Point> {
    let mut centroids = Vec::with_capacity(clusters);
    centroids.push(points[rng.random_range(0..points.len())]);

    let mut distances: Vec<f64> = points.iter().map(|p| squared_distance(p, &centroids[0])).collect();

    while centroids.len() < clusters {
        let total: f64 = distances.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.random::<f64>() * total;
            let mut chosen = points.len() - 1;
            for (i, &d) in distances.iter().enumerate() {
                if target < d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            // every point coincides with a seed
            rng.random_range(0..points.len())
        };

        let seed = points[next];
        for (distance, point) in distances.iter_mut().zip(points) {
            *distance = distance.min(squared_distance(point, &seed));
        }
        centroids.push(seed);
    }

    centroids
}

fn lloyd(points: &[Point], mut centroids: Vec<Point>, max_iter: usize, tolerance: f64) -> Clustering {
    let k = centroids.len();
    let mut labels = vec![0; points.len()];

    for _ in 0..max_iter {
        for (label, point) in labels.iter_mut().zip(points) {
            *label = nearest(point, &centroids).0;
        }

        let mut sums = vec![[0.0; 3]; k];
        let mut counts = vec![0usize; k];
        for (&label, point) in labels.iter().zip(points) {
            counts[label] += 1;
            for c in 0..3 {
                sums[label][c] += point[c];
            }
        }

        let mut shift = 0.0;
        for i in 0..k {
            // an empty cluster keeps its previous centroid
            if counts[i] == 0 {
                continue;
            }
            let updated = sums[i].map(|s| s / counts[i] as f64);
            shift += squared_distance(&centroids[i], &updated);
            centroids[i] = updated;
        }

        if shift <= tolerance {
            break;
        }
    }

    let mut inertia = 0.0;
    for (label, point) in labels.iter_mut().zip(points) {
        let (index, distance) = nearest(point, &centroids);
        *label = index;
        inertia += distance;
    }

    Clustering {
        centroids,
        labels,
        inertia,
    }
}
