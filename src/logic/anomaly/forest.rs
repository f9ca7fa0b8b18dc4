//! Isolation Forest
//!
//! Unsupervised outlier model: random axis-aligned splits isolate unusual
//! rows in fewer steps. Fully deterministic for a fixed seed.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::types::{AnomalyConfig, FeatureRow, FEATURE_COUNT, MIN_FLEET_SIZE};

/// Euler-Mascheroni constant
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        size: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone)]
pub struct IsolationForest {
    trees: Vec<Node>,
    sample_size: usize,
}

impl IsolationForest {
    /// Fit on `rows`. No rows gives a forest without trees.
    pub fn fit(rows: &[FeatureRow], config: &AnomalyConfig) -> Self {
        if rows.is_empty() {
            return Self { trees: Vec::new(), sample_size: 0 };
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let sample_size = config.max_samples.clamp(1, rows.len());
        let max_depth = (sample_size as f64).log2().ceil().max(1.0) as usize;

        let trees = (0..config.n_trees.max(1))
            .map(|_| {
                let sample = index::sample(&mut rng, rows.len(), sample_size).into_vec();
                grow(&mut rng, rows, sample, 0, max_depth)
            })
            .collect();

        Self { trees, sample_size }
    }

    /// Mean isolation depth of `row` across all trees
    pub fn path_length(&self, row: &FeatureRow) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let total: f64 = self.trees.iter().map(|tree| depth_of(tree, row, 0)).sum();
        total / self.trees.len() as f64
    }

    /// Anomaly score in (0, 1]; higher means easier to isolate
    pub fn score(&self, row: &FeatureRow) -> f64 {
        let norm = average_path_length(self.sample_size);
        if norm <= 0.0 {
            return 0.5;
        }
        2f64.powf(-self.path_length(row) / norm)
    }

    pub fn score_all(&self, rows: &[FeatureRow]) -> Vec<f64> {
        rows.iter().map(|row| self.score(row)).collect()
    }
}

/// Fit on `rows` and flag the top `contamination` fraction by score.
///
/// The cut is the (1 - contamination) percentile of the fitted scores with
/// linear interpolation; a row is an outlier only if strictly above it, so a
/// fleet of identical rows has no outliers. Below two rows nothing is flagged.
pub fn fit_predict(rows: &[FeatureRow], config: &AnomalyConfig) -> Vec<bool> {
    if rows.len() < MIN_FLEET_SIZE {
        return vec![false; rows.len()];
    }

    let forest = IsolationForest::fit(rows, config);
    let scores = forest.score_all(rows);
    let cut = percentile(&scores, 100.0 * (1.0 - config.effective_contamination()));

    scores.iter().map(|s| *s > cut).collect()
}

// ============================================================================
// TREE
// ============================================================================

fn grow(
    rng: &mut StdRng,
    rows: &[FeatureRow],
    indices: Vec<usize>,
    depth: usize,
    max_depth: usize,
) -> Node {
    if depth >= max_depth || indices.len() <= 1 {
        return Node::Leaf { size: indices.len() };
    }

    // Only features that still vary can split
    let candidates: Vec<(usize, f64, f64)> = (0..FEATURE_COUNT)
        .filter_map(|feature| {
            let (min, max) = indices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &i| {
                (lo.min(rows[i][feature]), hi.max(rows[i][feature]))
            });
            (max > min).then_some((feature, min, max))
        })
        .collect();

    if candidates.is_empty() {
        return Node::Leaf { size: indices.len() };
    }

    let (feature, min, max) = candidates[rng.gen_range(0..candidates.len())];
    let threshold = rng.gen_range(min..max);
    let (left, right): (Vec<usize>, Vec<usize>) =
        indices.into_iter().partition(|&i| rows[i][feature] < threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(grow(rng, rows, left, depth + 1, max_depth)),
        right: Box::new(grow(rng, rows, right, depth + 1, max_depth)),
    }
}

fn depth_of(node: &Node, row: &FeatureRow, depth: usize) -> f64 {
    match node {
        Node::Leaf { size } => depth as f64 + average_path_length(*size),
        Node::Split { feature, threshold, left, right } => {
            if row[*feature] < *threshold {
                depth_of(left, row, depth + 1)
            } else {
                depth_of(right, row, depth + 1)
            }
        }
    }
}

/// Expected depth of an unsuccessful BST search over `n` items
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Linear-interpolation percentile, `q` in [0, 100]
fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::INFINITY;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (q / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}
