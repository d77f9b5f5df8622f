//! Time-series recorder feeding the line graphs.
//!
//! Time is normalized to [0,1] (age / max age) and split into
//! `granularity` buckets. The series holds one point per closed bucket plus
//! the in-progress point for the current one; closed points are never
//! rewritten.

use serde::Deserialize;

use crate::mechanics::scale;

/// How samples landing in the same bucket combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketPolicy {
    /// The latest sample wins.
    #[default]
    LastWrite,
    /// Running mean of the samples in the bucket.
    Mean,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphPoint {
    pub time: f64,
    pub value: f64,
}

#[derive(Clone, Debug)]
pub struct TimeGraph {
    granularity: u32,
    max_value: f64,
    log_scale: bool,
    policy: BucketPolicy,
    points: Vec<GraphPoint>,
    prev_bucket: i64,
    bucket_samples: u32,
}

impl TimeGraph {
    /// Seed a two-point series at the initial value so a line is drawable
    /// before the first sample.
    pub fn new(initial: f64, max_value: f64, log_scale: bool, granularity: u32) -> Self {
        let mut graph = Self {
            granularity: granularity.max(1),
            max_value,
            log_scale,
            policy: BucketPolicy::LastWrite,
            points: Vec::new(),
            prev_bucket: 0,
            bucket_samples: 0,
        };
        graph.init(initial, max_value, log_scale);
        graph
    }

    pub fn with_policy(mut self, policy: BucketPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn init(&mut self, initial: f64, max_value: f64, log_scale: bool) {
        self.max_value = max_value;
        self.log_scale = log_scale;
        let value = self.normalize(initial);
        self.points.clear();
        self.points.push(GraphPoint { time: 0.0, value });
        self.points.push(GraphPoint { time: 0.0, value });
        self.prev_bucket = 0;
        self.bucket_samples = 0;
    }

    pub fn normalize(&self, value: f64) -> f64 {
        if self.log_scale {
            scale::log10(value, self.max_value)
        } else {
            scale::linear(value, self.max_value)
        }
    }

    /// Record `value` at normalized `time`. Opens a new point when the
    /// bucket index moves forward, otherwise updates the open point.
    pub fn add_sample(&mut self, time: f64, value: f64) {
        let value = self.normalize(value);
        let bucket = (time * self.granularity as f64).floor() as i64;
        if bucket > self.prev_bucket {
            self.points.push(GraphPoint { time, value });
            self.prev_bucket = bucket;
            self.bucket_samples = 0;
        }

        let samples = self.bucket_samples;
        let Some(last) = self.points.last_mut() else {
            return;
        };
        let value = match self.policy {
            BucketPolicy::LastWrite => value,
            BucketPolicy::Mean if samples == 0 => value,
            BucketPolicy::Mean => {
                let n = samples as f64;
                (last.value * n + value) / (n + 1.0)
            }
        };
        *last = GraphPoint { time, value };
        self.bucket_samples = samples.saturating_add(1);
    }

    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
