use average::Estimate;

use super::{driver::SimOutcome, job::JobOutcome};
use crate::core::Ticks;

/// Statistics recomputed from per-job outcomes rather than the engine's
/// running totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub jobs: usize,
    pub mean_turnaround: f64,
    pub mean_response: f64,
    pub max_turnaround: Ticks,
    pub idle_ticks: Ticks,
    pub longest_idle: Ticks,
}

impl Summary {
    pub fn from_outcome(outcome: &SimOutcome) -> Self {
        let jobs = &outcome.jobs;
        Self {
            jobs: jobs.len(),
            mean_turnaround: avg(jobs.iter().map(|j| j.turnaround() as f64)),
            mean_response: avg(jobs.iter().map(|j| j.response() as f64)),
            max_turnaround: jobs.iter().map(JobOutcome::turnaround).max().unwrap_or(0),
            idle_ticks: outcome.idle_ticks,
            longest_idle: outcome.longest_idle,
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
