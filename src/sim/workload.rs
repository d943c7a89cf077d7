use rand::prelude::*;

use super::job::JobSpec;
use crate::core::{Pid, Ticks};

/// Bernoulli arrivals over `ticks` ticks: each tick a job arrives with
/// probability `p_arrival`, and is short with probability `p_short`.
pub fn bernoulli_jobs(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<JobSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let duration = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            let pid = jobs.len() as Pid + 1;
            jobs.push(JobSpec::new(format!("J{pid}"), pid, duration, t));
        }
    }

    jobs
}
