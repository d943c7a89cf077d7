use super::job::{JobOutcome, JobSpec};
use crate::{
    config::SimConfig,
    core::{Job, Metrics, Report, SchedCore, TickRecord, Ticks},
    error::{Result, SimError},
    scheduler::{
        FifoScheduler, Policy, RoundRobinScheduler, Scheduler, SjfScheduler, StcfScheduler,
    },
};

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    idle_ticks: Ticks,
    current_idle: Ticks,
    longest_idle: Ticks,
}

/// Everything a finished run produced apart from the trace itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOutcome {
    pub policy: &'static str,
    pub metrics: Metrics,
    pub report: Report,
    /// Finished jobs in completion order.
    pub jobs: Vec<JobOutcome>,
    pub idle_ticks: Ticks,
    pub longest_idle: Ticks,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(jobs: Vec<JobSpec>, config: &SimConfig) -> Result<Self> {
        if jobs.is_empty() {
            return Err(SimError::NoJobs);
        }
        for (i, job) in jobs.iter().enumerate() {
            job.validate(i + 1)?;
        }
        let jobs = jobs.into_iter().map(Job::from).collect();

        Ok(Self {
            core: SchedCore::<S>::new(jobs, config),
            idle_ticks: 0,
            current_idle: 0,
            longest_idle: 0,
        })
    }

    pub fn step(&mut self) -> Option<TickRecord> {
        let record = self.core.tick()?;

        if record.is_idle() {
            self.idle_ticks += 1;
            self.current_idle += 1;
            self.longest_idle = self.longest_idle.max(self.current_idle);
        } else {
            self.current_idle = 0;
        }

        Some(record)
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.core.ctx.finished.len() == self.core.ctx.jobs.len()
    }

    pub fn jobs_map<T>(&self, f: impl Fn(&JobOutcome) -> T) -> impl Iterator<Item = T> {
        self.outcomes().into_iter().map(move |job| f(&job))
    }

    pub fn outcomes(&self) -> Vec<JobOutcome> {
        let ctx = &self.core.ctx;
        ctx.finished
            .iter()
            .map(|&key| {
                let job = ctx.job(key);
                JobOutcome {
                    pid: job.pid,
                    name: job.name.clone(),
                    arrival: job.arrival,
                    burst: job.burst,
                    first_run_tick: job
                        .first_run_tick
                        .expect("Finished job never recorded a first run"),
                    completion_tick: job
                        .completion_tick
                        .expect("Finished job missing completion tick"),
                }
            })
            .collect()
    }

    pub fn finish(self) -> SimOutcome {
        debug_assert!(self.all_jobs_completed(), "Run ended with unfinished jobs");
        SimOutcome {
            policy: S::NAME,
            metrics: self.core.ctx.metrics.clone(),
            report: self.core.ctx.metrics.report(),
            jobs: self.outcomes(),
            idle_ticks: self.idle_ticks,
            longest_idle: self.longest_idle,
        }
    }
}

/// Runs `jobs` under `policy` to completion, handing each tick's record to
/// `on_tick` as it is produced.
pub fn run(
    policy: Policy,
    jobs: Vec<JobSpec>,
    config: &SimConfig,
    on_tick: impl FnMut(&TickRecord) -> Result<()>,
) -> Result<SimOutcome> {
    match policy {
        Policy::Fifo => run_with::<FifoScheduler>(jobs, config, on_tick),
        Policy::Sjf => run_with::<SjfScheduler>(jobs, config, on_tick),
        Policy::Stcf => run_with::<StcfScheduler>(jobs, config, on_tick),
        Policy::Rr => run_with::<RoundRobinScheduler>(jobs, config, on_tick),
    }
}

/// Like `run`, but collects the trace instead of streaming it.
pub fn run_collect(
    policy: Policy,
    jobs: Vec<JobSpec>,
    config: &SimConfig,
) -> Result<(Vec<TickRecord>, SimOutcome)> {
    let mut trace = Vec::new();
    let outcome = run(policy, jobs, config, |record| {
        trace.push(record.clone());
        Ok(())
    })?;
    Ok((trace, outcome))
}

fn run_with<S: Scheduler>(
    jobs: Vec<JobSpec>,
    config: &SimConfig,
    mut on_tick: impl FnMut(&TickRecord) -> Result<()>,
) -> Result<SimOutcome> {
    let mut sim = Sim::<S>::new(jobs, config)?;
    while let Some(record) = sim.step() {
        on_tick(&record)?;
    }
    Ok(sim.finish())
}
