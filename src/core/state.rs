use log::debug;
use slotmap::{SlotMap, new_key_type};

use super::{
    event::{QueuedJob, TickRecord},
    feed::AdmissionFeed,
    metrics::Metrics,
    queue::OrderedQueue,
};

pub type Ticks = u64;
pub type Pid = u32;
new_key_type! {
    pub struct JobKey;
}

pub type JobTable = SlotMap<JobKey, Job>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Ready,
    Running,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub pid: Pid,
    pub name: String,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub arrival: Ticks,
    // `None` until the job first occupies the CPU
    pub first_run_tick: Option<Ticks>,
    pub completion_tick: Option<Ticks>,
    pub state: JobState,
}

impl Job {
    pub fn new(pid: Pid, name: impl Into<String>, burst: Ticks, arrival: Ticks) -> Self {
        Self {
            pid,
            name: name.into(),
            burst,
            remaining: burst,
            arrival,
            first_run_tick: None,
            completion_tick: None,
            state: JobState::Pending,
        }
    }

    pub fn has_run_once(&self) -> bool {
        self.first_run_tick.is_some()
    }
}

/// Everything a policy engine owns while a run is in progress: the job arena,
/// the admission feed, the ready queue, the running slot and the clock.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub jobs: JobTable,
    pub feed: AdmissionFeed,
    pub ready: OrderedQueue,
    pub running: Option<JobKey>,
    pub finished: Vec<JobKey>,
    pub metrics: Metrics,
}

impl SimCtx {
    /// Builds the context and moves the earliest arrival into the running
    /// slot. `jobs` must not be empty.
    pub fn new(jobs: Vec<Job>) -> Self {
        assert!(!jobs.is_empty(), "Simulation requires at least one job");

        let mut table = JobTable::with_capacity_and_key(jobs.len());
        let keys: Vec<JobKey> = jobs.into_iter().map(|job| table.insert(job)).collect();
        let mut feed = AdmissionFeed::new(keys, &table);

        let first = feed
            .take_next()
            .expect("Admission feed built from a non-empty job set");
        let first_arrival = table[first].arrival;

        let mut ctx = Self {
            now: 0,
            jobs: table,
            feed,
            ready: OrderedQueue::new(),
            running: None,
            finished: Vec::new(),
            metrics: Metrics::new(first_arrival),
        };
        ctx.set_running(first);
        ctx
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self
            .now
            .checked_add(delta)
            .expect("Tick counter overflowed");
    }

    pub fn job(&self, key: JobKey) -> &Job {
        &self.jobs[key]
    }

    pub fn job_mut(&mut self, key: JobKey) -> &mut Job {
        &mut self.jobs[key]
    }

    pub fn running_job(&self) -> Option<&Job> {
        self.running.map(|key| self.job(key))
    }

    pub fn ready_head(&self) -> Option<&Job> {
        self.ready.head().map(|key| self.job(key))
    }

    /// Nothing left to admit, nothing waiting, nothing running.
    pub fn is_terminal(&self) -> bool {
        self.feed.is_exhausted() && self.ready.is_empty() && self.running.is_none()
    }

    /// Moves every job whose arrival tick is strictly before `now` from the
    /// feed to the ready queue tail. Returns how many were admitted.
    pub fn admit_eligible(&mut self) -> usize {
        let mut admitted = 0;
        while let Some(key) = self.feed.pop_eligible(self.now, &self.jobs) {
            let job = self.job_mut(key);
            debug_assert_eq!(job.state, JobState::Pending);
            job.state = JobState::Ready;
            debug!("t={} admit {}", self.now, self.jobs[key].name);
            self.ready.push_tail(key);
            admitted += 1;
        }
        self.metrics.num_processes += admitted as u64;
        admitted
    }

    pub fn sort_ready_by_remaining(&mut self) {
        self.ready.reorder_by_remaining_time(&self.jobs);
    }

    pub fn set_running(&mut self, key: JobKey) {
        assert!(self.running.is_none(), "Running slot already occupied");
        assert!(
            !self.ready.contains(key),
            "Running job {} must not be enqueued",
            self.job(key).name
        );
        self.job_mut(key).state = JobState::Running;
        self.running = Some(key);
    }

    /// Fills an empty running slot from the ready queue head, if any.
    pub fn promote_ready_head(&mut self) {
        if self.running.is_none() && !self.ready.is_empty() {
            let next = self.ready.pop_head();
            self.set_running(next);
        }
    }

    /// Returns the running job to the ready queue tail and promotes the head.
    /// With an otherwise empty queue the same job comes straight back.
    pub fn requeue_running(&mut self) {
        let Some(current) = self.running.take() else {
            return;
        };
        self.job_mut(current).state = JobState::Ready;
        self.ready.push_tail(current);
        let next = self.ready.pop_head();
        self.set_running(next);
    }

    /// First-run bookkeeping for the running job.
    pub fn record_first_run(&mut self) {
        let now = self.now;
        let Some(key) = self.running else {
            return;
        };
        let job = self.job_mut(key);
        if job.has_run_once() {
            return;
        }
        job.first_run_tick = Some(now);
        let response = now.saturating_sub(job.arrival);
        self.metrics.response_time += response;
    }

    /// Runs the current job for one tick if its arrival is strictly in the
    /// past. Returns whether any work was done.
    pub fn execute_running(&mut self) -> bool {
        let now = self.now;
        let Some(key) = self.running else {
            return false;
        };
        let job = self.job_mut(key);
        if job.arrival >= now {
            return false;
        }
        assert!(job.remaining > 0, "Job {} executed with no work left", job.name);
        job.remaining -= 1;
        true
    }

    /// Retires the running job once its remaining time hits zero and promotes
    /// the ready head into the freed slot.
    pub fn complete_running(&mut self) -> Option<JobKey> {
        let key = self.running?;
        let now = self.now;
        let job = self.job_mut(key);
        if job.remaining != 0 {
            return None;
        }

        job.state = JobState::Finished;
        job.completion_tick = Some(now);
        let turnaround = now - job.arrival;
        debug!("t={now} complete {} turnaround={turnaround}", job.name);

        self.metrics.turnaround_time += turnaround;
        self.metrics.final_tick = now;
        self.running = None;
        self.finished.push(key);
        self.promote_ready_head();
        Some(key)
    }

    pub fn tick_record(&self, executed: bool) -> TickRecord {
        let running = if executed {
            self.running_job().map(|job| job.name.clone())
        } else {
            None
        };
        TickRecord {
            tick: self.now,
            running,
            ready: self
                .ready
                .snapshot_in_order(&self.jobs)
                .into_iter()
                .map(|job| QueuedJob {
                    name: job.name.clone(),
                    remaining: job.remaining,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(jobs: &[(&str, Ticks, Ticks)]) -> SimCtx {
        SimCtx::new(
            jobs.iter()
                .enumerate()
                .map(|(i, &(name, burst, arrival))| Job::new(i as Pid + 1, name, burst, arrival))
                .collect(),
        )
    }

    #[test]
    fn earliest_arrival_starts_in_running_slot() {
        let ctx = ctx(&[("B", 2, 3), ("A", 4, 1)]);
        assert_eq!(ctx.running_job().map(|j| j.name.as_str()), Some("A"));
        assert_eq!(ctx.metrics.first_arrival, 1);
        assert_eq!(ctx.metrics.num_processes, 1);
        assert!(!ctx.feed.is_exhausted());
    }

    #[test]
    fn admission_is_strictly_after_arrival() {
        let mut ctx = ctx(&[("A", 4, 0), ("B", 2, 1), ("C", 1, 1)]);
        ctx.advance_time(1);
        assert_eq!(ctx.admit_eligible(), 0);
        ctx.advance_time(1);
        assert_eq!(ctx.admit_eligible(), 2);
        assert_eq!(ctx.metrics.num_processes, 3);
        assert!(ctx.feed.is_exhausted());
    }

    #[test]
    fn idle_when_arrival_not_yet_passed() {
        let mut ctx = ctx(&[("A", 1, 2)]);
        ctx.advance_time(2);
        assert!(!ctx.execute_running());
        ctx.advance_time(1);
        assert!(ctx.execute_running());
        let done = ctx.complete_running().expect("A finishes on its only tick");
        assert_eq!(ctx.job(done).name, "A");
        assert!(ctx.is_terminal());
        assert_eq!(ctx.metrics.turnaround_time, 1);
    }

    #[test]
    fn response_is_floored_at_zero() {
        let mut ctx = ctx(&[("A", 1, 5)]);
        ctx.advance_time(1);
        ctx.record_first_run();
        assert_eq!(ctx.metrics.response_time, 0);
        assert_eq!(ctx.running_job().and_then(|j| j.first_run_tick), Some(1));
    }

    #[test]
    #[should_panic(expected = "Tick counter overflowed")]
    fn clock_overflow_is_fatal() {
        let mut ctx = ctx(&[("A", 1, 0)]);
        ctx.advance_time(Ticks::MAX);
        ctx.advance_time(1);
    }

    #[test]
    fn requeue_with_empty_queue_keeps_job() {
        let mut ctx = ctx(&[("A", 3, 0)]);
        let before = ctx.running;
        ctx.requeue_running();
        assert_eq!(ctx.running, before);
        assert!(ctx.ready.is_empty());
    }
}
