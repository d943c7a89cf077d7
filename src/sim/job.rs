use crate::{
    core::state::{Job, Pid, Ticks},
    error::{Result, SimError},
};

/// One parsed input record, before the engine takes ownership of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub name: String,
    pub pid: Pid,
    pub duration: Ticks,
    pub arrival: Ticks,
}

impl JobSpec {
    pub fn new(name: impl Into<String>, pid: Pid, duration: Ticks, arrival: Ticks) -> Self {
        Self {
            name: name.into(),
            pid,
            duration,
            arrival,
        }
    }

    /// Rejects records the engine could never finish: no work, or an arrival
    /// so late that no later tick exists to run in. `index` is 1-based.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.duration == 0 {
            return Err(SimError::ZeroDuration { index });
        }
        if self.arrival == Ticks::MAX {
            return Err(SimError::ArrivalTooLate {
                index,
                arrival: self.arrival,
            });
        }
        Ok(())
    }
}

impl From<JobSpec> for Job {
    fn from(spec: JobSpec) -> Self {
        Job::new(spec.pid, spec.name, spec.duration, spec.arrival)
    }
}

/// Per-job result of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub pid: Pid,
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub first_run_tick: Ticks,
    pub completion_tick: Ticks,
}

impl JobOutcome {
    pub fn turnaround(&self) -> Ticks {
        self.completion_tick - self.arrival
    }

    pub fn response(&self) -> Ticks {
        self.first_run_tick.saturating_sub(self.arrival)
    }
}
