use crate::core::Ticks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedJob {
    pub name: String,
    pub remaining: Ticks,
}

/// What happened on one tick. `running` is `None` when the CPU sat idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickRecord {
    pub tick: Ticks,
    pub running: Option<String>,
    pub ready: Vec<QueuedJob>,
}

impl TickRecord {
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }
}

// Handed to `Scheduler::tick` once completion has been processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub executed: bool,
    pub completed: bool,
}
