use super::{Scheduler, SimConfig};

/// Runs jobs to completion in arrival order. The ready queue is never
/// reordered.
pub struct FifoScheduler;

impl Scheduler for FifoScheduler {
    const NAME: &'static str = "FIFO";

    fn init(_config: &SimConfig) -> Self {
        Self
    }
}
