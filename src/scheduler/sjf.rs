use super::{Scheduler, SimConfig, SimCtx};

/// Non-preemptive shortest job first. The ready queue is sorted by remaining
/// time whenever jobs are admitted; the running job always finishes before
/// the head is picked.
pub struct SjfScheduler;

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "SJF";

    fn init(_config: &SimConfig) -> Self {
        Self
    }

    fn admitted(&mut self, ctx: &mut SimCtx) {
        ctx.sort_ready_by_remaining();
    }
}
