use log::debug;

use super::{Scheduler, SimConfig, SimCtx};

/// Preemptive shortest time to completion first.
pub struct StcfScheduler;

impl Scheduler for StcfScheduler {
    const NAME: &'static str = "STCF";

    fn init(_config: &SimConfig) -> Self {
        Self
    }

    fn admitted(&mut self, ctx: &mut SimCtx) {
        ctx.sort_ready_by_remaining();
    }

    fn preempt(&mut self, ctx: &mut SimCtx) {
        ctx.sort_ready_by_remaining();

        let (Some(current), Some(head)) = (ctx.running_job(), ctx.ready_head()) else {
            return;
        };
        if head.remaining < current.remaining {
            debug!(
                "t={} {} ({}) preempts {} ({})",
                ctx.now, head.name, head.remaining, current.name, current.remaining
            );
            ctx.requeue_running();
        }
    }

    fn executed(&mut self, ctx: &mut SimCtx) {
        ctx.sort_ready_by_remaining();
    }
}
