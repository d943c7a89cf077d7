use std::num::NonZeroU64;

use log::debug;

use super::{Scheduler, SimConfig, SimCtx, TickOutcome};
use crate::core::Ticks;

/// Round robin with a fixed quantum. A job that has executed for a full
/// quantum goes to the back of the ready queue, even when nothing else is
/// waiting.
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
    // Consecutive executed ticks of the current job
    slice_used: Ticks,
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "RR";

    fn init(config: &SimConfig) -> Self {
        Self {
            quantum: config.rr_quantum,
            slice_used: 0,
        }
    }

    fn tick(&mut self, ctx: &mut SimCtx, outcome: TickOutcome) {
        if outcome.completed {
            self.slice_used = 0;
            return;
        }
        if outcome.executed {
            self.slice_used += 1;
        }

        if self.slice_used == self.quantum.get() {
            if let Some(job) = ctx.running_job() {
                debug!("t={} rotate {}", ctx.now, job.name);
            }
            ctx.requeue_running();
            self.slice_used = 0;
        }
    }
}
