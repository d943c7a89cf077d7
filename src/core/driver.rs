use log::{info, trace};

use super::{
    event::{TickOutcome, TickRecord},
    observer::Observer,
    state::{Job, SimCtx},
};
use crate::{config::SimConfig, scheduler::Scheduler};

/// The shared tick loop. Policy-specific behaviour lives behind the
/// `Scheduler` hooks.
pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
    check_invariants: bool,
    done: bool,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(jobs: Vec<Job>, config: &SimConfig) -> Self {
        let ctx = SimCtx::new(jobs);
        let scheduler = S::init(config);
        info!(
            "{} run over {} jobs, first arrival at t={}",
            S::NAME,
            ctx.jobs.len(),
            ctx.metrics.first_arrival
        );
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            check_invariants: config.check_invariants,
            done: false,
        }
    }

    /// Advances one tick. Returns `None` once the run has reached its
    /// terminal state.
    pub fn tick(&mut self) -> Option<TickRecord> {
        if self.done {
            return None;
        }

        self.ctx.advance_time(1);
        if self.ctx.is_terminal() {
            self.done = true;
            info!(
                "{} finished at t={}, {} jobs",
                S::NAME,
                self.ctx.metrics.final_tick,
                self.ctx.metrics.num_processes
            );
            return None;
        }

        if self.ctx.admit_eligible() > 0 {
            self.scheduler.admitted(&mut self.ctx);
        }
        self.ctx.promote_ready_head();

        self.scheduler.preempt(&mut self.ctx);

        self.ctx.record_first_run();
        let executed = self.ctx.execute_running();
        self.scheduler.executed(&mut self.ctx);

        let record = self.ctx.tick_record(executed);
        trace!("{record:?}");

        let completed = self.ctx.complete_running().is_some();
        self.scheduler
            .tick(&mut self.ctx, TickOutcome { executed, completed });

        if self.check_invariants {
            self.observer.observe(&self.ctx);
        }
        Some(record)
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
