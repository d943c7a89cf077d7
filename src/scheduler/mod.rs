pub mod fifo;
pub mod policy;
pub mod rr;
pub mod sjf;
pub mod stcf;

use crate::{
    config::SimConfig,
    core::{SimCtx, TickOutcome},
};
pub use fifo::FifoScheduler;
pub use policy::Policy;
pub use rr::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use stcf::StcfScheduler;

/// Hooks into the shared tick loop, called in declaration order each tick.
/// Every hook defaults to doing nothing.
pub trait Scheduler {
    const NAME: &'static str;

    fn init(config: &SimConfig) -> Self;

    /// New arrivals have just been appended to the ready queue.
    fn admitted(&mut self, _ctx: &mut SimCtx) {}

    /// Last chance to swap the running job before it executes.
    fn preempt(&mut self, _ctx: &mut SimCtx) {}

    /// The running job has executed (or idled); the trace is taken next.
    fn executed(&mut self, _ctx: &mut SimCtx) {}

    /// Completion has been processed for this tick.
    fn tick(&mut self, _ctx: &mut SimCtx, _outcome: TickOutcome) {}
}
