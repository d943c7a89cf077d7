pub mod driver;
pub mod event;
pub mod feed;
pub mod metrics;
pub mod observer;
pub mod queue;
pub mod state;

pub use driver::SchedCore;
pub use event::{QueuedJob, TickOutcome, TickRecord};
pub use feed::AdmissionFeed;
pub use metrics::{Metrics, Report};
pub use queue::OrderedQueue;
pub use state::{Job, JobKey, JobState, JobTable, Pid, SimCtx, Ticks};
