pub mod driver;
pub mod job;
pub mod parse;
pub mod render;
pub mod stats;
pub mod workload;

pub use driver::{Sim, SimOutcome, run, run_collect};
pub use job::{JobOutcome, JobSpec};
pub use parse::{SimInput, parse_input};
pub use stats::Summary;
pub use workload::bernoulli_jobs;
