pub mod config;
pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use config::SimConfig;
pub use crate::core::{Report, SchedCore, TickRecord};
pub use error::{Result, SimError};
pub use scheduler::{Policy, Scheduler};
pub use sim::{JobSpec, Sim, SimOutcome};
