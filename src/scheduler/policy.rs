use std::{fmt, str::FromStr};

use crate::error::SimError;

/// Scheduling policy selected on the input's header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-in, first-out.
    Fifo,
    /// Non-preemptive shortest job first.
    Sjf,
    /// Preemptive shortest time to completion first.
    Stcf,
    /// Round robin.
    Rr,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Self::Fifo, Self::Sjf, Self::Stcf, Self::Rr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Sjf => "SJF",
            Self::Stcf => "STCF",
            Self::Rr => "RR",
        }
    }
}

impl FromStr for Policy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| SimError::UnknownPolicy(s.to_string()))
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
