//! Text rendering of trace records and the final report.

use std::fmt;

use crate::core::{Report, TickRecord};

// `<tick>:<job|idle>:<name(remaining),...|empty>:`
impl fmt::Display for TickRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.tick)?;
        match &self.running {
            Some(name) => write!(f, "{name}:")?,
            None => f.write_str("idle:")?,
        }
        if self.ready.is_empty() {
            f.write_str("empty")?;
        }
        for job in &self.ready {
            write!(f, "{}({}),", job.name, job.remaining)?;
        }
        f.write_str(":")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Throughput = {:.3}", self.throughput)?;
        writeln!(f, "Average turnaround time = {:.3}", self.avg_turnaround)?;
        write!(f, "Average response time = {:.3}", self.avg_response)
    }
}
