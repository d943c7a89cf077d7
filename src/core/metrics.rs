use super::state::Ticks;

/// Running totals collected while the engine ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Jobs admitted so far, including the one that seeded the running slot.
    pub num_processes: u64,
    pub first_arrival: Ticks,
    pub response_time: Ticks,
    pub turnaround_time: Ticks,
    /// Tick on which the most recent job completed.
    pub final_tick: Ticks,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub throughput: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
}

impl Metrics {
    pub fn new(first_arrival: Ticks) -> Self {
        Self {
            num_processes: 1,
            first_arrival,
            ..Self::default()
        }
    }

    /// Divisions with a zero denominator report `0.0`.
    pub fn report(&self) -> Report {
        let n = self.num_processes as f64;
        let elapsed = self.final_tick.saturating_sub(self.first_arrival);
        let ratio = |num: f64, den: f64| if den == 0.0 { 0.0 } else { num / den };

        Report {
            throughput: ratio(n, elapsed as f64),
            avg_turnaround: ratio(self.turnaround_time as f64, n),
            avg_response: ratio(self.response_time as f64, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_all_processes() {
        let metrics = Metrics {
            num_processes: 2,
            first_arrival: 0,
            response_time: 5,
            turnaround_time: 9,
            final_tick: 6,
        };
        let report = metrics.report();
        assert!((report.throughput - 2.0 / 6.0).abs() < 1e-9);
        assert_eq!(report.avg_turnaround, 4.5);
        assert_eq!(report.avg_response, 2.5);
    }

    #[test]
    fn zero_elapsed_time_reports_zero_throughput() {
        let metrics = Metrics {
            num_processes: 1,
            first_arrival: 4,
            response_time: 0,
            turnaround_time: 0,
            final_tick: 4,
        };
        assert_eq!(metrics.report().throughput, 0.0);
    }

    #[test]
    fn no_processes_reports_zero_averages() {
        let report = Metrics::default().report();
        assert_eq!(report.avg_turnaround, 0.0);
        assert_eq!(report.avg_response, 0.0);
        assert_eq!(report.throughput, 0.0);
    }
}
