use rustc_hash::FxHashMap;

use super::state::{JobKey, JobState, SimCtx};

/// Cross-checks container membership against each job's recorded state after
/// every tick. Any mismatch means the engine lost or duplicated a job.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        let mut residence: FxHashMap<JobKey, Vec<JobState>> = FxHashMap::default();
        let placements = ctx
            .feed
            .iter()
            .map(|key| (key, JobState::Pending))
            .chain(ctx.ready.iter().map(|key| (key, JobState::Ready)))
            .chain(ctx.running.map(|key| (key, JobState::Running)))
            .chain(ctx.finished.iter().map(|&key| (key, JobState::Finished)));
        for (key, state) in placements {
            residence.entry(key).or_default().push(state);
        }

        for (key, job) in &ctx.jobs {
            let seen = residence.get(&key).map(Vec::as_slice).unwrap_or_default();
            assert!(
                seen.len() == 1,
                "t={} job {} resident in {} containers: {seen:?}",
                ctx.now,
                job.name,
                seen.len()
            );
            assert_eq!(
                job.state, seen[0],
                "t={} job {} state disagrees with its container",
                ctx.now, job.name
            );
            assert!(
                job.remaining <= job.burst,
                "t={} job {} gained work",
                ctx.now,
                job.name
            );
            assert_eq!(
                job.state == JobState::Finished,
                job.remaining == 0,
                "t={} job {} finished flag and remaining time disagree",
                ctx.now,
                job.name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Job;

    #[test]
    fn accepts_fresh_context() {
        let ctx = SimCtx::new(vec![Job::new(1, "A", 2, 0), Job::new(2, "B", 1, 3)]);
        let mut observer = Observer::new();
        observer.observe(&ctx);
        assert_eq!(observer.steps(), 1);
    }

    #[test]
    #[should_panic(expected = "resident in 2 containers")]
    fn rejects_duplicated_job() {
        let mut ctx = SimCtx::new(vec![Job::new(1, "A", 2, 0)]);
        let key = ctx.running.expect("seeded");
        ctx.finished.push(key);
        Observer::new().observe(&ctx);
    }
}
