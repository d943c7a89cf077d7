use super::{
    queue::OrderedQueue,
    state::{JobKey, JobTable, Ticks},
};

/// Jobs that have not yet arrived, earliest arrival first. Ties keep input
/// order.
#[derive(Debug, Default)]
pub struct AdmissionFeed {
    backlog: OrderedQueue,
}

impl AdmissionFeed {
    pub fn new(keys: impl IntoIterator<Item = JobKey>, table: &JobTable) -> Self {
        let mut backlog = OrderedQueue::new();
        for key in keys {
            backlog.push_tail(key);
        }
        backlog.reorder_by_arrival_time(table);
        Self { backlog }
    }

    pub fn is_exhausted(&self) -> bool {
        self.backlog.is_empty()
    }

    pub fn len(&self) -> usize {
        self.backlog.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = JobKey> + '_ {
        self.backlog.iter()
    }

    /// Unconditionally takes the head; used to seed the running slot.
    pub fn take_next(&mut self) -> Option<JobKey> {
        (!self.backlog.is_empty()).then(|| self.backlog.pop_head())
    }

    /// Takes the head only if it arrived strictly before `now`.
    pub fn pop_eligible(&mut self, now: Ticks, table: &JobTable) -> Option<JobKey> {
        let head = self.backlog.head()?;
        (table[head].arrival < now).then(|| self.backlog.pop_head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Job;

    #[test]
    fn releases_jobs_one_tick_after_arrival() {
        let mut table = JobTable::with_key();
        let keys: Vec<_> = [("late", 3), ("early", 1), ("mid", 2)]
            .into_iter()
            .enumerate()
            .map(|(i, (name, arrival))| table.insert(Job::new(i as u32, name, 1, arrival)))
            .collect();
        let mut feed = AdmissionFeed::new(keys, &table);

        assert_eq!(feed.pop_eligible(1, &table), None);
        let early = feed.pop_eligible(2, &table).expect("arrived at 1");
        assert_eq!(table[early].name, "early");
        assert_eq!(feed.pop_eligible(2, &table), None);
        assert_eq!(feed.len(), 2);

        let drained: Vec<_> = std::iter::from_fn(|| feed.pop_eligible(10, &table))
            .map(|key| table[key].name.as_str())
            .collect();
        assert_eq!(drained, ["mid", "late"]);
        assert!(feed.is_exhausted());
        assert_eq!(feed.take_next(), None);
    }
}
