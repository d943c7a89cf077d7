use std::collections::VecDeque;

use super::state::{Job, JobKey, JobTable};

/// FIFO of job handles that can be re-sorted in place. Sorting is stable, so
/// jobs with equal keys keep their current relative order.
#[derive(Debug, Default, Clone)]
pub struct OrderedQueue {
    jobs: VecDeque<JobKey>,
}

impl OrderedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_tail(&mut self, job: JobKey) {
        debug_assert!(!self.jobs.contains(&job), "Job pushed twice onto one queue");
        self.jobs.push_back(job);
    }

    /// Removes the head. Callers check `is_empty` first; an empty pop is an
    /// engine bug and panics.
    pub fn pop_head(&mut self) -> JobKey {
        self.jobs
            .pop_front()
            .expect("pop_head called on an empty queue")
    }

    pub fn head(&self) -> Option<JobKey> {
        self.jobs.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn contains(&self, job: JobKey) -> bool {
        self.jobs.contains(&job)
    }

    pub fn iter(&self) -> impl Iterator<Item = JobKey> + '_ {
        self.jobs.iter().copied()
    }

    pub fn reorder_by_remaining_time(&mut self, table: &JobTable) {
        self.jobs
            .make_contiguous()
            .sort_by_key(|&key| table[key].remaining);
    }

    pub fn reorder_by_arrival_time(&mut self, table: &JobTable) {
        self.jobs
            .make_contiguous()
            .sort_by_key(|&key| table[key].arrival);
    }

    pub fn snapshot_in_order<'a>(&self, table: &'a JobTable) -> Vec<&'a Job> {
        self.jobs.iter().map(|&key| &table[key]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(jobs: &[(&str, u64, u64)]) -> (JobTable, OrderedQueue) {
        let mut table = JobTable::with_key();
        let mut queue = OrderedQueue::new();
        for (i, &(name, burst, arrival)) in jobs.iter().enumerate() {
            queue.push_tail(table.insert(Job::new(i as u32, name, burst, arrival)));
        }
        (table, queue)
    }

    fn names(queue: &OrderedQueue, table: &JobTable) -> Vec<String> {
        queue
            .snapshot_in_order(table)
            .into_iter()
            .map(|job| job.name.clone())
            .collect()
    }

    #[test]
    fn pops_in_insertion_order() {
        let (table, mut queue) = table(&[("A", 3, 0), ("B", 1, 0)]);
        assert_eq!(queue.len(), 2);
        assert_eq!(table[queue.pop_head()].name, "A");
        assert_eq!(table[queue.pop_head()].name, "B");
        assert!(queue.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty queue")]
    fn pop_on_empty_panics() {
        let mut queue = OrderedQueue::new();
        queue.pop_head();
    }

    #[test]
    fn remaining_time_sort_is_stable_and_idempotent() {
        let (table, mut queue) = table(&[("A", 3, 0), ("B", 1, 0), ("C", 3, 0), ("D", 1, 0)]);
        queue.reorder_by_remaining_time(&table);
        let once = names(&queue, &table);
        assert_eq!(once, ["B", "D", "A", "C"]);
        queue.reorder_by_remaining_time(&table);
        assert_eq!(names(&queue, &table), once);
    }

    #[test]
    fn arrival_sort_keeps_input_order_on_ties() {
        let (table, mut queue) = table(&[("A", 1, 4), ("B", 1, 2), ("C", 1, 4), ("D", 1, 0)]);
        queue.reorder_by_arrival_time(&table);
        assert_eq!(names(&queue, &table), ["D", "B", "A", "C"]);
    }
}
