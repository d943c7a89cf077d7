//! Input adapter: `N POLICY` followed by `N` records of the form
//! `name:pid:duration:arrival`, all whitespace separated.

use std::str::FromStr;

use log::warn;

use super::job::JobSpec;
use crate::{
    core::{Pid, Ticks},
    error::{Result, SimError},
    scheduler::Policy,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimInput {
    pub policy: Policy,
    pub jobs: Vec<JobSpec>,
}

pub fn parse_input(input: &str) -> Result<SimInput> {
    let mut tokens = input.split_whitespace();

    let count = tokens.next().ok_or(SimError::MissingCount)?;
    let count: usize = count
        .parse()
        .map_err(|_| SimError::InvalidCount(count.to_string()))?;
    if count == 0 {
        return Err(SimError::NoJobs);
    }

    let policy: Policy = tokens.next().ok_or(SimError::MissingPolicy)?.parse()?;

    let jobs = tokens
        .by_ref()
        .take(count)
        .enumerate()
        .map(|(i, record)| parse_job(record, i + 1))
        .collect::<Result<Vec<_>>>()?;
    if jobs.len() < count {
        return Err(SimError::TooFewJobs {
            expected: count,
            found: jobs.len(),
        });
    }

    let extra = tokens.count();
    if extra > 0 {
        warn!("ignoring {extra} tokens after the last job record");
    }

    Ok(SimInput { policy, jobs })
}

/// Parses one record. `index` is 1-based and only used in errors.
pub fn parse_job(record: &str, index: usize) -> Result<JobSpec> {
    let mut fields = record.split(':');
    let mut next = |field: &'static str| {
        fields
            .next()
            .filter(|value| !value.is_empty())
            .ok_or(SimError::MissingField { index, field })
    };

    let name = next("name")?.to_string();
    let pid: Pid = number(next("pid")?, "pid", index)?;
    let duration: Ticks = number(next("duration")?, "duration", index)?;
    let arrival: Ticks = number(next("arrival time")?, "arrival time", index)?;

    let rest: Vec<&str> = fields.collect();
    if !rest.is_empty() {
        return Err(SimError::TrailingData {
            index,
            rest: rest.join(":"),
        });
    }
    let job = JobSpec {
        name,
        pid,
        duration,
        arrival,
    };
    job.validate(index)?;
    Ok(job)
}

fn number<T: FromStr>(value: &str, field: &'static str, index: usize) -> Result<T> {
    value.parse().map_err(|_| SimError::InvalidField {
        index,
        field,
        value: value.to_string(),
    })
}
