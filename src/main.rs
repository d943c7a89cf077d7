use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use env_logger::Builder;
use log::debug;
use schedsim::{
    SimConfig,
    sim::{self, Summary},
};

fn main() -> anyhow::Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("reading job list from stdin")?;

    let input = sim::parse_input(&raw).context("parsing job list")?;
    let policy = input.policy;
    let config = SimConfig::from_env()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let outcome = sim::run(policy, input.jobs, &config, |record| {
        writeln!(out, "{record}")?;
        Ok(())
    })
    .with_context(|| format!("running {policy} simulation"))?;

    writeln!(out, "{}", outcome.report)?;
    out.flush()?;

    let summary = Summary::from_outcome(&outcome);
    debug!(
        "{}: {} jobs, max turnaround {} ticks, {} idle ticks (longest streak {})",
        outcome.policy,
        summary.jobs, summary.max_turnaround, summary.idle_ticks, summary.longest_idle
    );

    Ok(())
}
