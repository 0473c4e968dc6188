use anyhow::{ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// list of fish timers, separated by comma
    file: String,
    /// days to pass
    #[arg(short, long, default_value_t = 80)]
    days: u32,
}

/// Fish counts bucketed by timer value 0..=8. One simulated day rotates the
/// buckets down and re-files the spawning fish at 6 next to their offspring
/// at 8.
fn parse(input: &str) -> Result<[u64; 9]> {
    let mut buckets = [0u64; 9];
    for token in input.trim().split(',') {
        let timer: usize = token
            .trim()
            .parse()
            .with_context(|| format!("bad fish timer {:?}", token))?;
        ensure!(timer < buckets.len(), "fish timer {} out of range", timer);
        buckets[timer] += 1;
    }
    Ok(buckets)
}

fn population_after(mut buckets: [u64; 9], days: u32) -> u64 {
    for _ in 0..days {
        let spawning = buckets[0];
        buckets.rotate_left(1);
        buckets[6] += spawning;
    }
    buckets.iter().sum()
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let buckets = parse(&input)?;

    println!(
        "after {} days there are {} fishes",
        args.days,
        population_after(buckets, args.days)
    );
    Ok(())
}
