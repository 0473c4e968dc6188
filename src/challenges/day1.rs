use anyhow::{Context, Result};
use itertools::Itertools;
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the sonar sweep report, one measurement per line
    file: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SweepTally {
    increased: usize,
    decreased: usize,
    equal: usize,
}

fn parse(input: &str) -> Result<Vec<u32>> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse()
                .with_context(|| format!("bad depth measurement {:?}", line))
        })
        .collect()
}

fn tally(depths: &[u32]) -> SweepTally {
    let mut result = SweepTally::default();
    for (prev, curr) in depths.iter().tuple_windows() {
        if curr > prev {
            result.increased += 1;
        } else if curr < prev {
            result.decreased += 1;
        } else {
            result.equal += 1;
        }
    }
    result
}

fn windowed_increases(depths: &[u32]) -> usize {
    depths
        .iter()
        .tuple_windows()
        .map(|(a, b, c)| a + b + c)
        .tuple_windows()
        .filter(|(prev, curr)| curr > prev)
        .count()
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let depths = parse(&input)?;

    let counts = tally(&depths);
    println!("{}x decreased", counts.decreased);
    println!("{}x increased", counts.increased);
    println!("{}x equal", counts.equal);
    println!(
        "{}x increased over a three-measurement window",
        windowed_increases(&depths)
    );
    Ok(())
}
