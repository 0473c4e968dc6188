use anyhow::{ensure, Context, Result};
use itertools::{Itertools, MinMaxResult};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// list of crab positions, separated by comma
    file: String,
}

#[derive(Debug, Clone, Copy)]
enum FuelRate {
    /// one unit of fuel per unit of distance
    Linear,
    /// each additional unit of distance costs one more than the previous
    Triangular,
}

impl FuelRate {
    fn cost(self, distance: u64) -> u64 {
        match self {
            FuelRate::Linear => distance,
            FuelRate::Triangular => distance * (distance + 1) / 2,
        }
    }
}

fn parse(input: &str) -> Result<Vec<i64>> {
    input
        .trim()
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse()
                .with_context(|| format!("bad position {:?}", token))
        })
        .collect()
}

fn total_cost(positions: &[i64], target: i64, rate: FuelRate) -> u64 {
    positions
        .iter()
        .map(|pos| rate.cost(pos.abs_diff(target)))
        .sum()
}

/// Scan every candidate target between the extreme input positions and
/// return the cheapest together with its cost.
fn optimal_position(positions: &[i64], rate: FuelRate) -> Result<(i64, u64)> {
    let (min, max) = match positions.iter().minmax() {
        MinMaxResult::NoElements => anyhow::bail!("no positions in input"),
        MinMaxResult::OneElement(&only) => (only, only),
        MinMaxResult::MinMax(&min, &max) => (min, max),
    };
    (min..=max)
        .map(|target| (target, total_cost(positions, target, rate)))
        .min_by_key(|&(_, cost)| cost)
        .context("no positions in input")
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let positions = parse(&input)?;
    ensure!(!positions.is_empty(), "no positions in input");

    for (label, rate) in [
        ("linear", FuelRate::Linear),
        ("triangular", FuelRate::Triangular),
    ] {
        let (target, cost) = optimal_position(&positions, rate)?;
        println!(
            "{} rate: optimal position {} costs {} fuel",
            label, target, cost
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "16,1,2,0,4,2,7,1,2,14";

    #[test]
    fn finds_linear_optimum() {
        let positions = parse(SAMPLE).unwrap();
        assert_eq!(
            optimal_position(&positions, FuelRate::Linear).unwrap(),
            (2, 37)
        );
    }

    #[test]
    fn finds_triangular_optimum() {
        let positions = parse(SAMPLE).unwrap();
        assert_eq!(
            optimal_position(&positions, FuelRate::Triangular).unwrap(),
            (5, 168)
        );
    }

    #[test]
    fn triangular_cost_dominates_linear() {
        let positions = [1, 2, 3];
        let (target, cost) = optimal_position(&positions, FuelRate::Linear).unwrap();
        assert_eq!((target, cost), (2, 2));
        let (_, tri_cost) = optimal_position(&positions, FuelRate::Triangular).unwrap();
        assert!(tri_cost >= cost);
    }
}
