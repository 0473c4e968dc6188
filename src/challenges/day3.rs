use anyhow::{bail, ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the diagnostic report, one binary number per line
    file: String,
}

fn parse(input: &str) -> Result<Vec<&str>> {
    let report: Vec<&str> = input.lines().map(str::trim).collect();
    ensure!(!report.is_empty(), "empty diagnostic report");
    let width = report[0].len();
    for line in &report {
        ensure!(
            line.len() == width && line.bytes().all(|b| b == b'0' || b == b'1'),
            "bad diagnostic line {:?}",
            line
        );
    }
    Ok(report)
}

/// Count of lines with a `1` at `column`.
fn ones_at(report: &[&str], column: usize) -> usize {
    report
        .iter()
        .filter(|line| line.as_bytes()[column] == b'1')
        .count()
}

fn power_consumption(report: &[&str]) -> (u32, u32) {
    let width = report[0].len();
    let mut gamma = 0u32;
    for column in 0..width {
        let ones = ones_at(report, column);
        gamma = (gamma << 1) | u32::from(ones * 2 >= report.len());
    }
    let epsilon = !gamma & ((1 << width) - 1);
    (gamma, epsilon)
}

#[derive(Debug, Clone, Copy)]
enum BitCriteria {
    MostCommon,
    LeastCommon,
}

/// Narrow the report column by column, keeping only lines matching the
/// criteria bit, until a single candidate remains.
fn rating(report: &[&str], criteria: BitCriteria) -> Result<u32> {
    let width = report[0].len();
    let mut candidates: Vec<&str> = report.to_vec();
    for column in 0..width {
        if candidates.len() == 1 {
            break;
        }
        let ones = ones_at(&candidates, column);
        let majority_one = ones * 2 >= candidates.len();
        let keep = match criteria {
            BitCriteria::MostCommon => {
                if majority_one {
                    b'1'
                } else {
                    b'0'
                }
            }
            BitCriteria::LeastCommon => {
                if majority_one {
                    b'0'
                } else {
                    b'1'
                }
            }
        };
        candidates.retain(|line| line.as_bytes()[column] == keep);
        if candidates.is_empty() {
            bail!("bit criteria narrowing eliminated every candidate");
        }
    }
    match candidates[..] {
        [only] => u32::from_str_radix(only, 2).context("bad binary line"),
        _ => bail!(
            "bit criteria narrowing left {} candidates",
            candidates.len()
        ),
    }
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let report = parse(&input)?;

    let (gamma, epsilon) = power_consumption(&report);
    println!(
        "gamma {} epsilon {} power {}",
        gamma,
        epsilon,
        gamma * epsilon
    );

    let oxygen = rating(&report, BitCriteria::MostCommon)?;
    let co2 = rating(&report, BitCriteria::LeastCommon)?;
    println!(
        "oxygen {} co2 {} life support {}",
        oxygen,
        co2,
        oxygen * co2
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010";

    #[test]
    fn computes_power_consumption() {
        let report = parse(SAMPLE).unwrap();
        assert_eq!(power_consumption(&report), (22, 9));
    }

    #[test]
    fn narrows_to_life_support_ratings() {
        let report = parse(SAMPLE).unwrap();
        assert_eq!(rating(&report, BitCriteria::MostCommon).unwrap(), 23);
        assert_eq!(rating(&report, BitCriteria::LeastCommon).unwrap(), 10);
    }

    #[test]
    fn rejects_ragged_report() {
        assert!(parse("0101\n01").is_err());
        assert!(parse("0102").is_err());
    }
}
