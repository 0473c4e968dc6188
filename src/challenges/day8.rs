use anyhow::{bail, ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// list of entries, one entry per row as `ten patterns | four outputs`
    file: String,
}

#[derive(Debug)]
struct Entry {
    patterns: [u8; 10],
    output: [u8; 4],
}

/// Bitmask over the seven segments a..=g.
fn segments(token: &str) -> Result<u8> {
    let mut mask = 0u8;
    for byte in token.bytes() {
        ensure!(
            (b'a'..=b'g').contains(&byte),
            "bad segment {:?} in {:?}",
            byte as char,
            token
        );
        mask |= 1 << (byte - b'a');
    }
    Ok(mask)
}

fn parse(input: &str) -> Result<Vec<Entry>> {
    input
        .lines()
        .map(|line| {
            let (patterns, output) = line
                .split_once('|')
                .with_context(|| format!("bad entry {:?}", line))?;
            let patterns: Vec<u8> = patterns
                .split_whitespace()
                .map(segments)
                .collect::<Result<_>>()?;
            let output: Vec<u8> = output
                .split_whitespace()
                .map(segments)
                .collect::<Result<_>>()?;
            Ok(Entry {
                patterns: patterns
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("entry {:?} needs ten patterns", line))?,
                output: output
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("entry {:?} needs four outputs", line))?,
            })
        })
        .collect()
}

/// Digits 1, 4, 7 and 8 are the only ones with 2, 4, 3 and 7 lit segments.
fn easy_digit_count(entries: &[Entry]) -> usize {
    entries
        .iter()
        .flat_map(|entry| entry.output)
        .filter(|signal| matches!(signal.count_ones(), 2 | 3 | 4 | 7))
        .count()
}

/// Deduce the scrambled pattern of each digit from its segment count and
/// the segments it shares with the unambiguous 1 and 4, then read off the
/// four-digit output.
fn decode(entry: &Entry) -> Result<u64> {
    let find_unique = |ones: u32| -> Result<u8> {
        let mut matches = entry.patterns.iter().filter(|p| p.count_ones() == ones);
        match (matches.next(), matches.next()) {
            (Some(&pattern), None) => Ok(pattern),
            _ => bail!("entry has no unique pattern with {} segments", ones),
        }
    };
    let one = find_unique(2)?;
    let four = find_unique(4)?;

    let digit_of = |pattern: u8| -> Result<u64> {
        Ok(match pattern.count_ones() {
            2 => 1,
            3 => 7,
            4 => 4,
            7 => 8,
            5 if pattern & one == one => 3,
            5 if (pattern & four).count_ones() == 2 => 2,
            5 => 5,
            6 if pattern & four == four => 9,
            6 if pattern & one == one => 0,
            6 => 6,
            _ => bail!("pattern {:#09b} matches no digit", pattern),
        })
    };

    entry.output.iter().try_fold(0, |value, &signal| {
        Ok(value * 10 + digit_of(signal)?)
    })
}

fn output_sum(entries: &[Entry]) -> Result<u64> {
    entries.iter().map(decode).sum()
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let entries = parse(&input)?;

    println!("{} easy digits in the outputs", easy_digit_count(&entries));
    println!("decoded outputs sum to {}", output_sum(&entries)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce";

    #[test]
    fn counts_easy_digits() {
        let entries = parse(SAMPLE).unwrap();
        assert_eq!(easy_digit_count(&entries), 26);
    }

    #[test]
    fn decodes_single_entry() {
        let entries = parse(
            "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
        )
        .unwrap();
        assert_eq!(decode(&entries[0]).unwrap(), 5353);
    }

    #[test]
    fn sums_decoded_outputs() {
        let entries = parse(SAMPLE).unwrap();
        assert_eq!(output_sum(&entries).unwrap(), 61229);
    }

    #[test]
    fn rejects_entry_with_missing_patterns() {
        assert!(parse("ab cd | ab ab ab ab").is_err());
    }
}
