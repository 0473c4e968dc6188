use anyhow::{bail, ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the navigation subsystem, one chunk line per line
    file: String,
}

#[derive(Debug, PartialEq, Eq)]
enum LineReport {
    /// first closing character that mismatched its chunk
    Corrupt(char),
    /// closers still owed when the line ended, innermost first
    Incomplete(Vec<char>),
    Complete,
}

fn closer_of(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check(line: &str) -> Result<LineReport> {
    let mut expected = Vec::new();
    for c in line.chars() {
        if let Some(closer) = closer_of(c) {
            expected.push(closer);
        } else if matches!(c, ')' | ']' | '}' | '>') {
            if expected.pop() != Some(c) {
                return Ok(LineReport::Corrupt(c));
            }
        } else {
            bail!("bad character {:?} in line {:?}", c, line);
        }
    }
    if expected.is_empty() {
        Ok(LineReport::Complete)
    } else {
        expected.reverse();
        Ok(LineReport::Incomplete(expected))
    }
}

fn error_score(reports: &[LineReport]) -> u64 {
    reports
        .iter()
        .filter_map(|report| match report {
            LineReport::Corrupt(')') => Some(3),
            LineReport::Corrupt(']') => Some(57),
            LineReport::Corrupt('}') => Some(1197),
            LineReport::Corrupt('>') => Some(25137),
            _ => None,
        })
        .sum()
}

fn completion_score(closers: &[char]) -> u64 {
    closers.iter().fold(0, |score, closer| {
        score * 5
            + match closer {
                ')' => 1,
                ']' => 2,
                '}' => 3,
                '>' => 4,
                _ => 0,
            }
    })
}

/// Middle completion score across the incomplete lines; always well-defined
/// because their count is odd on valid input.
fn middle_completion_score(reports: &[LineReport]) -> Result<u64> {
    let mut scores: Vec<u64> = reports
        .iter()
        .filter_map(|report| match report {
            LineReport::Incomplete(closers) => Some(completion_score(closers)),
            _ => None,
        })
        .collect();
    ensure!(!scores.is_empty(), "no incomplete lines to complete");
    scores.sort_unstable();
    Ok(scores[scores.len() / 2])
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let reports = input
        .lines()
        .map(|line| check(line.trim()))
        .collect::<Result<Vec<_>>>()?;

    println!("syntax error score {}", error_score(&reports));
    println!(
        "middle completion score {}",
        middle_completion_score(&reports)?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]";

    fn sample_reports() -> Vec<LineReport> {
        SAMPLE.lines().map(|line| check(line).unwrap()).collect()
    }

    #[test]
    fn scores_corrupt_lines() {
        assert_eq!(error_score(&sample_reports()), 26397);
    }

    #[test]
    fn scores_middle_completion() {
        assert_eq!(middle_completion_score(&sample_reports()).unwrap(), 288957);
    }

    #[test]
    fn reports_first_mismatch() {
        assert_eq!(check("{([(<{}[<>[]}>{[]{[(<()>").unwrap(), LineReport::Corrupt('}'));
    }

    #[test]
    fn completes_in_inner_to_outer_order() {
        assert_eq!(
            check("[({(<(())[]>[[{[]{<()<>>").unwrap(),
            LineReport::Incomplete(vec!['}', '}', ']', ']', ')', '}', ')', ']'])
        );
    }

    #[test]
    fn balanced_line_is_complete() {
        assert_eq!(check("([<>{}])").unwrap(), LineReport::Complete);
    }

    #[test]
    fn rejects_unknown_character() {
        assert!(check("(a)").is_err());
    }
}
