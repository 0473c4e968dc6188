use anyhow::{bail, ensure, Context, Result};
use std::collections::HashSet;
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the transparent paper: dot coordinates, a blank line, fold instructions
    file: String,
}

#[derive(Debug, Clone, Copy)]
enum Fold {
    AlongX(i64),
    AlongY(i64),
}

#[derive(Debug)]
struct Instructions {
    dots: HashSet<(i64, i64)>,
    folds: Vec<Fold>,
}

impl Instructions {
    fn parse(input: &str) -> Result<Self> {
        let (dots, folds) = input
            .trim_end()
            .split_once("\n\n")
            .context("missing blank line between dots and folds")?;
        let dots = dots
            .lines()
            .map(|line| {
                let (x, y) = line
                    .trim()
                    .split_once(',')
                    .with_context(|| format!("bad dot {:?}", line))?;
                Ok((
                    x.parse().with_context(|| format!("bad dot {:?}", line))?,
                    y.parse().with_context(|| format!("bad dot {:?}", line))?,
                ))
            })
            .collect::<Result<_>>()?;
        let folds = folds
            .lines()
            .map(|line| {
                let rest = line
                    .trim()
                    .strip_prefix("fold along ")
                    .with_context(|| format!("bad fold {:?}", line))?;
                let (axis, at) = rest
                    .split_once('=')
                    .with_context(|| format!("bad fold {:?}", line))?;
                let at = at.parse().with_context(|| format!("bad fold {:?}", line))?;
                match axis {
                    "x" => Ok(Fold::AlongX(at)),
                    "y" => Ok(Fold::AlongY(at)),
                    _ => bail!("bad fold axis {:?}", line),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(!folds.is_empty(), "no fold instructions in input");
        Ok(Instructions { dots, folds })
    }
}

/// Reflect every dot beyond the fold line; dots on the line itself vanish.
/// Coinciding dots collapse into one.
fn fold(dots: &HashSet<(i64, i64)>, fold: Fold) -> HashSet<(i64, i64)> {
    dots.iter()
        .filter_map(|&(x, y)| match fold {
            Fold::AlongX(line) if x > line => Some((2 * line - x, y)),
            Fold::AlongX(line) if x == line => None,
            Fold::AlongX(_) => Some((x, y)),
            Fold::AlongY(line) if y > line => Some((x, 2 * line - y)),
            Fold::AlongY(line) if y == line => None,
            Fold::AlongY(_) => Some((x, y)),
        })
        .collect()
}

fn render(dots: &HashSet<(i64, i64)>) -> String {
    let max_x = dots.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let max_y = dots.iter().map(|&(_, y)| y).max().unwrap_or(0);
    let mut out = String::new();
    for y in 0..=max_y {
        for x in 0..=max_x {
            out.push(if dots.contains(&(x, y)) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let instructions = Instructions::parse(&input)?;

    let after_first = fold(&instructions.dots, instructions.folds[0]);
    println!("{} dots after the first fold", after_first.len());

    let folded = instructions
        .folds
        .iter()
        .fold(instructions.dots.clone(), |dots, &f| fold(&dots, f));
    println!("after all folds:");
    print!("{}", render(&folded));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5";

    #[test]
    fn first_fold_leaves_seventeen_dots() {
        let instructions = Instructions::parse(SAMPLE).unwrap();
        assert_eq!(fold(&instructions.dots, instructions.folds[0]).len(), 17);
    }

    #[test]
    fn all_folds_render_a_square() {
        let instructions = Instructions::parse(SAMPLE).unwrap();
        let folded = instructions
            .folds
            .iter()
            .fold(instructions.dots.clone(), |dots, &f| fold(&dots, f));
        assert_eq!(
            render(&folded),
            "#####\n#...#\n#...#\n#...#\n#####\n"
        );
    }

    #[test]
    fn dots_on_the_fold_line_vanish() {
        let dots: HashSet<(i64, i64)> = [(0, 0), (2, 2), (2, 4)].into_iter().collect();
        let folded = fold(&dots, Fold::AlongY(2));
        assert_eq!(folded, [(0, 0), (2, 0)].into_iter().collect());
    }

    #[test]
    fn rejects_input_without_folds() {
        assert!(Instructions::parse("1,2\n3,4").is_err());
    }
}
