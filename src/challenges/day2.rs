use anyhow::{bail, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the planned course, one command per line
    file: String,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
    Forward,
}

#[derive(Debug, Clone, Copy)]
struct Movement {
    direction: Direction,
    distance: i64,
}

/// Whether `forward` steers by the accumulated aim or moves straight ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Steering {
    Direct,
    Aimed,
}

#[derive(Debug, Default)]
struct Submarine {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Submarine {
    fn advance(&mut self, movement: Movement, steering: Steering) {
        match (movement.direction, steering) {
            (Direction::Up, Steering::Direct) => self.depth -= movement.distance,
            (Direction::Down, Steering::Direct) => self.depth += movement.distance,
            (Direction::Forward, Steering::Direct) => self.horizontal += movement.distance,
            (Direction::Up, Steering::Aimed) => self.aim -= movement.distance,
            (Direction::Down, Steering::Aimed) => self.aim += movement.distance,
            (Direction::Forward, Steering::Aimed) => {
                self.horizontal += movement.distance;
                self.depth += self.aim * movement.distance;
            }
        }
    }
}

fn parse(input: &str) -> Result<Vec<Movement>> {
    input
        .lines()
        .map(|line| {
            let (word, distance) = line
                .split_once(' ')
                .with_context(|| format!("bad movement {:?}", line))?;
            let direction = match word {
                "up" => Direction::Up,
                "down" => Direction::Down,
                "forward" => Direction::Forward,
                _ => bail!("unknown direction {:?}", word),
            };
            let distance = distance
                .parse()
                .with_context(|| format!("bad distance {:?}", line))?;
            Ok(Movement {
                direction,
                distance,
            })
        })
        .collect()
}

fn run_course(movements: &[Movement], steering: Steering) -> Submarine {
    let mut submarine = Submarine::default();
    for movement in movements {
        submarine.advance(*movement, steering);
    }
    submarine
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let movements = parse(&input)?;

    for (label, steering) in [("direct", Steering::Direct), ("aimed", Steering::Aimed)] {
        let sub = run_course(&movements, steering);
        println!(
            "{}: horizontal {} depth {} product {}",
            label,
            sub.horizontal,
            sub.depth,
            sub.horizontal * sub.depth
        );
    }
    Ok(())
}
