use anyhow::{ensure, Context, Result};
use std::collections::VecDeque;
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the octopuses, arranged in a grid of energy levels
    file: String,
    /// steps to simulate
    #[arg(short, long, default_value_t = 100)]
    steps: u32,
}

const FLASH_THRESHOLD: u8 = 10;

#[derive(Debug, Clone)]
struct OctopusGrid {
    energy: Vec<u8>,
    width: usize,
    height: usize,
}

impl OctopusGrid {
    fn parse(input: &str) -> Result<Self> {
        let mut energy = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for line in input.lines() {
            let line = line.trim();
            let row: Vec<u8> = line
                .bytes()
                .map(|byte| {
                    ensure!(byte.is_ascii_digit(), "bad energy row {:?}", line);
                    Ok(byte - b'0')
                })
                .collect::<Result<_>>()?;
            if height == 0 {
                width = row.len();
            }
            ensure!(
                row.len() == width,
                "energy rows differ in length at {:?}",
                line
            );
            energy.extend(row);
            height += 1;
        }
        ensure!(width > 0 && height > 0, "empty octopus grid");
        Ok(OctopusGrid {
            energy,
            width,
            height,
        })
    }

    /// Up to eight neighbors; edges simply have fewer.
    fn neighbors(&self, index: usize) -> Vec<usize> {
        let x = index % self.width;
        let y = index / self.width;
        let mut neighbors = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if (0..self.width as i64).contains(&nx) && (0..self.height as i64).contains(&ny) {
                    neighbors.push(ny as usize * self.width + nx as usize);
                }
            }
        }
        neighbors
    }

    /// Advance one step and return how many octopuses flashed. Every cell
    /// gains one energy; cells at or above the threshold flash, feeding a
    /// worklist of neighbor increments until the cascade dies down. The
    /// per-step `fired` flags guarantee one flash per cell per step.
    fn step(&mut self) -> usize {
        let mut fired = vec![false; self.energy.len()];
        let mut worklist: VecDeque<usize> = VecDeque::new();
        for (index, energy) in self.energy.iter_mut().enumerate() {
            *energy += 1;
            if *energy >= FLASH_THRESHOLD {
                worklist.push_back(index);
            }
        }
        while let Some(index) = worklist.pop_front() {
            if fired[index] {
                continue;
            }
            fired[index] = true;
            for neighbor in self.neighbors(index) {
                self.energy[neighbor] += 1;
                if self.energy[neighbor] >= FLASH_THRESHOLD && !fired[neighbor] {
                    worklist.push_back(neighbor);
                }
            }
        }
        let mut flashes = 0;
        for (index, energy) in self.energy.iter_mut().enumerate() {
            if fired[index] {
                *energy = 0;
                flashes += 1;
            }
        }
        flashes
    }

    fn flashes_after(mut self, steps: u32) -> usize {
        (0..steps).map(|_| self.step()).sum()
    }

    /// First step at which the whole grid flashes at once.
    fn first_synchronized_step(mut self) -> u32 {
        let mut step = 0;
        loop {
            step += 1;
            if self.step() == self.energy.len() {
                return step;
            }
        }
    }
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let grid = OctopusGrid::parse(&input)?;

    println!(
        "{} flashes after {} steps",
        grid.clone().flashes_after(args.steps),
        args.steps
    );
    println!(
        "all octopuses flash at step {}",
        grid.first_synchronized_step()
    );
    Ok(())
}
