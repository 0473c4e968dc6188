use anyhow::{ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the heightmap, one row of digits per line
    file: String,
}

const WALL: u8 = 9;

#[derive(Debug)]
struct Heightmap {
    heights: Vec<u8>,
    width: usize,
    height: usize,
}

impl Heightmap {
    fn parse(input: &str) -> Result<Self> {
        let mut heights = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for line in input.lines() {
            let line = line.trim();
            let row: Vec<u8> = line
                .bytes()
                .map(|byte| {
                    ensure!(byte.is_ascii_digit(), "bad height row {:?}", line);
                    Ok(byte - b'0')
                })
                .collect::<Result<_>>()?;
            if height == 0 {
                width = row.len();
            }
            ensure!(
                row.len() == width,
                "height rows differ in length at {:?}",
                line
            );
            heights.extend(row);
            height += 1;
        }
        ensure!(width > 0 && height > 0, "empty heightmap");
        Ok(Heightmap {
            heights,
            width,
            height,
        })
    }

    fn at(&self, x: usize, y: usize) -> u8 {
        self.heights[y * self.width + x]
    }

    fn orthogonal_neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x < self.width - 1 {
            neighbors.push((x + 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y < self.height - 1 {
            neighbors.push((x, y + 1));
        }
        neighbors
    }

    /// Sum of 1 + height over cells strictly lower than every orthogonal
    /// neighbor.
    fn risk_sum(&self) -> u64 {
        let mut sum = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.at(x, y);
                if self
                    .orthogonal_neighbors(x, y)
                    .iter()
                    .all(|&(nx, ny)| cell < self.at(nx, ny))
                {
                    sum += u64::from(cell) + 1;
                }
            }
        }
        sum
    }

    /// Label contiguous regions of non-wall cells in a single row-major
    /// scan: each cell joins the region of an already-labeled neighbor
    /// above or to the left, starts a fresh region if there is none, and
    /// merges the two regions when both exist and differ.
    fn basin_sizes(&self) -> Vec<usize> {
        let mut labels: Vec<Option<usize>> = vec![None; self.heights.len()];
        let mut regions = Regions::default();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.at(x, y) == WALL {
                    continue;
                }
                let above = y
                    .checked_sub(1)
                    .and_then(|py| labels[py * self.width + x]);
                let left = x
                    .checked_sub(1)
                    .and_then(|px| labels[y * self.width + px]);
                let label = match (above, left) {
                    (None, None) => regions.create(),
                    (Some(region), None) | (None, Some(region)) => regions.grow(region),
                    (Some(a), Some(b)) => regions.merge_and_grow(a, b),
                };
                labels[y * self.width + x] = Some(label);
            }
        }
        regions.sizes()
    }

    fn largest_basins_product(&self) -> Result<u64> {
        let mut sizes = self.basin_sizes();
        ensure!(sizes.len() >= 3, "fewer than three basins in heightmap");
        sizes.sort_unstable();
        Ok(sizes.iter().rev().take(3).map(|&size| size as u64).product())
    }
}

/// Union-find over region labels, tracking each root's cell count.
#[derive(Debug, Default)]
struct Regions {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl Regions {
    fn create(&mut self) -> usize {
        let label = self.parent.len();
        self.parent.push(label);
        self.size.push(1);
        label
    }

    fn find(&mut self, label: usize) -> usize {
        let mut root = label;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = label;
        while self.parent[current] != root {
            current = std::mem::replace(&mut self.parent[current], root);
        }
        root
    }

    fn grow(&mut self, label: usize) -> usize {
        let root = self.find(label);
        self.size[root] += 1;
        root
    }

    fn merge_and_grow(&mut self, a: usize, b: usize) -> usize {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
        self.size[root_a] += 1;
        root_a
    }

    fn sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(label, &parent)| label == parent)
            .map(|(label, _)| self.size[label])
            .collect()
    }
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let map = Heightmap::parse(&input)?;

    println!("low point risk sum {}", map.risk_sum());
    println!(
        "three largest basins multiply to {}",
        map.largest_basins_product()?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";

    #[test]
    fn sums_low_point_risks() {
        let map = Heightmap::parse(SAMPLE).unwrap();
        assert_eq!(map.risk_sum(), 15);
    }

    #[test]
    fn multiplies_three_largest_basins() {
        let map = Heightmap::parse(SAMPLE).unwrap();
        assert_eq!(map.largest_basins_product().unwrap(), 1134);
    }

    #[test]
    fn wall_cell_splits_regions() {
        let map = Heightmap::parse("191").unwrap();
        let mut sizes = map.basin_sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 1]);
    }

    #[test]
    fn merges_regions_discovered_separately() {
        // the wall splits the first row; the second row rejoins both halves
        let map = Heightmap::parse("191\n111").unwrap();
        assert_eq!(map.basin_sizes(), vec![5]);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Heightmap::parse("123\n12").is_err());
    }
}
