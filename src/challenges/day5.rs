use anyhow::{ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// lines of vents, one per line as `x1,y1 -> x2,y2`
    file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    x: i64,
    y: i64,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Point,
    end: Point,
}

/// Whether 45-degree segments are rasterized or skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Diagonals {
    Skip,
    Include,
}

impl Segment {
    fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Integer grid points covered by the segment, walked one unit step
    /// in each axis' direction at a time.
    fn points(&self) -> Vec<Point> {
        let dx = (self.end.x - self.start.x).signum();
        let dy = (self.end.y - self.start.y).signum();
        let steps = (self.end.x - self.start.x)
            .abs()
            .max((self.end.y - self.start.y).abs());
        (0..=steps)
            .map(|i| Point {
                x: self.start.x + i * dx,
                y: self.start.y + i * dy,
            })
            .collect()
    }
}

fn parse_point(token: &str) -> Result<Point> {
    let (x, y) = token
        .split_once(',')
        .with_context(|| format!("bad point {:?}", token))?;
    Ok(Point {
        x: x.trim().parse().with_context(|| format!("bad point {:?}", token))?,
        y: y.trim().parse().with_context(|| format!("bad point {:?}", token))?,
    })
}

fn parse(input: &str) -> Result<Vec<Segment>> {
    input
        .lines()
        .map(|line| {
            let (start, end) = line
                .split_once(" -> ")
                .with_context(|| format!("bad segment {:?}", line))?;
            let segment = Segment {
                start: parse_point(start)?,
                end: parse_point(end)?,
            };
            let dx = (segment.end.x - segment.start.x).abs();
            let dy = (segment.end.y - segment.start.y).abs();
            ensure!(
                dx == 0 || dy == 0 || dx == dy,
                "segment {:?} is neither axis-aligned nor 45 degrees",
                line
            );
            ensure!(
                segment.start.x >= 0 && segment.start.y >= 0 && segment.end.x >= 0 && segment.end.y >= 0,
                "segment {:?} has negative coordinates",
                line
            );
            Ok(segment)
        })
        .collect()
}

#[derive(Debug)]
struct Diagram {
    counts: Vec<u32>,
    width: usize,
}

impl Diagram {
    /// Accumulate per-point coverage over a matrix sized to the largest
    /// coordinate seen across all segments.
    fn rasterize(segments: &[Segment], diagonals: Diagonals) -> Self {
        let max_x = segments
            .iter()
            .flat_map(|s| [s.start.x, s.end.x])
            .max()
            .unwrap_or(0);
        let max_y = segments
            .iter()
            .flat_map(|s| [s.start.y, s.end.y])
            .max()
            .unwrap_or(0);
        let width = (max_x + 1) as usize;
        let height = (max_y + 1) as usize;
        let mut counts = vec![0u32; width * height];
        for segment in segments {
            if diagonals == Diagonals::Skip && !segment.is_axis_aligned() {
                continue;
            }
            for point in segment.points() {
                counts[point.y as usize * width + point.x as usize] += 1;
            }
        }
        Diagram { counts, width }
    }

    fn overlaps(&self) -> usize {
        self.counts.iter().filter(|&&count| count >= 2).count()
    }

    #[cfg(test)]
    fn count_at(&self, x: usize, y: usize) -> u32 {
        self.counts[y * self.width + x]
    }
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let segments = parse(&input)?;

    let straight = Diagram::rasterize(&segments, Diagonals::Skip);
    println!("{} overlaps among straight vents", straight.overlaps());
    let all = Diagram::rasterize(&segments, Diagonals::Include);
    println!("{} overlaps including diagonal vents", all.overlaps());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2";

    #[test]
    fn counts_straight_overlaps() {
        let segments = parse(SAMPLE).unwrap();
        assert_eq!(Diagram::rasterize(&segments, Diagonals::Skip).overlaps(), 5);
    }

    #[test]
    fn counts_overlaps_with_diagonals() {
        let segments = parse(SAMPLE).unwrap();
        assert_eq!(
            Diagram::rasterize(&segments, Diagonals::Include).overlaps(),
            12
        );
    }

    #[test]
    fn crossing_axis_aligned_segments_overlap_once() {
        let segments = parse("0,2 -> 4,2\n2,0 -> 2,4").unwrap();
        let diagram = Diagram::rasterize(&segments, Diagonals::Skip);
        assert_eq!(diagram.overlaps(), 1);
        assert_eq!(diagram.count_at(2, 2), 2);
    }

    #[test]
    fn diagonal_mode_adds_diagonal_crossings() {
        let segments = parse("0,0 -> 4,4\n0,4 -> 4,0").unwrap();
        assert_eq!(Diagram::rasterize(&segments, Diagonals::Skip).overlaps(), 0);
        assert_eq!(
            Diagram::rasterize(&segments, Diagonals::Include).overlaps(),
            1
        );
    }

    #[test]
    fn rejects_steep_segment() {
        assert!(parse("0,0 -> 1,2").is_err());
    }
}
