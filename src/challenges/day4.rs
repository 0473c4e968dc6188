use anyhow::{ensure, Context, Result};
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the bingo setup, first line containing calls separated by comma
    file: String,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    value: u32,
    marked: bool,
}

#[derive(Debug, Clone)]
struct Board {
    cells: Vec<Vec<Cell>>,
}

impl Board {
    fn parse(block: &str) -> Result<Self> {
        let cells: Vec<Vec<Cell>> = block
            .lines()
            .map(|row| {
                row.split_whitespace()
                    .map(|value| {
                        let value = value
                            .parse()
                            .with_context(|| format!("bad board cell {:?}", value))?;
                        Ok(Cell {
                            value,
                            marked: false,
                        })
                    })
                    .collect()
            })
            .collect::<Result<_>>()?;
        ensure!(
            !cells.is_empty() && cells.iter().all(|row| row.len() == cells.len()),
            "board is not square:\n{}",
            block
        );
        Ok(Board { cells })
    }

    fn mark(&mut self, value: u32) {
        for row in &mut self.cells {
            for cell in row {
                if cell.value == value {
                    cell.marked = true;
                }
            }
        }
    }

    fn has_bingo(&self) -> bool {
        let size = self.cells.len();
        (0..size).any(|i| {
            self.cells[i].iter().all(|cell| cell.marked)
                || self.cells.iter().all(|row| row[i].marked)
        })
    }

    fn unmarked_sum(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.marked)
            .map(|cell| u64::from(cell.value))
            .sum()
    }
}

#[derive(Debug)]
struct BingoGame {
    calls: Vec<u32>,
    boards: Vec<Board>,
}

impl BingoGame {
    fn parse(input: &str) -> Result<Self> {
        let mut blocks = input.trim_end().split("\n\n");
        let calls = blocks
            .next()
            .context("missing call line")?
            .split(',')
            .map(|call| {
                call.trim()
                    .parse()
                    .with_context(|| format!("bad call {:?}", call))
            })
            .collect::<Result<_>>()?;
        let boards = blocks.map(Board::parse).collect::<Result<Vec<_>>>()?;
        ensure!(!boards.is_empty(), "no bingo boards in input");
        Ok(BingoGame { calls, boards })
    }

    /// Board scores in the order the boards reach bingo.
    fn play(self) -> Vec<u64> {
        let BingoGame { calls, mut boards } = self;
        let mut scores = Vec::with_capacity(boards.len());
        for call in calls {
            for board in &mut boards {
                board.mark(call);
            }
            let (winners, rest): (Vec<Board>, Vec<Board>) =
                boards.into_iter().partition(Board::has_bingo);
            boards = rest;
            for board in &winners {
                scores.push(board.unmarked_sum() * u64::from(call));
            }
            if boards.is_empty() {
                break;
            }
        }
        scores
    }
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let game = BingoGame::parse(&input)?;

    let scores = game.play();
    let first = scores.first().context("no board ever reached bingo")?;
    println!("first winning board scores {}", first);
    let last = scores.last().context("no board ever reached bingo")?;
    println!("last winning board scores {}", last);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

    #[test]
    fn first_and_last_winning_scores() {
        let game = BingoGame::parse(SAMPLE).unwrap();
        let scores = game.play();
        assert_eq!(scores.first(), Some(&4512));
        assert_eq!(scores.last(), Some(&1924));
    }

    #[test]
    fn rejects_ragged_board() {
        assert!(Board::parse("1 2 3\n4 5").is_err());
    }

    #[test]
    fn detects_column_bingo() {
        let mut board = Board::parse("1 2\n3 4").unwrap();
        board.mark(2);
        board.mark(4);
        assert!(board.has_bingo());
        assert_eq!(board.unmarked_sum(), 4);
    }
}
