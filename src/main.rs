use clap::Parser;

mod challenges;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Challenge Day
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Sonar Sweep
    Day1(challenges::day1::Args),
    /// Dive!
    Day2(challenges::day2::Args),
    /// Binary Diagnostic
    Day3(challenges::day3::Args),
    /// Giant Squid
    Day4(challenges::day4::Args),
    /// Hydrothermal Venture
    Day5(challenges::day5::Args),
    /// Lanternfish
    Day6(challenges::day6::Args),
    /// The Treachery of Whales
    Day7(challenges::day7::Args),
    /// Seven Segment Search
    Day8(challenges::day8::Args),
    /// Smoke Basin
    Day9(challenges::day9::Args),
    /// Syntax Scoring
    Day10(challenges::day10::Args),
    /// Dumbo Octopus
    Day11(challenges::day11::Args),
    /// Passage Pathing
    Day12(challenges::day12::Args),
    /// Transparent Origami
    Day13(challenges::day13::Args),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Day1(args) => challenges::day1::entrypoint(args),
        Command::Day2(args) => challenges::day2::entrypoint(args),
        Command::Day3(args) => challenges::day3::entrypoint(args),
        Command::Day4(args) => challenges::day4::entrypoint(args),
        Command::Day5(args) => challenges::day5::entrypoint(args),
        Command::Day6(args) => challenges::day6::entrypoint(args),
        Command::Day7(args) => challenges::day7::entrypoint(args),
        Command::Day8(args) => challenges::day8::entrypoint(args),
        Command::Day9(args) => challenges::day9::entrypoint(args),
        Command::Day10(args) => challenges::day10::entrypoint(args),
        Command::Day11(args) => challenges::day11::entrypoint(args),
        Command::Day12(args) => challenges::day12::entrypoint(args),
        Command::Day13(args) => challenges::day13::entrypoint(args),
    }
}
