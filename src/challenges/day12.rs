use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;

#[derive(clap::Args, Debug)]
pub struct Args {
    /// the cave tunnels, one `a-b` pair per line
    file: String,
}

/// Whether one small cave (other than start and end) may be entered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevisitPolicy {
    SingleVisit,
    OneSecondVisit,
}

#[derive(Debug)]
struct CaveSystem {
    small: Vec<bool>,
    adjacency: Vec<Vec<usize>>,
    start: usize,
    end: usize,
}

/// One in-progress or finished path through the caves.
#[derive(Debug, Clone)]
struct Path {
    caves: Vec<usize>,
    doubled: bool,
}

impl CaveSystem {
    fn parse(input: &str) -> Result<Self> {
        fn intern<'a>(
            name: &'a str,
            ids: &mut HashMap<&'a str, usize>,
            small: &mut Vec<bool>,
            adjacency: &mut Vec<Vec<usize>>,
        ) -> usize {
            *ids.entry(name).or_insert_with(|| {
                small.push(name.chars().all(|c| c.is_ascii_lowercase()));
                adjacency.push(Vec::new());
                adjacency.len() - 1
            })
        }

        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut small = Vec::new();
        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let (a, b) = line
                .trim()
                .split_once('-')
                .with_context(|| format!("bad tunnel {:?}", line))?;
            let a = intern(a, &mut ids, &mut small, &mut adjacency);
            let b = intern(b, &mut ids, &mut small, &mut adjacency);
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        let start = *ids.get("start").context("no start cave in input")?;
        let end = *ids.get("end").context("no end cave in input")?;
        Ok(CaveSystem {
            small,
            adjacency,
            start,
            end,
        })
    }

    fn may_enter(&self, path: &Path, cave: usize, policy: RevisitPolicy) -> bool {
        if !self.small[cave] || !path.caves.contains(&cave) {
            return true;
        }
        policy == RevisitPolicy::OneSecondVisit
            && !path.doubled
            && cave != self.start
            && cave != self.end
    }

    /// Count distinct start-to-end paths by round-robin frontier expansion:
    /// every unfinished path in the frontier is replaced by its eligible
    /// one-cave extensions, written to the next frontier; paths reaching the
    /// end leave the frontier for good.
    fn count_paths(&self, policy: RevisitPolicy) -> usize {
        let mut finished = 0;
        let mut frontier = vec![Path {
            caves: vec![self.start],
            doubled: false,
        }];
        let mut next = Vec::new();
        while !frontier.is_empty() {
            for path in frontier.drain(..) {
                let last = *path.caves.last().unwrap();
                if last == self.end {
                    finished += 1;
                    continue;
                }
                for &neighbor in &self.adjacency[last] {
                    if !self.may_enter(&path, neighbor, policy) {
                        continue;
                    }
                    let mut extended = path.clone();
                    extended.caves.push(neighbor);
                    extended.doubled |= self.small[neighbor] && path.caves.contains(&neighbor);
                    next.push(extended);
                }
            }
            std::mem::swap(&mut frontier, &mut next);
        }
        finished
    }
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file))?;
    let caves = CaveSystem::parse(&input)?;

    println!(
        "{} paths visiting small caves once",
        caves.count_paths(RevisitPolicy::SingleVisit)
    );
    println!(
        "{} paths allowing one small cave twice",
        caves.count_paths(RevisitPolicy::OneSecondVisit)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
start-A
start-b
A-c
A-b
b-d
A-end
b-end";

    const MEDIUM: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc";

    const LARGE: &str = "\
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW";

    #[test]
    fn counts_single_visit_paths() {
        assert_eq!(
            CaveSystem::parse(SMALL)
                .unwrap()
                .count_paths(RevisitPolicy::SingleVisit),
            10
        );
        assert_eq!(
            CaveSystem::parse(MEDIUM)
                .unwrap()
                .count_paths(RevisitPolicy::SingleVisit),
            19
        );
        assert_eq!(
            CaveSystem::parse(LARGE)
                .unwrap()
                .count_paths(RevisitPolicy::SingleVisit),
            226
        );
    }

    #[test]
    fn counts_paths_with_one_second_visit() {
        assert_eq!(
            CaveSystem::parse(SMALL)
                .unwrap()
                .count_paths(RevisitPolicy::OneSecondVisit),
            36
        );
        assert_eq!(
            CaveSystem::parse(MEDIUM)
                .unwrap()
                .count_paths(RevisitPolicy::OneSecondVisit),
            103
        );
        assert_eq!(
            CaveSystem::parse(LARGE)
                .unwrap()
                .count_paths(RevisitPolicy::OneSecondVisit),
            3509
        );
    }

    #[test]
    fn relaxing_the_revisit_rule_never_loses_paths() {
        for input in [SMALL, MEDIUM, LARGE] {
            let caves = CaveSystem::parse(input).unwrap();
            assert!(
                caves.count_paths(RevisitPolicy::OneSecondVisit)
                    >= caves.count_paths(RevisitPolicy::SingleVisit)
            );
        }
    }

    #[test]
    fn rejects_graph_without_start() {
        assert!(CaveSystem::parse("a-end").is_err());
    }
}
