use super::*;

/// Number of partitions of a set with `n` elements.
pub fn bell_number(n: usize) -> u64 {
    // Bell triangle, one row at a time.
    let mut row = vec![1u64];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(row[row.len() - 1]);
        for &v in &row {
            let last = next[next.len() - 1];
            next.push(last + v);
        }
        row = next;
    }
    row[0]
}

/// Low-level enumerator of restricted growth strings.
///
/// `co[i]` is the coalition of the i-th player, `-1` when not yet assigned.
/// `co_max[i]` is the largest coalition number used by players `0..i`, so a
/// player may only join an existing coalition or open the next one. This
/// yields each partition exactly once. The state is advanced in place, with an
/// explicit cursor instead of recursion.
#[derive(Clone, Debug)]
struct PartitionLendingIterator {
    co: Vec<i64>,
    co_max: Vec<i64>,
    size: i64,
}

impl PartitionLendingIterator {
    fn new(player_count: usize, size: Option<usize>) -> Self {
        PartitionLendingIterator {
            co: vec![-1; player_count],
            co_max: vec![-1; player_count + 1],
            size: size.unwrap_or(1) as i64,
        }
    }

    fn reset(&mut self) {
        self.co.fill(-1);
        self.co_max.fill(-1);
    }

    /// Moves to the next partition with exactly `self.size` coalitions.
    fn next_fixedsize(&mut self) -> bool {
        let player_count = self.co.len() as i64;
        let mut ag = if self.co[0] == -1 { 0 } else { player_count - 1 };
        loop {
            if ag == player_count {
                return true;
            }
            if ag == -1 {
                return false;
            }
            let i = ag as usize;
            let used = self.co_max[i] + 1;
            // when the remaining players are just enough to reach `size`, each
            // of them has to open a new coalition
            let bot = if used + (player_count - ag) > self.size { 0 } else { used };
            let top = if used < self.size { used } else { used - 1 };
            let co_new = std::cmp::max(self.co[i] + 1, bot);
            if co_new <= top {
                self.co[i] = co_new;
                self.co_max[i + 1] = std::cmp::max(self.co_max[i], co_new);
                ag += 1;
            } else {
                self.co[i] = -1;
                ag -= 1;
            }
        }
    }

    /// Moves to the next partition, by increasing number of coalitions.
    fn next_any(&mut self) -> bool {
        let player_count = self.co.len() as i64;
        while self.size <= player_count {
            if self.next_fixedsize() {
                return true;
            }
            self.size += 1;
            self.reset();
        }
        false
    }
}

/// Lazy sequence of every coalition structure over an ordered set of players.
///
/// With no size bound the sequence has exactly `bell_number(n)` items. With
/// `Some(k)` only structures with `k` coalitions are produced.
#[derive(Clone, Debug)]
pub struct CoalitionStructures {
    players: Vec<Player>,
    pit: PartitionLendingIterator,
    fixed_size: bool,
    exhausted: bool,
}

impl CoalitionStructures {
    /// `players` must be distinct.
    pub fn new(players: Vec<Player>, size: Option<usize>) -> Self {
        let pit = PartitionLendingIterator::new(players.len(), size);
        // the empty set has a single partition, with no coalitions
        let exhausted = match size {
            Some(k) => k > players.len(),
            None => false,
        };
        CoalitionStructures {
            players,
            pit,
            fixed_size: size.is_some(),
            exhausted,
        }
    }

    fn current(&self) -> CoalitionStructure {
        let count = self.pit.co_max[self.players.len()] + 1;
        let mut coalitions = vec![Vec::new(); count as usize];
        for (&p, &c) in self.players.iter().zip(&self.pit.co) {
            coalitions[c as usize].push(p);
        }
        CoalitionStructure::new_unchecked(coalitions)
    }
}

impl Iterator for CoalitionStructures {
    type Item = CoalitionStructure;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.players.is_empty() {
            self.exhausted = true;
            return Some(CoalitionStructure::new_unchecked(Vec::new()));
        }
        let res = if self.fixed_size { self.pit.next_fixedsize() } else { self.pit.next_any() };
        if res {
            Some(self.current())
        } else {
            self.exhausted = true;
            None
        }
    }
}

/// Every partition of `players`.
pub fn partitions(players: &[Player]) -> CoalitionStructures {
    CoalitionStructures::new(players.to_vec(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn lists(it: impl Iterator<Item = CoalitionStructure>) -> Vec<Vec<Vec<Player>>> {
        it.map(|cs| cs.to_list()).collect()
    }

    #[test]
    fn test_bell_number() {
        let expected = [1, 1, 2, 5, 15, 52, 203, 877, 4140, 21147, 115975];
        for (n, &b) in expected.iter().enumerate() {
            assert_eq!(bell_number(n), b);
        }
    }

    #[test]
    fn test_partitions_of_three() {
        assert_eq!(
            lists(partitions(&[0, 1, 2])),
            vec![
                vec![vec![0, 1, 2]],
                vec![vec![0, 1], vec![2]],
                vec![vec![0, 2], vec![1]],
                vec![vec![0], vec![1, 2]],
                vec![vec![0], vec![1], vec![2]],
            ]
        );
    }

    #[test]
    fn test_partitions_fixed_size() {
        assert_eq!(
            lists(CoalitionStructures::new(vec![0, 1, 2], Some(2))),
            vec![
                vec![vec![0, 1], vec![2]],
                vec![vec![0, 2], vec![1]],
                vec![vec![0], vec![1, 2]],
            ]
        );
        assert_eq!(lists(CoalitionStructures::new(vec![0, 1, 2], Some(3))), vec![vec![vec![0], vec![1], vec![2]]]);
        assert!(CoalitionStructures::new(vec![0, 1, 2], Some(4)).next().is_none());
        // Stirling numbers of the second kind, S(5, k)
        for (k, s) in [(1, 1), (2, 15), (3, 25), (4, 10), (5, 1)] {
            assert_eq!(CoalitionStructures::new((0..5).collect(), Some(k)).count(), s);
        }
    }

    #[test]
    fn test_partitions_are_distinct_and_complete() {
        for n in 1..=7 {
            let players: Vec<Player> = (0..n).collect();
            let all: Vec<CoalitionStructure> = partitions(&players).collect();
            assert_eq!(all.len() as u64, bell_number(n));
            let distinct: HashSet<&CoalitionStructure> = all.iter().collect();
            assert_eq!(distinct.len(), all.len());
            assert!(all.iter().all(|cs| cs.players() == players));
        }
    }

    #[test]
    fn test_partitions_arbitrary_labels() {
        let all: Vec<CoalitionStructure> = partitions(&[42, 7, 13]).collect();
        assert_eq!(all.len(), 5);
        assert!(all.contains(&CoalitionStructure::new(vec![vec![13, 42], vec![7]]).unwrap()));
    }

    #[test]
    fn test_partitions_edge_cases() {
        assert_eq!(lists(partitions(&[3])), vec![vec![vec![3]]]);
        assert_eq!(lists(partitions(&[])), vec![Vec::<Vec<Player>>::new()]);
        assert!(CoalitionStructures::new(vec![], Some(1)).next().is_none());
    }
}
