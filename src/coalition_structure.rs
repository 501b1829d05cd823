use std::collections::BTreeSet;
use std::fmt;

use super::*;

/// A partition of a set of players into disjoint, nonempty coalitions.
///
/// The value is kept in canonical form: the players of every coalition are
/// sorted and coalitions are sorted by their player lists. Two structures
/// inducing the same partition are therefore equal and hash identically,
/// whatever the order of the groups they were built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoalitionStructure {
    coalitions: Vec<Vec<Player>>,
}

impl CoalitionStructure {
    fn _validate(groups: &[Vec<Player>]) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (i, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(GameError::invalid_structure(format!("group {} is empty", i)));
            }
            for &p in group {
                if !seen.insert(p) {
                    return Err(GameError::invalid_structure(format!(
                        "player {} belongs to more than one group",
                        p
                    )));
                }
            }
        }
        Ok(())
    }

    fn _canonicalize(coalitions: &mut [Vec<Player>]) {
        for co in coalitions.iter_mut() {
            co.sort_unstable();
        }
        coalitions.sort_unstable();
    }

    /// Builds a structure from groups already known to be disjoint and nonempty.
    pub(crate) fn new_unchecked(mut coalitions: Vec<Vec<Player>>) -> Self {
        debug_assert!(
            Self::_validate(&coalitions).is_ok(),
            "Coalitions should be nonempty and pairwise disjoint."
        );
        Self::_canonicalize(&mut coalitions);
        CoalitionStructure { coalitions }
    }

    /// Builds a structure from a collection of player groups.
    ///
    /// Fails with [`GameError::InvalidStructure`] if a group is empty or a
    /// player occurs more than once.
    pub fn new<I, G>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = Player>,
    {
        let coalitions: Vec<Vec<Player>> = groups.into_iter().map(|g| g.into_iter().collect()).collect();
        Self::_validate(&coalitions)?;
        Ok(Self::new_unchecked(coalitions))
    }

    /// The structure made of a single coalition with every player.
    pub fn grand_coalition(players: &[Player]) -> Result<Self> {
        if players.is_empty() {
            return Ok(Self::new_unchecked(Vec::new()));
        }
        Self::new([players.iter().copied()])
    }

    /// The structure where every player is alone.
    pub fn singletons(players: &[Player]) -> Result<Self> {
        Self::new(players.iter().map(|&p| [p]))
    }

    /// Number of coalitions.
    pub fn size(&self) -> usize {
        self.coalitions.len()
    }

    /// Number of players covered by the structure.
    pub fn player_count(&self) -> usize {
        self.coalitions.iter().map(Vec::len).sum()
    }

    pub fn coalitions(&self) -> impl Iterator<Item = &[Player]> {
        self.coalitions.iter().map(Vec::as_slice)
    }

    /// All players, in ascending order.
    pub fn players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.coalitions.iter().flatten().copied().collect();
        players.sort_unstable();
        players
    }

    pub fn contains(&self, player: Player) -> bool {
        self.coalitions.iter().any(|co| co.binary_search(&player).is_ok())
    }

    /// Returns the coalition containing `player`.
    pub fn find_coalition(&self, player: Player) -> Result<&[Player]> {
        self.coalitions
            .iter()
            .find(|co| co.binary_search(&player).is_ok())
            .map(Vec::as_slice)
            .ok_or(GameError::PlayerNotFound(player))
    }

    /// Moves every player of `target` out of its coalition and into a new one.
    ///
    /// Coalitions left empty are dropped. An empty target, or a target equal to
    /// an existing coalition, gives back an equal structure.
    pub fn move_coalition(&self, target: &[Player]) -> CoalitionStructure {
        let mut target = target.to_vec();
        target.sort_unstable();
        target.dedup();
        if target.is_empty() {
            return self.clone();
        }
        let mut coalitions: Vec<Vec<Player>> = self
            .coalitions
            .iter()
            .map(|co| {
                co.iter()
                    .copied()
                    .filter(|p| target.binary_search(p).is_err())
                    .collect::<Vec<_>>()
            })
            .filter(|co| !co.is_empty())
            .collect();
        coalitions.push(target);
        Self::new_unchecked(coalitions)
    }

    pub fn to_list(&self) -> Vec<Vec<Player>> {
        self.coalitions.clone()
    }
}

impl fmt::Display for CoalitionStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, co) in self.coalitions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, p) in co.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", p)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
