use std::collections::HashSet;

use grid::*;

use super::*;

/// A friend-based coalition formation game: an ordered set of distinct
/// players and the friendship relation among them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendGame {
    players: Vec<Player>,
    friends: FriendGraph,
}

impl FriendGame {
    /// Fails with [`GameError::InvalidArgument`] on duplicate players, on
    /// friendships mentioning players outside the game, or on self-friendship.
    pub fn new(players: Vec<Player>, friends: FriendGraph) -> Result<Self> {
        let mut seen = HashSet::with_capacity(players.len());
        if let Some(p) = players.iter().find(|&&p| !seen.insert(p)) {
            return Err(GameError::invalid_argument(format!("player {} is listed twice", p)));
        }
        friends.validate(&players)?;
        Ok(FriendGame { players, friends })
    }

    /// Game over players `0..player_count`.
    pub fn from_edges(player_count: usize, edges: &[(Player, Player)], graph_type: GraphType) -> Result<Self> {
        let players: Vec<Player> = (0..player_count).collect();
        let friends = FriendGraph::from_edges(&players, edges, graph_type);
        Self::new(players, friends)
    }

    /// Game over players `0..n` from an `n x n` adjacency matrix.
    pub fn from_grid(grid: &Grid<bool>) -> Result<Self> {
        if grid.rows() != grid.cols() {
            return Err(GameError::invalid_argument("the adjacency matrix must be square"));
        }
        let players: Vec<Player> = (0..grid.rows()).collect();
        let friends = FriendGraph::from_grid(&players, grid)?;
        Self::new(players, friends)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn friends(&self) -> &FriendGraph {
        &self.friends
    }

    pub fn coalition_structures(&self) -> CoalitionStructures {
        CoalitionStructures::new(self.players.clone(), None)
    }

    /// Structures with exactly `size` coalitions.
    pub fn coalition_structures_of_size(&self, size: usize) -> CoalitionStructures {
        CoalitionStructures::new(self.players.clone(), Some(size))
    }

    pub fn grand_coalition(&self) -> CoalitionStructure {
        let coalitions = if self.players.is_empty() { Vec::new() } else { vec![self.players.clone()] };
        CoalitionStructure::new_unchecked(coalitions)
    }

    pub fn singleton_structure(&self) -> CoalitionStructure {
        CoalitionStructure::new_unchecked(self.players.iter().map(|&p| vec![p]).collect())
    }

    pub fn utility(&self, cs: &CoalitionStructure, player: Player, degree: AltruismDegree) -> Result<Utility> {
        utility::utility(cs, player, &self.friends, self.player_count(), degree)
    }

    /// Utilities of all players, in player order.
    pub fn utility_vector(&self, cs: &CoalitionStructure, degree: AltruismDegree) -> Result<UtilityVector> {
        self.players.iter().map(|&p| self.utility(cs, p, degree)).collect()
    }

    pub fn utility_table(&self, degree: AltruismDegree) -> Result<UtilityTable> {
        UtilityTable::build(self, degree)
    }

    pub fn core_stable_structure(&self, degree: AltruismDegree) -> Result<Option<CoalitionStructure>> {
        stability::core_stable_structure(&self.utility_table(degree)?)
    }

    pub fn core_stable_structures(&self, degree: AltruismDegree) -> Result<Vec<CoalitionStructure>> {
        stability::core_stable_structures(&self.utility_table(degree)?)
    }

    pub fn has_core_stable_structure(&self, degree: AltruismDegree) -> Result<bool> {
        Ok(self.core_stable_structure(degree)?.is_some())
    }

    pub fn popular_structure(&self, degree: AltruismDegree, strict: bool) -> Result<Option<CoalitionStructure>> {
        popularity::popular_structure(&self.utility_table(degree)?, strict)
    }

    pub fn popular_structures(&self, degree: AltruismDegree, strict: bool) -> Result<Vec<CoalitionStructure>> {
        popularity::popular_structures(&self.utility_table(degree)?, strict)
    }

    /// Every game over players `0..player_count` with a friend graph of the given type.
    pub fn enumerate(player_count: usize, graph_type: GraphType) -> impl Iterator<Item = FriendGame> {
        let players: Vec<Player> = (0..player_count).collect();
        FriendGraph::enumerate(&players, graph_type).map(move |friends| FriendGame {
            players: players.clone(),
            friends,
        })
    }

    /// Counts the games produced by [`Self::enumerate`] without a core-stable
    /// structure, returning `(without, total, first game without)`.
    pub fn count_without_core_stable(
        player_count: usize,
        graph_type: GraphType,
        degree: AltruismDegree,
    ) -> Result<(usize, usize, Option<Self>)> {
        let mut count_total = 0;
        let mut count_unstable = 0;
        let mut result = None;
        for game in Self::enumerate(player_count, graph_type) {
            count_total += 1;
            if !game.has_core_stable_structure(degree)? {
                count_unstable += 1;
                if result.is_none() {
                    result = Some(game);
                }
            }
        }
        Ok((count_unstable, count_total, result))
    }
}

fn resolve_table<'a>(
    game: &FriendGame,
    table: Option<&'a UtilityTable>,
    degree: AltruismDegree,
    built: &'a mut Option<UtilityTable>,
) -> Result<&'a UtilityTable> {
    match table {
        Some(table) => {
            table.check_matches(game, degree)?;
            Ok(table)
        }
        None => Ok(built.insert(game.utility_table(degree)?)),
    }
}

/// Utility vectors of every coalition structure over `players`.
pub fn build_utility_table(players: &[Player], friends: &FriendGraph, degree: AltruismDegree) -> Result<UtilityTable> {
    FriendGame::new(players.to_vec(), friends.clone())?.utility_table(degree)
}

/// First core-stable structure, reusing `table` when given.
pub fn find_core_stable_structure(
    players: &[Player],
    friends: &FriendGraph,
    table: Option<&UtilityTable>,
    degree: AltruismDegree,
) -> Result<Option<CoalitionStructure>> {
    let game = FriendGame::new(players.to_vec(), friends.clone())?;
    let mut built = None;
    stability::core_stable_structure(resolve_table(&game, table, degree, &mut built)?)
}

/// First popular (or strictly popular) structure, reusing `table` when given.
pub fn find_popular_structure(
    players: &[Player],
    friends: &FriendGraph,
    table: Option<&UtilityTable>,
    degree: AltruismDegree,
    strict: bool,
) -> Result<Option<CoalitionStructure>> {
    let game = FriendGame::new(players.to_vec(), friends.clone())?;
    let mut built = None;
    popularity::popular_structure(resolve_table(&game, table, degree, &mut built)?, strict)
}
