use std::collections::{BTreeMap, BTreeSet};

use grid::*;

use super::*;
use super::graph_enumerator::*;

/// Supported friendship directionality models.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GraphType {
    /// `p` may consider `q` a friend without the converse.
    Directed,
    /// Friendship is mutual.
    Undirected,
}

static NO_FRIENDS: BTreeSet<Player> = BTreeSet::new();

/// The friendship relation: every player is mapped to the set of its friends.
///
/// Two graphs are equal when they have the same friendships, whether or not
/// players without friends have an entry.
#[derive(Clone, Debug, Default)]
pub struct FriendGraph {
    friends: BTreeMap<Player, BTreeSet<Player>>,
}

impl PartialEq for FriendGraph {
    fn eq(&self, other: &Self) -> bool {
        self.edges().eq(other.edges())
    }
}

impl Eq for FriendGraph {}

impl FriendGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(player, friends)` adjacency lists.
    pub fn from_lists<I, F>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Player, F)>,
        F: IntoIterator<Item = Player>,
    {
        let mut graph = Self::new();
        for (p, friends) in lists {
            let entry = graph.friends.entry(p).or_default();
            entry.extend(friends);
        }
        graph
    }

    /// Builds a graph over `players` from a list of friendships.
    ///
    /// For undirected graphs, each edge is mirrored.
    pub fn from_edges(players: &[Player], edges: &[(Player, Player)], graph_type: GraphType) -> Self {
        let mut graph = Self::from_lists(players.iter().map(|&p| (p, None::<Player>)));
        for &(p, q) in edges {
            graph.add_friend(p, q);
            if graph_type == GraphType::Undirected {
                graph.add_friend(q, p);
            }
        }
        graph
    }

    /// Builds a graph from a boolean adjacency matrix indexed by player position.
    ///
    /// Fails with [`GameError::InvalidArgument`] unless the matrix is square
    /// with one row per player.
    pub fn from_grid(players: &[Player], grid: &Grid<bool>) -> Result<Self> {
        if grid.rows() != grid.cols() {
            return Err(GameError::invalid_argument("the adjacency matrix must be square"));
        }
        if grid.rows() != players.len() {
            return Err(GameError::invalid_argument(format!(
                "the adjacency matrix has {} rows for {} players",
                grid.rows(),
                players.len()
            )));
        }
        Ok(Self::from_grid_unchecked(players, grid))
    }

    pub(crate) fn from_grid_unchecked(players: &[Player], grid: &Grid<bool>) -> Self {
        debug_assert!(grid.rows() == players.len() && grid.cols() == players.len());
        Self::from_lists(players.iter().enumerate().map(move |(i, &p)| {
            let friends = players
                .iter()
                .enumerate()
                .filter(move |&(j, _)| grid[(i, j)])
                .map(|(_, &q)| q);
            (p, friends)
        }))
    }

    /// Adjacency matrix of the graph, rows and columns following `players`.
    pub fn to_grid(&self, players: &[Player]) -> Grid<bool> {
        let mut grid = Grid::new(players.len(), players.len());
        for (i, &p) in players.iter().enumerate() {
            for (j, &q) in players.iter().enumerate() {
                grid[(i, j)] = self.is_friend(p, q);
            }
        }
        grid
    }

    /// Records that `p` considers `q` a friend.
    pub fn add_friend(&mut self, p: Player, q: Player) {
        self.friends.entry(p).or_default().insert(q);
    }

    /// Friends of `player`; empty if the player has no entry.
    pub fn friends_of(&self, player: Player) -> &BTreeSet<Player> {
        self.friends.get(&player).unwrap_or(&NO_FRIENDS)
    }

    pub fn is_friend(&self, p: Player, q: Player) -> bool {
        self.friends_of(p).contains(&q)
    }

    /// Every player mentioned by the graph, either as a key or as a friend.
    pub fn players(&self) -> BTreeSet<Player> {
        self.friends
            .iter()
            .flat_map(|(&p, friends)| std::iter::once(p).chain(friends.iter().copied()))
            .collect()
    }

    /// Iterator over friendships as `(player, friend)`.
    pub fn edges(&self) -> impl Iterator<Item = (Player, Player)> + '_ {
        self.friends
            .iter()
            .flat_map(|(&p, friends)| friends.iter().map(move |&q| (p, q)))
    }

    /// Returns `true` if every friendship is mutual.
    pub fn is_symmetric(&self) -> bool {
        self.edges().all(|(p, q)| self.is_friend(q, p))
    }

    pub fn graph_type(&self) -> GraphType {
        if self.is_symmetric() { GraphType::Undirected } else { GraphType::Directed }
    }

    /// Number of friendships (counted once in undirected graphs).
    pub fn edge_count(&self) -> usize {
        let e = self.edges().count();
        if self.is_symmetric() { e / 2 } else { e }
    }

    /// Enumerates every friend graph over `players` of the given type.
    pub fn enumerate(players: &[Player], graph_type: GraphType) -> FriendGraphEnumerator {
        FriendGraphEnumerator::new(players.to_vec(), graph_type)
    }

    /// Counts the number of graphs produced by [`Self::enumerate`].
    pub fn count(player_count: usize, graph_type: GraphType) -> u64 {
        let mut grid = Grid::new(player_count, player_count);
        let mut state = GraphEnumeratorState::new(player_count, graph_type);
        let mut count = 0;
        while state.next_graph(&mut grid) {
            count += 1;
        }
        count
    }

    /// Checks the graph against the player set of a game.
    pub(crate) fn validate(&self, players: &[Player]) -> Result<()> {
        let known: BTreeSet<Player> = players.iter().copied().collect();
        for (p, q) in self.edges() {
            if p == q {
                return Err(GameError::invalid_argument(format!("player {} is its own friend", p)));
            }
            if !known.contains(&p) || !known.contains(&q) {
                return Err(GameError::invalid_argument(format!(
                    "friendship ({}, {}) refers to a player outside the game",
                    p, q
                )));
            }
        }
        if let Some(p) = self.friends.keys().find(|&&p| !known.contains(&p)) {
            return Err(GameError::invalid_argument(format!("player {} is not part of the game", p)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GraphType::*;
    use std::sync::LazyLock;

    static G1: LazyLock<FriendGraph> = LazyLock::new(|| {
        FriendGraph::from_grid(&[0, 1, 2], &grid![
            [false, true, false]
            [true, false, false]
            [false, false, false]
        ])
        .unwrap()
    });

    #[test]
    fn test_constructors() {
        assert_eq!(FriendGraph::from_edges(&[0, 1, 2], &[(0, 1)], Undirected), *G1);
        assert_eq!(
            FriendGraph::from_lists([(0, vec![1]), (1, vec![0]), (2, vec![])]),
            *G1
        );
        assert_ne!(FriendGraph::from_edges(&[0, 1, 2], &[(0, 1)], Directed), *G1);
        assert_eq!(G1.to_grid(&[0, 1, 2]), grid![[false, true, false][true, false, false][false, false, false]]);
    }

    #[test]
    fn test_from_grid_shape() {
        assert!(matches!(
            FriendGraph::from_grid(&[0, 1, 2], &Grid::new(2, 2)),
            Err(GameError::InvalidArgument(_))
        ));
        assert!(matches!(
            FriendGraph::from_grid(&[0, 1], &Grid::new(2, 3)),
            Err(GameError::InvalidArgument(_))
        ));
        assert_eq!(FriendGraph::from_grid(&[], &Grid::new(0, 0)), Ok(FriendGraph::new()));
    }

    #[test]
    fn test_players_without_friends() {
        // an empty entry and a missing entry describe the same friendships
        assert_eq!(FriendGraph::from_edges(&[0, 1, 2], &[], Undirected), FriendGraph::new());
        assert_eq!(
            FriendGraph::from_edges(&[0, 1, 2], &[(0, 1)], Directed),
            FriendGraph::from_lists([(0, vec![1])])
        );
        assert_ne!(FriendGraph::from_lists([(0, vec![1])]), FriendGraph::from_lists([(1, vec![0])]));
    }

    #[test]
    fn test_simple_accessors() {
        assert_eq!(G1.graph_type(), Undirected);
        assert_eq!(G1.edge_count(), 1);
        assert_eq!(G1.players().into_iter().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(G1.edges().collect::<Vec<_>>(), [(0, 1), (1, 0)]);
        assert!(G1.is_friend(0, 1));
        assert!(!G1.is_friend(0, 2));
        assert!(G1.friends_of(2).is_empty());
        assert!(G1.friends_of(7).is_empty());
    }

    #[test]
    fn test_directed() {
        let g = FriendGraph::from_edges(&[0, 1, 2], &[(0, 1), (1, 2)], Directed);
        assert_eq!(g.graph_type(), Directed);
        assert_eq!(g.edge_count(), 2);
        assert!(g.is_friend(0, 1));
        assert!(!g.is_friend(1, 0));
    }

    #[test]
    fn test_validate() {
        assert!(G1.validate(&[0, 1, 2]).is_ok());
        assert!(matches!(G1.validate(&[0, 1]), Err(GameError::InvalidArgument(_))));
        let looped = FriendGraph::from_lists([(0, vec![0])]);
        assert!(matches!(looped.validate(&[0]), Err(GameError::InvalidArgument(_))));
    }

    #[test]
    fn test_graphs() {
        let res = [
            FriendGraph::from_edges(&[0, 1], &[], Undirected),
            FriendGraph::from_edges(&[0, 1], &[(0, 1)], Undirected),
        ];
        assert_eq!(FriendGraph::enumerate(&[0, 1], Undirected).collect::<Vec<_>>(), res);
        assert_eq!(FriendGraph::enumerate(&[0, 1], Directed).count(), 4);
    }

    #[test]
    fn test_count_graphs() {
        assert_eq!(FriendGraph::count(1, Undirected), 1);
        assert_eq!(FriendGraph::count(3, Undirected), 8);
        assert_eq!(FriendGraph::count(4, Undirected), 64);
        assert_eq!(FriendGraph::count(3, Directed), 64);
    }
}
