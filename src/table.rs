use std::collections::HashMap;

use super::*;

/// Utilities of every player under every coalition structure of a game.
///
/// Built once for a game and an altruism degree and read-only afterwards.
/// Entries keep the order in which the structures were enumerated.
#[derive(Clone, Debug)]
pub struct UtilityTable {
    players: Vec<Player>,
    friends: FriendGraph,
    degree: AltruismDegree,
    entries: Vec<(CoalitionStructure, UtilityVector)>,
    index: HashMap<CoalitionStructure, usize>,
}

impl UtilityTable {
    /// Computes the utility vector of each partition of the players of `game`.
    pub fn build(game: &FriendGame, degree: AltruismDegree) -> Result<Self> {
        log::debug!(
            "building utility table for {} players, degree {} ({} structures)",
            game.player_count(),
            degree,
            partition::bell_number(game.player_count())
        );
        let entries = Self::compute_entries(game, degree)?;
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (cs, _))| (cs.clone(), i))
            .collect();
        Ok(UtilityTable {
            players: game.players().to_vec(),
            friends: game.friends().clone(),
            degree,
            entries,
            index,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_entries(game: &FriendGame, degree: AltruismDegree) -> Result<Vec<(CoalitionStructure, UtilityVector)>> {
        game.coalition_structures()
            .map(|cs| game.utility_vector(&cs, degree).map(|u| (cs, u)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn compute_entries(game: &FriendGame, degree: AltruismDegree) -> Result<Vec<(CoalitionStructure, UtilityVector)>> {
        use rayon::prelude::*;
        let structures: Vec<CoalitionStructure> = game.coalition_structures().collect();
        structures
            .into_par_iter()
            .map(|cs| game.utility_vector(&cs, degree).map(|u| (cs, u)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Players in the order used by every utility vector.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn friends(&self) -> &FriendGraph {
        &self.friends
    }

    pub fn degree(&self) -> AltruismDegree {
        self.degree
    }

    /// Position of `player` in the utility vectors.
    pub fn player_index(&self, player: Player) -> Result<usize> {
        self.players
            .iter()
            .position(|&p| p == player)
            .ok_or(GameError::PlayerNotFound(player))
    }

    pub fn get(&self, cs: &CoalitionStructure) -> Option<&UtilityVector> {
        self.index.get(cs).map(|&i| &self.entries[i].1)
    }

    /// Like [`Self::get`], failing with [`GameError::StructureNotFound`].
    pub fn utilities(&self, cs: &CoalitionStructure) -> Result<&UtilityVector> {
        self.get(cs).ok_or_else(|| GameError::StructureNotFound(cs.to_string()))
    }

    pub fn utility(&self, cs: &CoalitionStructure, player: Player) -> Result<Utility> {
        let i = self.player_index(player)?;
        Ok(self.utilities(cs)?[i])
    }

    /// Sum of the utilities of all players.
    pub fn social_welfare(&self, cs: &CoalitionStructure) -> Result<Utility> {
        Ok(self.utilities(cs)?.iter().sum())
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&CoalitionStructure, &UtilityVector)> {
        self.entries.iter().map(|(cs, u)| (cs, u))
    }

    pub fn structures(&self) -> impl Iterator<Item = &CoalitionStructure> {
        self.entries.iter().map(|(cs, _)| cs)
    }

    /// Fails unless the table was built for `game` and `degree`.
    pub fn check_matches(&self, game: &FriendGame, degree: AltruismDegree) -> Result<()> {
        if self.degree != degree {
            return Err(GameError::table_mismatch(format!(
                "table built for degree {}, queried with {}",
                self.degree, degree
            )));
        }
        if self.players != game.players() {
            return Err(GameError::table_mismatch("table built for another player set"));
        }
        if self.friends != *game.friends() {
            return Err(GameError::table_mismatch("table built for another friend graph"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static GAME1: LazyLock<FriendGame> =
        LazyLock::new(|| FriendGame::from_edges(3, &[(0, 1)], GraphType::Undirected).unwrap());
    static TABLE1: LazyLock<UtilityTable> =
        LazyLock::new(|| UtilityTable::build(&GAME1, AltruismDegree::SelfFirst).unwrap());

    #[test]
    fn test_number_of_structures() {
        let players: Vec<Player> = (0..5).collect();
        let game = FriendGame::new(players, FriendGraph::new()).unwrap();
        let table = game.utility_table(AltruismDegree::SelfFirst).unwrap();
        assert_eq!(table.len(), 52);
        assert!(table.iter().all(|(_, u)| u.iter().all(|&v| v <= 0)));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(TABLE1.len(), 5);
        assert_eq!(TABLE1.players(), &[0, 1, 2]);
        let cs = CoalitionStructure::new(vec![vec![2], vec![1, 0]]).unwrap();
        assert_eq!(TABLE1.get(&cs), Some(&vec![30, 30, 0]));
        assert_eq!(TABLE1.utility(&cs, 1), Ok(30));
        assert_eq!(TABLE1.social_welfare(&cs), Ok(60));
        assert_eq!(TABLE1.utility(&cs, 7), Err(GameError::PlayerNotFound(7)));
        let foreign = CoalitionStructure::new(vec![vec![0, 1, 2, 3]]).unwrap();
        assert!(matches!(TABLE1.utilities(&foreign), Err(GameError::StructureNotFound(_))));
    }

    #[test]
    fn test_vectors_follow_player_order() {
        let game = FriendGame::new(vec![2, 0, 1], GAME1.friends().clone()).unwrap();
        let table = game.utility_table(AltruismDegree::SelfFirst).unwrap();
        let cs = CoalitionStructure::new(vec![vec![0, 1], vec![2]]).unwrap();
        assert_eq!(table.get(&cs), Some(&vec![0, 30, 30]));
    }

    #[test]
    fn test_check_matches() {
        assert!(TABLE1.check_matches(&GAME1, AltruismDegree::SelfFirst).is_ok());
        assert!(matches!(
            TABLE1.check_matches(&GAME1, AltruismDegree::Altruistic),
            Err(GameError::TableMismatch(_))
        ));
        let other = FriendGame::from_edges(3, &[(1, 2)], GraphType::Undirected).unwrap();
        assert!(matches!(
            TABLE1.check_matches(&other, AltruismDegree::SelfFirst),
            Err(GameError::TableMismatch(_))
        ));
        let bigger = FriendGame::from_edges(4, &[(0, 1)], GraphType::Undirected).unwrap();
        assert!(matches!(
            TABLE1.check_matches(&bigger, AltruismDegree::SelfFirst),
            Err(GameError::TableMismatch(_))
        ));
    }
}
