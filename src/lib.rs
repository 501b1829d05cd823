mod types;
mod error;
mod friend_graph;
mod graph_enumerator;
mod coalition_structure;
mod partition;
mod utility;
mod table;
mod game;
mod stability;
mod popularity;

pub use types::{Player, Utility, UtilityVector};
pub use error::{GameError, Result};
pub use friend_graph::{FriendGraph, GraphType};
pub use graph_enumerator::FriendGraphEnumerator;
pub use coalition_structure::CoalitionStructure;
pub use partition::{CoalitionStructures, bell_number, partitions};
pub use utility::{AltruismDegree, coalition_value, dominance_weight, utility};
pub use table::UtilityTable;
pub use game::{FriendGame, build_utility_table, find_core_stable_structure, find_popular_structure};
pub use stability::{
    all_candidate_coalitions, blocking_coalition, core_stable_structure, core_stable_structures, is_blocking,
    is_core_stable,
};
pub use popularity::{compare_structures, is_popular, is_strictly_popular, popular_structure, popular_structures};
