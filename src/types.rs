/// Player identifier.
pub type Player = usize;
/// Numeric utility a player assigns to a coalition structure.
pub type Utility = i64;
/// Utilities of all players under one structure, in the game's player order.
pub type UtilityVector = Vec<Utility>;
