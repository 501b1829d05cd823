use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::*;

/// How a player weighs its own welfare against the welfare of its worst-off friend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AltruismDegree {
    /// Own welfare first, friends break ties (`SF`).
    SelfFirst,
    /// The worse of own and worst-off friend welfare (`EQ`).
    Equal,
    /// Worst-off friend welfare first, own welfare breaks ties (`AL`).
    Altruistic,
}

use AltruismDegree::*;

impl AltruismDegree {
    pub const ALL: [AltruismDegree; 3] = [SelfFirst, Equal, Altruistic];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelfFirst => "SF",
            Equal => "EQ",
            Altruistic => "AL",
        }
    }
}

impl fmt::Display for AltruismDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AltruismDegree {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SF" => Ok(SelfFirst),
            "EQ" => Ok(Equal),
            "AL" => Ok(Altruistic),
            _ => Err(GameError::invalid_argument(format!(
                "unknown altruism degree `{}`, expected SF, EQ or AL",
                s
            ))),
        }
    }
}

/// Weight of the dominant term in [`SelfFirst`] and [`Altruistic`] utilities.
///
/// Coalition values lie in `[-(n - 1), n * (n - 1)]`, a range of width
/// `n^2 - 1`, so a unit of the dominant term outweighs any change of the other.
pub fn dominance_weight(n: usize) -> Utility {
    (n * n) as Utility
}

/// Value of `coalition` for `player`: `n` for every friend, `-1` for every
/// other member. A player alone has value `0`.
pub fn coalition_value(coalition: &[Player], player: Player, friends: &BTreeSet<Player>, n: usize) -> Utility {
    coalition
        .iter()
        .filter(|&&p| p != player)
        .map(|p| if friends.contains(p) { n as Utility } else { -1 })
        .sum()
}

/// Utility of `player` for the structure `cs`, in a game with `n` players.
///
/// Players without friends count their worst-off friend value as `0`.
pub fn utility(
    cs: &CoalitionStructure,
    player: Player,
    friends: &FriendGraph,
    n: usize,
    degree: AltruismDegree,
) -> Result<Utility> {
    let own = coalition_value(cs.find_coalition(player)?, player, friends.friends_of(player), n);
    let mut min_friend: Option<Utility> = None;
    for &f in friends.friends_of(player) {
        let v = coalition_value(cs.find_coalition(f)?, f, friends.friends_of(f), n);
        min_friend = Some(min_friend.map_or(v, |m| m.min(v)));
    }
    let min_friend = min_friend.unwrap_or(0);
    let m = dominance_weight(n);
    Ok(match degree {
        SelfFirst => m * own + min_friend,
        Equal => std::cmp::min(own, min_friend),
        Altruistic => own + m * min_friend,
    })
}
