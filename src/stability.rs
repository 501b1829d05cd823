//! Core stability: no group of players can leave their coalitions, form a new
//! one together, and all be strictly better off.

use super::*;

/// Every nonempty proper subset of `players`, by increasing size.
///
/// There are `2^n - 2` of them for `n >= 1` players.
pub fn all_candidate_coalitions(players: &[Player]) -> Vec<Vec<Player>> {
    let n = players.len();
    let mut res = Vec::new();
    for k in 1..n {
        // indices of the current k-combination, in lexicographic order
        let mut idx: Vec<usize> = (0..k).collect();
        loop {
            res.push(idx.iter().map(|&i| players[i]).collect());
            let Some(pos) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
                break;
            };
            idx[pos] += 1;
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
            }
        }
    }
    res
}

/// Returns `true` if every member of `coalition` strictly prefers the
/// structure obtained by moving `coalition` out of `cs`.
///
/// An empty coalition never blocks.
pub fn is_blocking(table: &UtilityTable, cs: &CoalitionStructure, coalition: &[Player]) -> Result<bool> {
    if coalition.is_empty() {
        return Ok(false);
    }
    let before = table.utilities(cs)?;
    let after = table.utilities(&cs.move_coalition(coalition))?;
    for &p in coalition {
        let i = table.player_index(p)?;
        if before[i] >= after[i] {
            return Ok(false);
        }
    }
    Ok(true)
}

/// First coalition among `candidates` blocking `cs`, if any.
pub fn blocking_coalition<'c>(
    table: &UtilityTable,
    cs: &CoalitionStructure,
    candidates: &'c [Vec<Player>],
) -> Result<Option<&'c [Player]>> {
    for coalition in candidates {
        if is_blocking(table, cs, coalition)? {
            log::trace!("{:?} blocks {}", coalition, cs);
            return Ok(Some(coalition.as_slice()));
        }
    }
    Ok(None)
}

/// Returns `true` if no coalition among `candidates` blocks `cs`.
pub fn is_core_stable(table: &UtilityTable, cs: &CoalitionStructure, candidates: &[Vec<Player>]) -> Result<bool> {
    Ok(blocking_coalition(table, cs, candidates)?.is_none())
}

/// First core-stable structure in table order.
pub fn core_stable_structure(table: &UtilityTable) -> Result<Option<CoalitionStructure>> {
    let candidates = all_candidate_coalitions(table.players());
    for cs in table.structures() {
        if is_core_stable(table, cs, &candidates)? {
            log::debug!("core-stable structure found: {}", cs);
            return Ok(Some(cs.clone()));
        }
    }
    log::debug!("no core-stable structure among {} structures", table.len());
    Ok(None)
}

/// Every core-stable structure, in table order.
pub fn core_stable_structures(table: &UtilityTable) -> Result<Vec<CoalitionStructure>> {
    let candidates = all_candidate_coalitions(table.players());
    let mut res = Vec::new();
    for cs in table.structures() {
        if is_core_stable(table, cs, &candidates)? {
            res.push(cs.clone());
        }
    }
    Ok(res)
}
