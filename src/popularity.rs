//! Popularity: a structure is popular when no other structure is preferred by
//! a majority of players.

use std::cmp::Ordering;

use super::*;

/// Majority vote between two utility vectors.
///
/// Every player votes for the structure it strictly prefers; `Greater` means
/// more players prefer `ua`, `Less` more prefer `ub`, `Equal` a tie.
pub fn compare_structures(ua: &[Utility], ub: &[Utility]) -> Result<Ordering> {
    if ua.len() != ub.len() {
        return Err(GameError::LengthMismatch {
            left: ua.len(),
            right: ub.len(),
        });
    }
    let votes: i64 = ua
        .iter()
        .zip(ub)
        .map(|(a, b)| match a.cmp(b) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        })
        .sum();
    Ok(votes.cmp(&0))
}

fn wins_every_vote(table: &UtilityTable, cs: &CoalitionStructure, strict: bool) -> Result<bool> {
    let ua = table.utilities(cs)?;
    for (other, ub) in table.iter() {
        if other == cs {
            continue;
        }
        let res = compare_structures(ua, ub)?;
        if res == Ordering::Less || (strict && res == Ordering::Equal) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns `true` if `cs` never loses a majority vote against another structure.
pub fn is_popular(table: &UtilityTable, cs: &CoalitionStructure) -> Result<bool> {
    wins_every_vote(table, cs, false)
}

/// Returns `true` if `cs` wins every majority vote against another structure.
pub fn is_strictly_popular(table: &UtilityTable, cs: &CoalitionStructure) -> Result<bool> {
    wins_every_vote(table, cs, true)
}

/// First (strictly) popular structure in table order.
pub fn popular_structure(table: &UtilityTable, strict: bool) -> Result<Option<CoalitionStructure>> {
    for cs in table.structures() {
        if wins_every_vote(table, cs, strict)? {
            log::debug!("{} structure found: {}", if strict { "strictly popular" } else { "popular" }, cs);
            return Ok(Some(cs.clone()));
        }
    }
    Ok(None)
}

/// Every (strictly) popular structure, in table order.
pub fn popular_structures(table: &UtilityTable, strict: bool) -> Result<Vec<CoalitionStructure>> {
    let mut res = Vec::new();
    for cs in table.structures() {
        if wins_every_vote(table, cs, strict)? {
            res.push(cs.clone());
        }
    }
    Ok(res)
}
