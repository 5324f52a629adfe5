use std::cmp::Reverse;

use crate::models::types::{EntId, NameId};

/// One result of a fuzzy prefix lookup: the entity, how far its
/// closest name was from the query, the entity's popularity score, and
/// which of its names produced the distance (so a host can display
/// "via '<synonym>'").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub ent: EntId,
    pub ped: usize,
    pub score: u64,
    pub name: NameId,
}

impl Match {
    pub(crate) fn new(ent: EntId, ped: usize, score: u64, name: NameId) -> Self {
        Match { ent, ped, score, name }
    }
}

/// Ranks matches for display: closest first, most popular first among
/// equally close ones. Stable for full ties, and idempotent.
///
/// ```
/// use prefikso::prelude::*;
///
/// let matches = vec![
///     Match { ent: 1, ped: 0, score: 3, name: 1 },
///     Match { ent: 2, ped: 1, score: 2, name: 2 },
///     Match { ent: 2, ped: 1, score: 3, name: 3 },
///     Match { ent: 1, ped: 0, score: 2, name: 4 },
/// ];
///
/// let ranked = rank_matches(matches);
/// let keys: Vec<(usize, u64)> = ranked.iter().map(|m| (m.ped, m.score)).collect();
/// assert_eq!(keys, vec![(0, 3), (0, 2), (1, 3), (1, 2)]);
/// ```
pub fn rank_matches(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(|m| (m.ped, Reverse(m.score)));
    matches
}

/// A delta policy that works well for autocompletion: allow one edit
/// per four characters of the normalized query.
pub fn suggested_delta(prefix: &str) -> usize {
    prefix.chars().count() / 4
}
