use itertools::Itertools;

use crate::models::types::NameId;

/// One entry of an inverted list: a name and how many times the list's
/// q-gram occurs in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub name: NameId,
    pub freq: u32,
}

impl Posting {
    pub(crate) fn new(name: NameId, freq: u32) -> Self {
        Posting { name, freq }
    }
}

impl From<(NameId, u32)> for Posting {
    fn from((name, freq): (NameId, u32)) -> Self {
        Posting { name, freq }
    }
}

/// Merges inverted lists into a single list, ascending by name id,
/// summing the frequencies of names present in several inputs.
///
/// Inputs must each be ascending by name id with at most one posting
/// per name, which is how the index builds them.
pub(crate) fn merge_postings(lists: &[&[Posting]]) -> Vec<Posting> {
    lists
        .iter()
        .map(|l| l.iter().copied())
        .kmerge_by(|a, b| a.name < b.name)
        .coalesce(|a, b| {
            if a.name == b.name {
                Ok(Posting::new(a.name, a.freq + b.freq))
            } else {
                Err((a, b))
            }
        })
        .collect()
}
