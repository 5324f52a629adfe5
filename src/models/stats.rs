use std::fmt;
use std::time::Duration;

use hstats::Hstats;

/// The counters of one `find_matches` call, returned by value so
/// concurrent queries never contend on shared mutable state.
/// [`Display`] is implemented for quick convenient output.
#[derive(Debug, Default, Clone)]
pub struct QueryStats {
    pub(crate) lists_merged: usize,
    pub(crate) elements_merged: usize,
    pub(crate) merge_time: Duration,
    pub(crate) ped_calcs: usize,
    pub(crate) ped_candidates: usize,
    pub(crate) ped_time: Duration,
}

impl QueryStats {
    /// How many inverted lists went into the merge.
    pub fn lists_merged(&self) -> usize {
        self.lists_merged
    }

    /// Total postings scanned across all merged lists.
    pub fn elements_merged(&self) -> usize {
        self.elements_merged
    }

    /// Wall time of the merge.
    pub fn merge_time(&self) -> Duration {
        self.merge_time
    }

    /// How many prefix edit distances were actually computed.
    pub fn ped_calcs(&self) -> usize {
        self.ped_calcs
    }

    /// How many merged postings were considered for verification,
    /// including the ones the q-gram threshold filtered out.
    pub fn ped_candidates(&self) -> usize {
        self.ped_candidates
    }

    /// Wall time of the verification pass.
    pub fn ped_time(&self) -> Duration {
        self.ped_time
    }
}

impl fmt::Display for QueryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "merged {} lists with tot. {} elements ({:.3} ms), {}/{} ped calculations ({:.3} ms)",
            self.lists_merged,
            self.elements_merged,
            self.merge_time.as_secs_f64() * 1000.0,
            self.ped_calcs,
            self.ped_candidates,
            self.ped_time.as_secs_f64() * 1000.0,
        )
    }
}

///
/// Some statistics about a built index, to help sizing q and spotting
/// degenerate corpora (very short names, very hot q-grams).
/// [`Display`] is implemented for quick convenient output.
#[derive(Debug)]
pub struct IndexStats {
    pub(crate) n_entities: usize,
    pub(crate) n_names: usize,
    pub(crate) n_qgrams: usize,
    pub(crate) name_lengths: Hstats<f64>,
    pub(crate) list_lengths: Hstats<f64>,
}

impl Default for IndexStats {
    fn default() -> Self {
        let proto_hstat = Hstats::new(0.0, 50.0, 25);

        Self {
            n_entities: Default::default(),
            n_names: Default::default(),
            n_qgrams: Default::default(),

            name_lengths: proto_hstat.clone(),
            list_lengths: proto_hstat.clone(),
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "🔎 N entities={}
🏷 N names={}
🔤 N distinct q-grams={}
📏 Normalized name lengths:
{}
📚 Inverted list lengths:
{}",
            self.n_entities, self.n_names, self.n_qgrams, self.name_lengths, self.list_lengths,
        )
    }
}

impl IndexStats {
    /// The number of indexed entities.
    pub fn n_entities(&self) -> usize {
        self.n_entities
    }

    /// The number of indexed names, synonyms included.
    pub fn n_names(&self) -> usize {
        self.n_names
    }

    /// The number of distinct q-grams across all names.
    pub fn n_qgrams(&self) -> usize {
        self.n_qgrams
    }

    /// Distribution of normalized name lengths.
    pub fn name_lengths(&self) -> &Hstats<f64> {
        &self.name_lengths
    }

    /// Distribution of inverted list lengths.
    pub fn list_lengths(&self) -> &Hstats<f64> {
        &self.list_lengths
    }
}
