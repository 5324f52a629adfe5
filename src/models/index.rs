use std::num::NonZeroUsize;
use std::time::Instant;

use hashbrown::HashMap;
use nonempty::NonEmpty;

use crate::models::normalize::normalize;
use crate::models::ped::ped;
use crate::models::postings::{Posting, merge_postings};
use crate::models::qgrams::qgrams;
use crate::models::ranking::Match;
use crate::models::record::EntityRecord;
use crate::models::stats::{IndexStats, QueryStats};
use crate::models::types::{EntId, NameId, OurStr};

#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub(crate) q: NonZeroUsize,
    pub(crate) use_synonyms: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            q: NonZeroUsize::new(3).unwrap(),
            use_synonyms: false,
        }
    }
}

impl IndexConfig {
    /// The q-gram length.
    ///
    /// Shorter q-grams filter less but survive more edits; 3 is a good
    /// default for entity names. The type rules out q = 0.
    pub fn q(&self) -> NonZeroUsize {
        self.q
    }

    /// Whether synonyms get indexed as additional names.
    ///
    /// The default is false.
    pub fn use_synonyms(&self) -> bool {
        self.use_synonyms
    }

    /// This config with another q-gram length.
    pub fn with_q(mut self, q: NonZeroUsize) -> Self {
        self.q = q;
        self
    }

    /// This config with synonym indexing switched on or off.
    pub fn with_synonyms(mut self, use_synonyms: bool) -> Self {
        self.use_synonyms = use_synonyms;
        self
    }
}

#[derive(Debug)]
pub enum IndexError {
    /// Too many entities added to the index (more than u32::MAX)
    TooManyEntities,
    /// Too many names across all entities (more than u32::MAX)
    TooManyNames,
}

/// This is the primary object you need to keep to answer fuzzy prefix
/// queries over a corpus of named entities.
///
/// Example:
/// ```
/// use prefikso::prelude::*;
///
/// let mut index = QGramIndex::new();
/// index
///     .build(vec![
///         EntityRecord::new("frei", 3),
///         EntityRecord::new("brei", 2),
///     ])
///     .unwrap();
///
/// let (matches, stats) = index.find_matches("frei", 2);
/// assert_eq!(matches.len(), 2);
/// assert_eq!(stats.ped_calcs(), 2);
///
/// let best = &rank_matches(matches)[0];
/// assert_eq!(index.entity(best.ent).name(), "frei");
/// ```
///
/// The index is append-only while building and read-only while
/// querying; `find_matches` takes `&self` and returns its counters by
/// value, so with the `send` feature a built index can serve queries
/// from several threads at once.
#[derive(Debug, Default)]
pub struct QGramIndex {
    config: IndexConfig,

    // One inverted list per q-gram seen in a normalized name.
    inverted_lists: HashMap<String, Vec<Posting>>,
    empty_list: Vec<Posting>,

    // Parallel arrays indexed by (1-based) EntId resp. NameId.
    entities: Vec<EntityRecord>,
    names: Vec<OurStr>,
    norm_names: Vec<String>,
    name_ent: Vec<EntId>,
}

impl QGramIndex {
    /// An empty index with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty index with the given configuration.
    pub fn from_config(config: IndexConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The configuration of this index.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// How many entities were indexed.
    pub fn n_entities(&self) -> usize {
        self.entities.len()
    }

    /// How many names were indexed, synonyms included.
    pub fn n_names(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Adds a record to this index. Will panic if there are more than
    /// u32::MAX entities or names.
    pub fn add_record(&mut self, record: EntityRecord) -> EntId {
        self.try_add_record(record).unwrap()
    }

    /// Safely adds a record to this index, reporting errors when the
    /// entity or name id space is exhausted.
    ///
    /// The record's display name is always indexed; its synonyms are
    /// indexed too when the configuration says so. Every indexed name
    /// gets the next NameId, even an empty one (it simply contributes
    /// no q-grams).
    pub fn try_add_record(&mut self, record: EntityRecord) -> Result<EntId, IndexError> {
        let mut names = record.names();
        if !self.config.use_synonyms {
            names = NonEmpty::new(names.head);
        }

        // Reserve the whole id range up front so a failure cannot
        // leave a partially indexed record behind.
        let ent_id: EntId =
            u32::try_from(self.entities.len() + 1).map_err(|_| IndexError::TooManyEntities)?;
        u32::try_from(self.names.len() + names.len()).map_err(|_| IndexError::TooManyNames)?;

        for name in names {
            let name_id = self.names.len() as NameId + 1;
            let normed = normalize(&name);

            for qgram in qgrams(&normed, self.config.q) {
                let list = self.inverted_lists.entry(qgram).or_default();
                // Names arrive in id order, so a repeated q-gram within
                // one name always lands on the tail of its list.
                match list.last_mut() {
                    Some(last) if last.name == name_id => last.freq += 1,
                    _ => list.push(Posting::new(name_id, 1)),
                }
            }

            self.name_ent.push(ent_id);
            self.names.push(name);
            self.norm_names.push(normed);
        }

        self.entities.push(record);
        Ok(ent_id)
    }

    /// Adds all the records, in order. The order becomes the EntId
    /// assignment, so feed a corpus in a stable order.
    pub fn build<I>(&mut self, records: I) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = EntityRecord>,
    {
        for record in records {
            self.try_add_record(record)?;
        }
        Ok(())
    }

    /// The inverted list of the q-gram, empty when the q-gram never
    /// occurred in a name.
    pub fn postings(&self, qgram: &str) -> &[Posting] {
        self.inverted_lists.get(qgram).unwrap_or(&self.empty_list)
    }

    /// All q-grams with an inverted list, in no particular order.
    pub fn indexed_qgrams(&self) -> impl Iterator<Item = &str> {
        self.inverted_lists.keys().map(String::as_str)
    }

    /// The record of an entity. Ids are 1-based, as handed out by
    /// `add_record` and carried by [`Match`].
    pub fn entity(&self, ent: EntId) -> &EntityRecord {
        &self.entities[(ent - 1) as usize]
    }

    /// The surface form of a name.
    pub fn name(&self, name: NameId) -> &str {
        &self.names[(name - 1) as usize]
    }

    /// The normalized form of a name.
    pub fn normalized_name(&self, name: NameId) -> &str {
        &self.norm_names[(name - 1) as usize]
    }

    /// The entity a name belongs to.
    pub fn entity_of(&self, name: NameId) -> EntId {
        self.name_ent[(name - 1) as usize]
    }

    /// Finds all entities with a name within prefix edit distance
    /// `delta` of the normalized prefix, at most one [`Match`] per
    /// entity (the one with the smallest distance).
    ///
    /// The prefix must already be normalized: run user input through
    /// [`normalize`] first. A prefix shorter than q has no q-grams and
    /// yields no matches; callers wanting to special-case "query too
    /// short" should do so before calling.
    ///
    /// The returned [`QueryStats`] carry the merge and verification
    /// counters of this one call.
    pub fn find_matches(&self, prefix: &str, delta: usize) -> (Vec<Match>, QueryStats) {
        debug_assert_eq!(
            normalize(prefix),
            prefix,
            "find_matches expects a normalized prefix"
        );

        let mut stats = QueryStats::default();

        // A prefix shorter than q cannot fill a single window: treat
        // it as having no q-grams and let the caller surface "query
        // too short".
        if prefix.chars().count() < self.config.q.get() {
            return (vec![], stats);
        }

        let lists: Vec<&[Posting]> = qgrams(prefix, self.config.q)
            .iter()
            .filter_map(|qgram| self.inverted_lists.get(qgram.as_str()))
            .map(Vec::as_slice)
            .collect();

        let start = Instant::now();
        let merged = merge_postings(&lists);
        stats.lists_merged = lists.len();
        stats.elements_merged = lists.iter().map(|l| l.len()).sum();
        stats.merge_time = start.elapsed();

        // A name within distance delta still shares at least
        // |prefix| - q * delta q-grams with it: one edit destroys at
        // most q of them. May be <= 0, in which case nothing filters.
        let threshold = prefix.chars().count() as i64 - (self.config.q.get() * delta) as i64;

        let start = Instant::now();
        let mut candidates: Vec<(EntId, usize, NameId)> = vec![];

        for posting in &merged {
            stats.ped_candidates += 1;
            if i64::from(posting.freq) < threshold {
                continue;
            }

            let distance = ped(prefix, self.normalized_name(posting.name), delta);
            stats.ped_calcs += 1;

            if distance <= delta {
                candidates.push((self.entity_of(posting.name), distance, posting.name));
            }
        }
        stats.ped_time = start.elapsed();

        // Keep the best name per entity. Candidates come in NameId
        // order and the sort is stable, so ties on distance resolve to
        // the smallest NameId.
        candidates.sort_by_key(|&(ent, distance, _)| (ent, distance));

        let mut matches: Vec<Match> = Vec::with_capacity(candidates.len());
        for (ent, distance, name) in candidates {
            match matches.last() {
                Some(last) if last.ent == ent => {}
                _ => matches.push(Match::new(ent, distance, self.entity(ent).score(), name)),
            }
        }

        (matches, stats)
    }

    /// Statistics over the built index. Mainly for display.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats::default();
        stats.n_entities = self.entities.len();
        stats.n_names = self.names.len();
        stats.n_qgrams = self.inverted_lists.len();

        for normed in &self.norm_names {
            stats.name_lengths.add(normed.chars().count() as f64);
        }
        for list in self.inverted_lists.values() {
            stats.list_lengths.add(list.len() as f64);
        }

        stats
    }
}
